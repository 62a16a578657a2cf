//! Server-side HTML rendering of the catalog page.
//!
//! Markup and class names match the client-side component in `frontend`, so
//! the same stylesheet applies to both.

use std::fmt::Write;

use peptides_products::{Catalog, Product};

use crate::content::PageContent;

const STYLESHEET: &str = "\
body{margin:0;font-family:-apple-system,BlinkMacSystemFont,\"Helvetica Neue\",sans-serif;color:#1d1d1f}\
.catalog-apple-bg{background:#f5f5f7;min-height:100vh}\
.catalog-hero{text-align:center;padding:96px 24px 48px}\
.catalog-title{font-size:56px;font-weight:600;margin:0}\
.catalog-tagline{font-size:21px;color:#6e6e73}\
.catalog-cta-btn{display:inline-block;padding:12px 24px;border-radius:980px;background:#0071e3;color:#fff;text-decoration:none}\
.catalog-products{display:grid;grid-template-columns:repeat(auto-fill,minmax(240px,1fr));gap:24px;padding:24px;max-width:1100px;margin:0 auto}\
.catalog-card{background:#fff;border-radius:18px;padding:32px;box-shadow:0 4px 24px rgba(0,0,0,.06)}\
.catalog-card-name{font-size:21px;font-weight:600}\
.catalog-card-price{margin-top:8px;color:#6e6e73}\
.catalog-footer{text-align:center;padding:48px 24px;color:#86868b;font-size:12px}";

/// Render the full HTML document: header, one card per product (in catalog
/// order), and a footer stamped with `year`.
pub fn render_page(content: &PageContent, catalog: &Catalog, year: i32) -> String {
    let mut html = String::with_capacity(2048 + catalog.len() * 160);

    // Writing into a String cannot fail.
    let _ = write_page(&mut html, content, catalog, year);
    html
}

fn write_page(
    out: &mut String,
    content: &PageContent,
    catalog: &Catalog,
    year: i32,
) -> std::fmt::Result {
    let title = escape_html(&content.title);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    writeln!(out, "<title>{title}</title>")?;
    writeln!(out, "<style>{STYLESHEET}</style>")?;
    out.push_str("</head>\n<body>\n<div class=\"catalog-apple-bg\">\n");

    out.push_str("<header class=\"catalog-hero\">\n");
    writeln!(out, "<h1 class=\"catalog-title\">{title}</h1>")?;
    let tagline = content
        .tagline
        .iter()
        .map(|line| escape_html(line))
        .collect::<Vec<_>>()
        .join("<br />");
    writeln!(out, "<p class=\"catalog-tagline\">{tagline}</p>")?;
    writeln!(
        out,
        "<a href=\"{}\" class=\"catalog-cta-btn\">{}</a>",
        escape_html(&content.cta_href),
        escape_html(&content.cta_text)
    )?;
    out.push_str("</header>\n");

    out.push_str("<section id=\"products\" class=\"catalog-products\">\n");
    for product in catalog {
        write_card(out, product)?;
    }
    out.push_str("</section>\n");

    out.push_str("<footer class=\"catalog-footer\">\n");
    writeln!(out, "<p>{}</p>", escape_html(&content.footer_line(year)))?;
    out.push_str("</footer>\n</div>\n</body>\n</html>\n");
    Ok(())
}

fn write_card(out: &mut String, product: &Product) -> std::fmt::Result {
    writeln!(
        out,
        "<div class=\"catalog-card\" data-product-id=\"{}\">\
         <div class=\"catalog-card-name\">{}</div>\
         <div class=\"catalog-card-price\">{}</div></div>",
        escape_html(&product.id().to_string()),
        escape_html(product.name()),
        product.display_price()
    )
}

/// Escape text for use in HTML element content and quoted attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_count(html: &str) -> usize {
        html.matches("class=\"catalog-card\"").count()
    }

    fn two_products() -> Catalog {
        Catalog::from_json_str(
            r#"[{"id":1,"name":"A","price":9.5},{"id":2,"name":"B","price":10}]"#,
        )
        .unwrap()
    }

    #[test]
    fn empty_catalog_renders_no_cards() {
        let html = render_page(&PageContent::default(), &Catalog::empty(), 2026);
        assert_eq!(card_count(&html), 0);
        assert!(html.contains("<section id=\"products\" class=\"catalog-products\">\n</section>"));
    }

    #[test]
    fn renders_one_card_per_product_in_order() {
        let html = render_page(&PageContent::default(), &two_products(), 2026);
        assert_eq!(card_count(&html), 2);

        let a = html.find("<div class=\"catalog-card-name\">A</div>").unwrap();
        let b = html.find("<div class=\"catalog-card-name\">B</div>").unwrap();
        assert!(a < b);

        let p1 = html.find("<div class=\"catalog-card-price\">$9.50</div>").unwrap();
        let p2 = html.find("<div class=\"catalog-card-price\">$10.00</div>").unwrap();
        assert!(a < p1 && p1 < b && b < p2);
    }

    #[test]
    fn header_and_footer_are_always_present() {
        let html = render_page(&PageContent::default(), &Catalog::empty(), 1999);
        assert!(html.contains("<h1 class=\"catalog-title\">Peptides</h1>"));
        assert!(html.contains(
            "Explore the future of health and science.<br />Discover our curated peptide collection."
        ));
        assert!(html.contains("<a href=\"#products\" class=\"catalog-cta-btn\">Browse Catalog</a>"));
        assert!(html.contains("<p>© 1999 Peptides Catalog</p>"));
    }

    #[test]
    fn product_names_are_escaped() {
        let catalog = Catalog::from_json_str(
            r#"[{"id":"<x>","name":"<script>alert('hi')</script> & co","price":1}]"#,
        )
        .unwrap();
        let html = render_page(&PageContent::default(), &catalog, 2026);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;hi&#39;)&lt;/script&gt; &amp; co"));
        assert!(html.contains("data-product-id=\"&lt;x&gt;\""));
    }

    #[test]
    fn custom_content_is_used() {
        let content = PageContent {
            title: "Shop".to_string(),
            tagline: vec!["One".to_string()],
            cta_text: "Go".to_string(),
            cta_href: "/all".to_string(),
            footer_label: "Shop Inc".to_string(),
        };
        let html = render_page(&content, &Catalog::empty(), 2030);
        assert!(html.contains("<title>Shop</title>"));
        assert!(html.contains("<p class=\"catalog-tagline\">One</p>"));
        assert!(html.contains("<a href=\"/all\" class=\"catalog-cta-btn\">Go</a>"));
        assert!(html.contains("© 2030 Shop Inc"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let catalog = two_products();
        let content = PageContent::default();
        assert_eq!(
            render_page(&content, &catalog, 2026),
            render_page(&content, &catalog, 2026)
        );
    }
}
