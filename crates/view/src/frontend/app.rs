//! Leptos catalog page.

use leptos::*;

use peptides_products::{Catalog, Product};

use crate::content::PageContent;
use crate::frontend::api;

/// Main application component.
///
/// Fetches the catalog once when mounted. A failed fetch is logged to the
/// console and leaves the product section empty.
#[component]
pub fn App() -> impl IntoView {
    let content = PageContent::default();
    let year = js_sys::Date::new_0().get_full_year() as i32;

    let catalog = create_local_resource(
        || (),
        |_| async move {
            match api::fetch_catalog().await {
                Ok(catalog) => catalog,
                Err(e) => {
                    logging::warn!("catalog load failed: {}", e);
                    Catalog::empty()
                }
            }
        },
    );

    let tagline = content
        .tagline
        .iter()
        .enumerate()
        .map(|(i, line)| {
            view! {
                {(i > 0).then(|| view! { <br/> })}
                {line.clone()}
            }
        })
        .collect_view();

    view! {
        <div class="catalog-apple-bg">
            <header class="catalog-hero">
                <h1 class="catalog-title">{content.title.clone()}</h1>
                <p class="catalog-tagline">{tagline}</p>
                <a href=content.cta_href.clone() class="catalog-cta-btn">
                    {content.cta_text.clone()}
                </a>
            </header>
            <section id="products" class="catalog-products">
                <For
                    each=move || {
                        catalog
                            .get()
                            .map(|c| c.products().to_vec())
                            .unwrap_or_default()
                    }
                    key=|product| product.id().clone()
                    children=move |product| view! { <ProductCard product=product/> }
                />
            </section>
            <footer class="catalog-footer">
                <p>{content.footer_line(year)}</p>
            </footer>
        </div>
    }
}

/// One product card: name and price.
#[component]
fn ProductCard(product: Product) -> impl IntoView {
    view! {
        <div class="catalog-card">
            <div class="catalog-card-name">{product.name().to_string()}</div>
            <div class="catalog-card-price">{product.display_price()}</div>
        </div>
    }
}
