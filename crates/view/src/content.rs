//! Static page copy: header, call-to-action, footer.

use serde::{Deserialize, Serialize};

/// Text shown around the product list, independent of the catalog.
///
/// `Default` reproduces the storefront's published copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub title: String,
    /// Tagline lines, rendered separated by line breaks.
    pub tagline: Vec<String>,
    pub cta_text: String,
    pub cta_href: String,
    /// Trailing label of the footer line (`© {year} {footer_label}`).
    pub footer_label: String,
}

impl Default for PageContent {
    fn default() -> Self {
        Self {
            title: "Peptides".to_string(),
            tagline: vec![
                "Explore the future of health and science.".to_string(),
                "Discover our curated peptide collection.".to_string(),
            ],
            cta_text: "Browse Catalog".to_string(),
            cta_href: "#products".to_string(),
            footer_label: "Peptides Catalog".to_string(),
        }
    }
}

impl PageContent {
    pub fn footer_line(&self, year: i32) -> String {
        format!("© {} {}", year, self.footer_label)
    }
}
