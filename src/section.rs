//! Quick-start sections and their landing grid.
//!
//! Sections are a flat, hand-curated list that lives outside the page tree. The sidebar widget
//! highlights one of them based on the current route, and the quick-start landing page shows them
//! all as linked cards.

use crate::html::{escape_attr, escape_text};
use facet::Facet;

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// A curated quick-start entry.
pub struct Section {
    /// Card and sidebar label.
    pub title: String,
    /// Link target; its last path component identifies the section.
    pub href: String,
    /// Short blurb shown under the title.
    pub description: String,
}

impl Section {
    #[must_use]
    /// Creates a section from its three fields.
    pub fn new(
        title: impl Into<String>,
        href: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            description: description.into(),
        }
    }

    #[must_use]
    /// The built-in quick-start guides, used when the configuration lists none.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                "Model Creators",
                "quick-start/model-creators",
                "Create your first project and explore features",
            ),
            Self::new(
                "Data Consumers",
                "quick-start/data-consumers",
                "Create your first project and explore features",
            ),
            Self::new(
                "Fine Tuning",
                "quick-start/fine-tuning",
                "Advanced configurations and best practices",
            ),
        ]
    }
}

const ARROW_ICON: &str = r#"<svg class="quick-start-arrow" fill="none" viewBox="0 0 24 24" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M14 5l7 7m0 0l-7 7m7-7H3"/></svg>"#;

#[must_use]
/// Renders the quick-start landing grid, one linked card per section.
pub fn render_quick_start(sections: &[Section]) -> String {
    let mut html = String::from(r#"<div class="quick-start"><div class="quick-start-grid">"#);
    for section in sections {
        html.push_str(&format!(
            r#"<a class="quick-start-card" href="{href}"><div class="quick-start-card-body"><h2>{title}</h2><p>{description}</p><div class="quick-start-cta">Get started{ARROW_ICON}</div></div></a>"#,
            href = escape_attr(&section.href),
            title = escape_text(&section.title),
            description = escape_text(&section.description),
        ));
    }
    html.push_str("</div></div>");
    html
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
