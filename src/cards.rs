//! Feature cards: a grid of linked titles, each with a bullet list.
//!
//! Pure presentation. Cards render in the order given and hrefs are passed through untouched;
//! link validity is the router's business.

use crate::html::{escape_attr, escape_text};
use facet::Facet;

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// A single card in the grid.
pub struct Card {
    /// Link target of the card title.
    pub href: String,
    /// Icon name, emitted as a `data-icon` hook for the stylesheet.
    pub icon: String,
    /// Card heading.
    pub title: String,
    /// Bullet points listed under the heading.
    #[facet(default)]
    pub items: Vec<String>,
}

#[must_use]
/// Renders one card.
pub fn render_card(card: &Card) -> String {
    let mut html = format!(
        r#"<div class="card"><div class="card-body"><div class="card-header"><a class="card-title" href="{href}"><span class="card-icon" data-icon="{icon}" aria-hidden="true"></span><span class="card-label">{title}</span></a></div><ul class="card-items">"#,
        href = escape_attr(&card.href),
        icon = escape_attr(&card.icon),
        title = escape_text(&card.title),
    );
    for item in &card.items {
        html.push_str("<li>");
        html.push_str(&escape_text(item));
        html.push_str("</li>");
    }
    html.push_str("</ul></div></div>");
    html
}

#[must_use]
/// Renders the grid container with one card per entry; an empty slice gives an empty grid.
pub fn render_card_grid(cards: &[Card]) -> String {
    let body: String = cards.iter().map(render_card).collect();
    format!(r#"<div class="card-grid">{body}</div>"#)
}

#[cfg(test)]
#[path = "tests/cards.rs"]
mod tests;
