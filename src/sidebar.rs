//! The quick-start sidebar widget.
//!
//! The widget owns exactly one piece of state, its disclosure toggle. Which row is highlighted is
//! never stored: it is recomputed from the current location on every render.

use crate::html::{escape_attr, escape_text};
use crate::route::{last_segment, resolve, ActiveState, Location, RouteSegment};
use crate::section::Section;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
/// Visibility of the section list.
///
/// ```text
/// Expanded <-> Collapsed   (toggle button only)
/// ```
///
/// There is no terminal state and no automatic transition. The state lives as long as the widget
/// instance and is not shared between instances.
pub enum Disclosure {
    /// Section rows are shown. Initial state.
    #[default]
    Expanded,
    /// Only the header and toggle button are shown.
    Collapsed,
}

impl Disclosure {
    #[must_use]
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A section as displayed, with its highlight flag.
pub struct SidebarRow {
    /// Row label.
    pub title: String,
    /// Link target.
    pub href: String,
    /// Tooltip text.
    pub description: String,
    /// Whether this row matches the current route.
    pub active: bool,
}

/// Collapsible list of quick-start sections.
pub struct QuickStartSidebar {
    sections: Vec<Section>,
    root: String,
    disclosure: Disclosure,
}

impl QuickStartSidebar {
    #[must_use]
    /// Creates an expanded sidebar for `sections` rooted at the quick-start path `root`.
    pub fn new(sections: Vec<Section>, root: impl Into<String>) -> Self {
        Self {
            sections,
            root: root.into(),
            disclosure: Disclosure::default(),
        }
    }

    #[must_use]
    /// Sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    /// Quick-start root path.
    pub fn root(&self) -> &str {
        &self.root
    }

    #[must_use]
    /// Whether `location` is the quick-start root or a page below it.
    pub fn covers(&self, location: &Location) -> bool {
        location.segment_under(&self.root) != RouteSegment::Outside
    }

    #[must_use]
    /// Current disclosure state.
    pub fn disclosure(&self) -> Disclosure {
        self.disclosure
    }

    #[must_use]
    /// Whether the section rows are visible.
    pub fn is_expanded(&self) -> bool {
        self.disclosure == Disclosure::Expanded
    }

    /// Handles a press of the toggle button.
    pub fn toggle(&mut self) {
        self.disclosure = self.disclosure.toggled();
    }

    #[must_use]
    /// Resolves the highlighted section for `location` and folds in the disclosure state.
    ///
    /// Locations outside the quick-start root highlight nothing.
    pub fn active_state(&self, location: &Location) -> ActiveState {
        let mut state = match location.segment_under(&self.root) {
            RouteSegment::Root => resolve(None, &self.sections),
            RouteSegment::Child(segment) => resolve(Some(segment), &self.sections),
            RouteSegment::Outside => ActiveState {
                active_segment: None,
                is_expanded: true,
            },
        };
        state.is_expanded = self.is_expanded();
        state
    }

    #[must_use]
    /// Rows in display order, flagged against `state`.
    pub fn rows(&self, state: &ActiveState) -> Vec<SidebarRow> {
        self.sections
            .iter()
            .map(|s| SidebarRow {
                title: s.title.clone(),
                href: s.href.clone(),
                description: s.description.clone(),
                active: state.is_active(s),
            })
            .collect()
    }

    #[must_use]
    /// Renders the widget for the current location.
    pub fn render(&self, location: &Location) -> String {
        let state = self.active_state(location);
        let mut html = format!(
            r#"<nav class="quick-start-sidebar" data-state="{state}"><div class="sidebar-header"><span class="sidebar-title">Quick Start</span><button type="button" class="sidebar-toggle" aria-expanded="{expanded}">{arrow}</button></div>"#,
            state = if state.is_expanded { "expanded" } else { "collapsed" },
            expanded = state.is_expanded,
            arrow = if state.is_expanded { "▾" } else { "▸" },
        );

        if state.is_expanded {
            html.push_str(r#"<ul class="sidebar-sections">"#);
            for row in self.rows(&state) {
                let (class, current) = if row.active {
                    (r#" class="active""#, r#" aria-current="page""#)
                } else {
                    ("", "")
                };
                html.push_str(&format!(
                    r#"<li{class} data-segment="{segment}"><a href="{href}" title="{description}"{current}>{title}</a></li>"#,
                    segment = escape_attr(last_segment(&row.href)),
                    href = escape_attr(&row.href),
                    description = escape_attr(&row.description),
                    title = escape_text(&row.title),
                ));
            }
            html.push_str("</ul>");
        }

        html.push_str("</nav>");
        html
    }
}

#[cfg(test)]
#[path = "tests/sidebar.rs"]
mod tests;
