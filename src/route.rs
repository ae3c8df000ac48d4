//! Route resolution: which quick-start section and which page are active for a URL.
//!
//! Everything here is a pure function of its inputs and runs synchronously on each navigation,
//! before the next render. An unmatched path is not an error; it simply highlights nothing.

use crate::page_tree::{normalize_path, NodeId, PageTree};
use crate::section::Section;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq)]
/// The router's current URL path, normalised.
pub struct Location {
    path: String,
}

impl Location {
    #[must_use]
    /// Normalises a URL or path as supplied by the router.
    pub fn new(url: &str) -> Self {
        Self {
            path: normalize_path(url),
        }
    }

    #[must_use]
    /// The normalised path, always starting with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    /// Where this location sits relative to a quick-start root.
    ///
    /// Below the root, the segment is the first component beneath it, so nested pages select the
    /// section they belong to.
    pub fn segment_under(&self, root: &str) -> RouteSegment<'_> {
        let root = normalize_path(root);
        if self.path == root {
            return RouteSegment::Root;
        }
        let rest = if root == "/" {
            self.path.strip_prefix('/')
        } else {
            self.path
                .strip_prefix(root.as_str())
                .and_then(|r| r.strip_prefix('/'))
        };
        match rest.and_then(|r| r.split('/').find(|s| !s.is_empty())) {
            Some(segment) => RouteSegment::Child(segment),
            None => RouteSegment::Outside,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A location's position relative to a quick-start root.
pub enum RouteSegment<'a> {
    /// The location is the root itself.
    Root,
    /// The first path component beneath the root.
    Child(&'a str),
    /// The location is not under the root.
    Outside,
}

#[must_use]
/// Last non-empty path component of an href, ignoring query and fragment.
pub fn last_segment(href: &str) -> &str {
    let path = href.split(['?', '#']).next().unwrap_or_default();
    path.rsplit('/').find(|s| !s.is_empty()).unwrap_or_default()
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
/// Highlight and disclosure state of the quick-start sidebar.
pub struct ActiveState {
    /// Segment of the highlighted section, or `None` when nothing matches.
    pub active_segment: Option<String>,
    /// Whether the section list is shown.
    pub is_expanded: bool,
}

impl ActiveState {
    #[must_use]
    /// Whether `section` is the highlighted row.
    pub fn is_active(&self, section: &Section) -> bool {
        self.active_segment.as_deref() == Some(last_segment(&section.href))
    }
}

#[must_use]
/// Determines the highlighted quick-start section for the current route segment.
///
/// A segment matching the last component of exactly one section's href selects that section.
/// An absent or empty segment means the route is the quick-start root, and the first section is
/// highlighted. This default applies only to the root; it is not a prefix rule.
pub fn resolve(current_segment: Option<&str>, sections: &[Section]) -> ActiveState {
    let segment = current_segment.filter(|s| !s.is_empty());

    let active_segment = match segment {
        Some(segment) => {
            let mut matches = sections
                .iter()
                .map(|s| last_segment(&s.href))
                .filter(|candidate| *candidate == segment);
            match (matches.next(), matches.next()) {
                (Some(found), None) => Some(found.to_string()),
                _ => None,
            }
        }
        None => sections.first().map(|s| last_segment(&s.href).to_string()),
    };

    log::debug!("resolved segment {current_segment:?} to {active_segment:?}");

    ActiveState {
        active_segment,
        is_expanded: true,
    }
}

#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
/// Active page and open folders of the page-tree sidebar.
pub struct TreeActiveState {
    /// Page whose path equals the location.
    pub active: Option<NodeId>,
    /// Folders to render open, outermost first.
    pub expanded: Vec<NodeId>,
}

impl TreeActiveState {
    #[must_use]
    /// Whether `id` should render open.
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }
}

#[must_use]
/// Finds the page for `location` and the folders leading to it.
pub fn resolve_tree(tree: &PageTree, location: &Location) -> TreeActiveState {
    let Some(active) = tree.find_by_path(location.path()) else {
        log::debug!("no page at {}", location.path());
        return TreeActiveState::default();
    };

    let mut expanded = tree.ancestors(active);
    if tree.get(active).is_some_and(|e| e.is_folder()) {
        expanded.push(active);
    }

    TreeActiveState {
        active: Some(active),
        expanded,
    }
}

#[cfg(test)]
#[path = "tests/route.rs"]
mod tests;
