//! The documentation content tree.
//!
//! Content sources hand over nested [`PageNode`]s, which is the natural shape for JSON and for a
//! directory walk. Everything downstream works on a [`PageTree`] instead: an arena of entries in
//! pre-order, where each entry records its parent and children by index. Flat ownership means a
//! tree cannot accidentally contain a cycle, and pre-order storage makes traversal, previous/next
//! page lookup and depth tracking simple index arithmetic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// A page in the nested form supplied by content sources.
pub struct PageNode {
    /// Human readable page title.
    pub title: String,
    /// URL path of the page, unique within the tree.
    pub path: String,
    /// Subpages in display order.
    #[serde(default)]
    pub children: Vec<PageNode>,
}

impl PageNode {
    #[must_use]
    /// Creates a leaf page.
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            children: Vec::new(),
        }
    }

    #[must_use]
    /// Attaches subpages, replacing any already present.
    pub fn with_children(mut self, children: Vec<PageNode>) -> Self {
        self.children = children;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
/// Index of an entry in a [`PageTree`], equal to its pre-order position.
pub struct NodeId(pub usize);

#[derive(Clone, Debug, PartialEq, Eq)]
/// One page of the arena with its position in the hierarchy.
pub struct PageEntry {
    /// Human readable page title.
    pub title: String,
    /// Normalised URL path.
    pub path: String,
    /// Nesting depth (0 for top-level pages).
    pub depth: usize,
    /// Containing page, if any.
    pub parent: Option<NodeId>,
    /// Directly nested pages in display order.
    pub children: Vec<NodeId>,
}

impl PageEntry {
    #[must_use]
    /// Whether the page has subpages and renders as a folder.
    pub fn is_folder(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Read-only page hierarchy stored as a pre-order arena.
pub struct PageTree {
    entries: Vec<PageEntry>,
    roots: Vec<NodeId>,
}

impl PageTree {
    #[must_use]
    /// Flattens nested nodes into the arena, preserving sibling order.
    pub fn from_nodes(nodes: &[PageNode]) -> Self {
        let mut tree = Self::default();
        for node in nodes {
            let id = tree.push(node, None, 0);
            tree.roots.push(id);
        }
        tree
    }

    fn push(&mut self, node: &PageNode, parent: Option<NodeId>, depth: usize) -> NodeId {
        let id = NodeId(self.entries.len());
        self.entries.push(PageEntry {
            title: node.title.clone(),
            path: normalize_path(&node.path),
            depth,
            parent,
            children: Vec::new(),
        });
        for child in &node.children {
            let child_id = self.push(child, Some(id), depth + 1);
            self.entries[id.0].children.push(child_id);
        }
        id
    }

    #[must_use]
    /// Rebuilds the nested form, e.g. for serialising a scanned directory.
    pub fn to_nodes(&self) -> Vec<PageNode> {
        self.roots.iter().map(|&id| self.to_node(id)).collect()
    }

    fn to_node(&self, id: NodeId) -> PageNode {
        let entry = &self.entries[id.0];
        PageNode {
            title: entry.title.clone(),
            path: entry.path.clone(),
            children: entry.children.iter().map(|&c| self.to_node(c)).collect(),
        }
    }

    #[must_use]
    /// Number of pages in the tree.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    /// Whether the tree holds no pages.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    /// Top-level pages in display order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    #[must_use]
    /// Looks up an entry, returning `None` for ids from another tree.
    pub fn get(&self, id: NodeId) -> Option<&PageEntry> {
        self.entries.get(id.0)
    }

    /// Pages in pre-order, which is the sidebar display order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &PageEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (NodeId(i), e))
    }

    #[must_use]
    /// Finds the page whose path equals `path` after normalisation.
    pub fn find_by_path(&self, path: &str) -> Option<NodeId> {
        let wanted = normalize_path(path);
        self.entries
            .iter()
            .position(|e| e.path == wanted)
            .map(NodeId)
    }

    #[must_use]
    /// Containing page of `id`.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|e| e.parent)
    }

    #[must_use]
    /// Chain of containing pages, outermost first, excluding `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.parent(id);
        while let Some(p) = current {
            chain.push(p);
            current = self.parent(p);
        }
        chain.reverse();
        chain
    }

    #[must_use]
    /// Breadcrumb trail from the outermost ancestor down to `id`.
    pub fn breadcrumbs(&self, id: NodeId) -> Vec<NodeId> {
        let mut trail = self.ancestors(id);
        if self.get(id).is_some() {
            trail.push(id);
        }
        trail
    }

    #[must_use]
    /// Pages sharing the parent of `id` (top-level pages for a root), including `id`.
    pub fn siblings(&self, id: NodeId) -> &[NodeId] {
        match self.parent(id) {
            Some(p) => &self.entries[p.0].children,
            None => &self.roots,
        }
    }

    #[must_use]
    /// The page before `id` in reading order.
    pub fn previous(&self, id: NodeId) -> Option<NodeId> {
        if id.0 > 0 && id.0 < self.entries.len() {
            Some(NodeId(id.0 - 1))
        } else {
            None
        }
    }

    #[must_use]
    /// The page after `id` in reading order.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        if id.0 + 1 < self.entries.len() {
            Some(NodeId(id.0 + 1))
        } else {
            None
        }
    }

    /// Checks that no two pages share a path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicatePath`] naming the first repeated path.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.path.as_str()) {
                return Err(Error::DuplicatePath(entry.path.clone()));
            }
        }
        Ok(())
    }
}

#[must_use]
/// Strips query and fragment, ensures a leading slash and drops any trailing slash.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_matches('/');
    format!("/{trimmed}")
}

#[cfg(test)]
#[path = "tests/page_tree.rs"]
mod tests;
