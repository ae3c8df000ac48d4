//! Plain-text outline of a page tree for terminal inspection.
//!
//! Pages are drawn in reading order with box-drawing branches. The active page, if any, is marked
//! with a trailing `*`.

use crate::page_tree::{NodeId, PageTree};

/// Generate box-drawing prefix for a page at `depth`.
///
/// `open_levels[i]` is true when the ancestor at depth `i` still has siblings below, which keeps
/// its vertical rule running.
fn tree_prefix(depth: usize, is_last: bool, open_levels: &[bool]) -> String {
    let mut prefix = String::new();

    for open in open_levels.iter().take(depth) {
        prefix.push_str(if *open { "│   " } else { "    " });
    }

    prefix.push_str(if is_last { "└── " } else { "├── " });
    prefix
}

fn is_last_sibling(tree: &PageTree, id: NodeId) -> bool {
    tree.siblings(id).last() == Some(&id)
}

#[must_use]
/// Renders every page as one line: branch prefix, title, path.
pub fn render_outline(tree: &PageTree, active: Option<NodeId>) -> String {
    let mut out = String::new();

    for (id, entry) in tree.iter() {
        let open_levels: Vec<bool> = tree
            .ancestors(id)
            .into_iter()
            .map(|a| !is_last_sibling(tree, a))
            .collect();
        let marker = if active == Some(id) { " *" } else { "" };

        out.push_str(&tree_prefix(
            entry.depth,
            is_last_sibling(tree, id),
            &open_levels,
        ));
        out.push_str(&format!("{} ({}){marker}\n", entry.title, entry.path));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_tree::PageNode;

    #[test]
    fn test_outline_draws_branches() {
        let tree = PageTree::from_nodes(&[
            PageNode::new("Intro", "/docs"),
            PageNode::new("Quick Start", "/docs/quick-start").with_children(vec![
                PageNode::new("First Steps", "/docs/quick-start/first-steps"),
                PageNode::new("Fine Tuning", "/docs/quick-start/fine-tuning"),
            ]),
        ]);

        let outline = render_outline(&tree, tree.find_by_path("/docs/quick-start/fine-tuning"));
        let lines: Vec<&str> = outline.lines().collect();

        assert_eq!(lines[0], "├── Intro (/docs)");
        assert_eq!(lines[1], "└── Quick Start (/docs/quick-start)");
        assert_eq!(lines[2], "    ├── First Steps (/docs/quick-start/first-steps)");
        assert_eq!(
            lines[3],
            "    └── Fine Tuning (/docs/quick-start/fine-tuning) *"
        );
    }

    #[test]
    fn test_outline_keeps_rule_for_open_ancestor() {
        let tree = PageTree::from_nodes(&[
            PageNode::new("Guides", "/guides")
                .with_children(vec![PageNode::new("Setup", "/guides/setup")]),
            PageNode::new("FAQ", "/faq"),
        ]);

        let outline = render_outline(&tree, None);
        assert!(outline.contains("│   └── Setup (/guides/setup)\n"));
        assert!(!outline.contains('*'));
    }
}
