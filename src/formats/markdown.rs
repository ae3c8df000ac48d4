//! Page titles for markdown and MDX content.
//!
//! The title is the text of the first level-one ATX heading (`# Title`), found with a
//! tree-sitter-md query.

use crate::formats::Format;

/// Tree-sitter title query for markdown and MDX pages.
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn title_query(&self) -> &'static str {
        "(atx_heading (atx_h1_marker) (inline) @title)"
    }

    fn extensions(&self) -> &[&str] {
        &["md", "mdx"]
    }
}
