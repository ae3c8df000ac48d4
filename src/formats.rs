//! Format trait and implementations for content file types.
//!
//! A format supplies the tree-sitter grammar and the query that captures a page's title, so the
//! directory source can name pages without knowing the markup it is reading.

pub mod markdown;

/// Grammar and title query for one content file type.
pub trait Format {
    /// Tree-sitter grammar used to parse files of this type.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing the page title as `@title`; the first capture wins.
    fn title_query(&self) -> &str;
    /// File extensions (without dot) handled by this format.
    fn extensions(&self) -> &[&str];
}
