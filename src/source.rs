//! Content tree providers.
//!
//! The rest of the crate only ever reads a [`PageTree`]; where it comes from is decided here.
//! Trees can be supplied in memory, from a JSON file, or by scanning a directory of markdown pages
//! the way the docs site lays out its content folder:
//!
//! ```text
//! content/
//! ├── index.md              -> /docs
//! ├── quick-start/
//! │   ├── index.md          -> /docs/quick-start   (folder page)
//! │   └── first-steps.md    -> /docs/quick-start/first-steps
//! └── reference/            -> /docs/reference     (folder without index)
//!     └── api.md            -> /docs/reference/api
//! ```

use crate::error::{Error, Result};
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use crate::page_tree::{normalize_path, PageNode, PageTree};
use std::fs;
use std::path::{Path, PathBuf};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

/// Supplies the page hierarchy to the layout shell.
pub trait ContentSource {
    /// Produces the current page tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying content cannot be read or decoded.
    fn page_tree(&self) -> Result<PageTree>;
}

/// A tree held in memory.
pub struct StaticSource {
    nodes: Vec<PageNode>,
}

impl StaticSource {
    #[must_use]
    /// Wraps already-built nodes.
    pub fn new(nodes: Vec<PageNode>) -> Self {
        Self { nodes }
    }
}

impl ContentSource for StaticSource {
    fn page_tree(&self) -> Result<PageTree> {
        Ok(PageTree::from_nodes(&self.nodes))
    }
}

/// A tree stored as a JSON array of page nodes.
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    #[must_use]
    /// Reads from `path` on every call to [`ContentSource::page_tree`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContentSource for JsonSource {
    fn page_tree(&self) -> Result<PageTree> {
        let contents = fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let nodes: Vec<PageNode> = serde_json::from_str(&contents)?;
        log::debug!("loaded {} top-level pages from {}", nodes.len(), self.path.display());
        Ok(PageTree::from_nodes(&nodes))
    }
}

/// A tree scanned from a directory of content files.
pub struct MarkdownDirSource {
    root: PathBuf,
    base_url: String,
    extensions: Vec<String>,
}

impl MarkdownDirSource {
    #[must_use]
    /// Scans `root`, mounting its pages under `base_url`.
    pub fn new(root: impl Into<PathBuf>, base_url: &str) -> Self {
        Self {
            root: root.into(),
            base_url: normalize_path(base_url),
            extensions: MarkdownFormat
                .extensions()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    #[must_use]
    /// Overrides which file extensions count as pages.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    fn is_page(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.iter().any(|x| x == e))
    }

    /// Reads one directory level, returning the title of its index page (if any) and its other
    /// entries in file-name order.
    fn scan_dir(
        &self,
        dir: &Path,
        url: &str,
        titles: &mut TitleExtractor,
    ) -> Result<(Option<String>, Vec<PageNode>)> {
        let mut entries: Vec<(PathBuf, fs::FileType)> = fs::read_dir(dir)
            .map_err(|e| Error::io(dir, e))?
            .map(|entry| -> Result<(PathBuf, fs::FileType)> {
                let entry = entry.map_err(|e| Error::io(dir, e))?;
                let kind = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
                Ok((entry.path(), kind))
            })
            .collect::<Result<_>>()?;
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut index_title = None;
        let mut nodes = Vec::new();

        for (path, kind) in entries {
            // Directory links are never followed, so a link to an ancestor cannot loop.
            if kind.is_symlink() && path.is_dir() {
                log::warn!("skipping symlinked directory {}", path.display());
                continue;
            }
            let is_dir = kind.is_dir();
            let name = if is_dir {
                path.file_name()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default()
            } else {
                file_stem(&path)
            };
            if name.starts_with('.') {
                continue;
            }
            let child_url = join_url(url, &name);

            if is_dir {
                let (folder_title, children) = self.scan_dir(&path, &child_url, titles)?;
                if folder_title.is_none() && children.is_empty() {
                    log::debug!("skipping empty folder {}", path.display());
                    continue;
                }
                let title = folder_title.unwrap_or_else(|| prettify(&name));
                nodes.push(PageNode::new(title, child_url).with_children(children));
            } else if self.is_page(&path) && path.is_file() {
                let Some(title) = page_title(&path, titles)? else {
                    continue;
                };
                if name == "index" {
                    index_title = Some(title);
                } else {
                    nodes.push(PageNode::new(title, child_url));
                }
            }
        }

        Ok((index_title, nodes))
    }
}

impl ContentSource for MarkdownDirSource {
    fn page_tree(&self) -> Result<PageTree> {
        let mut titles = TitleExtractor::new(&MarkdownFormat)?;
        let (index_title, mut roots) = self.scan_dir(&self.root, &self.base_url, &mut titles)?;
        if let Some(title) = index_title {
            roots.insert(0, PageNode::new(title, self.base_url.clone()));
        }
        let tree = PageTree::from_nodes(&roots);
        log::debug!("scanned {} pages from {}", tree.len(), self.root.display());
        Ok(tree)
    }
}

/// Returns `Ok(None)` for files that are not valid UTF-8, which are skipped.
fn page_title(path: &Path, titles: &mut TitleExtractor) -> Result<Option<String>> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    let Ok(text) = String::from_utf8(bytes) else {
        log::warn!("skipping {}: not valid UTF-8", path.display());
        return Ok(None);
    };
    let title = titles.title(&text).unwrap_or_else(|| {
        log::debug!("no title in {}, using file name", path.display());
        prettify(&file_stem(path))
    });
    Ok(Some(title))
}

/// Reusable parser and compiled title query for one format.
pub struct TitleExtractor {
    parser: Parser,
    query: Query,
}

impl TitleExtractor {
    /// Compiles the title query of `format`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parser`] if the grammar or query fails to load.
    pub fn new(format: &dyn Format) -> Result<Self> {
        let language = format.language();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| Error::Parser(e.to_string()))?;
        let query = Query::new(&language, format.title_query())
            .map_err(|e| Error::Parser(e.to_string()))?;
        Ok(Self { parser, query })
    }

    /// Front matter `title:` if present, else the first title capture of the query.
    pub fn title(&mut self, text: &str) -> Option<String> {
        if let Some(title) = front_matter_title(text) {
            return Some(title);
        }

        let tree = self.parser.parse(text, None)?;
        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(&self.query, tree.root_node(), text.as_bytes());
        while let Some(m) = matches.next() {
            for capture in m.captures {
                if let Ok(title) = capture.node.utf8_text(text.as_bytes()) {
                    let title = title.trim();
                    if !title.is_empty() {
                        return Some(title.to_string());
                    }
                }
            }
        }
        None
    }
}

fn front_matter_title(text: &str) -> Option<String> {
    let mut lines = text.lines();
    if lines.next()?.trim_end() != "---" {
        return None;
    }
    for line in lines {
        let line = line.trim_end();
        if line == "---" {
            break;
        }
        if let Some(value) = line.strip_prefix("title:") {
            let value = value.trim().trim_matches(['"', '\'']);
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn join_url(base: &str, name: &str) -> String {
    format!("{}/{name}", base.trim_end_matches('/'))
}

/// `first-steps` becomes `First Steps`.
fn prettify(name: &str) -> String {
    name.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "tests/source.rs"]
mod tests;
