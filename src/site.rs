//! Static site builder.
//!
//! Writes one `index.html` per page under a directory mirroring the page paths, so the output can
//! be served by any static file server with clean URLs.

use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::page_tree::PageEntry;
use crate::route::Location;
use std::fs;
use std::path::{Path, PathBuf};

/// File that serves `page_path` under `out_dir`.
///
/// `.` segments are dropped. A `..` segment or one containing a backslash would place the file
/// outside `out_dir`, so the page is refused.
///
/// # Errors
///
/// Returns [`Error::UnsafePath`] for a path that would leave `out_dir`.
pub fn output_path(out_dir: &Path, page_path: &str) -> Result<PathBuf> {
    let mut path = out_dir.to_path_buf();
    for segment in page_path.split('/').filter(|s| !s.is_empty() && *s != ".") {
        if segment == ".." || segment.contains('\\') {
            return Err(Error::UnsafePath(page_path.to_string()));
        }
        path.push(segment);
    }
    Ok(path.join("index.html"))
}

/// Renders every page of the layout's tree in reading order.
///
/// `content` produces the main body of each page. Returns the number of files written.
///
/// # Errors
///
/// Returns an error if a directory or file cannot be written.
pub fn build_site<F>(layout: &Layout<'_>, out_dir: &Path, content: F) -> Result<usize>
where
    F: Fn(&PageEntry) -> String,
{
    fs::create_dir_all(out_dir).map_err(|e| Error::io(out_dir, e))?;

    let mut written = 0;
    for (_, entry) in layout.tree().iter() {
        let target = output_path(out_dir, &entry.path)?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let html = layout.render(&Location::new(&entry.path), &content(entry));
        fs::write(&target, html).map_err(|e| Error::io(&target, e))?;
        log::debug!("wrote {}", target.display());
        written += 1;
    }

    log::info!("built {written} pages into {}", out_dir.display());
    Ok(written)
}
