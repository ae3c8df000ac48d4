//! The layout shell: page chrome composed around rendered content.
//!
//! The shell receives the page tree and resolves the active page itself on each render, so it
//! holds no navigation state of its own. Its output is a complete HTML document with header
//! navigation, the page-tree sidebar, breadcrumbs and previous/next links.

use crate::html::{escape_attr, escape_text};
use crate::page_tree::{NodeId, PageTree};
use crate::route::{resolve_tree, Location, TreeActiveState};
use crate::sidebar::QuickStartSidebar;
use facet::Facet;

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// An extra link in the top navigation bar.
pub struct NavLink {
    /// Link label.
    pub text: String,
    /// Link target.
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Options shared by every page of the site.
pub struct LayoutOptions {
    /// Site name shown in the header and the document title.
    pub title: String,
    /// Logo image shown before the title.
    pub logo: Option<String>,
    /// Favicon reference.
    pub favicon: String,
    /// Extra header links.
    pub links: Vec<NavLink>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            title: "Docs".to_string(),
            logo: None,
            favicon: "/favicon.svg".to_string(),
            links: Vec::new(),
        }
    }
}

/// Renders full pages for one tree.
pub struct Layout<'a> {
    tree: &'a PageTree,
    options: &'a LayoutOptions,
    quick_start: Option<&'a QuickStartSidebar>,
}

impl<'a> Layout<'a> {
    #[must_use]
    /// Creates a shell over `tree`.
    pub fn new(tree: &'a PageTree, options: &'a LayoutOptions) -> Self {
        Self {
            tree,
            options,
            quick_start: None,
        }
    }

    #[must_use]
    /// Adds the quick-start sidebar, shown on pages under its root.
    pub fn with_quick_start(mut self, sidebar: &'a QuickStartSidebar) -> Self {
        self.quick_start = Some(sidebar);
        self
    }

    #[must_use]
    /// The tree this shell renders.
    pub fn tree(&self) -> &PageTree {
        self.tree
    }

    #[must_use]
    /// Renders a complete document for `location` with `content` as the main body.
    pub fn render(&self, location: &Location, content: &str) -> String {
        let state = resolve_tree(self.tree, location);
        let page_title = state
            .active
            .and_then(|id| self.tree.get(id))
            .map_or_else(
                || self.options.title.clone(),
                |entry| format!("{} | {}", entry.title, self.options.title),
            );

        let quick_start = self
            .quick_start
            .filter(|s| s.covers(location))
            .map(|s| s.render(location))
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{title}</title><link rel="icon" href="{favicon}" type="image/svg+xml" sizes="any"></head><body class="docs-body">{header}<div class="docs-layout"><aside class="docs-sidebar">{tree}</aside><main class="docs-page">{quick_start}{breadcrumbs}<article class="docs-content">{content}</article>{pager}</main></div></body></html>"#,
            title = escape_text(&page_title),
            favicon = escape_attr(&self.options.favicon),
            header = self.render_header(),
            tree = self.render_tree(&state),
            breadcrumbs = self.render_breadcrumbs(&state),
            pager = self.render_pager(&state),
        )
    }

    #[must_use]
    /// Header bar with logo, site title and extra links.
    pub fn render_header(&self) -> String {
        let logo = self
            .options
            .logo
            .as_deref()
            .map(|src| {
                format!(
                    r#"<img src="{}" width="24" height="24" alt="{} Logo" class="nav-logo">"#,
                    escape_attr(src),
                    escape_attr(&self.options.title),
                )
            })
            .unwrap_or_default();

        let links: String = self
            .options
            .links
            .iter()
            .map(|l| {
                format!(
                    r#"<li><a href="{}">{}</a></li>"#,
                    escape_attr(&l.url),
                    escape_text(&l.text)
                )
            })
            .collect();

        format!(
            r#"<header class="docs-nav"><a class="nav-title" href="/">{logo}{title}</a><ul class="nav-links">{links}</ul></header>"#,
            title = escape_text(&self.options.title),
        )
    }

    #[must_use]
    /// Page-tree navigation with the active page marked and its folders open.
    pub fn render_tree(&self, state: &TreeActiveState) -> String {
        let mut html = String::from(r#"<nav class="docs-tree">"#);
        self.render_nodes(self.tree.roots(), state, &mut html);
        html.push_str("</nav>");
        html
    }

    fn render_nodes(&self, ids: &[NodeId], state: &TreeActiveState, html: &mut String) {
        if ids.is_empty() {
            return;
        }
        html.push_str("<ul>");
        for &id in ids {
            let Some(entry) = self.tree.get(id) else {
                continue;
            };
            let link = self.render_link(id, state);
            if entry.is_folder() {
                let open = if state.is_expanded(id) { " open" } else { "" };
                html.push_str(&format!(
                    r#"<li class="folder"><details{open}><summary>{link}</summary>"#
                ));
                self.render_nodes(&entry.children, state, html);
                html.push_str("</details></li>");
            } else {
                html.push_str(&format!("<li>{link}</li>"));
            }
        }
        html.push_str("</ul>");
    }

    fn render_link(&self, id: NodeId, state: &TreeActiveState) -> String {
        let Some(entry) = self.tree.get(id) else {
            return String::new();
        };
        let current = if state.active == Some(id) {
            r#" class="active" aria-current="page""#
        } else {
            ""
        };
        format!(
            r#"<a href="{}"{current}>{}</a>"#,
            escape_attr(&entry.path),
            escape_text(&entry.title)
        )
    }

    #[must_use]
    /// Trail of links from the outermost folder to the active page; empty when nothing is active.
    pub fn render_breadcrumbs(&self, state: &TreeActiveState) -> String {
        let Some(active) = state.active else {
            return String::new();
        };
        let crumbs: Vec<String> = self
            .tree
            .breadcrumbs(active)
            .into_iter()
            .filter_map(|id| self.tree.get(id))
            .map(|e| {
                format!(
                    r#"<li><a href="{}">{}</a></li>"#,
                    escape_attr(&e.path),
                    escape_text(&e.title)
                )
            })
            .collect();
        format!(
            r#"<nav class="breadcrumbs" aria-label="Breadcrumb"><ol>{}</ol></nav>"#,
            crumbs.concat()
        )
    }

    #[must_use]
    /// Previous/next links in reading order; empty when nothing is active.
    pub fn render_pager(&self, state: &TreeActiveState) -> String {
        let Some(active) = state.active else {
            return String::new();
        };
        let link = |id: Option<NodeId>, rel: &str| {
            id.and_then(|id| self.tree.get(id))
                .map(|e| {
                    format!(
                        r#"<a class="pager-{rel}" rel="{rel}" href="{}">{}</a>"#,
                        escape_attr(&e.path),
                        escape_text(&e.title)
                    )
                })
                .unwrap_or_default()
        };
        format!(
            r#"<footer class="pager">{}{}</footer>"#,
            link(self.tree.previous(active), "prev"),
            link(self.tree.next(active), "next"),
        )
    }
}

#[cfg(test)]
#[path = "tests/layout.rs"]
mod tests;
