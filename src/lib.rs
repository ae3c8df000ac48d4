//! docshell: content tree, route resolution and layout shell for documentation sites.
//!
//! A content source supplies the page tree, the route resolver works out which page and which
//! quick-start section are active for the current URL, and the layout shell and widgets turn that
//! state into HTML.
#![allow(clippy::multiple_crate_versions)]

pub mod cards;
pub mod config;
pub mod error;
pub mod formats;
pub mod html;
pub mod layout;
pub mod outline;
pub mod page_tree;
pub mod route;
pub mod section;
pub mod sidebar;
pub mod site;
pub mod source;

pub use error::{Error, Result};
pub use page_tree::{NodeId, PageEntry, PageNode, PageTree};
pub use route::{resolve, resolve_tree, ActiveState, Location, RouteSegment, TreeActiveState};
pub use section::Section;
