//! Site configuration with defaults for every setting.
//!
//! We look for a docshell.toml in the working directory (or the path given on the command line)
//! and load the site title, logo, header links, quick-start sections and feature cards from it.
//! A missing file is not an error: the defaults describe a plain docs site mounted at `/docs`.

use crate::cards::Card;
use crate::error::{Error, Result};
use crate::layout::{LayoutOptions, NavLink};
use crate::section::Section;
use facet::Facet;
use std::fs;
use std::path::Path;

/// File consulted when no configuration path is given.
pub const DEFAULT_CONFIG_FILE: &str = "docshell.toml";

const DEFAULT_TITLE: &str = "Docs";
const DEFAULT_FAVICON: &str = "/favicon.svg";
const DEFAULT_BASE_URL: &str = "/docs";
const DEFAULT_QUICK_START_ROOT: &str = "/docs/quick-start";

#[derive(Facet, Clone, Debug)]
/// Site preferences loaded from docshell.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_TITLE.to_string())]
    /// Site name shown in the header.
    pub title: String,
    #[facet(default)]
    /// Logo image shown before the site name.
    pub logo: Option<String>,
    #[facet(default = DEFAULT_FAVICON.to_string())]
    /// Favicon reference.
    pub favicon: String,
    #[facet(default = DEFAULT_BASE_URL.to_string())]
    /// URL prefix under which scanned content is mounted.
    pub base_url: String,
    #[facet(default = DEFAULT_QUICK_START_ROOT.to_string())]
    /// Path of the quick-start landing page.
    pub quick_start_root: String,
    #[facet(default = vec!["md".to_string(), "mdx".to_string()])]
    /// File suffixes treated as pages when scanning a content directory.
    pub file_extensions: Vec<String>,
    #[facet(default)]
    /// Extra header links.
    pub links: Vec<NavLink>,
    #[facet(default)]
    /// Quick-start sections; the built-in list is used when empty.
    pub sections: Vec<Section>,
    #[facet(default)]
    /// Feature cards shown on the site's first page.
    pub cards: Vec<Card>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            logo: None,
            favicon: DEFAULT_FAVICON.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            quick_start_root: DEFAULT_QUICK_START_ROOT.to_string(),
            file_extensions: vec!["md".to_string(), "mdx".to_string()],
            links: Vec::new(),
            sections: Vec::new(),
            cards: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from docshell.toml if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from `path`, using defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml(&contents).map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the decoder's message when the text is not a valid configuration.
    pub fn from_toml(contents: &str) -> std::result::Result<Self, String> {
        facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())
    }

    #[must_use]
    /// Header and document options for the layout shell.
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            title: self.title.clone(),
            logo: self.logo.clone(),
            favicon: self.favicon.clone(),
            links: self.links.clone(),
        }
    }

    #[must_use]
    /// Configured quick-start sections, or the built-in list when none are configured.
    pub fn quick_start_sections(&self) -> Vec<Section> {
        if self.sections.is_empty() {
            Section::defaults()
        } else {
            self.sections.clone()
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
