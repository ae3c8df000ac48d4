//! docshell: render and inspect a documentation site's navigation.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use docshell::cards::render_card_grid;
use docshell::config::Config;
use docshell::html::escape_text;
use docshell::layout::Layout;
use docshell::outline::render_outline;
use docshell::section::render_quick_start;
use docshell::sidebar::QuickStartSidebar;
use docshell::source::{ContentSource, JsonSource, MarkdownDirSource};
use docshell::{resolve_tree, ActiveState, Location, NodeId, PageEntry, PageTree};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "docshell")]
#[command(about = "Content tree, route resolution and layout shell for documentation sites", long_about = None)]
struct Args {
    /// Configuration file (defaults to ./docshell.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory of markdown pages to scan
    #[arg(long, global = true, value_name = "DIR", conflicts_with = "tree")]
    content: Option<PathBuf>,

    /// JSON page tree to load instead of scanning a directory
    #[arg(long, global = true, value_name = "FILE")]
    tree: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the page tree as an outline
    Tree {
        /// Mark the page at this path as active
        path: Option<String>,
    },
    /// Print the resolved navigation state for a path as JSON
    Resolve {
        /// URL path to resolve
        path: String,
    },
    /// Print the rendered HTML page for a path
    Render {
        /// URL path to render
        path: String,
    },
    /// Write every page to a static site directory
    Build {
        /// Output directory
        #[arg(long, short, value_name = "DIR", default_value = "site")]
        out: PathBuf,
    },
    /// Check the page tree for duplicate paths
    Check,
}

#[derive(Serialize)]
struct ResolveReport {
    path: String,
    quick_start: ActiveState,
    active_page: Option<String>,
    expanded: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> docshell::Result<()> {
    let cfg = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let source: Box<dyn ContentSource> = match (args.tree, args.content) {
        (Some(tree), _) => Box::new(JsonSource::new(tree)),
        (None, content) => Box::new(
            MarkdownDirSource::new(content.unwrap_or_else(|| "content".into()), &cfg.base_url)
                .with_extensions(cfg.file_extensions.clone()),
        ),
    };
    let tree = source.page_tree()?;

    let options = cfg.layout_options();
    let sidebar = QuickStartSidebar::new(cfg.quick_start_sections(), cfg.quick_start_root.clone());
    let layout = Layout::new(&tree, &options).with_quick_start(&sidebar);
    let content = |entry: &PageEntry| page_content(entry, &tree, &cfg);

    match args.command {
        Command::Tree { path } => {
            let active = path.and_then(|p| tree.find_by_path(&p));
            print!("{}", render_outline(&tree, active));
        }
        Command::Resolve { path } => {
            let location = Location::new(&path);
            let state = resolve_tree(&tree, &location);
            let path_of = |id: NodeId| tree.get(id).map(|e| e.path.clone());
            let report = ResolveReport {
                path: location.path().to_string(),
                quick_start: sidebar.active_state(&location),
                active_page: state.active.and_then(path_of),
                expanded: state.expanded.iter().filter_map(|&id| path_of(id)).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Render { path } => {
            let location = Location::new(&path);
            let body = match tree.find_by_path(location.path()).and_then(|id| tree.get(id)) {
                Some(entry) => content(entry),
                None => "<h1>Not Found</h1>".to_string(),
            };
            println!("{}", layout.render(&location, &body));
        }
        Command::Build { out } => {
            let written = docshell::site::build_site(&layout, &out, content)?;
            eprintln!("Wrote {written} pages to {}", out.display());
        }
        Command::Check => {
            tree.validate()?;
            eprintln!("{} pages, no duplicate paths", tree.len());
        }
    }

    Ok(())
}

/// Page heading, plus the quick-start grid on its root and the feature cards on the first page.
fn page_content(entry: &PageEntry, tree: &PageTree, cfg: &Config) -> String {
    let mut html = format!("<h1>{}</h1>", escape_text(&entry.title));
    if Location::new(&entry.path) == Location::new(&cfg.quick_start_root) {
        html.push_str(&render_quick_start(&cfg.quick_start_sections()));
    }
    let is_first = tree
        .iter()
        .next()
        .is_some_and(|(_, first)| first.path == entry.path);
    if is_first && !cfg.cards.is_empty() {
        html.push_str(&render_card_grid(&cfg.cards));
    }
    html
}
