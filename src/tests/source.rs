use super::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write(dir: &Path, relative: &str, contents: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn content_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "index.md", "# Welcome\n\nIntro text.\n");
    write(
        root,
        "quick-start/index.mdx",
        "---\ntitle: \"Quick Start\"\n---\n\n# Ignored heading\n",
    );
    write(
        root,
        "quick-start/model-creators.md",
        "Some preamble\n\n## Not a title\n\n# Model Creators\n",
    );
    write(root, "quick-start/data-consumers.md", "No heading at all.\n");
    write(root, "reference/api.md", "# API\n");
    write(root, "reference/notes.txt", "# Not a page\n");
    write(root, "empty/readme.txt", "ignored");
    write(root, ".hidden/secret.md", "# Secret\n");
    dir
}

#[test]
fn test_markdown_dir_builds_tree() {
    let dir = content_dir();
    let tree = MarkdownDirSource::new(dir.path(), "/docs")
        .page_tree()
        .unwrap();

    let nodes = tree.to_nodes();
    assert_eq!(
        nodes,
        vec![
            PageNode::new("Welcome", "/docs"),
            PageNode::new("Quick Start", "/docs/quick-start").with_children(vec![
                PageNode::new("Data Consumers", "/docs/quick-start/data-consumers"),
                PageNode::new("Model Creators", "/docs/quick-start/model-creators"),
            ]),
            PageNode::new("Reference", "/docs/reference")
                .with_children(vec![PageNode::new("API", "/docs/reference/api")]),
        ]
    );
}

#[cfg(unix)]
#[test]
fn test_symlinked_directories_are_not_followed() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(root, "index.md", "# Welcome\n");
    write(root, "guides/setup.md", "# Setup\n");
    std::os::unix::fs::symlink(root, root.join("loop")).unwrap();
    std::os::unix::fs::symlink(root.join("guides"), root.join("guides/again")).unwrap();
    std::os::unix::fs::symlink(root.join("missing.md"), root.join("dangling.md")).unwrap();

    let tree = MarkdownDirSource::new(root, "/docs").page_tree().unwrap();

    assert_eq!(
        tree.to_nodes(),
        vec![
            PageNode::new("Welcome", "/docs"),
            PageNode::new("Guides", "/docs/guides")
                .with_children(vec![PageNode::new("Setup", "/docs/guides/setup")]),
        ]
    );
    assert_eq!(tree.find_by_path("/docs/loop"), None);
}

#[test]
fn test_extensions_can_be_restricted() {
    let dir = content_dir();
    let tree = MarkdownDirSource::new(dir.path(), "/docs")
        .with_extensions(vec!["md".to_string()])
        .page_tree()
        .unwrap();

    let folder = tree.find_by_path("/docs/quick-start").unwrap();
    // Without .mdx the index is not read, so the folder is named from the directory.
    assert_eq!(tree.get(folder).unwrap().title, "Quick Start");
    assert_eq!(tree.get(folder).unwrap().children.len(), 2);
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = MarkdownDirSource::new(dir.path().join("nope"), "/docs").page_tree();
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_title_extraction() {
    let mut titles = TitleExtractor::new(&MarkdownFormat).unwrap();
    assert_eq!(
        titles.title("# Getting Started\n\nBody").as_deref(),
        Some("Getting Started")
    );
    assert_eq!(
        titles.title("---\ntitle: Front Matter\n---\n# Heading\n").as_deref(),
        Some("Front Matter")
    );
    assert_eq!(titles.title("## Only a subheading\n"), None);
}

#[test]
fn test_prettify() {
    assert_eq!(prettify("first-steps"), "First Steps");
    assert_eq!(prettify("fine_tuning"), "Fine Tuning");
    assert_eq!(prettify("api"), "Api");
}

#[test]
fn test_json_source() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"title": "Intro", "path": "/docs"}}, {{"title": "Guides", "path": "/docs/guides", "children": [{{"title": "Setup", "path": "/docs/guides/setup"}}]}}]"#
    )
    .unwrap();

    let tree = JsonSource::new(file.path()).page_tree().unwrap();
    assert_eq!(tree.len(), 3);
    let setup = tree.find_by_path("/docs/guides/setup").unwrap();
    assert_eq!(tree.get(setup).unwrap().depth, 1);
}

#[test]
fn test_json_source_rejects_malformed_input() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{not json").unwrap();
    assert!(matches!(
        JsonSource::new(file.path()).page_tree(),
        Err(Error::Json(_))
    ));
}

#[test]
fn test_static_source() {
    let source = StaticSource::new(vec![PageNode::new("Only", "/only")]);
    let tree = source.page_tree().unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.roots().len(), 1);
}
