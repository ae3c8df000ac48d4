use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_missing_file_gives_defaults() {
    let cfg = Config::load_from(Path::new("/definitely/not/here/docshell.toml")).unwrap();
    assert_eq!(cfg.title, "Docs");
    assert_eq!(cfg.base_url, "/docs");
    assert_eq!(cfg.quick_start_root, "/docs/quick-start");
    assert_eq!(cfg.file_extensions, vec!["md", "mdx"]);
    assert_eq!(cfg.quick_start_sections(), Section::defaults());
}

#[test]
fn test_empty_toml_matches_defaults() {
    let parsed = Config::from_toml("").unwrap();
    let default = Config::default();
    assert_eq!(parsed.title, default.title);
    assert_eq!(parsed.favicon, default.favicon);
    assert_eq!(parsed.file_extensions, default.file_extensions);
    assert!(parsed.links.is_empty());
    assert!(parsed.cards.is_empty());
}

#[test]
fn test_full_config() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
title = "Syncora"
logo = "/logo.svg"
quick_start_root = "/guide/quick-start"

[[links]]
text = "GitHub"
url = "https://github.com/example"

[[sections]]
title = "First Steps"
href = "/guide/quick-start/first-steps"
description = "Begin here"

[[cards]]
href = "/guide/models"
icon = "cube"
title = "Models"
items = ["Train", "Evaluate"]
"#
    )
    .unwrap();

    let cfg = Config::load_from(file.path()).unwrap();
    assert_eq!(cfg.title, "Syncora");
    assert_eq!(cfg.logo.as_deref(), Some("/logo.svg"));
    assert_eq!(cfg.quick_start_root, "/guide/quick-start");
    assert_eq!(cfg.base_url, "/docs");
    assert_eq!(
        cfg.quick_start_sections(),
        vec![Section::new(
            "First Steps",
            "/guide/quick-start/first-steps",
            "Begin here"
        )]
    );
    assert_eq!(cfg.cards[0].items, vec!["Train", "Evaluate"]);

    let options = cfg.layout_options();
    assert_eq!(options.links[0].text, "GitHub");
    assert_eq!(options.title, "Syncora");
}

#[test]
fn test_card_without_items_has_empty_list() {
    let cfg = Config::from_toml(
        r#"
[[cards]]
href = "/docs/data"
icon = "database"
title = "Data"
"#,
    )
    .unwrap();
    assert_eq!(
        cfg.cards,
        vec![crate::cards::Card {
            href: "/docs/data".to_string(),
            icon: "database".to_string(),
            title: "Data".to_string(),
            items: Vec::new(),
        }]
    );
}

#[test]
fn test_invalid_toml_is_reported() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "title = [unclosed").unwrap();
    assert!(matches!(
        Config::load_from(file.path()),
        Err(Error::Config { .. })
    ));
}
