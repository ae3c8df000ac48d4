use super::*;

fn sidebar() -> QuickStartSidebar {
    QuickStartSidebar::new(
        vec![
            Section::new("Quick Start", "/docs/quick-start", "Overview"),
            Section::new(
                "First Steps",
                "/docs/quick-start/first-steps",
                "Create your first project",
            ),
        ],
        "/docs/quick-start",
    )
}

#[test]
fn test_starts_expanded() {
    let widget = sidebar();
    assert_eq!(widget.disclosure(), Disclosure::Expanded);
    assert!(widget.is_expanded());
}

#[test]
fn test_double_toggle_restores_state() {
    let mut widget = sidebar();
    widget.toggle();
    assert_eq!(widget.disclosure(), Disclosure::Collapsed);
    widget.toggle();
    assert_eq!(widget.disclosure(), Disclosure::Expanded);
}

#[test]
fn test_active_state_tracks_location_and_toggle() {
    let mut widget = sidebar();
    let location = Location::new("/docs/quick-start/first-steps");

    let state = widget.active_state(&location);
    assert_eq!(state.active_segment.as_deref(), Some("first-steps"));
    assert!(state.is_expanded);

    widget.toggle();
    let state = widget.active_state(&location);
    assert_eq!(state.active_segment.as_deref(), Some("first-steps"));
    assert!(!state.is_expanded);
}

#[test]
fn test_page_outside_root_highlights_nothing() {
    let widget = QuickStartSidebar::new(Section::defaults(), "/docs/quick-start");
    let state = widget.active_state(&Location::new("/docs/reference/fine-tuning"));
    assert_eq!(state.active_segment, None);
    assert!(widget.rows(&state).iter().all(|row| !row.active));
}

#[test]
fn test_nested_page_highlights_its_section() {
    let widget = QuickStartSidebar::new(Section::defaults(), "/docs/quick-start");
    let state = widget.active_state(&Location::new("/docs/quick-start/fine-tuning/advanced"));
    assert_eq!(state.active_segment.as_deref(), Some("fine-tuning"));
    assert!(widget.rows(&state)[2].active);
}

#[test]
fn test_rows_flag_only_the_active_section() {
    let widget = sidebar();
    let state = widget.active_state(&Location::new("/docs/quick-start"));
    let rows = widget.rows(&state);

    assert_eq!(rows.len(), 2);
    assert!(rows[0].active);
    assert!(!rows[1].active);
}

#[test]
fn test_render_marks_active_row() {
    let html = sidebar().render(&Location::new("/docs/quick-start/first-steps"));
    assert!(html.contains(r#"aria-expanded="true""#));
    assert!(html.contains(
        r#"<li class="active" data-segment="first-steps"><a href="/docs/quick-start/first-steps" title="Create your first project" aria-current="page">First Steps</a></li>"#
    ));
    assert_eq!(html.matches("aria-current").count(), 1);
}

#[test]
fn test_render_unmatched_highlights_nothing() {
    let html = sidebar().render(&Location::new("/docs/unrelated-page"));
    assert!(html.contains("<ul class=\"sidebar-sections\">"));
    assert!(!html.contains("aria-current"));
}

#[test]
fn test_collapsed_render_hides_rows() {
    let mut widget = sidebar();
    widget.toggle();
    let html = widget.render(&Location::new("/docs/quick-start/first-steps"));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains(r#"data-state="collapsed""#));
    assert!(!html.contains("<li"));
}

#[test]
fn test_instances_do_not_share_state() {
    let mut first = sidebar();
    let second = sidebar();
    first.toggle();
    assert!(!first.is_expanded());
    assert!(second.is_expanded());
}

#[test]
fn test_covers_root_and_descendants_only() {
    let widget = sidebar();
    assert_eq!(widget.root(), "/docs/quick-start");
    assert!(widget.covers(&Location::new("/docs/quick-start")));
    assert!(widget.covers(&Location::new("/docs/quick-start/first-steps")));
    assert!(!widget.covers(&Location::new("/docs/quick-starter")));
    assert!(!widget.covers(&Location::new("/docs")));
}
