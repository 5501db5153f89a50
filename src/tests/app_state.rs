use super::AppState;
use crate::config::Config;
use crate::document::Document;
use crate::formats::markdown::MarkdownFormat;

/// Three ten-row sections: Alpha 0..10, Beta 10..20, Gamma 20..30.
fn sample_doc() -> Document {
    let mut source = String::new();
    for title in ["Alpha", "Beta", "Gamma"] {
        source.push_str(&format!("# {title}\n"));
        for _ in 0..9 {
            source.push_str("body\n");
        }
    }
    Document::parse(&source, &MarkdownFormat).unwrap()
}

fn defaults() -> Config {
    facet_toml::from_str::<Config>("").unwrap()
}

#[test]
fn test_sync_attaches_and_activates_the_first_section() {
    let mut app = AppState::new(sample_doc(), &defaults(), false, false).unwrap();

    app.set_viewport_rows(10);
    app.sync().unwrap();

    assert!(app.watcher.is_attached());
    assert_eq!(app.active.get(), Some(0));
}

#[test]
fn test_scrolling_moves_the_active_item() {
    let mut app = AppState::new(sample_doc(), &defaults(), false, false).unwrap();
    app.set_viewport_rows(10);
    app.sync().unwrap();

    // The view 12..22 overlaps eight rows of Beta and two of Gamma.
    app.scroll_to(12);
    app.sync().unwrap();
    assert_eq!(app.active.get(), Some(1));

    app.scroll_to_bottom();
    app.sync().unwrap();
    assert_eq!(app.active.get(), Some(2), "end of travel forces the last");

    app.scroll_to_top();
    app.sync().unwrap();
    assert_eq!(app.active.get(), Some(0), "start of travel forces the first");
}

#[test]
fn test_scroll_offsets_clamp_to_the_document() {
    let mut app = AppState::new(sample_doc(), &defaults(), false, false).unwrap();
    app.set_viewport_rows(10);

    assert_eq!(app.max_scroll(), 20);
    app.scroll_by(-5);
    assert_eq!(app.scroll_top, 0);
    app.scroll_to(999);
    assert_eq!(app.scroll_top, 20);
    app.page_down();
    assert_eq!(app.scroll_top, 20);
}

#[test]
fn test_pause_freezes_the_active_item_until_resume() {
    let mut app = AppState::new(sample_doc(), &defaults(), false, false).unwrap();
    app.set_viewport_rows(10);
    app.sync().unwrap();
    assert_eq!(app.active.get(), Some(0));

    app.toggle_pause().unwrap();
    app.scroll_to_bottom();
    app.sync().unwrap();
    assert_eq!(app.active.get(), Some(0), "paused pulses change nothing");

    app.toggle_pause().unwrap();
    assert_eq!(app.active.get(), Some(2), "resume resynchronizes");
}

#[test]
fn test_multi_mode_collects_every_focused_section() {
    let mut app = AppState::new(sample_doc(), &defaults(), true, false).unwrap();
    app.set_viewport_rows(10);
    app.sync().unwrap();

    // Sticky top forces a lone candidate; the mapper still activates it.
    assert_eq!(*app.multi_active.borrow(), vec![0]);
    assert_eq!(app.active.get(), Some(0));

    app.scroll_to(12);
    app.sync().unwrap();
    assert_eq!(*app.multi_active.borrow(), vec![1, 2]);
}

#[test]
fn test_trail_records_each_notification() {
    let mut app = AppState::new(sample_doc(), &defaults(), false, false).unwrap();
    app.set_viewport_rows(10);
    app.sync().unwrap();
    app.scroll_to(12);
    app.sync().unwrap();

    let trail = app.trail.borrow();
    assert_eq!(trail.events.len(), 2);
    assert_eq!(trail.events[0].sections, vec![0]);
    assert_eq!(trail.events[0].title, "Alpha");
    assert_eq!(trail.events[1].sections, vec![1]);
    assert_eq!(trail.events[1].title, "Beta");
}
