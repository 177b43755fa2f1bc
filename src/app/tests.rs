use super::*;
use crate::catalog::{Catalog, Category, Track};
use crate::content::{Character, Content};
use std::path::PathBuf;
use std::sync::Arc;

fn t(id: u32, title: &str, category: Category) -> Track {
    Track {
        id,
        title: title.into(),
        artist: "Artist".into(),
        category,
        source: PathBuf::from(format!("/music/{title}.mp3")),
        description: None,
    }
}

fn app() -> App {
    let catalog = Arc::new(
        Catalog::new(vec![
            t(1, "Open", Category::Opening),
            t(2, "Close", Category::Ending),
            t(3, "Battle", Category::Ost),
            t(4, "Calm", Category::Ost),
        ])
        .unwrap(),
    );
    let content = Content {
        characters: vec![
            Character {
                name: "Riku".into(),
                role: "Protagonist".into(),
                description: String::new(),
            },
            Character {
                name: "Mirei".into(),
                role: "Deuteragonist".into(),
                description: String::new(),
            },
        ],
        ..Content::default()
    };
    App::new(catalog, content)
}

#[test]
fn pages_cycle_in_both_directions() {
    let mut app = app();
    assert_eq!(app.page, Page::Home);

    app.next_page();
    assert_eq!(app.page, Page::Music);

    app.prev_page();
    app.prev_page();
    assert_eq!(app.page, Page::Gallery);

    app.next_page();
    assert_eq!(app.page, Page::Home);
}

#[test]
fn filter_cycles_through_all_categories_and_back() {
    let mut app = app();
    assert_eq!(app.visible_tracks(), vec![0, 1, 2, 3]);

    app.cycle_filter();
    assert_eq!(app.filter, Some(Category::Opening));
    assert_eq!(app.visible_tracks(), vec![0]);

    app.cycle_filter();
    assert_eq!(app.visible_tracks(), vec![1]);

    app.cycle_filter();
    assert_eq!(app.visible_tracks(), vec![2, 3]);

    app.cycle_filter();
    assert_eq!(app.filter, None);
    assert_eq!(app.visible_tracks(), vec![0, 1, 2, 3]);
}

#[test]
fn cursor_track_id_follows_the_filtered_view() {
    let mut app = app();
    app.music_cursor = 1;
    assert_eq!(app.cursor_track_id(), Some(2));

    app.cycle_filter();
    app.cycle_filter();
    app.cycle_filter(); // OST
    app.music_cursor = 1;
    assert_eq!(app.cursor_track_id(), Some(4));
}

#[test]
fn narrowing_the_filter_resets_an_out_of_range_cursor() {
    let mut app = app();
    app.music_cursor = 3;
    app.cycle_filter(); // Opening: one row
    assert_eq!(app.music_cursor, 0);
    assert_eq!(app.cursor_track_id(), Some(1));
}

#[test]
fn music_cursor_wraps_both_ways() {
    let mut app = app();

    app.music_up();
    assert_eq!(app.music_cursor, 3);

    app.music_down();
    assert_eq!(app.music_cursor, 0);
}

#[test]
fn focus_track_moves_the_cursor_to_the_visible_row() {
    let mut app = app();
    app.focus_track(3);
    assert_eq!(app.music_cursor, 2);

    // Filtered to OST, track 3 is the first row.
    app.cycle_filter();
    app.cycle_filter();
    app.cycle_filter();
    app.focus_track(3);
    assert_eq!(app.music_cursor, 0);
}

#[test]
fn list_cursor_wraps_and_resets_on_page_change() {
    let mut app = app();
    app.set_page(Page::Characters);
    assert_eq!(app.active_list_len(), 2);

    app.list_down();
    assert_eq!(app.list_cursor, 1);
    app.list_down();
    assert_eq!(app.list_cursor, 0);
    app.list_up();
    assert_eq!(app.list_cursor, 1);

    app.set_page(Page::Gallery);
    assert_eq!(app.list_cursor, 0);
    // Empty gallery: cursor moves are no-ops.
    app.list_down();
    assert_eq!(app.list_cursor, 0);
}
