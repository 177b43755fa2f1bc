use super::*;
use std::path::PathBuf;

fn t(id: TrackId, title: &str, category: Category) -> Track {
    Track {
        id,
        title: title.into(),
        artist: "Artist".into(),
        category,
        source: PathBuf::from(format!("/music/{title}.mp3")),
        description: None,
    }
}

#[test]
fn empty_catalog_is_rejected() {
    assert_eq!(Catalog::new(Vec::new()).unwrap_err(), CatalogError::Empty);
}

#[test]
fn duplicate_ids_are_rejected() {
    let tracks = vec![
        t(1, "Alpha", Category::Opening),
        t(2, "Beta", Category::Ost),
        t(1, "Gamma", Category::Ending),
    ];
    assert_eq!(
        Catalog::new(tracks).unwrap_err(),
        CatalogError::DuplicateId(1)
    );
}

#[test]
fn lookup_by_id_and_index() {
    let catalog = Catalog::new(vec![
        t(10, "Alpha", Category::Opening),
        t(20, "Beta", Category::Ending),
        t(30, "Gamma", Category::Ost),
    ])
    .unwrap();

    assert_eq!(catalog.len(), 3);
    assert!(!catalog.is_empty());
    assert_eq!(catalog.index_of(20), Some(1));
    assert_eq!(catalog.index_of(99), None);
    assert_eq!(catalog.by_id(30).unwrap().title, "Gamma");
    assert!(catalog.by_id(99).is_none());
    assert_eq!(catalog.first().id, 10);
    assert_eq!(catalog.last().id, 30);
}

#[test]
fn catalog_order_is_declaration_order_not_id_order() {
    let catalog = Catalog::new(vec![
        t(7, "Third", Category::Ost),
        t(3, "First", Category::Ost),
        t(5, "Second", Category::Ost),
    ])
    .unwrap();

    let ids: Vec<TrackId> = catalog.tracks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![7, 3, 5]);
}

#[test]
fn category_filter_keeps_catalog_order() {
    let catalog = Catalog::new(vec![
        t(1, "Open", Category::Opening),
        t(2, "Close", Category::Ending),
        t(3, "Battle", Category::Ost),
        t(4, "Calm", Category::Ost),
    ])
    .unwrap();

    assert_eq!(catalog.with_category(None), vec![0, 1, 2, 3]);
    assert_eq!(catalog.with_category(Some(Category::Ost)), vec![2, 3]);
    assert_eq!(catalog.with_category(Some(Category::Opening)), vec![0]);
}

#[test]
fn category_labels_are_display_ready() {
    assert_eq!(Category::Opening.label(), "Opening");
    assert_eq!(Category::Ending.label(), "Ending");
    assert_eq!(Category::Ost.label(), "OST");
}
