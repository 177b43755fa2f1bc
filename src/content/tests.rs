use super::*;
use crate::catalog::{Category, CatalogError};
use std::fs;
use tempfile::tempdir;

const BUNDLE: &str = r#"
[site]
title = "Aria Archive"
tagline = "the sound of the floating city"

[[tracks]]
id = 1
title = "Skyward"
artist = "Mirei"
category = "opening"
source = "music/skyward.mp3"
description = "First opening theme"

[[tracks]]
id = 2
title = "Afterglow"
artist = "Sana"
category = "ending"
source = "/srv/audio/afterglow.mp3"

[[tracks]]
id = 3
title = "Spire Battle"
artist = "K. Hoshino"
category = "ost"
source = "music/spire_battle.mp3"

[[characters]]
name = "Riku"
role = "Protagonist"
description = "A courier who maps the upper spires."

[[moments]]
title = "The First Ascent"
episode = 3
description = "Riku reaches the second ring."

[[gallery]]
title = "Dawn over the rings"
caption = "Key visual from the first season."
"#;

#[test]
fn load_parses_catalog_and_pages() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("content.toml");
    fs::write(&path, BUNDLE).unwrap();

    let (catalog, content) = load(&path).unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.first().title, "Skyward");
    assert_eq!(catalog.by_id(2).unwrap().category, Category::Ending);
    assert_eq!(
        catalog.by_id(1).unwrap().description.as_deref(),
        Some("First opening theme")
    );

    assert_eq!(content.site.title, "Aria Archive");
    assert_eq!(content.characters.len(), 1);
    assert_eq!(content.moments[0].episode, Some(3));
    assert_eq!(content.gallery[0].title, "Dawn over the rings");
}

#[test]
fn relative_sources_resolve_against_bundle_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("content.toml");
    fs::write(&path, BUNDLE).unwrap();

    let (catalog, _) = load(&path).unwrap();

    assert_eq!(
        catalog.by_id(1).unwrap().source,
        dir.path().join("music/skyward.mp3")
    );
    // Absolute locators pass through untouched.
    assert_eq!(
        catalog.by_id(2).unwrap().source,
        std::path::PathBuf::from("/srv/audio/afterglow.mp3")
    );
}

#[test]
fn bundle_without_tracks_fails_fast() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("content.toml");
    fs::write(&path, "[site]\ntitle = \"empty\"\n").unwrap();

    match load(&path) {
        Err(ContentError::Catalog(CatalogError::Empty)) => {}
        other => panic!("expected empty-catalog error, got {other:?}"),
    }
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    assert!(matches!(load(&path), Err(ContentError::Io { .. })));
}

#[test]
fn malformed_toml_reports_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("content.toml");
    fs::write(&path, "[[tracks]\nid = ").unwrap();
    assert!(matches!(load(&path), Err(ContentError::Parse { .. })));
}

#[test]
fn page_sections_default_to_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("content.toml");
    fs::write(
        &path,
        r#"
[[tracks]]
id = 1
title = "Only"
artist = "A"
category = "ost"
source = "only.mp3"
"#,
    )
    .unwrap();

    let (catalog, content) = load(&path).unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(content.characters.is_empty());
    assert!(content.moments.is_empty());
    assert!(content.gallery.is_empty());
    assert_eq!(content.site.title, "encore");
}
