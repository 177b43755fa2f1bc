use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError, Track};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: Box<toml::de::Error>,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Site identity shown in the header.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Site {
    pub title: String,
    pub tagline: String,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            title: "encore".to_string(),
            tagline: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Character {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Moment {
    pub title: String,
    #[serde(default)]
    pub episode: Option<u32>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryItem {
    pub title: String,
    #[serde(default)]
    pub caption: String,
}

/// Everything in the bundle except the catalog, which gets its own
/// validated type.
#[derive(Debug, Clone, Default)]
pub struct Content {
    pub site: Site,
    pub characters: Vec<Character>,
    pub moments: Vec<Moment>,
    pub gallery: Vec<GalleryItem>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct Bundle {
    site: Site,
    tracks: Vec<Track>,
    characters: Vec<Character>,
    moments: Vec<Moment>,
    gallery: Vec<GalleryItem>,
}

/// Load and validate a content bundle from disk.
///
/// Relative track sources are resolved against the bundle's directory
/// so a bundle can travel with its audio files.
pub fn load(path: &Path) -> Result<(Catalog, Content), ContentError> {
    let text = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bundle: Bundle = toml::from_str(&text).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source: Box::new(source),
    })?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let tracks = bundle
        .tracks
        .into_iter()
        .map(|mut track| {
            if track.source.is_relative() {
                track.source = base.join(&track.source);
            }
            track
        })
        .collect();

    let catalog = Catalog::new(tracks)?;
    let content = Content {
        site: bundle.site,
        characters: bundle.characters,
        moments: bundle.moments,
        gallery: bundle.gallery,
    };

    Ok((catalog, content))
}
