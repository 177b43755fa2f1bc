use std::collections::HashSet;
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

/// Stable identifier of a catalog track. Never reused.
pub type TrackId = u32;

/// Where a track sits in the franchise's soundtrack.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Opening,
    Ending,
    Ost,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Opening => "Opening",
            Category::Ending => "Ending",
            Category::Ost => "OST",
        }
    }
}

/// One playable soundtrack entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub category: Category,
    /// Locator of the audio data; resolution (relative paths etc.)
    /// happens when the content bundle is loaded.
    pub source: PathBuf,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog contains no tracks")]
    Empty,
    #[error("duplicate track id {0}")]
    DuplicateId(TrackId),
}

/// Ordered, non-empty collection of tracks with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Build a catalog, rejecting empty input and duplicate ids.
    pub fn new(tracks: Vec<Track>) -> Result<Self, CatalogError> {
        if tracks.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: HashSet<TrackId> = HashSet::with_capacity(tracks.len());
        for track in &tracks {
            if !seen.insert(track.id) {
                return Err(CatalogError::DuplicateId(track.id));
            }
        }

        Ok(Self { tracks })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        // Constructor guarantees non-empty; kept for API symmetry.
        self.tracks.is_empty()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn by_id(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Resolve a track id to its catalog position.
    pub fn index_of(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    pub fn first(&self) -> &Track {
        &self.tracks[0]
    }

    pub fn last(&self) -> &Track {
        &self.tracks[self.tracks.len() - 1]
    }

    /// Catalog indices matching the given category filter, in catalog
    /// order. `None` selects everything.
    pub fn with_category(&self, filter: Option<Category>) -> Vec<usize> {
        self.tracks
            .iter()
            .enumerate()
            .filter(|(_, t)| filter.is_none_or(|c| t.category == c))
            .map(|(i, _)| i)
            .collect()
    }
}
