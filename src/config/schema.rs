use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/encore/config.toml` or
/// `~/.config/encore/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ENCORE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub content: ContentSettings,
    pub playback: PlaybackSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    /// Path to the content bundle (catalog + pages). A first CLI
    /// argument overrides this.
    pub path: PathBuf,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("content.toml"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Initial volume in `[0.0, 1.0]`.
    pub volume: f32,
    /// Whether output starts muted.
    pub muted: bool,
    /// Whether the current track restarts when it ends.
    pub looping: bool,
    /// Number of seconds to scrub when seeking with `H` / `L`.
    pub seek_seconds: u64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: 0.8,
            muted: false,
            looping: false,
            seek_seconds: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Whether track descriptions are rendered on the music page.
    pub show_descriptions: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_descriptions: true,
        }
    }
}

impl Settings {
    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.playback.volume) {
            return Err("playback.volume must be within 0.0..=1.0".to_string());
        }
        if self.playback.seek_seconds == 0 {
            return Err("playback.seek_seconds must be >= 1".to_string());
        }
        Ok(())
    }
}
