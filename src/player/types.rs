//! Protocol and state types shared across the playback engine.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::catalog::TrackId;

/// The transport state of the player. `Stopped` only occurs before the
/// first selection; afterwards the player is either playing or paused.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Transport {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Monotonic tag for driver bindings. The store increments it per
/// load and drops events carrying a superseded value, so stale load
/// completions can never touch the current track's state.
pub type Generation = u64;

/// Commands sent to the audio thread. Processed strictly in order.
#[derive(Debug)]
pub enum DriverCmd {
    /// Bind to new audio data, superseding any in-flight load.
    Load {
        generation: Generation,
        source: PathBuf,
    },
    /// Start or resume output. No-op while already playing.
    Play,
    /// Halt output, preserving position. Idempotent.
    Pause,
    /// Jump to the given position (clamped against the known duration).
    Seek(Duration),
    SetVolume(f32),
    SetMuted(bool),
    SetLoop(bool),
    /// Stop output and free the current binding.
    Release,
    /// Free everything and exit the audio thread.
    Shutdown,
}

/// Lifecycle events emitted by the audio thread, tagged with the
/// generation of the binding they belong to.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverEvent {
    /// Load completed; duration is `None` when neither the tags nor
    /// the decoder could report one.
    Ready {
        generation: Generation,
        duration: Option<Duration>,
    },
    /// Periodic position report while playing (bounded cadence), also
    /// emitted once after an applied seek.
    Position {
        generation: Generation,
        position: Duration,
    },
    /// The track drained naturally. Never emitted while looping.
    Ended { generation: Generation },
    /// A load or the output itself failed; the binding is gone.
    Failed {
        generation: Generation,
        error: PlayerError,
    },
}

impl DriverEvent {
    pub fn generation(&self) -> Generation {
        match self {
            DriverEvent::Ready { generation, .. }
            | DriverEvent::Position { generation, .. }
            | DriverEvent::Ended { generation }
            | DriverEvent::Failed { generation, .. } => *generation,
        }
    }
}

/// Failures surfaced on the player snapshot. None of these are fatal;
/// the worst outcome is that nothing is currently playing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("failed to load audio: {0}")]
    Load(String),
    #[error("audio output unavailable: {0}")]
    Blocked(String),
}

/// Whole-state snapshot published by the store after every transition.
/// Surfaces must tolerate receiving identical snapshots repeatedly.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    pub selected: Option<TrackId>,
    pub transport: Transport,
    pub looping: bool,
    pub volume: f32,
    pub muted: bool,
    /// Advances only while playing; resets on track change and seek.
    pub position: Duration,
    /// Authoritative once the driver reported ready for the current
    /// binding; `None` before that.
    pub duration: Option<Duration>,
    /// Last driver failure, shown until dismissed or the next load.
    pub error: Option<PlayerError>,
}

impl Default for PlayerSnapshot {
    fn default() -> Self {
        Self {
            selected: None,
            transport: Transport::Stopped,
            looping: false,
            volume: 1.0,
            muted: false,
            position: Duration::ZERO,
            duration: None,
            error: None,
        }
    }
}
