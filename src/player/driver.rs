use std::path::Path;
use std::time::Duration;

use super::types::{DriverEvent, Generation};

/// Store-facing seam over the audio output.
///
/// The production implementation (`RodioDriver`) forwards everything
/// to a dedicated audio thread; tests substitute a scripted fake so
/// the state machine runs without an audio device. All calls are
/// fire-and-forget — completion and failure arrive later as events.
pub trait Driver {
    /// Bind to new audio data. Supersedes any in-flight load
    /// (last-load-wins); completion arrives as `Ready` or `Failed`
    /// tagged with `generation`.
    fn load(&mut self, generation: Generation, source: &Path);

    fn play(&mut self);

    fn pause(&mut self);

    fn seek(&mut self, position: Duration);

    /// Applied to the live output if one exists, cached for the next
    /// load either way.
    fn set_volume(&mut self, volume: f32);

    fn set_muted(&mut self, muted: bool);

    fn set_loop(&mut self, looping: bool);

    /// Stop output and free the current binding.
    fn release(&mut self);

    /// Tear the output down entirely. Called once at application exit.
    fn shutdown(&mut self) {}

    /// Drain events emitted since the last poll, in emission order.
    fn poll(&mut self) -> Vec<DriverEvent>;
}
