//! Utilities for creating `rodio` sinks from catalog sources.
//!
//! The helpers here encapsulate opening/decoding an audio file into a
//! paused `Sink` and probing its duration.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use lofty::file::AudioFile;
use rodio::{Decoder, OutputStream, Sink, Source};

use super::types::PlayerError;

/// Create a paused `Sink` for the audio file at `source`, returning
/// the decoder-reported duration when available.
pub(super) fn create_sink(
    stream: &OutputStream,
    source: &Path,
) -> Result<(Sink, Option<Duration>), PlayerError> {
    let file = File::open(source)
        .map_err(|e| PlayerError::Load(format!("{}: {e}", source.display())))?;
    let decoder = Decoder::new(BufReader::new(file))
        .map_err(|e| PlayerError::Load(format!("{}: {e}", source.display())))?;
    let decoded = decoder.total_duration();

    let sink = Sink::connect_new(stream.mixer());
    sink.append(decoder);
    sink.pause();
    Ok((sink, decoded))
}

/// Probe the duration from the file's tags. Decoders often cannot
/// report a total duration for compressed formats; tags usually can.
pub(super) fn probe_duration(source: &Path) -> Option<Duration> {
    lofty::read_from_path(source)
        .ok()
        .map(|tagged| tagged.properties().duration())
}
