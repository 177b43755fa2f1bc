//! Transport policy: user intents become store transitions here.
//!
//! Wrap-around and "nothing selected yet" live in this layer; the
//! store never reasons about catalog order, and the controller never
//! touches the driver directly.

use std::sync::Arc;
use std::time::Duration;

use crate::catalog::{Catalog, TrackId};

use super::store::{PlayerStore, StoreReaction};
use super::types::PlayerSnapshot;

pub struct TransportController {
    catalog: Arc<Catalog>,
    store: PlayerStore,
}

impl TransportController {
    pub fn new(catalog: Arc<Catalog>, store: PlayerStore) -> Self {
        Self { catalog, store }
    }

    /// Advance to the next catalog entry, wrapping at the end. With no
    /// selection this starts the first track. A single-entry catalog
    /// restarts the same track from zero (restart, not a no-op).
    pub fn next(&mut self) {
        let len = self.catalog.len();
        let target = match self
            .store
            .snapshot()
            .selected
            .and_then(|id| self.catalog.index_of(id))
        {
            None => self.catalog.first().id,
            Some(index) => self.catalog.tracks()[(index + 1) % len].id,
        };
        self.store.force_select(target);
        self.store.play();
    }

    /// Step back to the previous catalog entry, wrapping at the start.
    /// With no selection this starts the last track.
    pub fn prev(&mut self) {
        let len = self.catalog.len();
        let target = match self
            .store
            .snapshot()
            .selected
            .and_then(|id| self.catalog.index_of(id))
        {
            None => self.catalog.last().id,
            Some(index) => self.catalog.tracks()[(index + len - 1) % len].id,
        };
        self.store.force_select(target);
        self.store.play();
    }

    /// Explicit pick from a list: always ends up playing that id.
    /// Picking the already-selected track resumes without reloading.
    pub fn select_and_play(&mut self, id: TrackId) {
        self.store.select_track(id);
        self.store.play();
    }

    /// Next-track policy for a naturally finished track. Never invoked
    /// while looping — the driver suppresses `Ended` in loop mode.
    pub fn on_track_ended(&mut self) {
        self.next();
    }

    /// Drain driver events; a natural end of track advances playback.
    /// Called once per runtime tick.
    pub fn pump(&mut self) {
        if self.store.pump() == Some(StoreReaction::TrackEnded) {
            self.on_track_ended();
        }
    }

    pub fn toggle_play_pause(&mut self) {
        self.store.toggle_play_pause();
    }

    pub fn pause(&mut self) {
        self.store.pause();
    }

    pub fn seek(&mut self, position: Duration) {
        self.store.seek(position);
    }

    /// Scrub relative to the current position; negative deltas rewind
    /// and saturate at zero.
    pub fn seek_by(&mut self, delta_secs: i64) {
        let current = self.store.snapshot().position;
        let target = if delta_secs < 0 {
            current.saturating_sub(Duration::from_secs(delta_secs.unsigned_abs()))
        } else {
            current + Duration::from_secs(delta_secs as u64)
        };
        self.store.seek(target);
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.store.set_volume(volume);
    }

    /// Nudge the volume; the store clamps to `[0.0, 1.0]`.
    pub fn adjust_volume(&mut self, delta: f32) {
        let volume = self.store.snapshot().volume + delta;
        self.store.set_volume(volume);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.store.set_muted(muted);
    }

    pub fn toggle_muted(&mut self) {
        let muted = !self.store.snapshot().muted;
        self.store.set_muted(muted);
    }

    pub fn set_loop(&mut self, looping: bool) {
        self.store.set_loop(looping);
    }

    pub fn toggle_loop(&mut self) {
        let looping = !self.store.snapshot().looping;
        self.store.set_loop(looping);
    }

    pub fn dismiss_error(&mut self) {
        self.store.dismiss_error();
    }

    pub fn snapshot(&self) -> &PlayerSnapshot {
        self.store.snapshot()
    }

    pub fn subscribe(&mut self, subscriber: impl Fn(&PlayerSnapshot) + 'static) {
        self.store.subscribe(subscriber);
    }

    pub fn shutdown(&mut self) {
        self.store.shutdown();
    }
}
