//! The shared player state machine.
//!
//! Single writer: every mutation goes through a transition method
//! here, never through ad-hoc field writes, so surfaces can rely on
//! the published snapshots being internally consistent.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::catalog::{Catalog, TrackId};

use super::driver::Driver;
use super::types::{DriverEvent, Generation, PlayerSnapshot, Transport};

/// Reaction handed back by `pump` when the driver reported a natural
/// end of track; the transport controller owns the follow-up policy.
#[derive(Debug, PartialEq, Eq)]
pub enum StoreReaction {
    TrackEnded,
}

type Subscriber = Box<dyn Fn(&PlayerSnapshot)>;

pub struct PlayerStore {
    driver: Box<dyn Driver>,
    catalog: Arc<Catalog>,
    snapshot: PlayerSnapshot,
    generation: Generation,
    subscribers: Vec<Subscriber>,
}

impl PlayerStore {
    pub fn new(catalog: Arc<Catalog>, driver: Box<dyn Driver>) -> Self {
        Self {
            driver,
            catalog,
            snapshot: PlayerSnapshot::default(),
            generation: 0,
            subscribers: Vec::new(),
        }
    }

    /// Register a surface. It receives the current snapshot
    /// immediately and every published snapshot from then on.
    pub fn subscribe(&mut self, subscriber: impl Fn(&PlayerSnapshot) + 'static) {
        subscriber(&self.snapshot);
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn snapshot(&self) -> &PlayerSnapshot {
        &self.snapshot
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.snapshot);
        }
    }

    /// Select a track, reloading only when the id actually changes.
    /// Re-selecting the current track keeps the binding (and position)
    /// intact.
    pub fn select_track(&mut self, id: TrackId) {
        if self.snapshot.selected == Some(id) {
            return;
        }
        self.load_track(id);
    }

    /// Select and reload unconditionally — restart semantics, used by
    /// next/prev so a single-entry catalog restarts from zero.
    pub fn force_select(&mut self, id: TrackId) {
        self.load_track(id);
    }

    fn load_track(&mut self, id: TrackId) {
        let Some(track) = self.catalog.by_id(id) else {
            debug!(id, "ignoring selection of unknown track id");
            return;
        };

        self.generation += 1;
        self.driver.load(self.generation, &track.source);

        self.snapshot.selected = Some(id);
        // Biased to Paused until a play intent follows; a stalled load
        // then shows a paused player rather than a lying "Playing".
        self.snapshot.transport = Transport::Paused;
        self.snapshot.position = Duration::ZERO;
        self.snapshot.duration = None;
        self.snapshot.error = None;
        self.notify();
    }

    pub fn play(&mut self) {
        if self.snapshot.selected.is_none() {
            return;
        }
        self.driver.play();
        self.snapshot.transport = Transport::Playing;
        self.notify();
    }

    pub fn pause(&mut self) {
        if self.snapshot.selected.is_none() {
            return;
        }
        self.driver.pause();
        self.snapshot.transport = Transport::Paused;
        self.notify();
    }

    pub fn toggle_play_pause(&mut self) {
        match self.snapshot.transport {
            Transport::Playing => self.pause(),
            Transport::Paused => self.play(),
            // Nothing selected yet.
            Transport::Stopped => {}
        }
    }

    /// Jump to `position`, clamped against the known duration. Seek
    /// overshoot is corrected silently — never an error.
    pub fn seek(&mut self, position: Duration) {
        if self.snapshot.selected.is_none() {
            return;
        }
        let target = match self.snapshot.duration {
            Some(total) => position.min(total),
            None => position,
        };
        self.driver.seek(target);
        self.snapshot.position = target;
        self.notify();
    }

    pub fn set_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        self.driver.set_volume(volume);
        self.snapshot.volume = volume;
        self.notify();
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.driver.set_muted(muted);
        self.snapshot.muted = muted;
        self.notify();
    }

    pub fn set_loop(&mut self, looping: bool) {
        self.driver.set_loop(looping);
        self.snapshot.looping = looping;
        self.notify();
    }

    pub fn dismiss_error(&mut self) {
        if self.snapshot.error.take().is_some() {
            self.notify();
        }
    }

    /// Drain driver events and fold them into the snapshot. Returns a
    /// reaction when the current track ran out and the next-track
    /// policy should run.
    pub fn pump(&mut self) -> Option<StoreReaction> {
        let events = self.driver.poll();
        if events.is_empty() {
            return None;
        }

        let before = self.snapshot.clone();
        let mut reaction = None;
        for event in events {
            if self.apply_event(event) == Some(StoreReaction::TrackEnded) {
                reaction = Some(StoreReaction::TrackEnded);
            }
        }
        if self.snapshot != before {
            self.notify();
        }
        reaction
    }

    fn apply_event(&mut self, event: DriverEvent) -> Option<StoreReaction> {
        if event.generation() != self.generation {
            debug!(
                stale = event.generation(),
                current = self.generation,
                "dropping event from superseded binding"
            );
            return None;
        }

        match event {
            DriverEvent::Ready { duration, .. } => {
                self.snapshot.duration = duration;
                None
            }
            DriverEvent::Position { position, .. } => {
                self.snapshot.position = match self.snapshot.duration {
                    Some(total) => position.min(total),
                    None => position,
                };
                None
            }
            DriverEvent::Ended { .. } => Some(StoreReaction::TrackEnded),
            DriverEvent::Failed { error, .. } => {
                // Recover at the store boundary: keep the selection and
                // position, stop claiming to play, surface the error.
                self.snapshot.transport = Transport::Paused;
                self.snapshot.error = Some(error);
                None
            }
        }
    }

    /// Release the driver binding and tear the output down. Called on
    /// application exit.
    pub fn shutdown(&mut self) {
        self.driver.release();
        self.driver.shutdown();
    }
}
