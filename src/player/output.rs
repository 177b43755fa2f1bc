use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use super::driver::Driver;
use super::thread::spawn_output_thread;
use super::types::{DriverCmd, DriverEvent, Generation};

/// Production `Driver` backed by the audio thread.
///
/// Commands cross an mpsc channel and are processed in order; events
/// come back the same way, so per-binding event ordering is
/// guaranteed.
pub struct RodioDriver {
    tx: Sender<DriverCmd>,
    events: Receiver<DriverEvent>,
    join: Option<JoinHandle<()>>,
}

impl RodioDriver {
    pub fn new() -> Self {
        let (tx, command_rx) = mpsc::channel();
        let (event_tx, events) = mpsc::channel();
        let join = spawn_output_thread(command_rx, event_tx);
        Self {
            tx,
            events,
            join: Some(join),
        }
    }

    fn send(&self, cmd: DriverCmd) {
        // The audio thread outlives every caller except during
        // shutdown; a failed send means teardown already started.
        let _ = self.tx.send(cmd);
    }
}

impl Default for RodioDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for RodioDriver {
    fn load(&mut self, generation: Generation, source: &Path) {
        self.send(DriverCmd::Load {
            generation,
            source: source.to_path_buf(),
        });
    }

    fn play(&mut self) {
        self.send(DriverCmd::Play);
    }

    fn pause(&mut self) {
        self.send(DriverCmd::Pause);
    }

    fn seek(&mut self, position: Duration) {
        self.send(DriverCmd::Seek(position));
    }

    fn set_volume(&mut self, volume: f32) {
        self.send(DriverCmd::SetVolume(volume));
    }

    fn set_muted(&mut self, muted: bool) {
        self.send(DriverCmd::SetMuted(muted));
    }

    fn set_loop(&mut self, looping: bool) {
        self.send(DriverCmd::SetLoop(looping));
    }

    fn release(&mut self) {
        self.send(DriverCmd::Release);
    }

    /// Stop playback and wait for the audio thread to exit so no audio
    /// outlives the UI.
    fn shutdown(&mut self) {
        self.send(DriverCmd::Shutdown);
        if let Some(handle) = self.join.take() {
            let _ = handle.join();
        }
    }

    fn poll(&mut self) -> Vec<DriverEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }
        events
    }
}
