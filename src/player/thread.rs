//! The audio thread: owns the only `rodio` output handle and
//! processes driver commands in arrival order.
//!
//! The `recv_timeout` loop doubles as the position tick — while a
//! sink is playing, the timeout branch republishes the position and
//! detects the natural end of the track.

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, warn};

use super::sink::{create_sink, probe_duration};
use super::types::{DriverCmd, DriverEvent, Generation, PlayerError};

/// Cadence of `Position` events while playing. Commands are still
/// processed as they arrive; this only bounds how often the position
/// is republished.
const POSITION_TICK: Duration = Duration::from_millis(250);

pub(super) fn spawn_output_thread(
    commands: Receiver<DriverCmd>,
    events: Sender<DriverEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut output = Output {
            commands,
            events,
            stream: None,
            sink: None,
            generation: 0,
            source: None,
            duration: None,
            volume: 1.0,
            muted: false,
            looping: false,
        };
        output.run();
    })
}

struct Output {
    commands: Receiver<DriverCmd>,
    events: Sender<DriverEvent>,

    /// Opened lazily on the first load; kept for the thread's lifetime.
    stream: Option<OutputStream>,
    /// The live binding: at most one sink at a time.
    sink: Option<Sink>,
    generation: Generation,
    /// Source of the live binding, retained for loop restarts.
    source: Option<PathBuf>,
    duration: Option<Duration>,

    // Cached across loads; applied to every new sink.
    volume: f32,
    muted: bool,
    looping: bool,
}

impl Output {
    fn run(&mut self) {
        loop {
            match self.commands.recv_timeout(POSITION_TICK) {
                Ok(DriverCmd::Load { generation, source }) => self.load(generation, source),
                Ok(DriverCmd::Play) => {
                    if let Some(sink) = &self.sink {
                        sink.play();
                    }
                }
                Ok(DriverCmd::Pause) => {
                    if let Some(sink) = &self.sink {
                        sink.pause();
                    }
                }
                Ok(DriverCmd::Seek(position)) => self.seek(position),
                Ok(DriverCmd::SetVolume(volume)) => {
                    self.volume = volume;
                    self.apply_volume();
                }
                Ok(DriverCmd::SetMuted(muted)) => {
                    self.muted = muted;
                    self.apply_volume();
                }
                Ok(DriverCmd::SetLoop(looping)) => self.looping = looping,
                Ok(DriverCmd::Release) => self.release(),
                Ok(DriverCmd::Shutdown) => {
                    self.release();
                    break;
                }
                Err(RecvTimeoutError::Timeout) => self.tick(),
                Err(RecvTimeoutError::Disconnected) => {
                    self.release();
                    break;
                }
            }
        }
    }

    /// Bind to a new source. The previous binding is released first,
    /// so a superseded load can never leave a dangling sink.
    fn load(&mut self, generation: Generation, source: PathBuf) {
        self.release();
        self.generation = generation;

        let result = match self.ensure_stream() {
            Ok(stream) => create_sink(stream, &source),
            Err(error) => Err(error),
        };

        match result {
            Ok((sink, decoded)) => {
                sink.set_volume(self.effective_volume());
                let duration = probe_duration(&source).or(decoded);
                debug!(generation, ?duration, source = %source.display(), "bound");
                self.sink = Some(sink);
                self.source = Some(source);
                self.duration = duration;
                self.emit(DriverEvent::Ready {
                    generation,
                    duration,
                });
            }
            Err(error) => {
                warn!(generation, %error, "load failed");
                self.emit(DriverEvent::Failed { generation, error });
            }
        }
    }

    fn ensure_stream(&mut self) -> Result<&OutputStream, PlayerError> {
        if self.stream.is_none() {
            let mut stream = OutputStreamBuilder::open_default_stream()
                .map_err(|e| PlayerError::Blocked(e.to_string()))?;
            // rodio logs to stderr when the stream drops; noisy under a TUI.
            stream.log_on_drop(false);
            self.stream = Some(stream);
        }
        self.stream
            .as_ref()
            .ok_or_else(|| PlayerError::Blocked("no output stream".to_string()))
    }

    fn seek(&mut self, position: Duration) {
        let Some(sink) = &self.sink else { return };
        let target = match self.duration {
            Some(total) => position.min(total),
            None => position,
        };
        if let Err(e) = sink.try_seek(target) {
            warn!(generation = self.generation, "seek to {target:?} failed: {e}");
            return;
        }
        self.emit(DriverEvent::Position {
            generation: self.generation,
            position: target,
        });
    }

    fn tick(&mut self) {
        let Some(sink) = &self.sink else { return };
        if sink.is_paused() {
            return;
        }

        if sink.empty() {
            if self.looping {
                self.restart();
            } else {
                let generation = self.generation;
                self.release();
                self.emit(DriverEvent::Ended { generation });
            }
            return;
        }

        self.emit(DriverEvent::Position {
            generation: self.generation,
            position: sink.get_pos(),
        });
    }

    /// Loop mode: rebuild the drained sink from the retained source
    /// and keep playing from zero. `Ended` is deliberately suppressed.
    fn restart(&mut self) {
        let Some(source) = self.source.clone() else {
            return;
        };
        let result = match self.ensure_stream() {
            Ok(stream) => create_sink(stream, &source),
            Err(error) => Err(error),
        };

        match result {
            Ok((sink, _)) => {
                sink.set_volume(self.effective_volume());
                sink.play();
                self.sink = Some(sink);
                self.emit(DriverEvent::Position {
                    generation: self.generation,
                    position: Duration::ZERO,
                });
            }
            Err(error) => {
                let generation = self.generation;
                warn!(generation, %error, "loop restart failed");
                self.release();
                self.emit(DriverEvent::Failed { generation, error });
            }
        }
    }

    fn release(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.source = None;
        self.duration = None;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    fn apply_volume(&self) {
        if let Some(sink) = &self.sink {
            sink.set_volume(self.effective_volume());
        }
    }

    fn emit(&self, event: DriverEvent) {
        // The receiver only disappears during teardown.
        let _ = self.events.send(event);
    }
}
