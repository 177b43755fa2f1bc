//! The playback engine.
//!
//! Three pieces, wired bottom-up: the audio thread owns the only
//! `rodio` output handle and speaks a command/event protocol
//! (`thread`, `sink`, `output`); the store folds driver events into a
//! single published snapshot (`store`); the transport controller turns
//! user intents into store transitions (`controller`). The `Driver`
//! trait between store and output keeps the state machine testable
//! without an audio device.

mod controller;
mod driver;
mod output;
mod sink;
mod store;
mod thread;
mod types;

pub use controller::TransportController;
pub use driver::Driver;
pub use output::RodioDriver;
pub use store::{PlayerStore, StoreReaction};
pub use types::{
    DriverCmd, DriverEvent, Generation, PlayerError, PlayerSnapshot, Transport,
};
