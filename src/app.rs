//! Application module: exposes the presentation model used by the TUI
//! and runtime.
//!
//! The `App` model holds derived view state only — active page,
//! per-page cursors, the music category filter. Authoritative playback
//! state lives in the player store; `App` never duplicates it.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
