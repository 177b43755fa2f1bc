use std::env;

use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::player::TransportController;

/// Route `tracing` output to a file when `ENCORE_LOG` names one.
/// Logging to stderr would corrupt the alternate screen, so the
/// subscriber stays off unless explicitly requested.
pub fn init_tracing() {
    let Some(path) = env::var_os("ENCORE_LOG") else {
        return;
    };
    let Ok(file) = std::fs::File::create(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// Seed the player with the configured defaults. These run as normal
/// store transitions so the driver's caches match the published
/// snapshot from the first frame on.
pub fn apply_playback_defaults(controller: &mut TransportController, settings: &Settings) {
    controller.set_volume(settings.playback.volume);
    controller.set_muted(settings.playback.muted);
    controller.set_loop(settings.playback.looping);
}
