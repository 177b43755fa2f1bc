use std::env;
use std::path::PathBuf;
use std::sync::{Arc, mpsc};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::content;
use crate::mpris::ControlCmd;
use crate::player::{PlayerStore, RodioDriver, TransportController};

mod event_loop;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    startup::init_tracing();
    let settings = settings::load_settings();

    let bundle_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.content.path.clone());
    let (catalog, site_content) = content::load(&bundle_path)?;
    let catalog = Arc::new(catalog);

    let mut store = PlayerStore::new(catalog.clone(), Box::new(RodioDriver::new()));

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx);

    // Mirror every published snapshot into the MPRIS shared state so
    // `playerctl` and media keys always see the current truth.
    {
        let catalog = catalog.clone();
        let mpris = mpris.clone();
        store.subscribe(move |snapshot| {
            let track = snapshot.selected.and_then(|id| catalog.by_id(id));
            mpris.set_track_metadata(snapshot.selected, track, snapshot.duration);
            mpris.set_playback(snapshot.transport);
        });
    }

    let mut controller = TransportController::new(catalog.clone(), store);
    startup::apply_playback_defaults(&mut controller, &settings);

    let mut app = App::new(catalog, site_content);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        &mut controller,
        &control_rx,
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Free the audio output last so no audio outlives the UI.
    controller.shutdown();

    run_result
}
