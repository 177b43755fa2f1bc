use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Page};
use crate::config::Settings;
use crate::mpris::ControlCmd;
use crate::player::{Transport, TransportController};
use crate::ui;

/// Main terminal event loop: pumps driver events, renders, and
/// dispatches keyboard and MPRIS intents. Returns `Ok(())` when
/// shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &Settings,
    app: &mut App,
    controller: &mut TransportController,
    control_rx: &mpsc::Receiver<ControlCmd>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut last_selected = controller.snapshot().selected;

    loop {
        // Fold pending driver events into the snapshot first so this
        // frame renders the current truth.
        controller.pump();

        // Keep the music cursor on the playing row when the selection
        // changes underneath us (auto-advance, MPRIS).
        let selected = controller.snapshot().selected;
        if selected != last_selected {
            if let Some(id) = selected {
                app.focus_track(id);
            }
            last_selected = selected;
        }

        terminal.draw(|f| ui::draw(f, app, controller.snapshot(), settings))?;

        while let Ok(cmd) = control_rx.try_recv() {
            match cmd {
                ControlCmd::Quit => return Ok(()),
                ControlCmd::Play => match controller.snapshot().transport {
                    Transport::Paused => controller.toggle_play_pause(),
                    Transport::Stopped => controller.next(),
                    Transport::Playing => {}
                },
                ControlCmd::Pause => {
                    if controller.snapshot().transport == Transport::Playing {
                        controller.toggle_play_pause();
                    }
                }
                ControlCmd::PlayPause => toggle_or_start(controller),
                ControlCmd::Stop => {
                    // Park at zero; the store has no stopped-with-selection
                    // state, so Stop keeps the selection.
                    controller.seek(Duration::ZERO);
                    controller.pause();
                }
                ControlCmd::Next => controller.next(),
                ControlCmd::Prev => controller.prev(),
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Tab => app.next_page(),
                    KeyCode::BackTab => app.prev_page(),
                    KeyCode::Char(c @ '1'..='5') => {
                        app.set_page(Page::ALL[(c as usize) - ('1' as usize)]);
                    }
                    KeyCode::Char('j') | KeyCode::Down => match app.page {
                        Page::Music => app.music_down(),
                        _ => app.list_down(),
                    },
                    KeyCode::Char('k') | KeyCode::Up => match app.page {
                        Page::Music => app.music_up(),
                        _ => app.list_up(),
                    },
                    KeyCode::Enter => {
                        if app.page == Page::Music {
                            if let Some(id) = app.cursor_track_id() {
                                // Picking the current row toggles playback;
                                // any other row starts playing it.
                                if controller.snapshot().selected == Some(id) {
                                    controller.toggle_play_pause();
                                } else {
                                    controller.select_and_play(id);
                                }
                            }
                        }
                    }
                    KeyCode::Char('f') => {
                        if app.page == Page::Music {
                            app.cycle_filter();
                        }
                    }
                    KeyCode::Char(' ') | KeyCode::Char('p') => toggle_or_start(controller),
                    KeyCode::Char('l') => controller.next(),
                    KeyCode::Char('h') => controller.prev(),
                    KeyCode::Char('L') | KeyCode::Right => {
                        controller.seek_by(settings.playback.seek_seconds as i64);
                    }
                    KeyCode::Char('H') | KeyCode::Left => {
                        controller.seek_by(-(settings.playback.seek_seconds as i64));
                    }
                    KeyCode::Char('+') | KeyCode::Char('=') => controller.adjust_volume(0.05),
                    KeyCode::Char('-') => controller.adjust_volume(-0.05),
                    KeyCode::Char('m') => controller.toggle_muted(),
                    KeyCode::Char('r') => controller.toggle_loop(),
                    KeyCode::Char('x') => controller.dismiss_error(),
                    _ => {}
                }
            }
        }
    }
}

/// Space / MPRIS PlayPause: toggle when something is selected,
/// otherwise start the catalog from the top.
fn toggle_or_start(controller: &mut TransportController) {
    match controller.snapshot().transport {
        Transport::Stopped => controller.next(),
        _ => controller.toggle_play_pause(),
    }
}
