//! UI rendering helpers for the terminal user interface.
//!
//! Everything here is a pure function of the presentation model and
//! the latest player snapshot; rendering the same snapshot twice is
//! harmless by design.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Tabs, Wrap},
};
use std::time::Duration;

use crate::app::{App, Page};
use crate::config::Settings;
use crate::player::{PlayerSnapshot, Transport};

/// Format a `Duration` as `MM:SS`.
fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn controls_text(page: Page, seek_seconds: u64) -> String {
    let common = "[tab] page | [space] play/pause | [h/l] prev/next | [m] mute | [r] loop | [q] quit";
    match page {
        Page::Music => format!(
            "[j/k] move | [enter] play | [f] filter | [H/L] scrub -/+{seek_seconds}s | [+/-] volume | [x] dismiss error | {common}"
        ),
        _ => format!("[j/k] move | {common}"),
    }
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, snapshot: &PlayerSnapshot, settings: &Settings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);

    match app.page {
        Page::Home => draw_home(frame, app, chunks[1]),
        Page::Music => draw_music(frame, app, snapshot, settings, chunks[1]),
        Page::Characters => draw_characters(frame, app, chunks[1]),
        Page::Moments => draw_moments(frame, app, chunks[1]),
        Page::Gallery => draw_gallery(frame, app, chunks[1]),
    }

    draw_player_bar(frame, app, snapshot, chunks[2]);

    let footer = Paragraph::new(controls_text(app.page, settings.playback.seek_seconds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

fn draw_header(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let titles: Vec<Line> = Page::ALL.iter().map(|p| Line::from(p.title())).collect();
    let selected = Page::ALL.iter().position(|&p| p == app.page).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.content.site.title))
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(tabs, area);
}

fn draw_home(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let site = &app.content.site;
    let text = format!(
        "{}\n\n{} tracks in the soundtrack catalog\n{} characters · {} moments · {} gallery entries",
        site.tagline,
        app.catalog.len(),
        app.content.characters.len(),
        app.content.moments.len(),
        app.content.gallery.len(),
    );
    let home = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" home ")
                .padding(Padding::uniform(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(home, area);
}

fn draw_music(
    frame: &mut Frame,
    app: &App,
    snapshot: &PlayerSnapshot,
    settings: &Settings,
    area: ratatui::layout::Rect,
) {
    let visible = app.visible_tracks();
    let filter_label = match app.filter {
        None => "All tracks".to_string(),
        Some(c) => format!("{}s", c.label()),
    };

    // Only build rows for the visible window, keeping the cursor
    // centered when the list overflows.
    let total = visible.len();
    let list_height = area.height.saturating_sub(2) as usize;
    let cursor = app.music_cursor.min(total.saturating_sub(1));
    let (start, end) = if total <= list_height || list_height == 0 {
        (0, total)
    } else {
        let half = list_height / 2;
        let mut start = cursor.saturating_sub(half);
        if start + list_height > total {
            start = total - list_height;
        }
        (start, start + list_height)
    };

    let items: Vec<ListItem> = visible[start..end]
        .iter()
        .map(|&i| {
            let track = &app.catalog.tracks()[i];
            let marker = if snapshot.selected == Some(track.id) {
                match snapshot.transport {
                    Transport::Playing => "▶ ",
                    _ => "⏸ ",
                }
            } else {
                "  "
            };
            let mut line = format!(
                "{marker}{} — {}  [{}]",
                track.title,
                track.artist,
                track.category.label()
            );
            if settings.ui.show_descriptions {
                if let Some(description) = &track.description {
                    line.push_str(&format!("  · {description}"));
                }
            }
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" music — {filter_label} ({total}) ")),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ratatui::widgets::ListState::default();
    if total > 0 {
        state.select(Some(cursor - start));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_characters(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let items: Vec<ListItem> = app
        .content
        .characters
        .iter()
        .map(|c| {
            let line = if c.role.is_empty() {
                c.name.clone()
            } else {
                format!("{} — {}", c.name, c.role)
            };
            ListItem::new(if c.description.is_empty() {
                line
            } else {
                format!("{line}\n    {}", c.description)
            })
        })
        .collect();
    draw_content_list(frame, area, " characters ", items, app.list_cursor);
}

fn draw_moments(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let items: Vec<ListItem> = app
        .content
        .moments
        .iter()
        .map(|m| {
            let line = match m.episode {
                Some(ep) => format!("{} (episode {ep})", m.title),
                None => m.title.clone(),
            };
            ListItem::new(if m.description.is_empty() {
                line
            } else {
                format!("{line}\n    {}", m.description)
            })
        })
        .collect();
    draw_content_list(frame, area, " moments ", items, app.list_cursor);
}

fn draw_gallery(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let items: Vec<ListItem> = app
        .content
        .gallery
        .iter()
        .map(|g| {
            ListItem::new(if g.caption.is_empty() {
                g.title.clone()
            } else {
                format!("{} — {}", g.title, g.caption)
            })
        })
        .collect();
    draw_content_list(frame, area, " gallery ", items, app.list_cursor);
}

fn draw_content_list(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    title: &str,
    items: Vec<ListItem>,
    cursor: usize,
) {
    let empty = items.is_empty();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ratatui::widgets::ListState::default();
    if !empty {
        state.select(Some(cursor));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_player_bar(
    frame: &mut Frame,
    app: &App,
    snapshot: &PlayerSnapshot,
    area: ratatui::layout::Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" player ")
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    // Status line: error first, otherwise the now-playing summary.
    let status = if let Some(error) = &snapshot.error {
        Paragraph::new(format!("{error}  ([x] to dismiss)"))
            .style(Style::default().fg(Color::Red))
    } else {
        let track = snapshot.selected.and_then(|id| app.catalog.by_id(id));
        let mut parts: Vec<String> = Vec::new();
        match track {
            Some(track) => {
                let state = match snapshot.transport {
                    Transport::Playing => "Playing",
                    Transport::Paused => "Paused",
                    Transport::Stopped => "Stopped",
                };
                parts.push(format!("{state}: {} — {}", track.title, track.artist));
            }
            None => parts.push("No track selected".to_string()),
        }
        parts.push(format!("vol {:.0}%", snapshot.volume * 100.0));
        if snapshot.muted {
            parts.push("muted".to_string());
        }
        if snapshot.looping {
            parts.push("loop".to_string());
        }
        Paragraph::new(parts.join(" • "))
    };
    frame.render_widget(status, rows[0]);

    let (ratio, label) = match snapshot.duration {
        Some(total) if !total.is_zero() => (
            (snapshot.position.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0),
            format!("{} / {}", format_mmss(snapshot.position), format_mmss(total)),
        ),
        _ => (0.0, format!("{} / --:--", format_mmss(snapshot.position))),
    };
    let gauge = Gauge::default()
        .ratio(ratio)
        .label(label)
        .gauge_style(Style::default().fg(Color::Blue));
    frame.render_widget(gauge, rows[1]);
}
