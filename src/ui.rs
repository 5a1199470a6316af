//! UI rendering helpers for the terminal user interface.
//!
//! This module renders the player panel with `ratatui` and translates
//! clicks on the progress bar into a seek target.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Sparkline},
};

use crate::app::App;
use crate::audio::AudioResource;
use crate::config::UiSettings;
use crate::player::Transport;

const PANEL_WIDTH: u16 = 52;
const PANEL_HEIGHT: u16 = 17;

const CONTROLS: [(&str, &str); 6] = [
    ("space/p", "play/pause"),
    ("h/l", "prev/next"),
    ("+/-", "volume"),
    ("0-9", "seek"),
    ("m", "panel"),
    ("q", "quit"),
];

/// Render the key hints shown under the panel.
fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// A text volume meter such as `██████░░░░ 60%`.
pub(crate) fn volume_meter(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    format!(
        "{}{} {:>3}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        percent
    )
}

/// Map a click at `column`/`row` onto `bar` as a percentage of its width.
pub fn percent_at(bar: Rect, column: u16, row: u16) -> Option<f64> {
    if bar.width == 0 || row < bar.y || row >= bar.bottom() {
        return None;
    }
    if column < bar.x || column >= bar.right() {
        return None;
    }
    Some(f64::from(column - bar.x) / f64::from(bar.width) * 100.0)
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width);
    height = height.min(r.height);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render the player into `frame`. Returns the progress bar's area, if drawn,
/// so clicks can be mapped onto it.
pub fn draw<R: AudioResource>(frame: &mut Frame, app: &App<R>, ui: &UiSettings) -> Option<Rect> {
    let [main, footer] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    frame.render_widget(
        Paragraph::new(controls_text())
            .alignment(Alignment::Center)
            .dim(),
        footer,
    );

    if app.panel_open {
        Some(draw_panel(frame, app, ui, main))
    } else {
        draw_collapsed(frame, app, main);
        None
    }
}

fn draw_panel<R: AudioResource>(
    frame: &mut Frame,
    app: &App<R>,
    ui: &UiSettings,
    area: Rect,
) -> Rect {
    let state = app.playback();
    let track = app.current_track();

    let panel = centered_rect_sized(PANEL_WIDTH, PANEL_HEIGHT, area);
    let spinner = match state.transport() {
        Transport::Playing => "♫",
        Transport::Paused => "♪",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} {} ", spinner, ui.header_text))
        .title_alignment(Alignment::Center)
        .padding(Padding::horizontal(1));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let [subtitle, _, name, artist, _, bars, progress, times, _, transport, volume] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

    frame.render_widget(
        Paragraph::new(ui.subtitle_text.as_str())
            .alignment(Alignment::Center)
            .dim(),
        subtitle,
    );
    frame.render_widget(
        Paragraph::new(track.name.as_str())
            .alignment(Alignment::Center)
            .bold(),
        name,
    );
    frame.render_widget(
        Paragraph::new(track.artist.as_str())
            .alignment(Alignment::Center)
            .dim(),
        artist,
    );

    let heights: Vec<u64> = app.bars().iter().map(|b| b.round() as u64).collect();
    let mut sparkline = Sparkline::default().data(heights.iter().copied()).max(100);
    if !app.visualizer().is_running() {
        sparkline = sparkline.dim();
    }
    frame.render_widget(sparkline, bars);

    frame.render_widget(
        Gauge::default()
            .ratio((state.progress_percent / 100.0).clamp(0.0, 1.0))
            .label("")
            .gauge_style(Style::default().add_modifier(Modifier::BOLD)),
        progress,
    );

    let [elapsed, total] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(times);
    frame.render_widget(Paragraph::new(state.elapsed_label.as_str()), elapsed);
    frame.render_widget(
        Paragraph::new(track.duration_label.as_str()).alignment(Alignment::Right),
        total,
    );

    let play = match state.transport() {
        Transport::Playing => "⏸",
        Transport::Paused => "▶",
    };
    let [buttons, position] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(7)]).areas(transport);
    frame.render_widget(
        Paragraph::new(Line::from(format!("⏮    {}    ⏭", play))).alignment(Alignment::Center),
        buttons,
    );
    frame.render_widget(
        Paragraph::new(format!(
            "{}/{}",
            state.current_index + 1,
            app.track_count()
        ))
        .alignment(Alignment::Right)
        .dim(),
        position,
    );

    let meter_width = usize::from(volume.width.saturating_sub(10)).min(30);
    frame.render_widget(
        Paragraph::new(format!("vol {}", volume_meter(state.volume_percent, meter_width))),
        volume,
    );

    progress
}

fn draw_collapsed<R: AudioResource>(frame: &mut Frame, app: &App<R>, area: Rect) {
    let state = app.playback();
    let track = app.current_track();

    let mut text = format!(" ♪ {} - {} ", track.name, track.artist);
    if state.is_playing {
        text.push_str("● ");
    }
    let width = (text.chars().count() as u16 + 2).min(area.width);
    let rect = Rect {
        x: area.right().saturating_sub(width),
        y: area.bottom().saturating_sub(3),
        width,
        height: 3.min(area.height),
    };
    frame.render_widget(
        Paragraph::new(text).block(Block::bordered().title(" m opens ")),
        rect,
    );
}
