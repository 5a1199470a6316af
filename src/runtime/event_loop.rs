use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};

use crate::app::{App, Intent, intent_for_key};
use crate::audio::AudioResource;
use crate::config;
use crate::ui;

/// Upper bound on how long we block waiting for input.
const MAX_POLL: Duration = Duration::from_millis(50);

/// Main terminal event loop: drains audio notifications, redraws when
/// something changed and forwards input as intents. Returns `Ok(())` when
/// the user quits.
pub fn run<R: AudioResource>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<R>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut progress_area: Option<Rect> = None;
    let mut dirty = true;

    loop {
        let now = Instant::now();
        if app.sync(now) {
            dirty = true;
        }

        if dirty {
            terminal.draw(|f| progress_area = ui::draw(f, app, &settings.ui))?;
            dirty = false;
        }

        if app.should_quit {
            return Ok(());
        }

        let timeout = app
            .visualizer()
            .until_due(now)
            .map_or(MAX_POLL, |d| d.min(MAX_POLL));
        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(intent) = intent_for_key(key) {
                    app.apply(intent);
                    dirty = true;
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                // Clicking the progress bar seeks to that point.
                if let Some(percent) =
                    progress_area.and_then(|bar| ui::percent_at(bar, mouse.column, mouse.row))
                {
                    app.apply(Intent::Seek(percent));
                    dirty = true;
                }
            }
            Event::Resize(..) => dirty = true,
            _ => {}
        }
    }
}
