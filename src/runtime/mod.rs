use std::env;
use std::path::PathBuf;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (mut settings, settings_problem) = settings::load_settings();

    // Optional positional argument: where the playlist's files live.
    if let Some(dir) = env::args_os().nth(1) {
        settings.audio.media_dir = Some(PathBuf::from(dir));
    }

    // The TUI owns the terminal, so logs go to a file.
    match logging::init(&settings.logging) {
        Ok(path) => info!(log = %path.display(), "ambient starting"),
        Err(e) => eprintln!("ambient: logging disabled: {e}"),
    }
    if let Some(problem) = settings_problem {
        warn!(error = %problem, "using default settings");
    }

    let mut app = startup::build_app(&settings);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    app.shutdown();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    // Dropping the app unsubscribes the controller and fades out the audio thread.
    drop(app);
    info!("ambient stopped");

    run_result
}
