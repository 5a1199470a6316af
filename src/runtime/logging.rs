use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LoggingSettings, default_log_path};

/// Install the global subscriber writing to the log file. `RUST_LOG` wins
/// over `logging.level`. Returns the file in use.
pub fn init(settings: &LoggingSettings) -> io::Result<PathBuf> {
    let path = settings
        .file
        .clone()
        .or_else(default_log_path)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no HOME or XDG_STATE_HOME"))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer().with_writer(Arc::new(file)).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))?;

    Ok(path)
}
