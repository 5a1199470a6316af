use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/ambient/config.toml` or `~/.config/ambient/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `AMBIENT__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub visualizer: VisualizerSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Directory that relative track locators are resolved against.
    /// Defaults to the working directory when unset.
    pub media_dir: Option<PathBuf>,
    /// Volume applied when the player starts (0..=100).
    pub initial_volume: u8,
    /// Volume change per `+` / `-` key press.
    pub volume_step: u8,
    /// How often the audio thread reports elapsed time (milliseconds).
    pub tick_ms: u64,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            media_dir: None,
            initial_volume: 30,
            volume_step: 5,
            tick_ms: 250,
            quit_fade_out_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VisualizerSettings {
    /// Number of bars in each frame.
    pub bars: usize,
    /// Time between two frames while playing (milliseconds).
    pub interval_ms: u64,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            bars: 32,
            interval_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Title rendered in the panel header.
    pub header_text: String,
    /// Smaller line under the header.
    pub subtitle_text: String,
    /// Whether the player panel starts expanded.
    pub start_open: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: "Hindi Music Player".to_string(),
            subtitle_text: "Enjoy your favorites".to_string(),
            start_open: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` is not set.
    pub level: String,
    /// Log file override. Defaults to `$XDG_STATE_HOME/ambient/ambient.log`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
