use std::{env, path::PathBuf};

use thiserror::Error;

use super::schema::Settings;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load config: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("{field} must be {rule}")]
    Invalid {
        field: &'static str,
        rule: &'static str,
    },
}

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `AMBIENT__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, SettingsError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("AMBIENT")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Reject values the player cannot run with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |field, rule| Err(SettingsError::Invalid { field, rule });

        if self.audio.initial_volume > 100 {
            return invalid("audio.initial_volume", "<= 100");
        }
        if self.audio.volume_step == 0 {
            return invalid("audio.volume_step", ">= 1");
        }
        if self.audio.tick_ms == 0 {
            return invalid("audio.tick_ms", ">= 1");
        }
        if self.visualizer.bars == 0 {
            return invalid("visualizer.bars", ">= 1");
        }
        if self.visualizer.interval_ms == 0 {
            return invalid("visualizer.interval_ms", ">= 1");
        }
        Ok(())
    }
}

/// Resolve the config path from `AMBIENT_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("AMBIENT_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/ambient/config.toml`
/// or `~/.config/ambient/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|d| d.join("ambient").join("config.toml"))
}

/// Compute the default log file under `$XDG_STATE_HOME/ambient/ambient.log`
/// or `~/.local/state/ambient/ambient.log`.
pub fn default_log_path() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", ".local/state").map(|d| d.join("ambient").join("ambient.log"))
}

fn xdg_dir(var: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Some(xdg) = env::var_os(var) {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(home_fallback))
    }
}
