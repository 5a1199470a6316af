use crate::config;

/// Load and validate settings. Problems are returned alongside the defaults
/// so they can be logged once logging is up.
pub fn load_settings() -> (config::Settings, Option<config::SettingsError>) {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(e) => {
                eprintln!("ambient: invalid config, using defaults: {e}");
                (config::Settings::default(), Some(e))
            }
        },
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("ambient: failed to load config, using defaults: {e}");
            (config::Settings::default(), Some(e))
        }
    }
}
