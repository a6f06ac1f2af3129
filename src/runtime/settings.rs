use std::path::Path;

use crate::config;

/// Load settings, falling back to defaults when they are unreadable or invalid.
pub fn load_settings(explicit: Option<&Path>) -> config::Settings {
    match config::Settings::load(explicit) {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                log::warn!("[Config] Invalid settings, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            log::warn!("[Config] Failed to load settings, using defaults: {e}");
            config::Settings::default()
        }
    }
}
