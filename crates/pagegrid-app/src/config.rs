//! Application settings (`~/.config/pagegrid/config.toml`)
//!
//! Every field is defaulted so a missing or partial file never blocks
//! startup; a file that fails to parse is reported and replaced by
//! defaults at the call site.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use pagegrid_core::prelude::*;

/// Global application settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Quiet period before a username availability check fires, in ms
    pub debounce_ms: u64,

    /// Re-export the document after every mutating operation
    pub autosave: bool,

    /// Document opened when no path is given on the command line
    pub default_document: Option<PathBuf>,

    /// Horizontal margin kept sticker-free around the grid, in pixels
    pub sticker_margin: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debounce_ms: 400,
            autosave: false,
            default_document: None,
            sticker_margin: 40.0,
        }
    }
}

/// Path of the settings file.
pub fn settings_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("pagegrid").join("config.toml")
}

/// Load settings, falling back to defaults when the file is absent.
///
/// A file that exists but does not parse is an error the caller surfaces;
/// partial files deserialize with defaults for missing fields.
pub fn load_settings() -> Result<Settings> {
    let path = settings_path();
    if !path.exists() {
        debug!("no settings file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }
    let text = std::fs::read_to_string(&path)?;
    toml::from_str(&text).map_err(|e| Error::ConfigInvalid {
        message: format!("{}: {e}", path.display()),
    })
}

/// Load settings, logging and swallowing any failure.
pub fn load_settings_or_default() -> Settings {
    match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            warn!("failed to load settings, using defaults: {e}");
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.debounce_ms, 400);
        assert!(!settings.autosave);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = toml::from_str("debounce_ms = 250").unwrap();
        assert_eq!(settings.debounce_ms, 250);
        assert_eq!(settings.sticker_margin, 40.0);
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            debounce_ms: 100,
            autosave: true,
            default_document: Some(PathBuf::from("page.json")),
            sticker_margin: 12.0,
        };
        let text = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
