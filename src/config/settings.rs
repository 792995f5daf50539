//! Application settings loaded from `settings.toml`.
//!
//! The file is optional. Missing sections and keys fall back to defaults, so
//! an empty file and no file at all behave the same.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DEFAULT_SETTINGS_PATH: &str = "settings.toml";

/// Configuration structure representing the entire settings.toml file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Office identity shown in bot messages
    #[serde(default)]
    pub office: OfficeSettings,
    /// Where printable documents go besides the chat reply
    #[serde(default)]
    pub print: PrintSettings,
}

/// `[office]` section
#[derive(Debug, Clone, Deserialize)]
pub struct OfficeSettings {
    /// Display name of the office
    #[serde(default = "default_office_name")]
    pub name: String,
}

impl Default for OfficeSettings {
    fn default() -> Self {
        Self {
            name: default_office_name(),
        }
    }
}

fn default_office_name() -> String {
    "Secretaria".to_string()
}

/// `[print]` section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrintSettings {
    /// Directory that also receives a copy of every printable receipt
    pub export_dir: Option<PathBuf>,
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path_ref = path.as_ref();
    debug!("Loading settings from {}", path_ref.display());
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read settings file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads settings from `SETTINGS_PATH` (default `./settings.toml`).
///
/// A missing file yields the default settings.
pub fn load_default_settings() -> Result<Settings> {
    let path = std::env::var("SETTINGS_PATH").unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.into());
    if !Path::new(&path).exists() {
        info!("No settings file at {path}, using defaults.");
        return Ok(Settings::default());
    }
    load_settings(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_full_settings() {
        let toml_str = r#"
            [office]
            name = "Escola Aprender"

            [print]
            export_dir = "exports/recibos"
        "#;

        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.office.name, "Escola Aprender");
        assert_eq!(
            settings.print.export_dir,
            Some(PathBuf::from("exports/recibos"))
        );
    }

    #[test]
    fn test_empty_settings_use_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.office.name, "Secretaria");
        assert!(settings.print.export_dir.is_none());
    }

    #[test]
    fn test_load_settings_reports_missing_file() {
        let result = load_settings("definitely/not/here.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_load_settings_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[office\nname = 1").unwrap();

        let result = load_settings(&path);
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
