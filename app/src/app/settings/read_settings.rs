use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::config::Settings;
use super::config_dirs::default_settings_path;
use crate::errors::SettingsError;

/// Read and validate a settings file.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = Settings::from_toml_str(&text)?;
    info!("loaded settings from {}", path.display());
    Ok(settings)
}

/// Resolve settings: an explicit path must exist; otherwise the platform
/// config file is used when present, falling back to built-in defaults.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, SettingsError> {
    if let Some(path) = explicit {
        return load_settings_from(path);
    }
    match default_settings_path() {
        Some(path) if path.is_file() => load_settings_from(&path),
        other => {
            debug!(?other, "no settings file found, using defaults");
            Ok(Settings::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn explicit_file_is_loaded() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("config.toml");
        file.write_str("currency = \"$\"\n[booking]\nprice_per_seat = 12\n")
            .unwrap();
        let s = load_settings(Some(file.path())).unwrap();
        assert_eq!(s.currency, "$");
        assert_eq!(s.booking.price_per_seat, 12);
        temp.close().unwrap();
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let missing = temp.child("nope.toml");
        let err = load_settings(Some(missing.path())).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn invalid_file_reports_parse_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("config.toml");
        file.write_str("[booking\n").unwrap();
        let err = load_settings_from(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
