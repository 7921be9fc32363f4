//! Persisted user settings.
//!
//! Loads and saves `settings.toml` from the platform config directory.
//! The only setting today is the preferred protocol; loading always
//! funnels it through the normalizing [`ProtocolSelection`] constructor,
//! so a stale or hand-edited file can never yield an invalid selection.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::vpn::ProtocolSelection;

/// User-configurable settings.
///
/// Missing fields fall back to defaults, so an older file keeps working
/// after new settings are added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Preferred protocol for the next connection.
    pub protocol: ProtocolSelection,
}

/// Path of the settings file inside the platform config directory.
///
/// # Errors
///
/// Returns an error if the platform has no config directory.
pub fn settings_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| eyre!("no config directory available"))?;
    Ok(config_dir
        .join(constants::APP_NAME)
        .join(constants::SETTINGS_FILE_NAME))
}

/// Loads settings from the default location.
///
/// A missing file yields [`Settings::default`].
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load() -> Result<Settings> {
    load_from(&settings_path()?)
}

/// Loads settings from an explicit path.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read settings: {}", path.display()))?;
    toml::from_str(&content)
        .wrap_err_with(|| format!("failed to parse settings: {}", path.display()))
}

/// Saves settings to the default location, creating the directory if needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file
/// cannot be written.
pub fn save(settings: &Settings) -> Result<()> {
    save_to(settings, &settings_path()?)
}

/// Saves settings to an explicit path, creating parent directories if needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file
/// cannot be written.
pub fn save_to(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create settings dir: {}", parent.display()))?;
    }
    let content = toml::to_string_pretty(settings).wrap_err("failed to serialize settings")?;
    fs::write(path, content)
        .wrap_err_with(|| format!("failed to write settings: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vpn::{TransmissionKind, VpnProtocolKind};

    #[test]
    fn test_default_prefers_smart() {
        let settings = Settings::default();
        assert_eq!(settings.protocol.protocol(), VpnProtocolKind::Smart);
        assert_eq!(settings.protocol.transmission(), None);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = Path::new("/nonexistent/path/settings.toml");
        let settings = load_from(path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_persisted_combination_is_repaired() {
        // Smart must never carry a transmission after load.
        let content = "[protocol]\nprotocol = \"Smart\"\ntransmission = \"Tcp\"\n";
        let settings: Settings = toml::from_str(content).unwrap();
        assert_eq!(settings.protocol.transmission(), None);

        // A concrete protocol without a transmission gets UDP.
        let content = "[protocol]\nprotocol = \"OpenVPN\"\n";
        let settings: Settings = toml::from_str(content).unwrap();
        assert_eq!(
            settings.protocol.transmission(),
            Some(TransmissionKind::Udp)
        );
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir().join("tunnelstate-settings-test");
        let path = dir.join(constants::SETTINGS_FILE_NAME);

        let settings = Settings {
            protocol: ProtocolSelection::new(
                VpnProtocolKind::WireGuard,
                Some(TransmissionKind::Tls),
            ),
        };
        save_to(&settings, &path).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded, settings);

        // Cleanup
        let _ = fs::remove_dir_all(&dir);
    }
}
