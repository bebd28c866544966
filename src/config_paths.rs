//! Centralized configuration paths for panel-dock
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/panel-dock/`
//! - Windows: `%APPDATA%\panel-dock\`
//!
//! The catalogue override, stored layouts and log files all resolve here.

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "panel-dock";

/// Base config directory for panel-dock
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/panel-dock`
///   - Else: `~/.config/panel-dock`
///
/// Windows:
///   - `%APPDATA%\panel-dock`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/panel-dock/panels.yaml`
pub fn catalogue_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("panels.yaml"))
}

/// `~/.config/panel-dock/layout/`
pub fn layout_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("layout"))
}

/// `~/.config/panel-dock/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory (and the config dir above it), returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
