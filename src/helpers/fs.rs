//! File System Utilities
//!
//! Configuration and data directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "cyenx", "inventory-dashboard").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/inventory-dashboard/` or `$XDG_CONFIG_HOME/inventory-dashboard/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.inventory-dashboard/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\inventory-dashboard\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get or create the directory holding rolling log files
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/inventory-dashboard/logs/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.inventory-dashboard/logs/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\inventory-dashboard\data\logs\`
pub fn get_or_create_log_dir() -> Result<PathBuf> {
    let log_dir = project_dirs()?.data_dir().join("logs");

    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)?;
    }

    Ok(log_dir)
}
