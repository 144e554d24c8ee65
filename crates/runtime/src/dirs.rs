//! Platform-specific directories.
//!
//! Follows platform conventions through `directories`, with a relative
//! fallback when no home directory can be determined.

use std::path::PathBuf;

const APPLICATION: &str = "forge";

/// Get the platform-specific data directory for saves.
///
/// - macOS: `~/Library/Application Support/forge`
/// - Linux: `~/.local/share/forge` (or `$XDG_DATA_HOME/forge`)
/// - Windows: `%APPDATA%\forge`
/// - Fallback: `./forge_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APPLICATION)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./forge_data"))
}

/// Get the platform-specific log directory.
///
/// - macOS: `~/Library/Caches/forge/logs`
/// - Linux: `~/.cache/forge/logs` (or `$XDG_CACHE_HOME/forge/logs`)
/// - Windows: `%LOCALAPPDATA%\forge\logs`
/// - Fallback: `/tmp/forge/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APPLICATION)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/forge"))
        .join("logs")
}
