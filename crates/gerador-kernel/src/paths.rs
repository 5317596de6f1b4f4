//! XDG Base Directory paths for gerador.
//!
//! | Purpose | XDG Variable | Default | gerador Path |
//! |---------|--------------|---------|--------------|
//! | Config | `$XDG_CONFIG_HOME` | `~/.config` | `$XDG_CONFIG_HOME/gerador/config.toml` |
//! | Line history | `$XDG_DATA_HOME` | `~/.local/share` | `$XDG_DATA_HOME/gerador/history.txt` |
//!
//! The drive itself is never persisted.

use std::path::PathBuf;

use directories::BaseDirs;

const APP_DIR: &str = "gerador";

/// Uses `$XDG_DATA_HOME/gerador` or falls back to `~/.local/share/gerador`.
pub fn data_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.data_dir().to_path_buf())
        .unwrap_or_else(|| home_fallback().join(".local").join("share"))
        .join(APP_DIR)
}

/// Uses `$XDG_CONFIG_HOME/gerador` or falls back to `~/.config/gerador`.
pub fn config_dir() -> PathBuf {
    BaseDirs::new()
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| home_fallback().join(".config"))
        .join(APP_DIR)
}

pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

/// REPL line history.
pub fn history_file() -> PathBuf {
    data_dir().join("history.txt")
}

fn home_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_gerador() {
        assert!(data_dir().ends_with("gerador"));
        assert!(config_dir().ends_with("gerador"));
    }

    #[test]
    fn files_live_in_their_dirs() {
        assert!(config_file().starts_with(config_dir()));
        assert!(config_file().ends_with("config.toml"));
        assert!(history_file().starts_with(data_dir()));
    }
}
