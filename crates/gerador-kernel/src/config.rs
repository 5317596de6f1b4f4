//! User configuration (`config.toml`).
//!
//! Every key is optional:
//!
//! ```toml
//! [terminal]
//! suggest_debounce_ms = 300
//! collaborator_timeout_ms = 30000
//!
//! [ai]
//! endpoint = "https://api.openai.com/v1/chat/completions"
//! model = "gpt-4o-mini"
//! api_key_env = "OPENAI_API_KEY"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::paths;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub terminal: TerminalConfig,
    pub ai: AiConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Quiet period before a suggestion lookup fires.
    pub suggest_debounce_ms: u64,
    /// Upper bound on a translate + execute round-trip.
    pub collaborator_timeout_ms: u64,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            suggest_debounce_ms: 300,
            collaborator_timeout_ms: 30_000,
        }
    }
}

impl TerminalConfig {
    pub fn suggest_debounce(&self) -> Duration {
        Duration::from_millis(self.suggest_debounce_ms)
    }

    pub fn collaborator_timeout(&self) -> Duration {
        Duration::from_millis(self.collaborator_timeout_ms)
    }
}

/// Chat-completions endpoint. The key itself never lives in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub endpoint: String,
    pub model: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

impl Config {
    /// Load from the XDG config file. A missing file is the default config.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&paths::config_file())
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_tables() {
        let config = Config::from_toml_str(
            r#"
            [terminal]
            suggest_debounce_ms = 50

            [ai]
            model = "local-model"
            "#,
        )
        .unwrap();
        assert_eq!(config.terminal.suggest_debounce(), Duration::from_millis(50));
        assert_eq!(config.terminal.collaborator_timeout(), Duration::from_secs(30));
        assert_eq!(config.ai.model, "local-model");
        assert_eq!(config.ai.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn test_bad_toml() {
        let err = Config::from_toml_str("[terminal]\nsuggest_debounce_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[terminal]\ncollaborator_timeout_ms = 1000\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.terminal.collaborator_timeout_ms, 1000);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
