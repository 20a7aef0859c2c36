use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use invite_core::export::DEFAULT_FILE_NAME;

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_FILE_NAME)
}

/// Global configuration at ~/.config/invite/config.toml
///
/// Every key is optional; a missing file means all defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalConfig {
    /// Overrides the PRODID written into every document
    pub product_id: Option<String>,

    /// Where `invite render` writes when no --output is given
    #[serde(default = "default_output")]
    pub default_output: PathBuf,

    /// Alarm lead (e.g. "15m") for events that list no alarms
    pub default_alarm: Option<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            product_id: None,
            default_output: default_output(),
            default_alarm: None,
        }
    }
}

impl GlobalConfig {
    /// Get the config file path (~/.config/invite/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("invite");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::debug!(error = %e, "No config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;

        let config: GlobalConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GlobalConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.default_output, PathBuf::from("invite.ics"));
        assert!(config.product_id.is_none());
        assert!(config.default_alarm.is_none());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "product_id = \"-//Acme//Invites//EN\"\n").unwrap();

        let config = GlobalConfig::load_from(&path).unwrap();

        assert_eq!(config.product_id.as_deref(), Some("-//Acme//Invites//EN"));
        assert_eq!(config.default_output, PathBuf::from("invite.ics"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "product_id = [").unwrap();

        let err = GlobalConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
