//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Heading shown above the email rows
    pub title: Option<String>,
    /// Number of blank rows present at startup
    pub initial_rows: Option<usize>,
    /// Show the "Entered Emails" panel
    pub show_entered_emails: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "email-list", "email-list-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, logging and falling back to defaults on failure
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!("Failed to load config, using defaults: {err:#}");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.title.is_none());
        assert!(config.initial_rows.is_none());
        assert!(config.show_entered_emails.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            title: Some("Invite".to_string()),
            initial_rows: Some(2),
            show_entered_emails: Some(false),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.title, Some("Invite".to_string()));
        assert_eq!(parsed.initial_rows, Some(2));
        assert_eq!(parsed.show_entered_emails, Some(false));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.title.is_none());
        assert!(parsed.initial_rows.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"initial_rows": 3, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.initial_rows, Some(3));
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let path = std::env::temp_dir().join("email-list-tui-missing/config.json");
        let config = TuiConfig::load_from(&path).unwrap();
        assert!(config.title.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("email-list-tui-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, r#"{"title": "Guests", "show_entered_emails": true}"#).unwrap();

        let config = TuiConfig::load_from(&path).unwrap();
        assert_eq!(config.title.as_deref(), Some("Guests"));
        assert_eq!(config.show_entered_emails, Some(true));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_from_invalid_json_errors() {
        let dir = std::env::temp_dir().join(format!("email-list-tui-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, "not json").unwrap();

        assert!(TuiConfig::load_from(&path).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = TuiConfig::config_path();
    }
}
