//! Configuration handling for the uploader

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub const ENV_API_URL: &str = "CREATOR_API_URL";
pub const ENV_API_TOKEN: &str = "CREATOR_API_TOKEN";

/// User configuration, stored as JSON in the platform config directory
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UploaderConfig {
    /// Base URL of the creator API
    pub api_base_url: Option<String>,
    /// Bearer token sent with every request
    pub auth_token: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

/// Settings after file, environment and command line have been merged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub auth_token: Option<String>,
    pub request_timeout: Duration,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "creator", "creator-upload")
}

impl UploaderConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Where the log file goes, if the platform has a data directory
    pub fn log_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().join("creator-upload.log"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, or defaults when the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Save configuration to `path`
    #[cfg(test)]
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Merge with the process environment and the `--api-url` flag
    pub fn resolve(&self, cli_api_url: Option<&str>) -> ResolvedConfig {
        self.resolve_with(|key| std::env::var(key).ok(), cli_api_url)
    }

    /// Precedence: command line, then environment, then file, then defaults.
    /// Blank values count as unset.
    pub fn resolve_with<F>(&self, env: F, cli_api_url: Option<&str>) -> ResolvedConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let api_base_url = non_blank(cli_api_url.map(str::to_string))
            .or_else(|| non_blank(env(ENV_API_URL)))
            .or_else(|| non_blank(self.api_base_url.clone()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let auth_token = non_blank(env(ENV_API_TOKEN)).or_else(|| non_blank(self.auth_token.clone()));

        let secs = self
            .request_timeout_secs
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        ResolvedConfig {
            api_base_url,
            auth_token,
            request_timeout: Duration::from_secs(secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config() {
        let config = UploaderConfig::default();
        assert!(config.api_base_url.is_none());
        assert!(config.auth_token.is_none());
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let resolved = UploaderConfig::default().resolve_with(no_env, None);
        assert_eq!(
            resolved,
            ResolvedConfig {
                api_base_url: DEFAULT_API_URL.to_string(),
                auth_token: None,
                request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            }
        );
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: UploaderConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.api_base_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        let json = r#"{"api_base_url": "https://api.example.com", "theme": "dark"}"#;
        let parsed: UploaderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.api_base_url.as_deref(),
            Some("https://api.example.com")
        );
    }

    #[test]
    fn test_file_values_used_without_overrides() {
        let config = UploaderConfig {
            api_base_url: Some("https://file.example.com".to_string()),
            auth_token: Some("file-token".to_string()),
            request_timeout_secs: Some(5),
        };
        let resolved = config.resolve_with(no_env, None);
        assert_eq!(resolved.api_base_url, "https://file.example.com");
        assert_eq!(resolved.auth_token.as_deref(), Some("file-token"));
        assert_eq!(resolved.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_env_overrides_file() {
        let config = UploaderConfig {
            api_base_url: Some("https://file.example.com".to_string()),
            auth_token: Some("file-token".to_string()),
            ..Default::default()
        };
        let env = |key: &str| match key {
            ENV_API_URL => Some("https://env.example.com".to_string()),
            ENV_API_TOKEN => Some("env-token".to_string()),
            _ => None,
        };
        let resolved = config.resolve_with(env, None);
        assert_eq!(resolved.api_base_url, "https://env.example.com");
        assert_eq!(resolved.auth_token.as_deref(), Some("env-token"));
    }

    #[test]
    fn test_cli_url_overrides_env() {
        let env = |key: &str| (key == ENV_API_URL).then(|| "https://env.example.com".to_string());
        let resolved =
            UploaderConfig::default().resolve_with(env, Some("https://cli.example.com"));
        assert_eq!(resolved.api_base_url, "https://cli.example.com");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = UploaderConfig {
            api_base_url: Some("  ".to_string()),
            auth_token: Some(String::new()),
            request_timeout_secs: Some(0),
        };
        let resolved = config.resolve_with(no_env, Some(""));
        assert_eq!(resolved.api_base_url, DEFAULT_API_URL);
        assert!(resolved.auth_token.is_none());
        assert_eq!(
            resolved.request_timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_save_and_load_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = UploaderConfig {
            api_base_url: Some("https://api.example.com".to_string()),
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = UploaderConfig::load_from(&path).unwrap();
        assert_eq!(
            loaded.api_base_url.as_deref(),
            Some("https://api.example.com")
        );
        assert!(loaded.auth_token.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = UploaderConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.api_base_url.is_none());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        assert!(UploaderConfig::load_from(&path).is_err());
    }
}
