use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Meteomatics HTTP Basic credentials.
///
/// The core never generates or validates these; they are loaded here and
/// injected into the measurement fetcher at construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Example TOML:
    /// [credentials]
    /// username = "..."
    /// password = "..."
    pub credentials: Option<Credentials>,
}

impl Config {
    /// Return the stored credentials, or a hint on how to set them.
    pub fn credentials(&self) -> Result<&Credentials> {
        self.credentials.as_ref().ok_or_else(|| {
            anyhow!(
                "No Meteomatics credentials configured.\n\
                 Hint: run `dashboard configure` and enter your username and password."
            )
        })
    }

    pub fn set_credentials(&mut self, username: String, password: String) {
        self.credentials = Some(Credentials { username, password });
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "wx-dashboard", "dashboard-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_error_when_not_set() {
        let cfg = Config::default();
        let err = cfg.credentials().unwrap_err();

        assert!(err.to_string().contains("No Meteomatics credentials configured"));
        assert!(err.to_string().contains("Hint: run `dashboard configure`"));
    }

    #[test]
    fn set_and_read_credentials() {
        let mut cfg = Config::default();
        assert!(!cfg.has_credentials());

        cfg.set_credentials("jim".into(), "hunter2".into());

        let creds = cfg.credentials().expect("credentials must exist");
        assert_eq!(creds.username, "jim");
        assert_eq!(creds.password, "hunter2");
        assert!(cfg.has_credentials());
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_credentials("jim".into(), "hunter2".into());

        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: Config = toml::from_str(&text).expect("parse");

        assert_eq!(parsed.credentials().unwrap().username, "jim");
    }
}
