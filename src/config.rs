//! # Configuration Management

//! This module handles the configuration loading and management for the dock check-in service.
//! It leverages the `config` crate to provide a flexible and structured way to define and access configuration settings from various sources, including:

//! * YAML configuration files (default.yaml, development.yaml, production.yaml)
//! * Environment variables

//! The core of this module is the `Settings` struct, which encapsulates all the configuration settings required by the application.

use serde::{Deserialize, Serialize};
use config::{Config, Environment, File};
use std::collections::HashSet;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use secrecy::Secret;
use tracing::debug;
use crate::errors::CheckInError;
use crate::models::{Section, DEFAULT_SECTIONS};

/// Represents the complete set of configuration settings for the check-in service.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Settings for application logging
    pub logging: LoggingSettings,
    /// Operator session and inactivity prompt timings
    #[serde(default)]
    pub session: SessionSettings,
    /// Artificial UX delays around login and form submission
    #[serde(default)]
    pub delays: DelaySettings,
    /// Physical dock sections; empty means the built-in layout
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Operators allowed to log in
    #[serde(default)]
    pub users: Vec<UserCredential>,
    #[serde(default)]
    pub export: ExportSettings,
    /// Start the ledger with the demo `In Progress` record
    #[serde(default)]
    pub seed_demo_data: bool,
}

/// Holds the configuration settings for application logging
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    /// The logging level (e.g., "info", "debug", "error")
    pub level: String,
    /// The name of the log file (optional)
    pub file: Option<String>,
    /// The directory path where log files will be stored (optional)
    pub path: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: "info".to_string(), file: None, path: None }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SessionSettings {
    pub timeout_secs: u64,
    /// How long before the timeout the warning is shown
    pub warning_lead_secs: u64,
    pub check_interval_secs: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30 * 60,
            warning_lead_secs: 60,
            check_interval_secs: 10,
        }
    }
}

impl SessionSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn warning_lead(&self) -> Duration {
        Duration::from_secs(self.warning_lead_secs)
    }

    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs.max(1))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DelaySettings {
    pub login_ms: u64,
    pub submit_ms: u64,
}

impl Default for DelaySettings {
    fn default() -> Self {
        Self { login_ms: 1000, submit_ms: 1000 }
    }
}

/// A username and its password as read from configuration
#[derive(Debug, Deserialize, Clone)]
pub struct UserCredential {
    pub username: String,
    #[serde(deserialize_with = "deserialize_secret")]
    pub password: Secret<String>,
}

impl UserCredential {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: Secret::new(password.to_string()),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExportSettings {
    /// Directory the export file is written to
    pub path: PathBuf,
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            file_name: "checkin-data-export.json".to_string(),
        }
    }
}

impl Settings {
    /// Loads and constructs the application settings from various configuration sources.
    ///
    /// This function reads configuration settings from the following sources, in order of precedence:
    ///
    /// 1. `default.yaml`: Contains default settings for the application
    /// 2. Environment-specific YAML file (e.g., `development.yaml` or `production.yaml`) based on the `RUN_MODE` environment variable
    /// 3. Environment variables prefixed with `APP` (e.g., `APP__SESSION__TIMEOUT_SECS`)
    ///
    /// The `CONFIG_DIR` environment variable can be used to specify the directory where the YAML configuration files are located (defaults to "src/config").
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)`: If the settings were loaded and constructed successfully
    /// * `Err(CheckInError)`: If there was an error during the loading or construction process
    pub fn new() -> Result<Self, CheckInError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let config_dir = env::var("CONFIG_DIR").unwrap_or_else(|_| "src/config".into());
        Self::load(&config_dir, &run_mode)
    }

    /// Loads settings from `config_dir` for the given run mode, then applies `APP__*` overrides.
    pub fn load(config_dir: &str, run_mode: &str) -> Result<Self, CheckInError> {
        debug!("Run Mode: {:?}, Config Dir: {:?}", run_mode, config_dir);

        let s = Config::builder()
            .add_source(File::with_name(&format!("{}/default", config_dir)))
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        let mut s: Self = s.try_deserialize::<Settings>()
            .map_err(CheckInError::from)?;

        if let Some(ref mut path) = s.logging.path {
            *path = env::current_dir()?.join(path.clone());
        }

        s.validate()?;
        Ok(s)
    }

    /// The configured sections, or the built-in layout when none are configured
    pub fn section_definitions(&self) -> Vec<Section> {
        if self.sections.is_empty() {
            DEFAULT_SECTIONS.clone()
        } else {
            self.sections.clone()
        }
    }

    /// Rejects layouts that would produce an empty section or two docks with the same name,
    /// and a warning lead longer than the session timeout.
    pub fn validate(&self) -> Result<(), CheckInError> {
        let mut names = HashSet::new();
        for section in &self.sections {
            if section.is_empty() {
                return Err(CheckInError::ConfigError(format!(
                    "section '{}' starts at {} after its end {}",
                    section.name, section.start, section.end
                )));
            }
            if !names.insert(section.name.as_str()) {
                return Err(CheckInError::ConfigError(format!(
                    "section '{}' is defined more than once", section.name
                )));
            }
        }

        let mut ranges: Vec<&Section> = self.sections.iter().collect();
        ranges.sort_by_key(|section| section.start);
        for pair in ranges.windows(2) {
            if pair[1].start <= pair[0].end {
                return Err(CheckInError::ConfigError(format!(
                    "sections '{}' and '{}' both contain Dock {}",
                    pair[0].name, pair[1].name, pair[1].start
                )));
            }
        }

        if self.session.warning_lead_secs > self.session.timeout_secs {
            return Err(CheckInError::ConfigError(
                "session.warning_lead_secs exceeds session.timeout_secs".to_string(),
            ));
        }
        Ok(())
    }
}

/// Deserializes a plain configuration string into a `Secret<String>`
fn deserialize_secret<'de, D>(deserializer: D) -> Result<Secret<String>, D::Error>
    where
        D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(Secret::new(raw))
}
