//! Configuration loading and validation for the quotation harness.
//!
//! Each environment has its own dotenv-format file under
//! `config/environments/`. Loading parses that file into an isolated
//! [`Settings`] value; process environment variables are never mutated.

mod environment;
mod error;

pub use environment::Environment;
pub use error::ConfigError;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Directory holding the per-environment configuration files.
const ENV_FILE_DIR: &str = "config/environments";

/// Resolved settings for the active environment.
///
/// Required: `API_BASE_URL`. Optional keys fall back to documented defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the quotation API, without a trailing slash.
    pub api_base_url: String,
    /// Bearer token sent in the Authorization header.
    pub auth_token: String,
    /// Value for the Ocp-Apim-Subscription-Key header.
    pub subscription_key: String,
    /// Logging verbosity: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
    /// Target file for the rotating log sink.
    pub log_file_path: PathBuf,
}

impl Settings {
    /// Load settings for the given environment.
    ///
    /// Reads `config/environments/{environment}.env`. A missing file is an
    /// error; there is no fallback configuration.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::load_from_path(&env_file_path(environment), environment)
    }

    /// Load settings from an explicit dotenv-format file.
    fn load_from_path(path: &Path, environment: Environment) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let mut values = HashMap::new();
        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            values.insert(key, value);
        }

        let settings = Self::from_values(values, environment);
        settings.validate()?;

        Ok(settings)
    }

    fn from_values(mut values: HashMap<String, String>, environment: Environment) -> Self {
        Self {
            api_base_url: values.remove("API_BASE_URL").unwrap_or_default(),
            auth_token: values.remove("AUTH_TOKEN").unwrap_or_default(),
            subscription_key: values.remove("SUBSCRIPTION_KEY").unwrap_or_default(),
            log_level: values
                .remove("LOG_LEVEL")
                .unwrap_or_else(|| "INFO".to_string()),
            log_file_path: values
                .remove("LOG_FILE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| default_log_file_path(environment)),
        }
    }

    /// Validate the settings.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.is_empty() {
            return Err(ConfigError::Validation("API_BASE_URL is required".into()));
        }

        Ok(())
    }
}

/// Path of the configuration file for an environment.
fn env_file_path(environment: Environment) -> PathBuf {
    Path::new(ENV_FILE_DIR).join(format!("{}.env", environment))
}

/// Default log file when `LOG_FILE_PATH` is not set.
fn default_log_file_path(environment: Environment) -> PathBuf {
    PathBuf::from(format!("logs/{}_project.log", environment))
}

#[cfg(test)]
mod tests;
