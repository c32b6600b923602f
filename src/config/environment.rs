//! Named deployment environments.

use std::env;
use std::fmt;
use std::str::FromStr;

use dialoguer::{Select, theme::ColorfulTheme};

use super::ConfigError;

/// Named deployment context selecting which configuration file to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Qa,
    Homolog,
    Production,
}

impl Environment {
    /// All valid environments, in menu order.
    pub const ALL: [Environment; 4] = [
        Environment::Development,
        Environment::Qa,
        Environment::Homolog,
        Environment::Production,
    ];

    /// Canonical lowercase name, as used in file paths and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Qa => "qa",
            Environment::Homolog => "homolog",
            Environment::Production => "production",
        }
    }

    /// Resolve the active environment.
    ///
    /// The `ENV` variable wins when set; otherwise an interactive menu is
    /// shown. An invalid `ENV` value is an error rather than a prompt so
    /// non-interactive runs never block.
    pub fn resolve() -> Result<Self, ConfigError> {
        match env::var("ENV") {
            Ok(value) => value.parse(),
            Err(_) => Self::select_interactive(),
        }
    }

    /// Single-select menu over the valid environments.
    fn select_interactive() -> Result<Self, ConfigError> {
        let items: Vec<&str> = Self::ALL.iter().map(|e| e.as_str()).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select an environment")
            .items(&items)
            .default(0)
            .interact()?;
        Ok(Self::ALL[selection])
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" => Ok(Environment::Development),
            "qa" => Ok(Environment::Qa),
            "homolog" => Ok(Environment::Homolog),
            "production" => Ok(Environment::Production),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
