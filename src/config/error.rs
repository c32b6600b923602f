//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Environment resolution and configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment: {0} (choose one of: development, qa, homolog, production)")]
    InvalidEnvironment(String),
    #[error("configuration file {} not found", .0.display())]
    FileNotFound(PathBuf),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] dotenvy::Error),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("environment selection failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}
