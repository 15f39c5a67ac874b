//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

/// How the final report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::UnknownOutput(other.to_string())),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown output format '{0}' (expected 'text' or 'json')")]
    UnknownOutput(String),
}

/// Application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub output: OutputFormat,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let output = match env::var("AGORA_OUTPUT") {
            Ok(value) => value.parse()?,
            Err(_) => OutputFormat::default(),
        };

        Ok(Self { output })
    }
}
