//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable          | Values          | Default |
//! |-------------------|-----------------|---------|
//! | `PRICING_OUTPUT`  | `text` / `json` | `text`  |
//! | `PRICING_VERBOSE` | `true` / `false`| `false` |

use std::env;
use std::str::FromStr;

/// How results and errors are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One human-readable line, e.g. `$95.00`.
    #[default]
    Text,
    /// The full quote as JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Output format, overridden by `--json`
    pub output: OutputFormat,

    /// Print the quote breakdown in text mode
    pub verbose: bool,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output = match lookup("PRICING_OUTPUT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PRICING_OUTPUT".to_string()))?,
            None => OutputFormat::default(),
        };

        let verbose = match lookup("PRICING_VERBOSE") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PRICING_VERBOSE".to_string()))?,
            None => false,
        };

        Ok(CliConfig { output, verbose })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
