//! # CLI Error Type
//!
//! Unified error type for the command-line front end.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  bad flags ──────────► CliError::Usage ──────┐                         │
//! │  bad env var ────────► CliError::Config ─────┤                         │
//! │  negative price ─────► CliError::Core ───────┼──► ErrorReport ──► stderr│
//! │  JSON encode failure ► CliError::Output ─────┘         │               │
//! │                                                        ▼               │
//! │                                                  exit status 1 or 2    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pricing_core::CoreError;
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

/// Everything that can stop the CLI from printing a price.
#[derive(Debug, Error)]
pub enum CliError {
    /// Command line could not be understood.
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Creates a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        CliError::Usage(message.into())
    }

    /// Machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::Usage(_) => ErrorCode::Usage,
            CliError::Config(_) => ErrorCode::Config,
            CliError::Core(CoreError::InvalidInput(_)) => ErrorCode::InvalidInput,
            CliError::Output(_) => ErrorCode::Internal,
        }
    }

    /// Process exit status: 2 for mistakes in how the tool was invoked,
    /// 1 for input the calculator refused.
    pub fn exit_code(&self) -> u8 {
        match self.code() {
            ErrorCode::Usage | ErrorCode::Config => 2,
            ErrorCode::InvalidInput | ErrorCode::Internal => 1,
        }
    }

    /// Serializable form written in JSON mode.
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// Error codes for JSON error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    Usage,
    Config,
    InvalidInput,
    Internal,
}

/// What a JSON consumer receives when pricing fails:
/// ```json
/// {
///   "code": "INVALID_INPUT",
///   "message": "Invalid input: price must be between 0 and 92233720368547758"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
}
