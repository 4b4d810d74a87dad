//! Error types.
//!
//! The engine raises typed errors (`ValidationError`, `ConfigError`); the binary
//! works in terms of `AppError`, which pairs a message with a process exit code.

use thiserror::Error;

/// Exit code for bad input, configuration or file I/O.
pub const EXIT_INPUT: u8 = 2;
/// Exit code for internal failures (serialization, invariant breaches).
pub const EXIT_INTERNAL: u8 = 4;

/// An input that lies outside its declared domain.
///
/// Raised before any computation happens, so a failing run never exposes a
/// partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("baseline score must be a finite percentage in [0, 100], got {value}")]
    Baseline { value: f64 },

    #[error("{field} must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("scenario '{scenario}' has no baseline and the scenario file sets none")]
    MissingBaseline { scenario: String },
}

/// Model configuration could not be loaded or is not usable.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {message}")]
    Read { path: String, message: String },

    #[error("config parse error in '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("invalid config value for {field}: {value} (must be finite and >= 0)")]
    InvalidValue { field: &'static str, value: f64 },
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::new(EXIT_INPUT, format!("Invalid simulation input: {err}"))
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(EXIT_INPUT, format!("Configuration error: {err}"))
    }
}
