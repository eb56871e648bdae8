//! Error types.
//!
//! - `AppError` is what the binary reports: a message plus a process exit code.
//! - `PredictError` covers a single prediction attempt. It is recoverable: the
//!   TUI shows it inline and lets the user try again.

use thiserror::Error;

/// Exit code for configuration and model artifact problems.
pub const EXIT_CONFIG: u8 = 2;
/// Exit code for a failed prediction.
pub const EXIT_PREDICT: u8 = 3;
/// Exit code for terminal / IO failures.
pub const EXIT_IO: u8 = 4;

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

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(EXIT_CONFIG, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(EXIT_IO, message)
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

impl From<PredictError> for AppError {
    fn from(err: PredictError) -> Self {
        AppError::new(EXIT_PREDICT, format!("An error occurred during prediction: {err}"))
    }
}

/// Failure of one form → probability pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error("required field '{0}' is missing")]
    MissingField(&'static str),

    #[error("invalid time '{0}' (expected HH:MM)")]
    InvalidTime(String),

    #[error("unknown value '{value}' for field '{field}'")]
    UnknownCategory { field: &'static str, value: String },

    #[error(
        "encoded features do not match the model (missing: [{}], unexpected: [{}])",
        .missing.join(", "),
        .unexpected.join(", ")
    )]
    FeatureMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("encoded feature order does not match the model at position {position}: got '{got}', expected '{expected}'")]
    FeatureOrder {
        position: usize,
        got: String,
        expected: String,
    },

    #[error("model inference failed: {0}")]
    Inference(String),

    #[error("model returned an invalid probability output: {0}")]
    InvalidOutput(String),
}
