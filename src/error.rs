use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmwlError {
    #[error("Input error: {field} is required")]
    MissingRequiredInput { field: &'static str },

    #[error("Generation failed ({backend}): {message}")]
    GenerationFailure { backend: String, message: String },

    #[error("Generation timeout after {timeout} seconds")]
    GenerationTimeout { timeout: u64 },

    #[error("Failed to read base wordlist {}: {source}", .path.display())]
    FileReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write wordlist {}: {source}", .path.display())]
    FileWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid mask template '{template}': {reason}")]
    InvalidMask { template: String, reason: String },

    #[error("Invalid command line arguments: {0}")]
    InvalidArguments(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Generation task aborted: {0}")]
    TaskFailed(String),
}

impl LlmwlError {
    pub(crate) fn generation(backend: &str, message: impl Into<String>) -> Self {
        Self::GenerationFailure {
            backend: backend.to_string(),
            message: message.into(),
        }
    }

    /// True for every failure that originated in a generation backend.
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            Self::GenerationFailure { .. } | Self::GenerationTimeout { .. }
        )
    }

    /// Process exit code reported by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingRequiredInput { .. }
            | Self::InvalidMask { .. }
            | Self::InvalidArguments(_) => 2,
            Self::FileReadFailure { .. } => 3,
            Self::FileWriteFailure { .. } => 4,
            Self::GenerationFailure { .. } | Self::GenerationTimeout { .. } => 5,
            Self::ConfigError(_) | Self::TaskFailed(_) => 1,
        }
    }
}
