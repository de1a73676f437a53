use std::path::PathBuf;
use thiserror::Error;

use crate::implementations::config::ConfigError;

/// Error types for the hdlbench harness
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Missing API credential: {0}")]
    MissingCredential(String),

    #[error("{kind} file not found: {}", path.display())]
    MissingInputFile { kind: InputKind, path: PathBuf },

    #[error("Code generation failed for model {model}")]
    GenerationFailure { model: String },

    #[error("No code could be extracted from the response of {model}")]
    EmptyExtraction { model: String },

    #[error("Failed to write artifact {}: {source}", path.display())]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error in external tool {tool}: {message}")]
    ExternalToolError { tool: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Result type specific to harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Input files a run depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Description,
    Testbench,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Description => write!(f, "Design description"),
            InputKind::Testbench => write!(f, "Testbench"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Stops the process before any work is done
    Fatal,
    /// Ends the current run
    Error,
}

impl HarnessError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HarnessError::MissingCredential(_) | HarnessError::Config(_) => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Failures of a single completion request
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP error: {status} - {message}")]
    HttpError { status: u16, message: String },

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("Completion service returned no content")]
    EmptyResponse,
}

impl From<CompletionError> for HarnessError {
    fn from(err: CompletionError) -> Self {
        HarnessError::ExternalToolError {
            tool: "LLM API".to_string(),
            message: err.to_string(),
        }
    }
}
