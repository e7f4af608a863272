use std::path::PathBuf;
use std::process::ExitCode;

use looking_for_chars_core::CountError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Count(#[from] CountError),

    #[error("Failed to read '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    /// Contract violations exit with 2, everything else with 1.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Count(_) => ExitCode::from(2),
            _ => ExitCode::FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
