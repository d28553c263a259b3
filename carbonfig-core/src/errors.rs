use std::path::PathBuf;
use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{0}")]
    Error(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
    #[error("Shape mismatch. Expected {expected}, got {found}")]
    ShapeMismatch { expected: String, found: String },
    #[error("Extrapolation is not allowed. Target={0}, interpolation range=[{1}, {2}]")]
    ExtrapolationNotAllowed(f64, f64, f64),
    #[error("Ensemble has no members")]
    EmptyEnsemble,
}

impl CoreError {
    pub fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        CoreError::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

/// Convenience type for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;
