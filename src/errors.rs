use carbonfig_core::errors::CoreError;
use thiserror::Error;

/// Error type for figure assembly.
#[derive(Error, Debug)]
pub enum FigureError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    ConfigSyntax(#[from] toml::de::Error),
    #[error("{context}: {path}")]
    Dataset {
        context: String,
        path: std::path::PathBuf,
        #[source]
        source: CoreError,
    },
}

impl FigureError {
    pub fn dataset(
        context: impl Into<String>,
        path: impl Into<std::path::PathBuf>,
        source: CoreError,
    ) -> Self {
        FigureError::Dataset {
            context: context.into(),
            path: path.into(),
            source,
        }
    }
}

/// Convenience type for `Result<T, FigureError>`.
pub type FigureResult<T> = Result<T, FigureError>;
