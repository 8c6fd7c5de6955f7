use std::path::PathBuf;

use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Could not access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not read coverage summary {}: {source}", path.display())]
    Coverage {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not read changed files from {}: {source}", path.display())]
    Compare {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not deserialize report options: {0}")]
    Options(#[source] serde_json::Error),

    #[error("Could not serialize coverage summary: {0}")]
    Summary(#[source] serde_json::Error),

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
