use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure that can abort an index run.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Config error in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Template error in {}: {source}", .path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IndexError {
    pub(crate) fn config(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        IndexError::Config {
            path: path.into(),
            source: source.into(),
        }
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        IndexError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
