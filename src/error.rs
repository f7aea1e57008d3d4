use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("the specified directory does not exist: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot list {}: {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("walk cancelled")]
    Cancelled,

    #[error("entry limit of {limit} reached")]
    EntryLimit { limit: usize },
}

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to read preferences from {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed preferences in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to save preferences to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] serde_json::Error),
}
