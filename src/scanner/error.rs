use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to list directory {path}")]
    List {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to stat {path}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report line")]
    Write(#[from] std::io::Error),
}
