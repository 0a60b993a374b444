//! Error types for theme table I/O.
//!
//! Building tables never fails; only reading and writing files does.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    /// A required input file could not be read.
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be written.
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON input did not have the expected shape.
    #[error("invalid theme JSON in {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize theme JSON")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write CSV to {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
