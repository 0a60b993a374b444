use std::path::PathBuf;
use themetable::ThemeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("failed to read config file {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error("failed to install logger")]
    Logger(#[from] log::SetLoggerError),

    #[error("failed to write summary: {0}")]
    Output(#[from] std::io::Error),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, HarvestError>;
