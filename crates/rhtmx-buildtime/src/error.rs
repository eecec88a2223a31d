// File: src/error.rs
// Purpose: Fatal build errors (routing diagnostics are recorded on the context instead)

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Routes directory not found: {0:?}")]
    MissingRoutesDir(PathBuf),

    #[error("Failed to walk routes directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read config file {path:?}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
