//! Error types for the playback core
//!
//! Centralized error handling using thiserror. The messages of [`PlayerError`]
//! are shown verbatim to the shell user.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by the playback controller
#[derive(Error, Debug)]
pub enum PlayerError {
    /// The identifier does not resolve to a catalog entry
    #[error("Invalid radio")]
    InvalidStation,

    /// The command needs a current station and there is none
    #[error("No radio playing")]
    NoCurrentSelection,

    /// The requested player is not one of the configured backends
    #[error("Invalid player")]
    InvalidBackend(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Failures raised while starting an external player
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("No compatible player found, install one of the configured players")]
    NoPlayerFound,

    #[error("Could not start {player}: {source}")]
    Spawn {
        player: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while loading the catalog or the player list
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
