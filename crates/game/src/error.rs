//! Setup errors. Everything that can go wrong is caught before the first tick;
//! the per-tick path has no error cases.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no spawn points configured")]
    NoSpawnPoints,

    #[error("invalid config value `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    #[error("sound `{0}` is not in the sound bank")]
    MissingSound(String),

    #[error("could not read config {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config {path:?}")]
    Config {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}
