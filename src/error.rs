use std::path::PathBuf;

use thiserror::Error;

/// Result alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, NetError>;

/// Recoverable failures.
///
/// Shape mismatches inside the numeric core are not represented here: they
/// are programming errors and panic at the call site.
#[derive(Error, Debug)]
pub enum NetError {
    /// A model or config file could not be opened, created or written.
    #[error("storage unavailable at '{}': {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The model file was readable but does not describe a compatible network.
    #[error("malformed model file: {0}")]
    MalformedModel(String),

    /// Invalid configuration (bad JSON, impossible topology, bad dataset).
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl NetError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NetError::StorageUnavailable { path: path.into(), source }
    }
}
