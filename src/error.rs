use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::session::StartFailure;

/// The error type returned by fallible session and configuration operations.
///
/// Only failures that abort the whole operation end up here. Rejected parameter values,
/// unknown names and the like are reported as [`Warning`](crate::Warning)s instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The CeVIO host is not running, or [`start`](crate::EngineSession::start) has not
    /// been called yet.
    #[error("CeVIO is not running")]
    EngineNotRunning,

    /// The CeVIO host could not be started.
    #[error("failed to start CeVIO: {0}")]
    StartFailed(StartFailure),

    /// Speech was requested while no cast is selected.
    #[error("no cast is selected")]
    NoCastSelected,

    /// The engine does not offer any cast, most likely because no voice is licensed.
    #[error("no cast is available; check the voice licenses")]
    NoCastAvailable,

    /// The configuration file could not be read.
    #[error("'{}' file not found", path.display())]
    ConfigNotFound {
        /// Path of the configuration file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not a valid configuration document.
    #[error("'{}' is not a valid configuration: {source}", path.display())]
    ConfigParse {
        /// Path of the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The configuration names a cast the engine does not offer.
    #[error("{cast} is not included in available casts [{}]", available.join(","))]
    InvalidCast {
        /// The requested cast.
        cast: String,
        /// The casts the engine offers.
        available: Vec<String>,
    },

    /// The engine client reported a failure.
    #[error("engine error: {0}")]
    Engine(String),
}

#[cfg(windows)]
impl From<windows::core::Error> for Error {
    fn from(err: windows::core::Error) -> Self {
        Self::Engine(err.message().to_string())
    }
}
