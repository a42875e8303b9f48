use std::fmt::{self, Display};

/// The reason the CeVIO host could not be started, decoded from the engine's result code.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum StartFailure {
    /// The installation state of CeVIO is unknown (`-1`).
    UnknownInstallState,
    /// The CeVIO executable could not be found (`-2`).
    ExecutableNotFound,
    /// The host process failed to start (`-3`).
    ProcessStartFailed,
    /// The application terminated with an error after starting (`-4`).
    CrashedAfterStart,
    /// Any other non-zero code.
    UnknownCode(i32),
}

impl StartFailure {
    /// Decodes a result code of the engine's host start request. Returns `None` for `0`,
    /// which means success.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => None,
            -1 => Some(Self::UnknownInstallState),
            -2 => Some(Self::ExecutableNotFound),
            -3 => Some(Self::ProcessStartFailed),
            -4 => Some(Self::CrashedAfterStart),
            code => Some(Self::UnknownCode(code)),
        }
    }
}

impl Display for StartFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownInstallState => f.write_str("installation status is unknown"),
            Self::ExecutableNotFound => f.write_str("unable to find executable file"),
            Self::ProcessStartFailed => f.write_str("failed to start the process"),
            Self::CrashedAfterStart => {
                f.write_str("application terminated with an error after starting")
            }
            Self::UnknownCode(code) => write!(f, "unknown error code {code}"),
        }
    }
}

/// Lifecycle of an [`EngineSession`](super::EngineSession).
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum SessionState {
    /// [`start`](super::EngineSession::start) has not been called.
    NotStarted,
    /// The host start request is in flight.
    Starting,
    /// The engine is available.
    Running,
    /// The host could not be started. Terminal.
    Failed(StartFailure),
}
