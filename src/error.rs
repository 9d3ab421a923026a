use std::fmt;

/// Custom error type for port-forward sessions
#[derive(Debug)]
pub enum FwdError {
    /// Management binary could not be located
    MissingBinary(String),
    /// Spawning or reading a subprocess failed
    Io(std::io::Error),
    /// Terminal interaction failed
    Prompt(String),
    /// Single-choice prompt offered nothing to choose from
    NoChoices(String),
    /// Operator interrupted a prompt (Ctrl-C in raw mode)
    Interrupted,
}

impl fmt::Display for FwdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FwdError::MissingBinary(name) => {
                write!(f, "This script requires {} to be installed.", name)
            }
            FwdError::Io(e) => write!(f, "I/O error: {}", e),
            FwdError::Prompt(msg) => write!(f, "Prompt failed: {}", msg),
            FwdError::NoChoices(label) => write!(f, "Nothing to choose for '{}'", label),
            FwdError::Interrupted => write!(f, "Interrupted"),
        }
    }
}

impl std::error::Error for FwdError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FwdError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FwdError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::Interrupted {
            FwdError::Interrupted
        } else {
            FwdError::Io(err)
        }
    }
}

impl From<dialoguer::Error> for FwdError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(e) => e.into(),
            #[allow(unreachable_patterns)]
            other => FwdError::Prompt(other.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for FwdError {
    fn from(err: tokio::task::JoinError) -> Self {
        FwdError::Prompt(err.to_string())
    }
}

/// Result type alias for session operations
pub type Result<T> = std::result::Result<T, FwdError>;
