//! Error types for ticklist
//!
//! Uses `thiserror` for ergonomic error definitions with automatic `Display` and `Error` impls.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for ticklist
#[derive(Error, Debug)]
pub enum Error {
    #[error("Terminal error: {0}")]
    Terminal(#[from] TerminalError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Terminal mode errors
///
/// Any of these ends the session. The session guard restores whatever was
/// already changed before the error reaches the caller.
#[derive(Error, Debug)]
pub enum TerminalError {
    #[error("Standard input is not a terminal")]
    NotATerminal,

    #[error("Failed to enter raw mode: {0}")]
    RawModeFailed(String),

    #[error("Failed to restore terminal: {0}")]
    RestoreFailed(String),

    #[error("Failed to install signal handlers: {0}")]
    SignalSetupFailed(String),

    #[error("Session ended by a termination signal")]
    Interrupted,
}

impl From<nix::Error> for TerminalError {
    fn from(e: nix::Error) -> Self {
        match e {
            nix::Error::ENOTTY => TerminalError::NotATerminal,
            other => TerminalError::RawModeFailed(other.to_string()),
        }
    }
}

impl From<nix::Error> for Error {
    fn from(e: nix::Error) -> Self {
        Error::Terminal(e.into())
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("Failed to save configuration: {0}")]
    SaveFailed(String),

    #[error("Invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Failed to create config directory: {0}")]
    DirectoryCreationFailed(PathBuf),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TerminalError::NotATerminal;
        assert!(err.to_string().contains("not a terminal"));

        let err = ConfigError::InvalidValue {
            key: "viewport_height".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert!(err.to_string().contains("viewport_height"));

        let err = ConfigError::DirectoryCreationFailed(PathBuf::from("/tmp/foo"));
        assert!(err.to_string().contains("/tmp/foo"));
    }

    #[test]
    fn test_errno_conversion() {
        let err: TerminalError = nix::Error::ENOTTY.into();
        assert!(matches!(err, TerminalError::NotATerminal));

        let err: Error = nix::Error::EIO.into();
        assert!(matches!(err, Error::Terminal(TerminalError::RawModeFailed(_))));
    }
}
