//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Upstream Protocol Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown push channel: {channel}")]
    UnknownChannel { channel: String },

    #[error("Malformed payload on '{channel}': {message}")]
    Payload { channel: String, message: String },

    #[error("Protocol error: {message}")]
    Protocol { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    #[error("Invalid bootstrap snapshot: {message}")]
    Bootstrap { message: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,

    #[error("Startup error: {message}")]
    Startup { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn unknown_channel(channel: impl Into<String>) -> Self {
        Self::UnknownChannel {
            channel: channel.into(),
        }
    }

    pub fn payload(channel: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Payload {
            channel: channel.into(),
            message: message.into(),
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn bootstrap(message: impl Into<String>) -> Self {
        Self::Bootstrap {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    pub fn startup(message: impl Into<String>) -> Self {
        Self::Startup {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Everything the upstream process sends us falls in this bucket: the
    /// offending event is dropped and the page keeps its last good state.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Json(_)
                | Error::UnknownChannel { .. }
                | Error::Payload { .. }
                | Error::Protocol { .. }
                | Error::ChannelSend { .. }
                | Error::ChannelClosed
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::ConfigNotFound { .. } | Error::Bootstrap { .. } | Error::Startup { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::unknown_channel("ledger-exploded");
        assert_eq!(err.to_string(), "Unknown push channel: ledger-exploded");

        let err = Error::payload("settings-updated", "expected an object");
        assert!(err.to_string().contains("settings-updated"));
        assert!(err.to_string().contains("expected an object"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::bootstrap("truncated").is_fatal());
        assert!(Error::ConfigNotFound {
            path: PathBuf::from("/test/config.toml")
        }
        .is_fatal());
        assert!(!Error::protocol("test").is_fatal());
    }

    #[test]
    fn test_upstream_errors_are_recoverable() {
        assert!(Error::unknown_channel("x").is_recoverable());
        assert!(Error::payload("x", "y").is_recoverable());
        assert!(Error::ChannelClosed.is_recoverable());
        assert!(!Error::config_invalid("bad").is_recoverable());
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::protocol("test");
        let _ = Error::config("test");
        let _ = Error::config_invalid("test");
        let _ = Error::channel_send("test");
    }

    #[test]
    fn test_startup_errors_are_fatal() {
        let err = Error::startup("cannot install error report hook");
        assert!(err.is_fatal());
        assert!(!err.is_recoverable());
        assert_eq!(err.to_string(), "Startup error: cannot install error report hook");
    }
}
