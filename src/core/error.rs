//! Error type shared by every engine entry point.
//!
//! Engines are deterministic and have no external dependencies, so the only
//! way a call can fail is a caller programming error. Decoding foreign trace
//! bytes is the one exception and gets its own variant.

/// Errors returned by trace generation and trace decoding.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    /// Input was absent or a configuration value was out of range.
    ///
    /// Examples: `run_size` of zero, a `None` sequence passed through the
    /// Python bindings.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Encoded trace bytes could not be decoded.
    #[error("failed to decode trace: {0}")]
    Decode(String),
}

impl TraceError {
    /// Returns true if the error was caused by the caller's arguments.
    ///
    /// Such errors are never transient; retrying with the same input fails
    /// the same way.
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Returns a static identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::Decode(_) => "decode",
        }
    }
}

impl From<bincode::Error> for TraceError {
    fn from(err: bincode::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
