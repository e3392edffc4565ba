//! Error types for reel

use thiserror::Error;

/// Result type alias using ReelError
pub type Result<T> = std::result::Result<T, ReelError>;

/// Main error type for reel operations
#[derive(Debug, Error)]
pub enum ReelError {
    /// Requested H.264 profile level is not in the size table
    #[error("Profile {0} not supported")]
    UnsupportedProfile(String),

    /// Screen capture error
    #[error("Capture error: {0}")]
    Capture(String),

    /// Encoder error
    #[error("Encoder error: {0}")]
    Encoder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ReelError>,
    },
}

impl ReelError {
    /// Create a capture error
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture(msg.into())
    }

    /// Create an encoder error
    pub fn encoder(msg: impl Into<String>) -> Self {
        Self::Encoder(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

// Conversions from external error types

impl From<xcap::XCapError> for ReelError {
    fn from(err: xcap::XCapError) -> Self {
        Self::Capture(err.to_string())
    }
}

impl From<openh264::Error> for ReelError {
    fn from(err: openh264::Error) -> Self {
        Self::Encoder(err.to_string())
    }
}
