//! Analytics client error types.

use thiserror::Error;

/// Errors surfaced by the analytics client.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Event type was empty
    #[error("invalid event type: {0:?}")]
    InvalidEventType(String),

    /// Locale string could not be split into language and country
    #[error("invalid locale: {0:?}")]
    InvalidLocale(String),

    /// Configuration file could not be read
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration document was not a JSON object
    #[error("config parse error: {0}")]
    Config(String),

    /// Observer channel is full (non-blocking send failed)
    #[error("observer channel full, event dropped")]
    ChannelFull,

    /// Observer channel receiver has been dropped
    #[error("observer channel closed")]
    ChannelClosed,
}

impl From<serde_json::Error> for AnalyticsError {
    fn from(e: serde_json::Error) -> Self {
        AnalyticsError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
