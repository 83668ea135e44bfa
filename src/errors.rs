//! Error types for the API boundary
//!
//! Parsing and rendering never fail; malformed markup always degrades to a
//! defined fallback. Only configuration and JS (de)serialization can go wrong.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SongError {
    /// Render options could not be parsed
    #[error("Invalid render options: {0}")]
    InvalidOptions(String),

    /// A value could not cross the JavaScript boundary
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SongError {
    fn from(err: serde_json::Error) -> Self {
        SongError::InvalidOptions(err.to_string())
    }
}
