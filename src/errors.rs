use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, self::Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A form or constructor field was non-numeric, non-finite, or out of range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No workout with id {0}")]
    NotFound(String),

    /// The position provider could not answer. Non-fatal: map features are
    /// skipped, everything else keeps working.
    #[error("Geolocation unavailable")]
    GeolocationUnavailable,

    #[error("Snapshot I/O: {0}")]
    Io(#[from] io::Error),

    #[error("Snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}
