//! Error types for score persistence

use thiserror::Error;

/// Errors that can occur while reading or writing scores
#[derive(Error, Debug)]
pub enum ScoreError {
    /// Score file I/O error
    #[error("score file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Score file serialization/deserialization error
    #[error("score file format error: {0}")]
    Json(#[from] serde_json::Error),

    /// Player names must contain at least one non-whitespace character
    #[error("player name is empty")]
    EmptyName,

    /// Score file written by an incompatible version
    #[error("unsupported score file version {found}")]
    UnsupportedVersion { found: u32 },
}

/// Result type alias for score operations
pub type ScoreResult<T> = Result<T, ScoreError>;
