//! Error types for the REBA engine
//!
//! The scoring path never fails: missing landmarks become `None`, table
//! indices are clamped. These errors only surface at the API edge.

use thiserror::Error;

/// Core REBA errors
#[derive(Error, Debug)]
pub enum RebaError {
    // Input errors
    #[error("Force/load score must be 0, 1 or 2, got {0}")]
    InvalidForceLoad(u8),

    #[error("Invalid frame at line {line}: {reason}")]
    InvalidFrame { line: usize, reason: String },

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for REBA operations
pub type RebaResult<T> = Result<T, RebaError>;
