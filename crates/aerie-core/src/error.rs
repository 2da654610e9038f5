//! Error types for AERIE protocol

use thiserror::Error;

/// Core AERIE errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AerieError {
    // Codec errors
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    #[error("invalid address prefix: {0:#04x}")]
    InvalidPrefix(u8),

    #[error("checksum mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },
}

/// Result type for AERIE operations
pub type AerieResult<T> = Result<T, AerieError>;
