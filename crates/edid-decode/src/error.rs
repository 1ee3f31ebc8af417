//! Error types for EDID decoding.

use thiserror::Error;

/// Error categories a decode can fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Input is not an EDID block (bad header signature or bad hex text)
    InvalidFormat,
    /// E002: Input is shorter than a field's required offset
    OutOfRange,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFormat => "E001",
            ErrorCode::OutOfRange => "E002",
        }
    }
}

/// Error during EDID decoding.
///
/// Every variant is fatal: decoding stops at the first failure and no
/// partial record is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    // === E001: Invalid format ===
    #[error("[E001] invalid EDID header: expected 00 FF FF FF FF FF FF 00, found {found:02X?}")]
    InvalidHeader { found: [u8; 8] },

    #[error("[E001] invalid hex input at position {position}: {reason}")]
    InvalidHex {
        position: usize,
        reason: &'static str,
    },

    // === E002: Out of range ===
    #[error("[E002] reading {count} byte(s) of {field} at offset {offset:#04x} exceeds input length {len}")]
    OutOfRange {
        field: &'static str,
        offset: usize,
        count: usize,
        len: usize,
    },

    #[error("[E002] input is {len} bytes, an EDID base block needs 128")]
    Truncated { len: usize },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::InvalidHeader { .. } | DecodeError::InvalidHex { .. } => {
                ErrorCode::InvalidFormat
            }
            DecodeError::OutOfRange { .. } | DecodeError::Truncated { .. } => {
                ErrorCode::OutOfRange
            }
        }
    }

    /// Returns the byte offset the failure refers to, when there is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            DecodeError::InvalidHeader { .. } => Some(0),
            DecodeError::InvalidHex { position, .. } => Some(*position),
            DecodeError::OutOfRange { offset, .. } => Some(*offset),
            DecodeError::Truncated { len } => Some(*len),
        }
    }
}
