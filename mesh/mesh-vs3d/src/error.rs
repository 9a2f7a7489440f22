//! Error types for VideoScape-3D decoding.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for decode operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Hard failures that stop a decode without producing a mesh.
///
/// Out-of-range polygon indices are not errors; they surface as
/// [`DecodeOutcome::SoftAbort`](crate::DecodeOutcome::SoftAbort).
#[derive(Debug, Error)]
pub enum DecodeError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The first four bytes are neither `3dg1` (any case) nor `3DB1`.
    #[error("unrecognized header: {}", String::from_utf8_lossy(.found).escape_debug())]
    UnrecognizedHeader {
        /// The bytes that were read in place of a header (at most four).
        found: Vec<u8>,
    },

    /// A text-mode token that should be a number is not one.
    #[error("malformed numeric literal {token:?} on line {line}")]
    MalformedNumericLiteral {
        /// One-based line number, counting the header line.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// A text-mode line has the wrong shape for its position in the file.
    #[error("malformed record on line {line}: {message}")]
    MalformedRecord {
        /// One-based line number, counting the header line.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// A binary-mode read came up short of the bytes the record requires.
    #[error("truncated stream at byte {offset}: expected {expected} bytes, got {got}")]
    TruncatedStream {
        /// Byte offset of the short read from the start of the stream.
        offset: u64,
        /// Bytes requested.
        expected: usize,
        /// Bytes actually available.
        got: usize,
    },

    /// I/O error from the underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DecodeError {
    /// Create a `MalformedRecord` error for the given line.
    #[must_use]
    pub fn malformed_record(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: message.into(),
        }
    }

    /// Create a `MalformedNumericLiteral` error for the given token.
    #[must_use]
    pub fn malformed_number(line: usize, token: &str) -> Self {
        Self::MalformedNumericLiteral {
            line,
            token: token.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_message_escapes_binary_bytes() {
        let err = DecodeError::UnrecognizedHeader {
            found: vec![b'X', 0, b'\n'],
        };
        assert_eq!(err.to_string(), "unrecognized header: X\\0\\n");
    }

    #[test]
    fn truncated_message() {
        let err = DecodeError::TruncatedStream {
            offset: 6,
            expected: 12,
            got: 5,
        };
        assert_eq!(
            err.to_string(),
            "truncated stream at byte 6: expected 12 bytes, got 5"
        );
    }

    #[test]
    fn numeric_message_names_token() {
        let err = DecodeError::malformed_number(3, "1.0x");
        assert_eq!(err.to_string(), "malformed numeric literal \"1.0x\" on line 3");
    }
}
