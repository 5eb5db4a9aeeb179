//! Error types for certum operations.

use std::io;
use thiserror::Error;

/// Errors that can occur while constructing, inspecting or decoding
/// geometric values.
///
/// Degenerate constructions are not errors: they are reported as `None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CertumError {
    /// Coordinate count disagrees with the kernel's ambient dimension.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension required by the kernel.
        expected: usize,
        /// Number of coordinates supplied.
        found: usize,
    },

    /// Coordinate access beyond the point's dimension.
    #[error("coordinate index {index} out of range for dimension {dimension}")]
    IndexOutOfRange {
        /// Requested coordinate index.
        index: usize,
        /// Dimension of the point.
        dimension: usize,
    },

    /// The stream ended before the dimension header was read.
    #[error("stream ended before the point dimension")]
    TruncatedDimension,

    /// The stream ended part way through the coordinates.
    #[error("stream ended after {read} of {expected} coordinates")]
    TruncatedCoordinates {
        /// Number of coordinates announced by the header.
        expected: usize,
        /// Number of coordinates actually decoded.
        read: usize,
    },

    /// A token could not be decoded as the expected value.
    #[error("malformed token {token:?}")]
    Malformed {
        /// The offending token.
        token: String,
    },

    /// Underlying stream failure other than end of input.
    #[error("i/o error ({kind:?}): {message}")]
    Io {
        /// Kind reported by the stream.
        kind: io::ErrorKind,
        /// Stream error message.
        message: String,
    },

    /// A hierarchy handle does not name a node of this hierarchy.
    #[error("unknown overlap node {index}")]
    UnknownNode {
        /// Raw index carried by the handle.
        index: usize,
    },

    /// Merging would list the same leaf twice.
    #[error("overlap operands share leaf {index}")]
    SharedLeaf {
        /// Raw index of the shared leaf.
        index: usize,
    },
}

impl From<io::Error> for CertumError {
    fn from(err: io::Error) -> Self {
        CertumError::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CertumError>;
