//! Error types for keypoint decoding.

use pose_types::PoseTypesError;
use thiserror::Error;

/// Errors that can occur while decoding a keypoint buffer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    /// Buffer length does not match `expected_count * 3`.
    #[error("malformed keypoint buffer: expected {expected} values, got {actual}")]
    MalformedBuffer {
        /// Expected number of floats.
        expected: usize,
        /// Actual number of floats.
        actual: usize,
    },

    /// No landmark survived the layout's skip.
    #[error("pose not detected: no landmarks decoded")]
    EmptyDetection,

    /// A kept triplet holds a `NaN` or infinite value.
    #[error("non-finite value in keypoint triplet {index}")]
    NonFiniteValue {
        /// Index of the offending triplet in the buffer.
        index: usize,
    },

    /// The layout is inconsistent.
    #[error("invalid keypoint layout: {0}")]
    InvalidLayout(String),

    /// Building the detection failed.
    #[error(transparent)]
    Types(#[from] PoseTypesError),
}

impl DecodeError {
    /// Creates a malformed buffer error.
    #[must_use]
    pub const fn malformed_buffer(expected: usize, actual: usize) -> Self {
        Self::MalformedBuffer { expected, actual }
    }

    /// Creates an invalid layout error.
    #[must_use]
    pub fn invalid_layout(reason: impl Into<String>) -> Self {
        Self::InvalidLayout(reason.into())
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Types(err.into())
    }
}

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;
