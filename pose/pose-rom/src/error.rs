//! Error types for range-of-motion evaluation.

use pose_decode::DecodeError;
use pose_types::BodyPart;
use thiserror::Error;

/// Errors that can occur while computing joint angles.
///
/// A pose that is measured but fails validation is not an error; it is
/// reported as a [`Rejection`](crate::Rejection).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RomError {
    /// A vector between two landmarks has zero length, so the angle is
    /// undefined.
    #[error("degenerate vector: coincident landmarks leave the angle undefined")]
    DegenerateVector,

    /// A landmark needed for an angle is absent or below the confidence gate.
    #[error("missing landmark: {0}")]
    MissingLandmark(BodyPart),

    /// Parameters are out of range.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// Decoding the model output failed.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl RomError {
    /// Creates an invalid parameters error.
    #[must_use]
    pub fn invalid_params(reason: impl Into<String>) -> Self {
        Self::InvalidParams(reason.into())
    }
}

impl From<serde_json::Error> for RomError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            Self::Deserialization(err.to_string())
        } else {
            Self::Serialization(err.to_string())
        }
    }
}

/// Result type for range-of-motion operations.
pub type Result<T> = std::result::Result<T, RomError>;
