//! Error types for pose-types crate.

use thiserror::Error;

use crate::BodyPart;

/// Errors that can occur when building pose types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PoseTypesError {
    /// A detection listed the same body part twice.
    #[error("duplicate landmark for body part {0}")]
    DuplicateBodyPart(BodyPart),

    /// A detection was built from zero landmarks.
    #[error("detection has no landmarks")]
    EmptyDetection,

    /// Landmark confidence is not a finite number.
    #[error("invalid confidence {value} for {part}")]
    InvalidConfidence {
        /// The body part carrying the bad value.
        part: BodyPart,
        /// The invalid confidence value.
        value: f32,
    },

    /// Landmark position is not a finite number.
    #[error("invalid position ({x}, {y}) for {part}")]
    InvalidPosition {
        /// The body part carrying the bad value.
        part: BodyPart,
        /// Horizontal coordinate.
        x: f32,
        /// Vertical coordinate.
        y: f32,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl PoseTypesError {
    /// Creates an invalid confidence error.
    #[must_use]
    pub const fn invalid_confidence(part: BodyPart, value: f32) -> Self {
        Self::InvalidConfidence { part, value }
    }

    /// Creates an invalid position error.
    #[must_use]
    pub const fn invalid_position(part: BodyPart, x: f32, y: f32) -> Self {
        Self::InvalidPosition { part, x, y }
    }
}

impl From<serde_json::Error> for PoseTypesError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            Self::Deserialization(err.to_string())
        } else {
            Self::Serialization(err.to_string())
        }
    }
}

/// Result type for pose-types operations.
pub type Result<T> = std::result::Result<T, PoseTypesError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn error_duplicate_body_part() {
        let err = PoseTypesError::DuplicateBodyPart(BodyPart::LeftWrist);
        assert!(err.to_string().contains("left_wrist"));
    }

    #[test]
    fn error_invalid_confidence() {
        let err = PoseTypesError::invalid_confidence(BodyPart::Nose, f32::NAN);
        assert!(err.to_string().contains("NaN"));
        assert!(err.to_string().contains("nose"));
    }

    #[test]
    fn error_invalid_position() {
        let err = PoseTypesError::invalid_position(BodyPart::LeftWrist, f32::NAN, 0.4);
        assert!(err.to_string().contains("(NaN, 0.4)"));
        assert!(err.to_string().contains("left_wrist"));
    }

    #[test]
    fn error_from_serde_error() {
        let json_err = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: PoseTypesError = json_err.into();
        assert!(matches!(err, PoseTypesError::Deserialization(_)));
    }
}
