//! Keypoint tensor layouts.

use pose_types::BodyPart;
use serde::{Deserialize, Serialize};

use crate::decoder::TRIPLET_LEN;
use crate::{DecodeError, Result};

/// Describes the keypoint tensor of a specific pose model.
///
/// The model emits `expected_count` triplets. The first `skip` are dropped and
/// triplet `i >= skip` becomes `parts[i - skip]`. Selecting a model is purely
/// a matter of picking a layout; the decoder never branches on model identity.
///
/// # Example
///
/// ```
/// use pose_decode::KeypointLayout;
/// use pose_types::BodyPart;
///
/// let layout = KeypointLayout::limbs_only();
/// assert_eq!(layout.buffer_len(), 51);
/// assert_eq!(layout.kept_count(), 12);
/// assert_eq!(layout.part_for(4), None);
/// assert_eq!(layout.part_for(5), Some(BodyPart::LeftShoulder));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeypointLayout {
    /// Number of `(y, x, score)` triplets in the tensor.
    pub expected_count: usize,

    /// Number of leading triplets to discard.
    pub skip: usize,

    /// Body part for each kept triplet, in tensor order.
    pub parts: Vec<BodyPart>,
}

impl KeypointLayout {
    /// Creates a validated layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is inconsistent, see [`Self::validate`].
    pub fn new(expected_count: usize, skip: usize, parts: Vec<BodyPart>) -> Result<Self> {
        let layout = Self {
            expected_count,
            skip,
            parts,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// All 17 COCO keypoints, face included.
    #[must_use]
    pub fn full_body() -> Self {
        Self {
            expected_count: BodyPart::COUNT,
            skip: 0,
            parts: BodyPart::ALL.to_vec(),
        }
    }

    /// A 17-keypoint model with the 5 face keypoints dropped.
    #[must_use]
    pub fn limbs_only() -> Self {
        Self {
            expected_count: BodyPart::COUNT,
            skip: BodyPart::FACE_COUNT,
            parts: BodyPart::LIMBS.to_vec(),
        }
    }

    /// Number of floats the buffer must hold.
    ///
    /// Saturates for counts that [`Self::validate`] rejects.
    #[must_use]
    pub const fn buffer_len(&self) -> usize {
        self.expected_count.saturating_mul(TRIPLET_LEN)
    }

    /// Number of landmarks a decode produces.
    #[must_use]
    pub const fn kept_count(&self) -> usize {
        self.expected_count.saturating_sub(self.skip)
    }

    /// Returns the body part for triplet `index`, or `None` if it is skipped
    /// or out of range.
    #[must_use]
    pub fn part_for(&self, index: usize) -> Option<BodyPart> {
        if index >= self.expected_count {
            return None;
        }
        index
            .checked_sub(self.skip)
            .and_then(|i| self.parts.get(i).copied())
    }

    /// Validates the layout.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `expected_count` triplets would not fit in a buffer length
    /// - `skip` exceeds `expected_count`
    /// - `parts` does not have exactly `expected_count - skip` entries
    /// - A body part appears twice in `parts`
    pub fn validate(&self) -> Result<()> {
        if self.expected_count.checked_mul(TRIPLET_LEN).is_none() {
            return Err(DecodeError::invalid_layout(format!(
                "expected count {} overflows the buffer length",
                self.expected_count
            )));
        }

        if self.skip > self.expected_count {
            return Err(DecodeError::invalid_layout(format!(
                "skip {} exceeds expected count {}",
                self.skip, self.expected_count
            )));
        }

        if self.parts.len() != self.kept_count() {
            return Err(DecodeError::invalid_layout(format!(
                "{} parts mapped for {} kept keypoints",
                self.parts.len(),
                self.kept_count()
            )));
        }

        let mut seen = [false; BodyPart::COUNT];
        for part in &self.parts {
            if std::mem::replace(&mut seen[part.index()], true) {
                return Err(DecodeError::invalid_layout(format!(
                    "body part {part} mapped twice"
                )));
            }
        }

        Ok(())
    }

    /// Serializes the layout to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(DecodeError::from)
    }

    /// Deserializes and validates a layout from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the layout is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }
}

impl Default for KeypointLayout {
    fn default() -> Self {
        Self::full_body()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        assert!(KeypointLayout::full_body().validate().is_ok());
        assert!(KeypointLayout::limbs_only().validate().is_ok());
        assert_eq!(KeypointLayout::default(), KeypointLayout::full_body());
    }

    #[test]
    fn full_body_maps_every_index() {
        let layout = KeypointLayout::full_body();
        assert_eq!(layout.kept_count(), 17);
        for (i, part) in BodyPart::ALL.iter().enumerate() {
            assert_eq!(layout.part_for(i), Some(*part));
        }
        assert_eq!(layout.part_for(17), None);
    }

    #[test]
    fn limbs_only_skips_face() {
        let layout = KeypointLayout::limbs_only();
        for i in 0..5 {
            assert_eq!(layout.part_for(i), None);
        }
        assert_eq!(layout.part_for(16), Some(BodyPart::RightAnkle));
    }

    #[test]
    fn rejects_skip_beyond_count() {
        let err = KeypointLayout::new(3, 4, Vec::new()).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidLayout(_)));
    }

    #[test]
    fn rejects_part_count_mismatch() {
        let err = KeypointLayout::new(17, 5, BodyPart::ALL.to_vec()).unwrap_err();
        assert!(err.to_string().contains("17 parts mapped for 12"));
    }

    #[test]
    fn rejects_duplicate_parts() {
        let parts = vec![BodyPart::LeftHip, BodyPart::LeftHip];
        let err = KeypointLayout::new(2, 0, parts).unwrap_err();
        assert!(err.to_string().contains("left_hip"));
    }

    #[test]
    fn custom_arm_layout() {
        let parts = vec![BodyPart::LeftShoulder, BodyPart::LeftElbow, BodyPart::LeftWrist];
        let layout = KeypointLayout::new(4, 1, parts).unwrap();
        assert_eq!(layout.buffer_len(), 12);
        assert_eq!(layout.part_for(3), Some(BodyPart::LeftWrist));
    }

    #[test]
    fn rejects_overflowing_count() {
        let json = format!(
            r#"{{"expected_count": {max}, "skip": {max}, "parts": []}}"#,
            max = usize::MAX
        );
        assert!(matches!(
            KeypointLayout::from_json(&json),
            Err(DecodeError::InvalidLayout(_))
        ));

        let layout = KeypointLayout {
            expected_count: usize::MAX / TRIPLET_LEN + 1,
            skip: usize::MAX / TRIPLET_LEN + 1,
            parts: Vec::new(),
        };
        assert!(layout.validate().is_err());
        assert_eq!(layout.buffer_len(), usize::MAX);
    }

    #[test]
    fn json_round_trip_validates() {
        let json = KeypointLayout::limbs_only().to_json().unwrap();
        assert_eq!(
            KeypointLayout::from_json(&json).unwrap(),
            KeypointLayout::limbs_only()
        );

        let bad = r#"{"expected_count": 17, "skip": 5, "parts": ["nose"]}"#;
        assert!(matches!(
            KeypointLayout::from_json(bad),
            Err(DecodeError::InvalidLayout(_))
        ));
    }
}
