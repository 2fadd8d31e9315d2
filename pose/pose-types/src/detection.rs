//! Single-person detections and landmark lookup.

use serde::{Deserialize, Serialize};

use crate::{BodyPart, Landmark, PoseTypesError, Result};

/// All landmarks found for one person in one frame.
///
/// Landmarks keep the order they were produced in and hold at most one entry
/// per [`BodyPart`]. The score is the arithmetic mean of their confidences.
///
/// # Example
///
/// ```
/// use pose_types::{BodyPart, Detection, Landmark};
///
/// let detection = Detection::new(vec![
///     Landmark::new(BodyPart::LeftHip, 0.6, 0.7, 0.6),
///     Landmark::new(BodyPart::RightHip, 0.4, 0.7, 1.0),
/// ])
/// .unwrap();
///
/// assert!((detection.score() - 0.8).abs() < 1e-6);
/// assert!(detection.get(BodyPart::LeftHip).is_some());
/// assert!(detection.get(BodyPart::Nose).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DetectionRepr")]
pub struct Detection {
    landmarks: Vec<Landmark>,
    score: f32,
}

/// Serialized form; the score is recomputed on load.
#[derive(Deserialize)]
struct DetectionRepr {
    landmarks: Vec<Landmark>,
}

impl TryFrom<DetectionRepr> for Detection {
    type Error = PoseTypesError;

    fn try_from(repr: DetectionRepr) -> Result<Self> {
        Self::new(repr.landmarks)
    }
}

impl Detection {
    /// Creates a detection, scoring it by mean landmark confidence.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `landmarks` is empty (the mean would be undefined)
    /// - Two landmarks share a body part
    /// - A position or confidence is not finite
    pub fn new(landmarks: Vec<Landmark>) -> Result<Self> {
        if landmarks.is_empty() {
            return Err(PoseTypesError::EmptyDetection);
        }

        let mut seen = [false; BodyPart::COUNT];
        for lm in &landmarks {
            if !(lm.x.is_finite() && lm.y.is_finite()) {
                return Err(PoseTypesError::invalid_position(lm.body_part, lm.x, lm.y));
            }
            if !lm.confidence.is_finite() {
                return Err(PoseTypesError::invalid_confidence(
                    lm.body_part,
                    lm.confidence,
                ));
            }
            let slot = &mut seen[lm.body_part.index()];
            if *slot {
                return Err(PoseTypesError::DuplicateBodyPart(lm.body_part));
            }
            *slot = true;
        }

        let score = mean_confidence(&landmarks);
        Ok(Self { landmarks, score })
    }

    /// Returns the number of landmarks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Returns `true` if there are no landmarks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Returns the mean landmark confidence.
    #[must_use]
    pub const fn score(&self) -> f32 {
        self.score
    }

    /// Returns the landmarks in production order.
    #[must_use]
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Finds the landmark for a body part.
    #[must_use]
    pub fn get(&self, part: BodyPart) -> Option<&Landmark> {
        self.landmarks.iter().find(|lm| lm.body_part == part)
    }

    /// Returns the number of landmarks at or above the threshold.
    #[must_use]
    pub fn visible_count(&self, threshold: f32) -> usize {
        self.landmarks
            .iter()
            .filter(|lm| lm.is_visible(threshold))
            .count()
    }

    /// Builds an indexed lookup of the landmarks.
    #[must_use]
    pub fn landmark_map(&self) -> LandmarkMap {
        LandmarkMap::from_landmarks(&self.landmarks, f32::NEG_INFINITY)
    }

    /// Serializes the detection to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(PoseTypesError::from)
    }

    /// Deserializes a detection from JSON and re-checks its landmarks.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the landmarks fail the
    /// checks done by [`Detection::new`].
    pub fn from_json(json: &str) -> Result<Self> {
        let repr: DetectionRepr = serde_json::from_str(json)?;
        Self::try_from(repr)
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean_confidence(landmarks: &[Landmark]) -> f32 {
    let sum: f32 = landmarks.iter().map(|lm| lm.confidence).sum();
    sum / landmarks.len() as f32
}

/// Fixed-size landmark lookup keyed by [`BodyPart`].
///
/// Built once per evaluation so every required landmark is an O(1) access.
///
/// # Example
///
/// ```
/// use pose_types::{BodyPart, Landmark, LandmarkMap};
///
/// let landmarks = [
///     Landmark::new(BodyPart::LeftWrist, 0.2, 0.2, 0.9),
///     Landmark::new(BodyPart::RightWrist, 0.8, 0.2, 0.1),
/// ];
/// let map = LandmarkMap::from_landmarks(&landmarks, 0.3);
///
/// assert!(map.contains(BodyPart::LeftWrist));
/// assert!(!map.contains(BodyPart::RightWrist)); // below 0.3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LandmarkMap {
    slots: [Option<Landmark>; BodyPart::COUNT],
}

impl LandmarkMap {
    /// Indexes landmarks whose confidence is at least `min_confidence`.
    ///
    /// Later duplicates overwrite earlier ones.
    #[must_use]
    pub fn from_landmarks(landmarks: &[Landmark], min_confidence: f32) -> Self {
        let mut slots = [None; BodyPart::COUNT];
        for lm in landmarks.iter().filter(|lm| lm.is_visible(min_confidence)) {
            slots[lm.body_part.index()] = Some(*lm);
        }
        Self { slots }
    }

    /// Returns the landmark for a body part, if present.
    #[must_use]
    pub const fn get(&self, part: BodyPart) -> Option<&Landmark> {
        self.slots[part.index()].as_ref()
    }

    /// Returns `true` if the body part is present.
    #[must_use]
    pub const fn contains(&self, part: BodyPart) -> bool {
        self.slots[part.index()].is_some()
    }

    /// Returns the first of `parts` that is missing, if any.
    #[must_use]
    pub fn first_missing(&self, parts: &[BodyPart]) -> Option<BodyPart> {
        parts.iter().copied().find(|&p| !self.contains(p))
    }

    /// Returns the number of present landmarks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Returns `true` if no landmark is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
