//! Named, confidence-scored body landmarks.

use serde::{Deserialize, Serialize};

use crate::BodyPart;

/// A single detected body landmark.
///
/// Coordinates are normalized to `[0, 1]` relative to the model input frame,
/// not pixels.
///
/// # Example
///
/// ```
/// use pose_types::{BodyPart, Landmark};
///
/// let wrist = Landmark::new(BodyPart::LeftWrist, 0.5, 0.3, 0.95);
/// assert!(wrist.is_visible(0.5));
/// assert_eq!(wrist.position(), [0.5, 0.3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Which body part this landmark marks.
    pub body_part: BodyPart,
    /// X coordinate (normalized `[0, 1]`).
    pub x: f32,
    /// Y coordinate (normalized `[0, 1]`, growing downward).
    pub y: f32,
    /// Model confidence score.
    pub confidence: f32,
}

impl Landmark {
    /// Creates a new landmark.
    #[must_use]
    pub const fn new(body_part: BodyPart, x: f32, y: f32, confidence: f32) -> Self {
        Self {
            body_part,
            x,
            y,
            confidence,
        }
    }

    /// Returns the position as `[x, y]`.
    #[must_use]
    pub const fn position(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Returns `true` if the landmark is detected above the threshold.
    #[must_use]
    pub fn is_visible(&self, threshold: f32) -> bool {
        self.confidence >= threshold
    }

    /// Returns the pixel coordinates for a given image size.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_pixels(&self, width: u32, height: u32) -> (f32, f32) {
        (self.x * width as f32, self.y * height as f32)
    }

    /// Computes the Euclidean distance to another landmark.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }

    /// Returns `true` if the landmark sits at the same position as another.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn coincides_with(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }

    /// Checks that the position lies inside the normalized frame.
    #[must_use]
    pub fn is_in_frame(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}
