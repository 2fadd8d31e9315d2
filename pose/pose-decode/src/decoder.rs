//! Keypoint buffer decoding.

use pose_types::{Detection, Landmark};
use tracing::debug;

use crate::{DecodeError, KeypointLayout, Result};

/// Floats per keypoint: `(y, x, score)`.
pub const TRIPLET_LEN: usize = 3;

/// Decodes a flat keypoint tensor into a single-person [`Detection`].
///
/// Each triplet is read as `(y, x, score)`; y comes first because that is how
/// the model lays out its output. Triplets before `layout.skip` are discarded,
/// the rest become landmarks in increasing index order. No confidence
/// filtering happens here.
///
/// # Errors
///
/// - [`DecodeError::InvalidLayout`] if the layout is inconsistent
/// - [`DecodeError::MalformedBuffer`] if `buffer.len() != layout.buffer_len()`
/// - [`DecodeError::NonFiniteValue`] if a kept triplet holds `NaN` or infinity
/// - [`DecodeError::EmptyDetection`] if no triplet is kept
///
/// # Example
///
/// ```
/// use pose_decode::{KeypointLayout, decode};
/// use pose_types::BodyPart;
///
/// let layout = KeypointLayout::new(2, 0, vec![BodyPart::LeftWrist, BodyPart::RightWrist])
///     .unwrap();
/// // (y, x, score) per keypoint
/// let buffer = [0.2, 0.7, 0.9, 0.3, 0.1, 0.5];
///
/// let detection = decode(&buffer, &layout).unwrap();
/// let wrist = detection.get(BodyPart::LeftWrist).unwrap();
/// assert_eq!(wrist.position(), [0.7, 0.2]);
/// assert!((detection.score() - 0.7).abs() < 1e-6);
/// ```
pub fn decode(buffer: &[f32], layout: &KeypointLayout) -> Result<Detection> {
    layout.validate()?;

    let expected = layout.buffer_len();
    if buffer.len() != expected {
        return Err(DecodeError::malformed_buffer(expected, buffer.len()));
    }

    let mut landmarks = Vec::with_capacity(layout.kept_count());
    for (index, triplet) in buffer.chunks_exact(TRIPLET_LEN).enumerate() {
        let Some(part) = layout.part_for(index) else {
            continue;
        };
        let &[y, x, score] = triplet else {
            continue;
        };
        if !(y.is_finite() && x.is_finite() && score.is_finite()) {
            return Err(DecodeError::NonFiniteValue { index });
        }
        landmarks.push(Landmark::new(part, x, y, score));
    }

    if landmarks.is_empty() {
        return Err(DecodeError::EmptyDetection);
    }

    let detection = Detection::new(landmarks)?;
    debug!(
        landmarks = detection.len(),
        skipped = layout.skip,
        score = detection.score(),
        "Decoded keypoint buffer"
    );
    Ok(detection)
}
