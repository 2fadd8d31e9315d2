//! Evaluation entry points.
//!
//! Every function here is pure: the same input always yields the same
//! [`Evaluation`], and nothing is cached between calls.

use pose_decode::{DecodeError, KeypointLayout, decode};
use pose_types::{Detection, LandmarkMap};
use tracing::{debug, warn};

use crate::rules::{Rejection, ShoulderLine, ValidationOutcome, validate};
use crate::{JointAngleSet, Result, RomParams};

/// Angles (when all of them could be computed) plus the validation outcome.
///
/// The angle set is kept on a rule rejection so callers can still show what
/// was measured. It is `None` only when no pose was found or a required
/// landmark was missing or degenerate.
pub type Evaluation = (Option<JointAngleSet>, ValidationOutcome);

/// Computes the joint angles of one detection and runs the rule chain.
///
/// Landmarks below `params.min_landmark_confidence` are treated as absent.
/// Parameters that fail [`RomParams::validate`] reject the pose as
/// [`Rejection::InvalidParams`] before any angle is computed.
///
/// # Example
///
/// ```
/// use pose_rom::{RomParams, evaluate};
/// use pose_types::{BodyPart, Detection, Landmark};
///
/// let detection = Detection::new(vec![
///     Landmark::new(BodyPart::LeftShoulder, 0.6, 0.4, 0.9),
///     Landmark::new(BodyPart::RightShoulder, 0.4, 0.4, 0.9),
/// ])
/// .unwrap();
///
/// let (angles, outcome) = evaluate(&detection, &RomParams::default());
/// assert!(angles.is_none());
/// assert_eq!(outcome.reason, "cannot compute angles");
/// ```
#[must_use]
pub fn evaluate(detection: &Detection, params: &RomParams) -> Evaluation {
    if let Err(err) = params.validate() {
        warn!(error = %err, "Rejecting pose: invalid parameters");
        return (None, ValidationOutcome::reject(Rejection::InvalidParams));
    }

    let map = LandmarkMap::from_landmarks(detection.landmarks(), params.min_landmark_confidence);

    let angles = match JointAngleSet::compute(&map) {
        Ok(angles) => angles,
        Err(err) => {
            debug!(error = %err, "Angles incomplete");
            return (None, ValidationOutcome::reject(Rejection::Incomplete));
        }
    };

    // Both shoulders are required parts, so this only fails on a bug.
    let Some(shoulders) = ShoulderLine::from_map(&map) else {
        return (None, ValidationOutcome::reject(Rejection::Incomplete));
    };

    let outcome = validate(&angles, &shoulders, params);
    (Some(angles), outcome)
}

/// Evaluates the first detection of a frame.
///
/// Single-person models emit at most one detection; an empty slice means no
/// person was found.
#[must_use]
pub fn evaluate_first(detections: &[Detection], params: &RomParams) -> Evaluation {
    detections.first().map_or_else(
        || (None, ValidationOutcome::reject(Rejection::NoPose)),
        |detection| evaluate(detection, params),
    )
}

/// Decodes a raw keypoint buffer and evaluates the resulting detection.
///
/// # Errors
///
/// Returns an error if:
/// - `params` fail validation
/// - the buffer length does not match `layout`, the layout is invalid, or a
///   kept value is not finite
///
/// A buffer that decodes to no landmarks is not an error; it is rejected as
/// [`Rejection::NoPose`].
pub fn measure(
    buffer: &[f32],
    layout: &KeypointLayout,
    params: &RomParams,
) -> Result<Evaluation> {
    params.validate()?;

    match decode(buffer, layout) {
        Ok(detection) => Ok(evaluate(&detection, params)),
        Err(DecodeError::EmptyDetection) => {
            Ok((None, ValidationOutcome::reject(Rejection::NoPose)))
        }
        Err(err) => Err(err.into()),
    }
}
