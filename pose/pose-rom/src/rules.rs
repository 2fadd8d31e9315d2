//! Pose validation rule chain.
//!
//! Rules run in a fixed order and the first failure decides the outcome:
//!
//! 1. Left elbow extension
//! 2. Right elbow extension
//! 3. Shoulder level (off by default)

use nalgebra::Point2;
use pose_types::{LandmarkMap, Side};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::geometry::point;
use crate::{JointAngleSet, RomParams};

/// Why a capture cannot be used. The display text is shown to the user.
#[derive(Debug, Error, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// No detection to evaluate.
    #[error("pose not detected")]
    NoPose,

    /// A landmark needed for the angles is missing or degenerate.
    #[error("cannot compute angles")]
    Incomplete,

    /// The evaluation parameters failed validation.
    #[error("invalid measurement parameters")]
    InvalidParams,

    /// An elbow is bent beyond the allowed amount.
    #[error("{side} elbow bent more than {max_bend} degrees; recapture.")]
    ElbowBent {
        /// Which elbow.
        side: Side,
        /// Measured elbow angle in degrees.
        angle: f32,
        /// Allowed bend in degrees.
        max_bend: f32,
    },

    /// The shoulder line is tilted beyond the allowed amount.
    #[error(
        "shoulders differ in height by more than {threshold} degrees; \
         {higher} shoulder is {tilt:.1} degrees higher. level your shoulders and recapture."
    )]
    ShouldersUneven {
        /// Which shoulder sits higher in the frame.
        higher: Side,
        /// Tilt of the shoulder line from horizontal, in degrees.
        tilt: f32,
        /// Allowed tilt in degrees.
        threshold: f32,
    },
}

/// Result of running the rule chain.
///
/// `reason` is empty when accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// Whether the pose can be used for measurement.
    pub accepted: bool,
    /// User-facing reason for a rejection.
    pub reason: String,
    /// Structured form of the rejection.
    pub rejection: Option<Rejection>,
}

impl ValidationOutcome {
    /// An accepted outcome.
    #[must_use]
    pub const fn accept() -> Self {
        Self {
            accepted: true,
            reason: String::new(),
            rejection: None,
        }
    }

    /// A rejected outcome carrying the rejection's message.
    #[must_use]
    pub fn reject(rejection: Rejection) -> Self {
        Self {
            accepted: false,
            reason: rejection.to_string(),
            rejection: Some(rejection),
        }
    }
}

impl From<Option<Rejection>> for ValidationOutcome {
    fn from(rejection: Option<Rejection>) -> Self {
        rejection.map_or_else(Self::accept, Self::reject)
    }
}

/// The line between the two shoulders, in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShoulderLine {
    /// Left shoulder position.
    pub left: Point2<f32>,
    /// Right shoulder position.
    pub right: Point2<f32>,
}

impl ShoulderLine {
    /// Reads both shoulders from the map.
    #[must_use]
    pub fn from_map(map: &LandmarkMap) -> Option<Self> {
        Some(Self {
            left: point(map.get(Side::Left.shoulder())?),
            right: point(map.get(Side::Right.shoulder())?),
        })
    }

    /// Signed tilt of the line from horizontal, in degrees.
    ///
    /// Image y grows downward, so the slope is negated to make "up" positive.
    /// Vertically stacked shoulders give ±90°.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn tilt_degrees(&self) -> f32 {
        let dx = f64::from(self.right.x) - f64::from(self.left.x);
        let dy = f64::from(self.right.y) - f64::from(self.left.y);
        let slope = -(dy / dx);
        slope.atan().to_degrees() as f32
    }

    /// The shoulder nearer the top of the frame (left when level).
    #[must_use]
    pub fn higher(&self) -> Side {
        if self.right.y < self.left.y {
            Side::Right
        } else {
            Side::Left
        }
    }
}

/// One check in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationRule {
    /// The elbow on this side must be near full extension.
    ElbowExtension(Side),
    /// The shoulder line must be near horizontal.
    ShoulderLevel,
}

impl ValidationRule {
    /// The enabled rules, in evaluation order.
    #[must_use]
    pub fn chain(params: &RomParams) -> Vec<Self> {
        let mut rules = Vec::with_capacity(3);
        if params.check_elbows {
            rules.extend(Side::BOTH.map(Self::ElbowExtension));
        }
        if params.check_shoulder_level {
            rules.push(Self::ShoulderLevel);
        }
        rules
    }

    /// Runs this rule, returning the rejection if it fails.
    #[must_use]
    pub fn check(
        self,
        angles: &JointAngleSet,
        shoulders: &ShoulderLine,
        params: &RomParams,
    ) -> Option<Rejection> {
        match self {
            Self::ElbowExtension(side) => {
                let angle = angles.elbow(side);
                (angle < params.elbow_angle_threshold).then(|| Rejection::ElbowBent {
                    side,
                    angle,
                    max_bend: params.max_elbow_bend(),
                })
            }
            Self::ShoulderLevel => {
                let tilt = shoulders.tilt_degrees().abs();
                (tilt > params.shoulder_tilt_threshold).then(|| Rejection::ShouldersUneven {
                    higher: shoulders.higher(),
                    tilt,
                    threshold: params.shoulder_tilt_threshold,
                })
            }
        }
    }
}

/// Runs the enabled rules in order and stops at the first failure.
#[must_use]
pub fn validate(
    angles: &JointAngleSet,
    shoulders: &ShoulderLine,
    params: &RomParams,
) -> ValidationOutcome {
    let rejection = ValidationRule::chain(params)
        .into_iter()
        .find_map(|rule| rule.check(angles, shoulders, params));

    if let Some(rejection) = &rejection {
        debug!(%rejection, "Pose rejected");
    }
    rejection.into()
}
