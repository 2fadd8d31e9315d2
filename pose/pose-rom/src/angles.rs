//! Per-side shoulder and elbow angles.

use nalgebra::Point2;
use pose_types::{BodyPart, LandmarkMap, Side};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::{angle_at, point};
use crate::report::ReportedAngle;
use crate::{Result, RomError};

/// Shoulder tilt angle that needs no correction (torso square to the frame).
const SQUARE_TILT_DEG: f32 = 90.0;

/// Angles measured on one side of the body, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideAngles {
    /// Angle at the shoulder between hip and elbow.
    pub base: f32,
    /// Angle at the shoulder between the opposite shoulder and the hip.
    pub shoulder_tilt: f32,
    /// Angle at the elbow between shoulder and wrist.
    pub elbow: f32,
    /// Tilt-corrected shoulder flexion: `base - (90 - shoulder_tilt)`.
    pub final_angle: f32,
}

impl SideAngles {
    /// Landmarks every side needs, in check order.
    #[must_use]
    pub const fn required_parts(side: Side) -> [BodyPart; 5] {
        [
            side.shoulder(),
            side.elbow(),
            side.wrist(),
            side.hip(),
            side.opposite().shoulder(),
        ]
    }

    /// Computes the angles for one side.
    ///
    /// # Errors
    ///
    /// - [`RomError::MissingLandmark`] if any required landmark is absent
    /// - [`RomError::DegenerateVector`] if two landmarks an angle depends on
    ///   coincide
    ///
    /// Either way the whole side is undefined; there are no partial results.
    pub fn compute(map: &LandmarkMap, side: Side) -> Result<Self> {
        let [shoulder, elbow, wrist, hip, opposite] =
            Self::required_parts(side).map(|part| require(map, part));
        let (shoulder, elbow, wrist, hip, opposite) =
            (shoulder?, elbow?, wrist?, hip?, opposite?);

        let base = angle_at(shoulder, hip, elbow)?;
        let shoulder_tilt = angle_at(shoulder, opposite, hip)?;
        let elbow = angle_at(elbow, shoulder, wrist)?;
        let final_angle = base - (SQUARE_TILT_DEG - shoulder_tilt);

        debug!(
            %side,
            base,
            shoulder_tilt,
            elbow,
            final_angle,
            "Computed side angles"
        );

        Ok(Self {
            base,
            shoulder_tilt,
            elbow,
            final_angle,
        })
    }
}

fn require(map: &LandmarkMap, part: BodyPart) -> Result<Point2<f32>> {
    map.get(part)
        .map(point)
        .ok_or(RomError::MissingLandmark(part))
}

/// Every angle for both sides of one detection, in degrees.
///
/// Only exists when both sides could be computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JointAngleSet {
    /// Left shoulder-elbow-hip angle.
    pub left_base: f32,
    /// Right shoulder-elbow-hip angle.
    pub right_base: f32,
    /// Left shoulder tilt angle.
    pub left_shoulder: f32,
    /// Right shoulder tilt angle.
    pub right_shoulder: f32,
    /// Left elbow angle.
    pub left_elbow: f32,
    /// Right elbow angle.
    pub right_elbow: f32,
    /// Left tilt-corrected angle.
    pub left_final: f32,
    /// Right tilt-corrected angle.
    pub right_final: f32,
}

impl JointAngleSet {
    /// Combines the two sides.
    #[must_use]
    pub const fn from_sides(left: SideAngles, right: SideAngles) -> Self {
        Self {
            left_base: left.base,
            right_base: right.base,
            left_shoulder: left.shoulder_tilt,
            right_shoulder: right.shoulder_tilt,
            left_elbow: left.elbow,
            right_elbow: right.elbow,
            left_final: left.final_angle,
            right_final: right.final_angle,
        }
    }

    /// Computes both sides.
    ///
    /// # Errors
    ///
    /// Returns the first side's error if either side is incomplete.
    pub fn compute(map: &LandmarkMap) -> Result<Self> {
        let left = SideAngles::compute(map, Side::Left)?;
        let right = SideAngles::compute(map, Side::Right)?;
        Ok(Self::from_sides(left, right))
    }

    /// Returns the angles of one side.
    #[must_use]
    pub const fn side(&self, side: Side) -> SideAngles {
        match side {
            Side::Left => SideAngles {
                base: self.left_base,
                shoulder_tilt: self.left_shoulder,
                elbow: self.left_elbow,
                final_angle: self.left_final,
            },
            Side::Right => SideAngles {
                base: self.right_base,
                shoulder_tilt: self.right_shoulder,
                elbow: self.right_elbow,
                final_angle: self.right_final,
            },
        }
    }

    /// Returns the elbow angle of one side.
    #[must_use]
    pub const fn elbow(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_elbow,
            Side::Right => self.right_elbow,
        }
    }

    /// Returns the reported reading of one side's final angle.
    #[must_use]
    pub fn report(&self, side: Side, tolerance: f32) -> ReportedAngle {
        ReportedAngle::new(self.side(side).final_angle, tolerance)
    }
}
