//! Shoulder range-of-motion angles and pose validation.
//!
//! Given one person's landmarks, this crate measures shoulder flexion on both
//! sides and decides whether the capture is usable:
//!
//! - [`angle_at`] - Angle at a vertex between two rays, with degenerate-vector
//!   detection
//! - [`SideAngles`] / [`JointAngleSet`] - Base, shoulder tilt, elbow and
//!   tilt-corrected final angles per side
//! - [`ValidationRule`] - Ordered rule chain (elbow extension, shoulder level)
//! - [`RomParams`] - Every threshold the rules use
//! - [`evaluate`] / [`measure`] - Entry points from a detection or a raw
//!   keypoint buffer
//!
//! # Angles
//!
//! For each side, with all positions in normalized image coordinates:
//!
//! | Angle | Vertex | Rays towards |
//! |-------|--------|--------------|
//! | base | shoulder | hip, elbow |
//! | shoulder tilt | shoulder | opposite shoulder, hip |
//! | elbow | elbow | shoulder, wrist |
//! | final | | `base - (90 - shoulder tilt)` |
//!
//! A missing landmark or a zero-length ray leaves the whole side undefined.
//!
//! # Example
//!
//! ```
//! use pose_rom::{RomParams, evaluate};
//! use pose_types::{BodyPart, Detection, Landmark};
//!
//! let detection = Detection::new(vec![
//!     Landmark::new(BodyPart::LeftShoulder, 0.6, 0.4, 0.9),
//!     Landmark::new(BodyPart::RightShoulder, 0.4, 0.4, 0.9),
//!     Landmark::new(BodyPart::LeftElbow, 0.75, 0.4, 0.9),
//!     Landmark::new(BodyPart::RightElbow, 0.25, 0.4, 0.9),
//!     Landmark::new(BodyPart::LeftWrist, 0.9, 0.4, 0.9),
//!     Landmark::new(BodyPart::RightWrist, 0.1, 0.4, 0.9),
//!     Landmark::new(BodyPart::LeftHip, 0.6, 0.8, 0.9),
//!     Landmark::new(BodyPart::RightHip, 0.4, 0.8, 0.9),
//! ])
//! .unwrap();
//!
//! let (angles, outcome) = evaluate(&detection, &RomParams::default());
//! assert!(outcome.accepted);
//!
//! let angles = angles.unwrap();
//! assert!((angles.left_final - 90.0).abs() < 1e-3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod angles;
mod engine;
mod error;
mod geometry;
mod params;
mod report;
mod rules;

pub use angles::{JointAngleSet, SideAngles};
pub use engine::{Evaluation, evaluate, evaluate_first, measure};
pub use error::{Result, RomError};
pub use geometry::{angle_at, degrees_from_cos, point};
pub use params::RomParams;
pub use report::ReportedAngle;
pub use rules::{Rejection, ShoulderLine, ValidationOutcome, ValidationRule, validate};

// Re-export nalgebra point type for convenience
pub use nalgebra::Point2;
