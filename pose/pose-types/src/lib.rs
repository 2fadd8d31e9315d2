//! Body landmark types for single-person pose estimation.
//!
//! This crate provides the data model shared by the pose decoder and the
//! range-of-motion engine:
//!
//! - [`BodyPart`] - The 17 COCO body parts, with a 12-member limb subset
//! - [`Landmark`] - A named, confidence-scored 2D point in normalized coordinates
//! - [`Detection`] - One person's landmarks plus their mean confidence
//! - [`LandmarkMap`] - Fixed-size lookup of landmarks keyed by [`BodyPart`]
//! - [`Skeleton`] - Bone connections between body parts, for overlays
//!
//! # Layer 0 Crate
//!
//! This crate has no inference, camera or rendering dependencies. Positions are
//! always normalized to `[0, 1]` relative to the model input frame.
//!
//! # Example
//!
//! ```
//! use pose_types::{BodyPart, Detection, Landmark};
//!
//! let detection = Detection::new(vec![
//!     Landmark::new(BodyPart::LeftShoulder, 0.6, 0.4, 0.9),
//!     Landmark::new(BodyPart::RightShoulder, 0.4, 0.4, 0.7),
//! ])
//! .unwrap();
//!
//! assert_eq!(detection.len(), 2);
//! assert!((detection.score() - 0.8).abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod body_part;
mod detection;
mod error;
mod landmark;
mod skeleton;

pub use body_part::{BodyPart, Side};
pub use detection::{Detection, LandmarkMap};
pub use error::{PoseTypesError, Result};
pub use landmark::Landmark;
pub use skeleton::Skeleton;
