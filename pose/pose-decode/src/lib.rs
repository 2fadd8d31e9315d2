//! Pose-model output decoding.
//!
//! Turns the flat `(y, x, score)` keypoint tensor produced by a single-person
//! pose model into a [`Detection`] of named landmarks.
//!
//! - [`KeypointLayout`] - How many triplets the model emits, how many leading
//!   triplets to drop, and which [`BodyPart`] each kept triplet is
//! - [`decode`] - The decoder itself
//!
//! The decoder does not run or load a model, and it never filters landmarks by
//! confidence. Thresholding belongs to whoever consumes the detection.
//!
//! # Example
//!
//! ```
//! use pose_decode::{KeypointLayout, decode};
//! use pose_types::BodyPart;
//!
//! // 17 triplets from a full-body model; keep only the 12 limb points.
//! let buffer = vec![0.5_f32; 17 * 3];
//! let detection = decode(&buffer, &KeypointLayout::limbs_only()).unwrap();
//!
//! assert_eq!(detection.len(), 12);
//! assert_eq!(detection.landmarks()[0].body_part, BodyPart::LeftShoulder);
//! ```
//!
//! [`Detection`]: pose_types::Detection
//! [`BodyPart`]: pose_types::BodyPart

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod decoder;
mod error;
mod layout;

pub use decoder::{TRIPLET_LEN, decode};
pub use error::{DecodeError, Result};
pub use layout::KeypointLayout;
