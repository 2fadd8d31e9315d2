//! Body part identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A body part from the COCO 17-keypoint topology.
///
/// The discriminant is the COCO keypoint index, so `BodyPart::ALL[i]` is the
/// part emitted at position `i` by a full-body model.
///
/// # Example
///
/// ```
/// use pose_types::{BodyPart, Side};
///
/// assert_eq!(BodyPart::LeftShoulder.index(), 5);
/// assert_eq!(BodyPart::LeftShoulder.mirror(), BodyPart::RightShoulder);
/// assert_eq!(BodyPart::RightHip.side(), Some(Side::Right));
/// assert!(BodyPart::Nose.is_face());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    /// Nose.
    Nose = 0,
    /// Left eye.
    LeftEye = 1,
    /// Right eye.
    RightEye = 2,
    /// Left ear.
    LeftEar = 3,
    /// Right ear.
    RightEar = 4,
    /// Left shoulder.
    LeftShoulder = 5,
    /// Right shoulder.
    RightShoulder = 6,
    /// Left elbow.
    LeftElbow = 7,
    /// Right elbow.
    RightElbow = 8,
    /// Left wrist.
    LeftWrist = 9,
    /// Right wrist.
    RightWrist = 10,
    /// Left hip.
    LeftHip = 11,
    /// Right hip.
    RightHip = 12,
    /// Left knee.
    LeftKnee = 13,
    /// Right knee.
    RightKnee = 14,
    /// Left ankle.
    LeftAnkle = 15,
    /// Right ankle.
    RightAnkle = 16,
}

impl BodyPart {
    /// Number of body parts in the full topology.
    pub const COUNT: usize = 17;

    /// Number of leading face parts (nose, eyes, ears).
    pub const FACE_COUNT: usize = 5;

    /// All body parts in COCO index order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Nose,
        Self::LeftEye,
        Self::RightEye,
        Self::LeftEar,
        Self::RightEar,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
    ];

    /// The 12 limb and torso parts, excluding the face.
    pub const LIMBS: [Self; Self::COUNT - Self::FACE_COUNT] = [
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
    ];

    /// Returns the COCO keypoint index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the body part at a COCO keypoint index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns the snake_case name used in serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEye => "left_eye",
            Self::RightEye => "right_eye",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }

    /// Returns `true` for nose, eyes and ears.
    #[must_use]
    pub const fn is_face(self) -> bool {
        self.index() < Self::FACE_COUNT
    }

    /// Returns which side of the body this part is on (`None` for the nose).
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Nose => None,
            // COCO interleaves left/right after the nose: odd indices are left.
            _ if self.index() % 2 == 1 => Some(Side::Left),
            _ => Some(Side::Right),
        }
    }

    /// Returns the same part on the opposite side of the body.
    #[must_use]
    pub const fn mirror(self) -> Self {
        match self.side() {
            None => self,
            Some(Side::Left) => Self::ALL[self.index() + 1],
            Some(Side::Right) => Self::ALL[self.index() - 1],
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Side of the body, from the subject's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The subject's left.
    Left,
    /// The subject's right.
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// Returns the other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Shoulder on this side.
    #[must_use]
    pub const fn shoulder(self) -> BodyPart {
        match self {
            Self::Left => BodyPart::LeftShoulder,
            Self::Right => BodyPart::RightShoulder,
        }
    }

    /// Elbow on this side.
    #[must_use]
    pub const fn elbow(self) -> BodyPart {
        match self {
            Self::Left => BodyPart::LeftElbow,
            Self::Right => BodyPart::RightElbow,
        }
    }

    /// Wrist on this side.
    #[must_use]
    pub const fn wrist(self) -> BodyPart {
        match self {
            Self::Left => BodyPart::LeftWrist,
            Self::Right => BodyPart::RightWrist,
        }
    }

    /// Hip on this side.
    #[must_use]
    pub const fn hip(self) -> BodyPart {
        match self {
            Self::Left => BodyPart::LeftHip,
            Self::Right => BodyPart::RightHip,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}
