//! Bone connections between body parts.

use serde::{Deserialize, Serialize};

use crate::{BodyPart, LandmarkMap};

/// A skeleton topology: which body parts are joined by bones.
///
/// Used by overlay collaborators to draw a detection.
///
/// # Example
///
/// ```
/// use pose_types::{BodyPart, Skeleton};
///
/// let skeleton = Skeleton::arms_and_torso();
/// assert_eq!(skeleton.num_bones(), 7);
/// assert!(skeleton.connects(BodyPart::LeftElbow, BodyPart::LeftWrist));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skeleton {
    bones: Vec<(BodyPart, BodyPart)>,
}

impl Skeleton {
    /// Creates a skeleton from explicit bones.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn new(bones: Vec<(BodyPart, BodyPart)>) -> Self {
        Self { bones }
    }

    /// Shoulder girdle, both arms and both shoulder-to-hip lines.
    ///
    /// These are the bones the shoulder measurement depends on.
    #[must_use]
    pub fn arms_and_torso() -> Self {
        use BodyPart::{LeftElbow, LeftHip, LeftShoulder, LeftWrist};
        use BodyPart::{RightElbow, RightHip, RightShoulder, RightWrist};

        Self::new(vec![
            (LeftShoulder, RightShoulder),
            (LeftShoulder, LeftElbow),
            (LeftElbow, LeftWrist),
            (RightShoulder, RightElbow),
            (RightElbow, RightWrist),
            (LeftShoulder, LeftHip),
            (RightShoulder, RightHip),
        ])
    }

    /// Arms and torso plus hips and legs.
    #[must_use]
    pub fn full_body() -> Self {
        use BodyPart::{LeftAnkle, LeftHip, LeftKnee, RightAnkle, RightHip, RightKnee};

        let mut skeleton = Self::arms_and_torso();
        skeleton.bones.extend([
            (LeftHip, RightHip),
            (LeftHip, LeftKnee),
            (LeftKnee, LeftAnkle),
            (RightHip, RightKnee),
            (RightKnee, RightAnkle),
        ]);
        skeleton
    }

    /// Returns the number of bones.
    #[must_use]
    pub fn num_bones(&self) -> usize {
        self.bones.len()
    }

    /// Returns the bones.
    #[must_use]
    pub fn bones(&self) -> &[(BodyPart, BodyPart)] {
        &self.bones
    }

    /// Returns `true` if a bone joins the two parts, in either direction.
    #[must_use]
    pub fn connects(&self, a: BodyPart, b: BodyPart) -> bool {
        self.bones
            .iter()
            .any(|&(from, to)| (from, to) == (a, b) || (from, to) == (b, a))
    }

    /// Returns the bones whose two endpoints are both present in `map`.
    #[must_use]
    pub fn drawable_bones(&self, map: &LandmarkMap) -> Vec<(BodyPart, BodyPart)> {
        self.bones
            .iter()
            .copied()
            .filter(|&(a, b)| map.contains(a) && map.contains(b))
            .collect()
    }
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::full_body()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Landmark;

    #[test]
    fn arms_and_torso_bones() {
        let skel = Skeleton::arms_and_torso();
        assert_eq!(skel.num_bones(), 7);
        assert!(skel.connects(BodyPart::RightShoulder, BodyPart::LeftShoulder));
        assert!(skel.connects(BodyPart::RightHip, BodyPart::RightShoulder));
        assert!(!skel.connects(BodyPart::LeftHip, BodyPart::RightHip));
    }

    #[test]
    fn full_body_extends_torso() {
        let skel = Skeleton::full_body();
        assert_eq!(skel.num_bones(), 12);
        assert!(skel.connects(BodyPart::LeftHip, BodyPart::RightHip));
        assert!(skel.connects(BodyPart::RightAnkle, BodyPart::RightKnee));
        assert!(skel.bones().iter().all(|(a, b)| !a.is_face() && !b.is_face()));
    }

    #[test]
    fn drawable_bones_need_both_ends() {
        let map = LandmarkMap::from_landmarks(
            &[
                Landmark::new(BodyPart::LeftShoulder, 0.6, 0.4, 0.9),
                Landmark::new(BodyPart::LeftElbow, 0.7, 0.3, 0.9),
                Landmark::new(BodyPart::RightShoulder, 0.4, 0.4, 0.9),
            ],
            0.0,
        );
        let bones = Skeleton::arms_and_torso().drawable_bones(&map);
        assert_eq!(
            bones,
            vec![
                (BodyPart::LeftShoulder, BodyPart::RightShoulder),
                (BodyPart::LeftShoulder, BodyPart::LeftElbow),
            ]
        );
    }
}
