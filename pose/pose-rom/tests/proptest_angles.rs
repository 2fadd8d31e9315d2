//! Property-based tests for joint-angle geometry.
//!
//! Run with: cargo test -p pose-rom -- proptest

#![allow(clippy::unwrap_used)]
#![allow(clippy::float_cmp)]

use pose_rom::{Point2, ReportedAngle, RomError, RomParams, angle_at, evaluate};
use pose_types::{BodyPart, Detection, Landmark};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// A point in normalized image coordinates.
fn arb_point() -> impl Strategy<Value = Point2<f32>> {
    (0.0f32..=1.0, 0.0f32..=1.0).prop_map(|(x, y)| Point2::new(x, y))
}

/// A coordinate that may be `NaN` or infinite.
fn arb_any_coord() -> impl Strategy<Value = f32> {
    prop_oneof![
        8 => 0.0f32..=1.0,
        1 => Just(f32::NAN),
        1 => Just(f32::INFINITY),
        1 => Just(f32::NEG_INFINITY),
    ]
}

/// A point that may hold non-finite coordinates.
fn arb_any_point() -> impl Strategy<Value = Point2<f32>> {
    (arb_any_coord(), arb_any_coord()).prop_map(|(x, y)| Point2::new(x, y))
}

/// A vertex with two endpoints that are clearly distinct from it.
fn arb_triangle() -> impl Strategy<Value = (Point2<f32>, Point2<f32>, Point2<f32>)> {
    (arb_point(), arb_point(), arb_point()).prop_filter("endpoints must leave the vertex", |(v, a, b)| {
        (a - v).norm() > 1e-3 && (b - v).norm() > 1e-3
    })
}

/// A detection holding every landmark the engine needs, at random positions.
fn arb_upper_body() -> impl Strategy<Value = Detection> {
    let parts = [
        BodyPart::LeftShoulder,
        BodyPart::RightShoulder,
        BodyPart::LeftElbow,
        BodyPart::RightElbow,
        BodyPart::LeftWrist,
        BodyPart::RightWrist,
        BodyPart::LeftHip,
        BodyPart::RightHip,
    ];
    prop::collection::vec((arb_point(), 0.0f32..=1.0), parts.len()).prop_map(move |points| {
        let landmarks = parts
            .iter()
            .zip(points)
            .map(|(&part, (p, conf))| Landmark::new(part, p.x, p.y, conf))
            .collect();
        Detection::new(landmarks).unwrap()
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_angle_in_range((v, a, b) in arb_triangle()) {
        let angle = angle_at(v, a, b).unwrap();
        prop_assert!(angle.is_finite());
        prop_assert!((0.0..=180.0).contains(&angle));
    }

    #[test]
    fn proptest_angle_symmetric((v, a, b) in arb_triangle()) {
        prop_assert_eq!(angle_at(v, a, b).unwrap(), angle_at(v, b, a).unwrap());
    }

    #[test]
    fn proptest_coincident_is_degenerate(v in arb_point(), other in arb_point()) {
        prop_assert_eq!(angle_at(v, v, other), Err(RomError::DegenerateVector));
        prop_assert_eq!(angle_at(v, other, v), Err(RomError::DegenerateVector));
    }

    #[test]
    fn proptest_angle_never_nan(
        v in arb_any_point(),
        a in arb_any_point(),
        b in arb_any_point(),
    ) {
        if let Ok(angle) = angle_at(v, a, b) {
            prop_assert!((0.0..=180.0).contains(&angle));
        } else {
            let finite = [v, a, b].iter().all(|p| p.x.is_finite() && p.y.is_finite());
            prop_assert!(!finite || v == a || v == b);
        }
    }

    #[test]
    fn proptest_evaluate_is_pure(det in arb_upper_body()) {
        let params = RomParams::default().with_shoulder_level_check(5.0);
        prop_assert_eq!(evaluate(&det, &params), evaluate(&det, &params));
    }

    #[test]
    fn proptest_outcome_is_consistent(det in arb_upper_body()) {
        let (angles, outcome) = evaluate(&det, &RomParams::default());
        prop_assert_eq!(outcome.accepted, outcome.rejection.is_none());
        prop_assert_eq!(outcome.accepted, outcome.reason.is_empty());
        if outcome.accepted {
            let angles = angles.unwrap();
            prop_assert!(angles.left_elbow >= 170.0);
            prop_assert!(angles.right_elbow >= 170.0);
        }
    }

    #[test]
    fn proptest_report_band_contains_value(angle in -90.0f32..270.0, tolerance in 0.0f32..10.0) {
        let reading = ReportedAngle::new(angle, tolerance);
        prop_assert!(reading.contains(reading.value));
        prop_assert!((reading.value - angle).abs() <= 0.05 + 1e-4);
    }
}
