//! Property-based tests for keypoint decoding.
//!
//! Run with: cargo test -p pose-decode -- proptest

#![allow(clippy::unwrap_used)]
#![allow(clippy::float_cmp)]

use pose_decode::{DecodeError, KeypointLayout, decode};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// One of the two supported model layouts.
fn arb_layout() -> impl Strategy<Value = KeypointLayout> {
    prop_oneof![
        Just(KeypointLayout::full_body()),
        Just(KeypointLayout::limbs_only()),
    ]
}

/// A layout paired with a correctly sized buffer of in-frame values.
fn arb_layout_and_buffer() -> impl Strategy<Value = (KeypointLayout, Vec<f32>)> {
    arb_layout().prop_flat_map(|layout| {
        let len = layout.buffer_len();
        (Just(layout), prop::collection::vec(0.0f32..=1.0, len))
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_landmark_count_matches_layout((layout, buffer) in arb_layout_and_buffer()) {
        let det = decode(&buffer, &layout).unwrap();
        prop_assert_eq!(det.len(), layout.expected_count - layout.skip);
    }

    #[test]
    fn proptest_confidence_is_third_element((layout, buffer) in arb_layout_and_buffer()) {
        let det = decode(&buffer, &layout).unwrap();
        for (k, lm) in det.landmarks().iter().enumerate() {
            let i = layout.skip + k;
            prop_assert_eq!(lm.y, buffer[i * 3]);
            prop_assert_eq!(lm.x, buffer[i * 3 + 1]);
            prop_assert_eq!(lm.confidence, buffer[i * 3 + 2]);
        }
    }

    #[test]
    fn proptest_score_is_mean((layout, buffer) in arb_layout_and_buffer()) {
        let det = decode(&buffer, &layout).unwrap();
        #[allow(clippy::cast_precision_loss)]
        let mean = det.landmarks().iter().map(|lm| lm.confidence).sum::<f32>()
            / det.len() as f32;
        prop_assert!((det.score() - mean).abs() < 1e-6);
        prop_assert!((0.0..=1.0).contains(&det.score()));
    }

    #[test]
    fn proptest_wrong_length_is_malformed(
        layout in arb_layout(),
        len in 0usize..120,
    ) {
        prop_assume!(len != layout.buffer_len());
        let buffer = vec![0.5f32; len];
        let err = decode(&buffer, &layout).unwrap_err();
        prop_assert_eq!(err, DecodeError::malformed_buffer(layout.buffer_len(), len));
    }
}
