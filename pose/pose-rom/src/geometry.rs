//! 2D joint-angle geometry.

use nalgebra::Point2;
use pose_types::Landmark;

use crate::{Result, RomError};

/// Returns a landmark's position as a point.
#[must_use]
pub fn point(landmark: &Landmark) -> Point2<f32> {
    Point2::new(landmark.x, landmark.y)
}

/// Angle in degrees at `vertex` between the rays towards `a` and `b`.
///
/// Uses `cos θ = (v1 · v2) / (|v1| |v2|)` with `v1 = a - vertex` and
/// `v2 = b - vertex`, evaluated in `f64`. The result lies in `[0, 180]` and is
/// symmetric in `a` and `b`.
///
/// # Errors
///
/// Returns [`RomError::DegenerateVector`] if `a` or `b` coincides with
/// `vertex`, or if any coordinate is not finite. The angle is undefined then,
/// never zero.
///
/// # Example
///
/// ```
/// use nalgebra::Point2;
/// use pose_rom::angle_at;
///
/// let vertex = Point2::new(0.5, 0.5);
/// let right = Point2::new(0.8, 0.5);
/// let below = Point2::new(0.5, 0.9);
///
/// let angle = angle_at(vertex, right, below).unwrap();
/// assert!((angle - 90.0).abs() < 1e-4);
/// assert!(angle_at(vertex, vertex, below).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn angle_at(vertex: Point2<f32>, a: Point2<f32>, b: Point2<f32>) -> Result<f32> {
    let vertex = vertex.cast::<f64>();
    let v1 = a.cast::<f64>() - vertex;
    let v2 = b.cast::<f64>() - vertex;

    let (n1, n2) = (v1.norm(), v2.norm());
    if !(n1.is_normal() && n2.is_normal()) {
        return Err(RomError::DegenerateVector);
    }

    Ok(degrees_from_cos(v1.dot(&v2) / (n1 * n2)) as f32)
}

/// Converts a cosine to degrees, clamping to `[-1, 1]` first.
///
/// Rounding on (anti)parallel vectors can push the ratio just past ±1, where
/// `acos` would return `NaN`.
#[must_use]
pub fn degrees_from_cos(cos_theta: f64) -> f64 {
    cos_theta.clamp(-1.0, 1.0).acos().to_degrees()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn right_angle() {
        let angle = angle_at(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        )
        .unwrap();
        assert_relative_eq!(angle, 90.0, epsilon = 1e-4);
    }

    #[test]
    fn straight_line_is_exactly_180() {
        let angle = angle_at(
            Point2::new(0.5, 0.4),
            Point2::new(0.2, 0.4),
            Point2::new(0.9, 0.4),
        )
        .unwrap();
        assert_eq!(angle, 180.0);
    }

    #[test]
    fn same_direction_is_exactly_0() {
        let angle = angle_at(
            Point2::new(0.1, 0.3),
            Point2::new(0.1, 0.5),
            Point2::new(0.1, 0.9),
        )
        .unwrap();
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn bent_150() {
        // Ray along -x and ray at 30 degrees below +x.
        let (sin, cos) = 30.0_f32.to_radians().sin_cos();
        let angle = angle_at(
            Point2::new(0.5, 0.5),
            Point2::new(0.3, 0.5),
            Point2::new(0.5 + 0.2 * cos, 0.5 - 0.2 * sin),
        )
        .unwrap();
        assert_relative_eq!(angle, 150.0, epsilon = 1e-3);
    }

    #[test]
    fn symmetric_in_endpoints() {
        let v = Point2::new(0.42, 0.37);
        let a = Point2::new(0.13, 0.88);
        let b = Point2::new(0.91, 0.05);
        assert_eq!(angle_at(v, a, b).unwrap(), angle_at(v, b, a).unwrap());
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let v = Point2::new(0.5, 0.5);
        let other = Point2::new(0.1, 0.2);
        assert_eq!(angle_at(v, v, other), Err(RomError::DegenerateVector));
        assert_eq!(angle_at(v, other, v), Err(RomError::DegenerateVector));
    }

    #[test]
    fn non_finite_points_are_degenerate() {
        let v = Point2::new(0.5, 0.5);
        let a = Point2::new(0.9, 0.5);
        assert_eq!(
            angle_at(v, a, Point2::new(f32::NAN, 0.2)),
            Err(RomError::DegenerateVector)
        );
        assert_eq!(
            angle_at(v, Point2::new(f32::INFINITY, 0.5), a),
            Err(RomError::DegenerateVector)
        );
        assert_eq!(
            angle_at(Point2::new(0.5, f32::NAN), a, a),
            Err(RomError::DegenerateVector)
        );
    }

    #[test]
    fn clamping_handles_overshoot() {
        assert_eq!(degrees_from_cos(1.000_000_000_000_2), 0.0);
        assert_eq!(degrees_from_cos(-1.000_000_000_000_2), 180.0);
        assert!(degrees_from_cos(1.5).is_finite());
    }

    #[test]
    fn landmark_point() {
        let lm = Landmark::new(pose_types::BodyPart::LeftHip, 0.25, 0.75, 0.9);
        assert_eq!(point(&lm), Point2::new(0.25, 0.75));
    }
}
