//! Reported angle readings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A measured angle as shown to the user: rounded to 0.1° with a tolerance
/// band around it.
///
/// # Example
///
/// ```
/// use pose_rom::ReportedAngle;
///
/// let reading = ReportedAngle::new(147.26, 2.5);
/// assert_eq!(reading.to_string(), "147.3°(144.8° ~ 149.8°)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportedAngle {
    /// Angle rounded to one decimal, in degrees.
    pub value: f32,
    /// Lower edge of the band.
    pub low: f32,
    /// Upper edge of the band.
    pub high: f32,
}

impl ReportedAngle {
    /// Rounds `angle` to 0.1° and spans `tolerance` either side of it.
    #[must_use]
    pub fn new(angle: f32, tolerance: f32) -> Self {
        let value = (angle * 10.0).round() / 10.0;
        Self {
            value,
            low: value - tolerance,
            high: value + tolerance,
        }
    }

    /// Returns `true` if `angle` falls inside the band.
    #[must_use]
    pub fn contains(&self, angle: f32) -> bool {
        (self.low..=self.high).contains(&angle)
    }
}

impl fmt::Display for ReportedAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}°({:.1}° ~ {:.1}°)",
            self.value, self.low, self.high
        )
    }
}
