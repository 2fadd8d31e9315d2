//! Evaluation parameters.

use serde::{Deserialize, Serialize};

use crate::{Result, RomError};

/// Parameters for angle evaluation and pose validation.
///
/// Every threshold used by the rule chain lives here. Missing fields take
/// their default when deserializing.
///
/// # Example
///
/// ```
/// use pose_rom::RomParams;
///
/// let params = RomParams::default();
/// assert!((params.elbow_angle_threshold - 170.0).abs() < 1e-6);
/// assert!(!params.check_shoulder_level);
///
/// let strict = RomParams::default().with_shoulder_level_check(3.0);
/// assert!(strict.check_shoulder_level);
/// assert!(strict.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RomParams {
    /// Minimum elbow angle in degrees; anything smaller counts as a bent arm.
    pub elbow_angle_threshold: f32,

    /// Whether the elbow-extension rules run.
    pub check_elbows: bool,

    /// Maximum shoulder-line tilt from horizontal, in degrees.
    pub shoulder_tilt_threshold: f32,

    /// Whether the shoulder-level rule runs.
    pub check_shoulder_level: bool,

    /// Landmarks below this confidence are treated as absent (0.0 keeps all).
    pub min_landmark_confidence: f32,

    /// Half-width of the reported tolerance band, in degrees.
    pub report_tolerance: f32,
}

impl Default for RomParams {
    fn default() -> Self {
        Self {
            elbow_angle_threshold: 170.0,
            check_elbows: true,
            shoulder_tilt_threshold: 5.0,
            check_shoulder_level: false,
            min_landmark_confidence: 0.0,
            report_tolerance: 2.5,
        }
    }
}

impl RomParams {
    /// Set the minimum elbow angle.
    #[must_use]
    pub const fn with_elbow_threshold(mut self, degrees: f32) -> Self {
        self.elbow_angle_threshold = degrees;
        self
    }

    /// Disable the elbow-extension rules.
    #[must_use]
    pub const fn without_elbow_check(mut self) -> Self {
        self.check_elbows = false;
        self
    }

    /// Enable the shoulder-level rule with the given maximum tilt.
    #[must_use]
    pub const fn with_shoulder_level_check(mut self, degrees: f32) -> Self {
        self.check_shoulder_level = true;
        self.shoulder_tilt_threshold = degrees;
        self
    }

    /// Set the landmark confidence gate.
    #[must_use]
    pub const fn with_min_confidence(mut self, confidence: f32) -> Self {
        self.min_landmark_confidence = confidence;
        self
    }

    /// Set the reporting tolerance band.
    #[must_use]
    pub const fn with_report_tolerance(mut self, degrees: f32) -> Self {
        self.report_tolerance = degrees;
        self
    }

    /// Allowed elbow bend in degrees (`180 - elbow_angle_threshold`), rounded
    /// to 0.1°.
    #[must_use]
    pub fn max_elbow_bend(&self) -> f32 {
        ((180.0 - self.elbow_angle_threshold) * 10.0).round() / 10.0
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `elbow_angle_threshold` is outside `[0, 180]`
    /// - `shoulder_tilt_threshold` is outside `[0, 90]`
    /// - `min_landmark_confidence` is outside `[0, 1]`
    /// - `report_tolerance` is negative or not finite
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=180.0).contains(&self.elbow_angle_threshold) {
            return Err(RomError::invalid_params(format!(
                "elbow angle threshold {} outside [0, 180]",
                self.elbow_angle_threshold
            )));
        }

        if !(0.0..=90.0).contains(&self.shoulder_tilt_threshold) {
            return Err(RomError::invalid_params(format!(
                "shoulder tilt threshold {} outside [0, 90]",
                self.shoulder_tilt_threshold
            )));
        }

        if !(0.0..=1.0).contains(&self.min_landmark_confidence) {
            return Err(RomError::invalid_params(format!(
                "minimum landmark confidence {} outside [0, 1]",
                self.min_landmark_confidence
            )));
        }

        if !(self.report_tolerance.is_finite() && self.report_tolerance >= 0.0) {
            return Err(RomError::invalid_params(format!(
                "report tolerance {} must be a non-negative number",
                self.report_tolerance
            )));
        }

        Ok(())
    }

    /// Serializes the parameters to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(RomError::from)
    }

    /// Deserializes and validates parameters from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the values are invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }
}
