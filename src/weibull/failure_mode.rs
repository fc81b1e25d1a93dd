//! Failure-mode classification from the shape parameter.
//!
//! The shape parameter beta determines the trend of the hazard rate:
//!
//! ```text
//! beta < 0.95          -> infant mortality (decreasing hazard)
//! 0.95 <= beta <= 1.05 -> random failures  (constant hazard)
//! beta > 1.05          -> wear-out         (increasing hazard)
//! ```
//!
//! The band of +/-0.05 around beta = 1 keeps slider values such as
//! `0.1 * 10` from flipping between categories on rounding noise. It is a
//! presentation tolerance, not the outcome of a statistical test.

use std::fmt;

/// Lower bound (inclusive) of the random-failure band.
pub const RANDOM_BAND_LOW: f64 = 0.95;

/// Upper bound (inclusive) of the random-failure band.
pub const RANDOM_BAND_HIGH: f64 = 1.05;

/// Failure mode implied by the Weibull shape parameter.
///
/// # Reference
/// Abernethy (2006), *The New Weibull Handbook*, 5th ed., Chapter 2
/// (bathtub curve interpretation of beta).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailureMode {
    /// beta < 0.95: failures concentrate early in life (manufacturing defects).
    InfantMortality,
    /// 0.95 <= beta <= 1.05: failures occur at random, independent of age.
    RandomFailures,
    /// beta > 1.05: failures become more likely with age (fatigue, wear).
    WearOut,
}

impl FailureMode {
    /// Classifies a shape parameter into one of the three bands.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_weibull::weibull::FailureMode;
    /// assert_eq!(FailureMode::classify(0.5), FailureMode::InfantMortality);
    /// assert_eq!(FailureMode::classify(1.0), FailureMode::RandomFailures);
    /// assert_eq!(FailureMode::classify(3.0), FailureMode::WearOut);
    /// ```
    pub fn classify(shape: f64) -> Self {
        if shape < RANDOM_BAND_LOW {
            FailureMode::InfantMortality
        } else if shape <= RANDOM_BAND_HIGH {
            FailureMode::RandomFailures
        } else {
            FailureMode::WearOut
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FailureMode::InfantMortality => "infant mortality",
            FailureMode::RandomFailures => "random failures",
            FailureMode::WearOut => "wear-out",
        }
    }

    /// Direction of the hazard rate over time.
    pub fn hazard_trend(&self) -> &'static str {
        match self {
            FailureMode::InfantMortality => "decreasing",
            FailureMode::RandomFailures => "constant",
            FailureMode::WearOut => "increasing",
        }
    }
}

impl fmt::Display for FailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bands() {
        assert_eq!(FailureMode::classify(0.94), FailureMode::InfantMortality);
        assert_eq!(FailureMode::classify(1.00), FailureMode::RandomFailures);
        assert_eq!(FailureMode::classify(1.06), FailureMode::WearOut);
    }

    #[test]
    fn test_classify_boundaries_inclusive() {
        assert_eq!(FailureMode::classify(0.95), FailureMode::RandomFailures);
        assert_eq!(FailureMode::classify(1.05), FailureMode::RandomFailures);
    }

    #[test]
    fn test_classify_slider_rounding() {
        // 0.1 * 10 accumulates rounding error; must still be random failures
        let mut beta = 0.0;
        for _ in 0..10 {
            beta += 0.1;
        }
        assert_eq!(FailureMode::classify(beta), FailureMode::RandomFailures);
    }

    #[test]
    fn test_labels() {
        assert_eq!(FailureMode::InfantMortality.label(), "infant mortality");
        assert_eq!(FailureMode::RandomFailures.to_string(), "random failures");
        assert_eq!(FailureMode::WearOut.to_string(), "wear-out");
        assert_eq!(FailureMode::WearOut.hazard_trend(), "increasing");
        assert_eq!(FailureMode::InfantMortality.hazard_trend(), "decreasing");
    }
}
