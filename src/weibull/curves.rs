//! Curve selection toggles and evaluated curve sets.

use super::failure_mode::FailureMode;

/// Upper bound on the hazard panel's y-axis.
pub const HAZARD_CEILING_MAX: f64 = 10.0;

/// Fraction of the time horizon scanned for the hazard y-axis ceiling.
pub const HAZARD_CEILING_WINDOW: f64 = 0.8;

/// Which of the four curves to compute.
///
/// Curves that are not selected are skipped entirely and come back as
/// `None` in the [`CurveSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveSelection {
    /// Reliability R(t).
    pub reliability: bool,
    /// Probability density f(t).
    pub pdf: bool,
    /// Cumulative distribution F(t).
    pub cdf: bool,
    /// Hazard rate h(t).
    pub hazard: bool,
}

impl CurveSelection {
    /// All four curves.
    pub const ALL: Self = Self {
        reliability: true,
        pdf: true,
        cdf: true,
        hazard: true,
    };

    /// No curves; only MTTF and failure mode are produced.
    pub const NONE: Self = Self {
        reliability: false,
        pdf: false,
        cdf: false,
        hazard: false,
    };

    /// Toggles the reliability curve.
    pub fn with_reliability(mut self, on: bool) -> Self {
        self.reliability = on;
        self
    }

    /// Toggles the density curve.
    pub fn with_pdf(mut self, on: bool) -> Self {
        self.pdf = on;
        self
    }

    /// Toggles the cumulative distribution curve.
    pub fn with_cdf(mut self, on: bool) -> Self {
        self.cdf = on;
        self
    }

    /// Toggles the hazard rate curve.
    pub fn with_hazard(mut self, on: bool) -> Self {
        self.hazard = on;
        self
    }

    /// Number of selected curves.
    pub fn count(&self) -> usize {
        [self.reliability, self.pdf, self.cdf, self.hazard]
            .iter()
            .filter(|&&on| on)
            .count()
    }

    /// `true` if no curve is selected.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl Default for CurveSelection {
    fn default() -> Self {
        Self::ALL
    }
}

/// Curves evaluated over a time domain.
///
/// Every present curve has the same length as `times` and is aligned with
/// it index-for-index.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveSet {
    /// Shape parameter (beta) used.
    pub shape: f64,
    /// Scale parameter (eta) used.
    pub scale: f64,
    /// Time samples.
    pub times: Vec<f64>,
    /// Reliability R(t).
    pub reliability: Option<Vec<f64>>,
    /// Probability density f(t).
    pub pdf: Option<Vec<f64>>,
    /// Cumulative distribution F(t) = 1 - R(t).
    pub cdf: Option<Vec<f64>>,
    /// Hazard rate h(t).
    pub hazard: Option<Vec<f64>>,
    /// Mean time to failure, eta * Gamma(1 + 1/beta).
    pub mttf: f64,
    /// Failure mode implied by the shape parameter.
    pub failure_mode: FailureMode,
}

impl CurveSet {
    /// Number of time samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// `true` if there are no time samples.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Y-axis cap for a hazard plot of a wear-out distribution.
    ///
    /// For beta > 1 the hazard grows without bound, so the plot is capped at
    /// the largest hazard within the first 80% of the horizon, and never
    /// above 10:
    ///
    /// ```text
    /// ceiling = min(10, max { h(t) : t <= 0.8 * t_max })
    /// ```
    ///
    /// Returns `None` when hazard was not computed, beta <= 1, or no sample
    /// falls inside the window (the plot then autoscales).
    pub fn hazard_display_ceiling(&self) -> Option<f64> {
        if self.shape <= 1.0 {
            return None;
        }
        let hazard = self.hazard.as_ref()?;
        let horizon = *self.times.last()? * HAZARD_CEILING_WINDOW;

        let peak = self
            .times
            .iter()
            .zip(hazard)
            .filter(|(&t, _)| t <= horizon)
            .map(|(_, &h)| h)
            .fold(None, |acc: Option<f64>, h| Some(acc.map_or(h, |m| m.max(h))))?;

        Some(peak.min(HAZARD_CEILING_MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wear_out_set(hazard: Option<Vec<f64>>) -> CurveSet {
        CurveSet {
            shape: 2.0,
            scale: 1.0,
            times: vec![1.0, 2.0, 3.0, 4.0, 5.0],
            reliability: None,
            pdf: None,
            cdf: None,
            hazard,
            mttf: 0.886,
            failure_mode: FailureMode::WearOut,
        }
    }

    #[test]
    fn test_selection_count() {
        assert_eq!(CurveSelection::ALL.count(), 4);
        assert_eq!(CurveSelection::NONE.count(), 0);
        assert!(CurveSelection::NONE.is_empty());

        let sel = CurveSelection::NONE.with_pdf(true).with_hazard(true);
        assert_eq!(sel.count(), 2);
        assert!(sel.pdf && sel.hazard && !sel.reliability && !sel.cdf);
    }

    #[test]
    fn test_selection_default_is_all() {
        assert_eq!(CurveSelection::default(), CurveSelection::ALL);
    }

    #[test]
    fn test_hazard_ceiling_uses_window() {
        // window is t <= 4.0; h(5.0) must be ignored
        let set = wear_out_set(Some(vec![2.0, 4.0, 6.0, 8.0, 100.0]));
        let ceiling = set.hazard_display_ceiling().expect("wear-out with hazard");
        assert!((ceiling - 8.0).abs() < 1e-15);
    }

    #[test]
    fn test_hazard_ceiling_capped_at_ten() {
        let set = wear_out_set(Some(vec![2.0, 20.0, 30.0, 40.0, 50.0]));
        let ceiling = set.hazard_display_ceiling().expect("wear-out with hazard");
        assert!((ceiling - HAZARD_CEILING_MAX).abs() < 1e-15);
    }

    #[test]
    fn test_hazard_ceiling_none_cases() {
        assert!(wear_out_set(None).hazard_display_ceiling().is_none());

        let mut flat = wear_out_set(Some(vec![1.0; 5]));
        flat.shape = 1.0;
        assert!(flat.hazard_display_ceiling().is_none());

        // single sample at t_max: the 0.8 * t_max window is empty
        let mut single = wear_out_set(Some(vec![4.0]));
        single.times = vec![1.0];
        assert!(single.hazard_display_ceiling().is_none());
    }
}
