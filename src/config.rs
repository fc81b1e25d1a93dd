//! Evaluation configuration.
//!
//! A viewer passes one immutable [`WeibullConfig`] per evaluation instead
//! of keeping slider and checkbox values as ambient state. Resetting the
//! viewer means evaluating [`WeibullConfig::DEFAULT`] again.

use std::ops::RangeInclusive;

use crate::error::Result;
use crate::weibull::{
    CurveSelection, HazardForm, TimeDomain, WeibullEvaluator, DISPLAY_SAMPLES, DISPLAY_START,
};

/// Shape values reachable from the viewer's slider.
pub const SHAPE_RANGE: RangeInclusive<f64> = 0.1..=5.0;

/// Scale values reachable from the viewer's slider.
pub const SCALE_RANGE: RangeInclusive<f64> = 0.1..=10.0;

/// Display horizons reachable from the viewer's slider.
pub const MAX_TIME_RANGE: RangeInclusive<f64> = 0.1..=20.0;

/// Slider increment shared by all three sliders.
pub const SLIDER_STEP: f64 = 0.1;

/// Configuration for one evaluation.
///
/// # Examples
///
/// ```
/// use u_weibull::config::WeibullConfig;
/// use u_weibull::weibull::{CurveSelection, HazardForm};
///
/// let config = WeibullConfig::default()
///     .with_shape(0.7)
///     .with_scale(3.0)
///     .with_max_time(12.0)
///     .with_curves(CurveSelection::NONE.with_hazard(true))
///     .with_hazard_form(HazardForm::Ratio);
/// assert!(config.within_ui_ranges());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeibullConfig {
    /// Shape parameter beta. Must be positive.
    pub shape: f64,

    /// Scale parameter eta, in time units. Must be positive.
    pub scale: f64,

    /// Last time sample (display horizon).
    pub max_time: f64,

    /// First time sample. Kept above zero so the density stays finite
    /// for beta < 1.
    pub start_time: f64,

    /// Number of time samples.
    pub sample_count: usize,

    /// Curves to compute.
    pub curves: CurveSelection,

    /// Hazard rate formula.
    pub hazard_form: HazardForm,
}

impl WeibullConfig {
    /// Viewer defaults: beta = 1, eta = 1, horizon 5, all curves.
    pub const DEFAULT: Self = Self {
        shape: 1.0,
        scale: 1.0,
        max_time: 5.0,
        start_time: DISPLAY_START,
        sample_count: DISPLAY_SAMPLES,
        curves: CurveSelection::ALL,
        hazard_form: HazardForm::Direct,
    };

    /// Sets the shape parameter beta.
    pub fn with_shape(mut self, shape: f64) -> Self {
        self.shape = shape;
        self
    }

    /// Sets the scale parameter eta.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the display horizon (last sample).
    pub fn with_max_time(mut self, max_time: f64) -> Self {
        self.max_time = max_time;
        self
    }

    /// Sets the first time sample.
    pub fn with_start_time(mut self, start_time: f64) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the number of time samples.
    pub fn with_sample_count(mut self, n: usize) -> Self {
        self.sample_count = n;
        self
    }

    /// Sets which curves to compute.
    pub fn with_curves(mut self, curves: CurveSelection) -> Self {
        self.curves = curves;
        self
    }

    /// Sets the hazard rate formula.
    pub fn with_hazard_form(mut self, form: HazardForm) -> Self {
        self.hazard_form = form;
        self
    }

    /// Builds the evaluator for this configuration's parameters.
    ///
    /// # Errors
    /// `InvalidParameter` if shape or scale is not positive and finite.
    pub fn evaluator(&self) -> Result<WeibullEvaluator> {
        Ok(WeibullEvaluator::new(self.shape, self.scale)?.with_hazard_form(self.hazard_form))
    }

    /// Builds the time grid `linspace(start_time, max_time, sample_count)`.
    ///
    /// # Errors
    /// `InvalidDomain` if the bounds or sample count are unusable.
    pub fn domain(&self) -> Result<TimeDomain> {
        TimeDomain::linspace(self.start_time, self.max_time, self.sample_count)
    }

    /// Checks parameters and grid without evaluating any curve.
    pub fn validate(&self) -> Result<()> {
        self.evaluator()?;
        self.domain()?;
        Ok(())
    }

    /// `true` if shape, scale and horizon are all reachable from the
    /// viewer's sliders.
    ///
    /// Informational only: any positive finite values evaluate.
    pub fn within_ui_ranges(&self) -> bool {
        SHAPE_RANGE.contains(&self.shape)
            && SCALE_RANGE.contains(&self.scale)
            && MAX_TIME_RANGE.contains(&self.max_time)
    }
}

impl Default for WeibullConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
