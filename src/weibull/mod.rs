//! Weibull reliability curves.
//!
//! Evaluates the four characteristic curves of a Weibull distribution
//! (reliability, density, cumulative distribution, hazard rate) and its
//! mean time to failure from shape and scale parameters.
//!
//! # Modules
//!
//! - [`WeibullEvaluator`] — R(t), F(t), f(t), h(t), MTTF, B-life
//! - [`TimeDomain`] — validated, strictly positive sample grid
//! - [`CurveSelection`] / [`CurveSet`] — which curves to compute, and the result
//! - [`FailureMode`] — infant mortality / random failures / wear-out from beta
//!
//! # References
//!
//! - Abernethy, R.B. (2006). *The New Weibull Handbook*, 5th ed.
//! - Meeker, W.Q. & Escobar, L.A. (1998). *Statistical Methods for
//!   Reliability Data*, Wiley.

mod curves;
mod domain;
mod evaluator;
mod failure_mode;

pub use curves::{CurveSelection, CurveSet, HAZARD_CEILING_MAX, HAZARD_CEILING_WINDOW};
pub use domain::{TimeDomain, DISPLAY_SAMPLES, DISPLAY_START};
pub use evaluator::{HazardForm, WeibullEvaluator};
pub use failure_mode::{FailureMode, RANDOM_BAND_HIGH, RANDOM_BAND_LOW};

use crate::config::WeibullConfig;
use crate::error::Result;

/// Evaluates the curves described by a configuration.
///
/// Builds the evaluator and the display grid from `config` and computes
/// the selected curves. This is the single entry point a viewer calls on
/// every parameter change.
///
/// # Examples
///
/// ```
/// use u_weibull::config::WeibullConfig;
/// use u_weibull::weibull::{evaluate, FailureMode};
///
/// let curves = evaluate(&WeibullConfig::DEFAULT.with_shape(2.0)).unwrap();
/// assert_eq!(curves.times.len(), 1000);
/// assert_eq!(curves.failure_mode, FailureMode::WearOut);
/// ```
pub fn evaluate(config: &WeibullConfig) -> Result<CurveSet> {
    let evaluator = config.evaluator()?;
    let domain = config.domain()?;
    evaluator.evaluate(&domain, config.curves)
}
