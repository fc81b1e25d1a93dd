//! Weibull curve evaluation from shape and scale parameters.
//!
//! Provides reliability, cumulative distribution, density, hazard rate,
//! MTTF and B-life, pointwise or over a [`TimeDomain`].

use tracing::{debug, trace, warn};
use u_numflow::special::ln_gamma;

use super::curves::{CurveSelection, CurveSet};
use super::domain::TimeDomain;
use super::failure_mode::FailureMode;
use crate::error::{Quantity, Result, WeibullError};

/// How the hazard rate is computed.
///
/// Both forms are algebraically identical and differ only in rounding:
///
/// ```text
/// Direct: h(t) = (beta/eta) * (t/eta)^(beta-1)
/// Ratio:  h(t) = f(t) / R(t)
/// ```
///
/// `Ratio` divides two quantities that both vanish in the far tail, so it
/// loses precision as R(t) -> 0. Where R(t) leaves the normal `f64` range
/// the ratio is undefined and the direct form is used for that sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HazardForm {
    /// Closed form (beta/eta) * (t/eta)^(beta-1).
    #[default]
    Direct,
    /// Density over reliability, f(t) / R(t).
    Ratio,
}

/// Gamma function for x >= 1, via ln Gamma.
fn gamma(x: f64) -> f64 {
    ln_gamma(x).exp()
}

/// Weibull evaluator for fixed shape (beta) and scale (eta).
///
/// # Mathematical Background
///
/// Given a Weibull distribution with shape beta > 0 and scale eta > 0:
/// - Reliability: R(t) = exp(-(t/eta)^beta)
/// - CDF: F(t) = 1 - R(t)
/// - Density: f(t) = (beta/eta) * (t/eta)^(beta-1) * exp(-(t/eta)^beta)
/// - Hazard rate: h(t) = f(t) / R(t) = (beta/eta) * (t/eta)^(beta-1)
/// - MTTF: eta * Gamma(1 + 1/beta)
///
/// Every call is independent: the evaluator holds only its parameters and
/// the same inputs always produce the same outputs.
///
/// # Examples
///
/// ```
/// use u_weibull::weibull::{CurveSelection, TimeDomain, WeibullEvaluator};
/// let ev = WeibullEvaluator::new(2.0, 100.0).unwrap();
/// assert!((ev.reliability(100.0) - (-1.0_f64).exp()).abs() < 1e-12);
///
/// let domain = TimeDomain::linspace(1.0, 200.0, 50).unwrap();
/// let curves = ev.evaluate(&domain, CurveSelection::ALL).unwrap();
/// assert_eq!(curves.reliability.unwrap().len(), 50);
/// ```
///
/// # Reference
/// Meeker & Escobar (1998), *Statistical Methods for Reliability Data*, Wiley.
#[derive(Debug, Clone, PartialEq)]
pub struct WeibullEvaluator {
    /// Shape parameter (beta).
    shape: f64,
    /// Scale parameter (eta).
    scale: f64,
    hazard_form: HazardForm,
}

impl WeibullEvaluator {
    /// Creates an evaluator from Weibull parameters.
    ///
    /// # Arguments
    /// * `shape` - Shape parameter beta (must be positive and finite)
    /// * `scale` - Scale parameter eta (must be positive and finite)
    ///
    /// # Errors
    /// `InvalidParameter` if either parameter is non-positive or non-finite.
    /// Values are never clamped.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_weibull::weibull::WeibullEvaluator;
    /// use u_weibull::WeibullError;
    ///
    /// assert!(WeibullEvaluator::new(2.0, 100.0).is_ok());
    /// assert!(matches!(
    ///     WeibullEvaluator::new(0.0, 100.0),
    ///     Err(WeibullError::InvalidParameter { name: "shape", .. })
    /// ));
    /// ```
    pub fn new(shape: f64, scale: f64) -> Result<Self> {
        if !shape.is_finite() || shape <= 0.0 {
            return Err(WeibullError::InvalidParameter {
                name: "shape",
                value: shape,
            });
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(WeibullError::InvalidParameter {
                name: "scale",
                value: scale,
            });
        }
        Ok(Self {
            shape,
            scale,
            hazard_form: HazardForm::default(),
        })
    }

    /// Selects how the hazard rate is computed.
    pub fn with_hazard_form(mut self, form: HazardForm) -> Self {
        self.hazard_form = form;
        self
    }

    /// Returns the shape parameter (beta).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Returns the scale parameter (eta).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the hazard rate formula in use.
    pub fn hazard_form(&self) -> HazardForm {
        self.hazard_form
    }

    /// Failure mode implied by the shape parameter.
    pub fn failure_mode(&self) -> FailureMode {
        FailureMode::classify(self.shape)
    }

    /// Characteristic life: the time by which 63.2% of units have failed.
    ///
    /// F(eta) = 1 - exp(-1) for every beta, so this is eta.
    pub fn characteristic_life(&self) -> f64 {
        self.scale
    }

    /// Reliability (survival) function at time t.
    ///
    /// ```text
    /// R(t) = exp(-(t/eta)^beta)
    /// ```
    ///
    /// For t <= 0, returns 1.0 (no failure before time 0).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_weibull::weibull::WeibullEvaluator;
    /// let ev = WeibullEvaluator::new(0.7, 3.0).unwrap();
    ///
    /// // R(eta) = exp(-1) for any shape parameter
    /// assert!((ev.reliability(3.0) - (-1.0_f64).exp()).abs() < 1e-12);
    /// assert_eq!(ev.reliability(0.0), 1.0);
    /// ```
    ///
    /// # Reference
    /// Weibull (1951), *Journal of Applied Mechanics* 18(3), pp. 293-297.
    pub fn reliability(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        (-self.scaled_power(t.ln() - self.scale.ln())).exp()
    }

    /// Cumulative distribution function at time t.
    ///
    /// ```text
    /// F(t) = 1 - R(t)
    /// ```
    pub fn cdf(&self, t: f64) -> f64 {
        1.0 - self.reliability(t)
    }

    /// Probability density at time t.
    ///
    /// ```text
    /// f(t) = (beta/eta) * (t/eta)^(beta-1) * exp(-(t/eta)^beta)
    /// ```
    ///
    /// Evaluated in log space, with ln(t/eta) = ln(t) - ln(eta), so neither
    /// a tiny t/eta nor the far tail produces `0 * inf`.
    ///
    /// # Errors
    /// - `InvalidDomain` if t is non-positive or non-finite
    /// - `NumericOverflow` if the density itself is not finite
    pub fn pdf(&self, t: f64) -> Result<f64> {
        let ln_z = self.ln_scaled_time(t, Quantity::Pdf)?;
        let zb = self.scaled_power(ln_z);
        finite(Quantity::Pdf, t, self.density(ln_z, zb))
    }

    /// Failure rate (hazard function) at time t, in the configured
    /// [`HazardForm`].
    ///
    /// - beta < 1: Decreasing failure rate (infant mortality)
    /// - beta = 1: Constant failure rate 1/eta (exponential)
    /// - beta > 1: Increasing failure rate (wear-out)
    ///
    /// # Errors
    /// Same conditions as [`pdf`](Self::pdf).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_weibull::weibull::WeibullEvaluator;
    /// let ev = WeibullEvaluator::new(1.0, 20.0).unwrap();
    /// assert!((ev.hazard_rate(7.0).unwrap() - 0.05).abs() < 1e-12);
    /// assert!(ev.hazard_rate(0.0).is_err());
    /// ```
    ///
    /// # Reference
    /// Meeker & Escobar (1998), *Statistical Methods for Reliability Data*, Ch. 4.
    pub fn hazard_rate(&self, t: f64) -> Result<f64> {
        let ln_z = self.ln_scaled_time(t, Quantity::Hazard)?;
        let zb = self.scaled_power(ln_z);
        let h = self.hazard_at(t, ln_z, zb, (-zb).exp());
        finite(Quantity::Hazard, t, h)
    }

    /// Mean Time To Failure.
    ///
    /// ```text
    /// MTTF = eta * Gamma(1 + 1/beta)
    /// ```
    ///
    /// # Errors
    /// `NumericOverflow` if Gamma(1 + 1/beta) overflows, which happens for
    /// beta below roughly 0.006.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_weibull::weibull::WeibullEvaluator;
    /// // For beta=1 (exponential), MTTF = eta
    /// let ev = WeibullEvaluator::new(1.0, 50.0).unwrap();
    /// assert!((ev.mttf().unwrap() - 50.0).abs() < 1e-8);
    /// ```
    ///
    /// # Reference
    /// Johnson, Kotz & Balakrishnan (1994), *Continuous Univariate Distributions*,
    /// Vol. 1, Chapter 21.
    pub fn mttf(&self) -> Result<f64> {
        let mttf = self.scale * gamma(1.0 + 1.0 / self.shape);
        if !mttf.is_finite() {
            warn!(shape = self.shape, scale = self.scale, "MTTF overflow");
            return Err(WeibullError::NumericOverflow {
                quantity: Quantity::Mttf,
                time: None,
            });
        }
        Ok(mttf)
    }

    /// Time at which reliability drops to a given level.
    ///
    /// Solves R(t) = p for t:
    ///
    /// ```text
    /// t = eta * (-ln(p))^(1/beta)
    /// ```
    ///
    /// # Returns
    /// `None` if `p` is outside (0, 1).
    ///
    /// # Reference
    /// Abernethy (2006), *The New Weibull Handbook*, 5th ed.
    pub fn time_to_reliability(&self, p: f64) -> Option<f64> {
        if !(p > 0.0 && p < 1.0) {
            return None;
        }
        Some(self.scale * (-p.ln()).powf(1.0 / self.shape))
    }

    /// B-life: time at which a given fraction of the population has failed.
    ///
    /// B10 life (10% failed) = `b_life(0.10)`, equivalent to
    /// `time_to_reliability(0.90)`.
    ///
    /// # Returns
    /// `None` if `fraction_failed` is outside (0, 1).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_weibull::weibull::WeibullEvaluator;
    /// let ev = WeibullEvaluator::new(2.0, 100.0).unwrap();
    /// let b10 = ev.b_life(0.10).unwrap();
    /// assert!(b10 > 0.0 && b10 < 100.0);
    /// ```
    pub fn b_life(&self, fraction_failed: f64) -> Option<f64> {
        if !(fraction_failed > 0.0 && fraction_failed < 1.0) {
            return None;
        }
        self.time_to_reliability(1.0 - fraction_failed)
    }

    /// Evaluates the selected curves over a time domain.
    ///
    /// Unselected curves are not computed and come back as `None`. R(t) is
    /// still computed internally when only F(t) is requested, and F(t) is
    /// always exactly `1.0 - R(t)`. MTTF and failure mode are always set.
    ///
    /// # Errors
    /// `NumericOverflow` if MTTF or any requested sample is not finite.
    /// R(t) and f(t) underflowing to 0 is not an error.
    pub fn evaluate(&self, domain: &TimeDomain, curves: CurveSelection) -> Result<CurveSet> {
        let mttf = self.mttf()?;
        let failure_mode = self.failure_mode();
        debug!(
            shape = self.shape,
            scale = self.scale,
            samples = domain.len(),
            selected = curves.count(),
            %failure_mode,
            "evaluating Weibull curves"
        );

        let n = domain.len();
        let mut reliability = curves.reliability.then(|| Vec::with_capacity(n));
        let mut cdf = curves.cdf.then(|| Vec::with_capacity(n));
        let mut pdf = curves.pdf.then(|| Vec::with_capacity(n));
        let mut hazard = curves.hazard.then(|| Vec::with_capacity(n));

        if !curves.is_empty() {
            let ln_scale = self.scale.ln();
            for &t in domain.samples() {
                let ln_z = t.ln() - ln_scale;
                let zb = self.scaled_power(ln_z);
                let r = (-zb).exp();

                if let Some(out) = reliability.as_mut() {
                    out.push(r);
                }
                if let Some(out) = cdf.as_mut() {
                    out.push(1.0 - r);
                }
                if let Some(out) = pdf.as_mut() {
                    out.push(finite(Quantity::Pdf, t, self.density(ln_z, zb))?);
                }
                if let Some(out) = hazard.as_mut() {
                    out.push(finite(Quantity::Hazard, t, self.hazard_at(t, ln_z, zb, r))?);
                }
            }
        }

        Ok(CurveSet {
            shape: self.shape,
            scale: self.scale,
            times: domain.samples().to_vec(),
            reliability,
            pdf,
            cdf,
            hazard,
            mttf,
            failure_mode,
        })
    }

    /// ln(t/eta) for a positive finite t. Always finite.
    fn ln_scaled_time(&self, t: f64, quantity: Quantity) -> Result<f64> {
        if !t.is_finite() || t <= 0.0 {
            return Err(WeibullError::InvalidDomain(format!(
                "{quantity} is undefined at t = {t}; t must be positive and finite"
            )));
        }
        Ok(t.ln() - self.scale.ln())
    }

    /// (t/eta)^beta from ln(t/eta).
    fn scaled_power(&self, ln_z: f64) -> f64 {
        (self.shape * ln_z).exp()
    }

    /// ln f(t) = ln(beta) - ln(eta) + (beta-1) ln(z) - z^beta
    fn density(&self, ln_z: f64, zb: f64) -> f64 {
        (self.shape.ln() - self.scale.ln() + (self.shape - 1.0) * ln_z - zb).exp()
    }

    fn hazard_at(&self, t: f64, ln_z: f64, zb: f64, r: f64) -> f64 {
        let direct = (self.shape / self.scale) * ((self.shape - 1.0) * ln_z).exp();
        match self.hazard_form {
            HazardForm::Direct => direct,
            HazardForm::Ratio if r >= f64::MIN_POSITIVE => self.density(ln_z, zb) / r,
            HazardForm::Ratio => {
                trace!(t, r, "reliability underflow, using direct hazard");
                direct
            }
        }
    }
}

fn finite(quantity: Quantity, t: f64, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        warn!(%quantity, t, value, "non-finite curve value");
        Err(WeibullError::NumericOverflow {
            quantity,
            time: Some(t),
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn reliability_plus_cdf_is_one(
            shape in 0.05_f64..10.0,
            scale in 0.05_f64..50.0,
            t in 1e-6_f64..1e3,
        ) {
            let ev = WeibullEvaluator::new(shape, scale).expect("valid parameters");
            let sum = ev.reliability(t) + ev.cdf(t);
            prop_assert!((sum - 1.0).abs() < 1e-9, "R + F = {}", sum);
        }

        #[test]
        fn reliability_non_increasing(
            shape in 0.1_f64..5.0,
            scale in 0.1_f64..10.0,
            max_time in 0.1_f64..20.0,
        ) {
            let ev = WeibullEvaluator::new(shape, scale).expect("valid parameters");
            let domain = TimeDomain::display(max_time).expect("valid grid");
            let set = ev
                .evaluate(&domain, CurveSelection::NONE.with_reliability(true))
                .expect("finite");
            let r = set.reliability.expect("selected");
            for w in r.windows(2) {
                prop_assert!(w[1] <= w[0], "R increased: {} -> {}", w[0], w[1]);
            }
        }

        #[test]
        fn reliability_at_scale_is_exp_minus_one(
            shape in 0.05_f64..20.0,
            scale in 1e-3_f64..1e3,
        ) {
            let ev = WeibullEvaluator::new(shape, scale).expect("valid parameters");
            prop_assert!((ev.reliability(scale) - (-1.0_f64).exp()).abs() < 1e-12);
        }

        #[test]
        fn ui_range_curves_are_finite(
            shape in 0.1_f64..=5.0,
            scale in 0.1_f64..=10.0,
            max_time in 0.1_f64..=20.0,
        ) {
            let ev = WeibullEvaluator::new(shape, scale).expect("valid parameters");
            let domain = TimeDomain::display(max_time).expect("valid grid");
            let set = ev.evaluate(&domain, CurveSelection::ALL).expect("finite");
            for curve in [&set.reliability, &set.pdf, &set.cdf, &set.hazard] {
                let values = curve.as_ref().expect("selected");
                prop_assert!(values.iter().all(|v| v.is_finite() && *v >= 0.0));
            }
            prop_assert!(set.mttf > 0.0);
        }
    }
}
