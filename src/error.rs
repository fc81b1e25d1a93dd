//! Error taxonomy for Weibull evaluation.
//!
//! Every failure is reported synchronously to the caller. Evaluation is a
//! pure deterministic computation, so there is no transient class and no
//! retry path: the caller re-prompts for valid inputs.

use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WeibullError>;

/// A quantity produced by the evaluator, used to tag overflow reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Reliability R(t).
    Reliability,
    /// Cumulative distribution F(t).
    Cdf,
    /// Probability density f(t).
    Pdf,
    /// Hazard rate h(t).
    Hazard,
    /// Mean time to failure.
    Mttf,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Quantity::Reliability => "reliability R(t)",
            Quantity::Cdf => "cumulative distribution F(t)",
            Quantity::Pdf => "probability density f(t)",
            Quantity::Hazard => "hazard rate h(t)",
            Quantity::Mttf => "MTTF",
        };
        f.write_str(name)
    }
}

/// Errors raised while building or running a Weibull evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeibullError {
    /// Shape or scale is non-positive or non-finite.
    #[error("invalid parameter {name} = {value}: must be positive and finite")]
    InvalidParameter { name: &'static str, value: f64 },

    /// The time domain is empty, unordered, or has a non-positive sample.
    #[error("invalid time domain: {0}")]
    InvalidDomain(String),

    /// A requested quantity evaluated to a non-finite value.
    ///
    /// `time` is the sample at which it happened, `None` for MTTF.
    #[error("numeric overflow evaluating {quantity}")]
    NumericOverflow {
        quantity: Quantity,
        time: Option<f64>,
    },
}
