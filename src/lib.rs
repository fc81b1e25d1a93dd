//! # u-weibull
//!
//! Weibull reliability curves for interactive exploration of the shape
//! and scale parameters.
//!
//! Given shape beta and scale eta, this crate evaluates reliability R(t),
//! cumulative distribution F(t), probability density f(t) and hazard rate
//! h(t) over a sampled time grid, along with the mean time to failure and
//! a failure-mode classification of beta. It is the numeric core of a
//! viewer: the UI supplies a [`config::WeibullConfig`] and plots the
//! returned arrays.
//!
//! ## Modules
//!
//! - [`weibull`] — Evaluator, time domain, curve sets, failure modes
//! - [`config`] — Immutable evaluation configuration and viewer defaults
//! - [`error`] — Error taxonomy
//!
//! ## Design Philosophy
//!
//! - **Pure**: every evaluation is independent and allocates fresh outputs
//! - **No silent NaN**: invalid inputs and overflow are reported as errors
//! - **Research-backed**: formulas reference the reliability literature

pub mod config;
pub mod error;
pub mod weibull;

pub use error::{Quantity, Result, WeibullError};
