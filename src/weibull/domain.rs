//! Sampled time domain for curve evaluation.
//!
//! All samples are strictly positive: at t = 0 the density term
//! (t/eta)^(beta-1) diverges for beta < 1, so zero is excluded up front
//! rather than producing infinities downstream.

use crate::error::{Result, WeibullError};

/// First sample of the display grid.
pub const DISPLAY_START: f64 = 0.001;

/// Number of samples in the display grid.
pub const DISPLAY_SAMPLES: usize = 1000;

/// Ordered, strictly positive time samples.
///
/// # Invariants
///
/// - At least one sample
/// - Every sample is finite and > 0
/// - Samples are non-decreasing
#[derive(Debug, Clone, PartialEq)]
pub struct TimeDomain {
    samples: Vec<f64>,
}

impl TimeDomain {
    /// Validates explicit time samples.
    ///
    /// # Errors
    /// `InvalidDomain` if `samples` is empty, contains a non-positive or
    /// non-finite value, or decreases anywhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_weibull::weibull::TimeDomain;
    /// assert!(TimeDomain::new(vec![0.5, 1.0, 2.0]).is_ok());
    /// assert!(TimeDomain::new(vec![0.0, 1.0]).is_err());
    /// assert!(TimeDomain::new(vec![2.0, 1.0]).is_err());
    /// ```
    pub fn new(samples: Vec<f64>) -> Result<Self> {
        if samples.is_empty() {
            return Err(WeibullError::InvalidDomain("no samples".into()));
        }
        if let Some((i, &t)) = samples
            .iter()
            .enumerate()
            .find(|(_, &t)| !t.is_finite() || t <= 0.0)
        {
            return Err(WeibullError::InvalidDomain(format!(
                "sample {i} is {t}, must be positive and finite"
            )));
        }
        if let Some(i) = samples.windows(2).position(|w| w[1] < w[0]) {
            return Err(WeibullError::InvalidDomain(format!(
                "samples decrease at index {}: {} -> {}",
                i + 1,
                samples[i],
                samples[i + 1]
            )));
        }
        Ok(Self { samples })
    }

    /// Evenly spaced samples over `[start, end]`, both ends included.
    ///
    /// With `count == 1` the grid is `[start]`.
    ///
    /// # Errors
    /// `InvalidDomain` if `start <= 0`, either bound is non-finite,
    /// `end < start`, or `count == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_weibull::weibull::TimeDomain;
    /// let d = TimeDomain::linspace(1.0, 2.0, 5).unwrap();
    /// assert_eq!(d.samples(), &[1.0, 1.25, 1.5, 1.75, 2.0]);
    /// ```
    pub fn linspace(start: f64, end: f64, count: usize) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(WeibullError::InvalidDomain(format!(
                "bounds must be finite, got [{start}, {end}]"
            )));
        }
        if start <= 0.0 {
            return Err(WeibullError::InvalidDomain(format!(
                "start must be positive, got {start}"
            )));
        }
        if end < start {
            return Err(WeibullError::InvalidDomain(format!(
                "end {end} is before start {start}"
            )));
        }
        if count == 0 {
            return Err(WeibullError::InvalidDomain("count must be at least 1".into()));
        }
        if count == 1 {
            return Ok(Self {
                samples: vec![start],
            });
        }

        let step = (end - start) / (count - 1) as f64;
        let mut samples: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
        // Pin the last sample so the grid ends exactly at `end`.
        samples[count - 1] = end;
        Ok(Self { samples })
    }

    /// The viewer's grid: 1000 samples from 0.001 to `max_time`.
    pub fn display(max_time: f64) -> Result<Self> {
        Self::linspace(DISPLAY_START, max_time, DISPLAY_SAMPLES)
    }

    /// The time samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`; a domain holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// First (smallest) sample.
    pub fn start(&self) -> f64 {
        self.samples[0]
    }

    /// Last (largest) sample.
    pub fn end(&self) -> f64 {
        self.samples[self.samples.len() - 1]
    }

    /// Consumes the domain, returning its samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let d = TimeDomain::new(vec![0.1, 0.1, 0.5, 3.0]).expect("valid domain");
        assert_eq!(d.len(), 4);
        assert!(!d.is_empty());
        assert!((d.start() - 0.1).abs() < 1e-15);
        assert!((d.end() - 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_new_rejects_zero() {
        let err = TimeDomain::new(vec![0.0, 1.0, 2.0]).unwrap_err();
        assert!(matches!(err, WeibullError::InvalidDomain(_)));
    }

    #[test]
    fn test_new_rejects_negative_and_non_finite() {
        assert!(TimeDomain::new(vec![-1.0, 1.0]).is_err());
        assert!(TimeDomain::new(vec![1.0, f64::NAN]).is_err());
        assert!(TimeDomain::new(vec![1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(
            TimeDomain::new(vec![]),
            Err(WeibullError::InvalidDomain(_))
        ));
    }

    #[test]
    fn test_new_rejects_decreasing() {
        let err = TimeDomain::new(vec![1.0, 2.0, 1.5]).unwrap_err();
        match err {
            WeibullError::InvalidDomain(msg) => assert!(msg.contains("index 2"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_linspace_endpoints() {
        let d = TimeDomain::linspace(0.001, 5.0, 1000).expect("valid grid");
        assert_eq!(d.len(), 1000);
        assert!((d.start() - 0.001).abs() < 1e-15);
        assert_eq!(d.end(), 5.0);
        for w in d.samples().windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn test_linspace_single_sample() {
        let d = TimeDomain::linspace(2.0, 7.0, 1).expect("valid grid");
        assert_eq!(d.samples(), &[2.0]);
    }

    #[test]
    fn test_linspace_invalid() {
        assert!(TimeDomain::linspace(0.0, 5.0, 10).is_err());
        assert!(TimeDomain::linspace(-1.0, 5.0, 10).is_err());
        assert!(TimeDomain::linspace(1.0, 0.5, 10).is_err());
        assert!(TimeDomain::linspace(1.0, 5.0, 0).is_err());
        assert!(TimeDomain::linspace(1.0, f64::INFINITY, 10).is_err());
    }

    #[test]
    fn test_display_grid() {
        let d = TimeDomain::display(20.0).expect("valid grid");
        assert_eq!(d.len(), DISPLAY_SAMPLES);
        assert!((d.start() - DISPLAY_START).abs() < 1e-15);
        assert_eq!(d.end(), 20.0);
    }

    #[test]
    fn test_display_rejects_horizon_before_start() {
        assert!(TimeDomain::display(0.0005).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn linspace_positive_and_ordered(
            start in 1e-3_f64..10.0,
            width in 0.0_f64..100.0,
            count in 1_usize..500,
        ) {
            let d = TimeDomain::linspace(start, start + width, count).expect("valid grid");
            prop_assert_eq!(d.len(), count);
            for &t in d.samples() {
                prop_assert!(t > 0.0 && t.is_finite(), "t = {}", t);
            }
            for w in d.samples().windows(2) {
                prop_assert!(w[1] >= w[0], "{} -> {}", w[0], w[1]);
            }
        }
    }
}
