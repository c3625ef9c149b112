//! Exponential distribution

use crate::traits::{ensure_estimate, ensure_in_domain, DistType, DistributionModel, FromObservations};
use distfit_core::{Error, Observations, Range, Result};
use std::f64::consts::LN_2;

const NAME: &str = "Exponential";

/// Exponential distribution with scale β (mean β, rate 1/β)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    scale: f64,
}

impl Exponential {
    /// Create an exponential distribution with the given scale
    pub fn new(scale: f64) -> Result<Self> {
        Error::check_positive("scale", scale)?;
        Ok(Self { scale })
    }

    /// Scale parameter β
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Rate parameter 1/β
    pub fn rate(&self) -> f64 {
        1.0 / self.scale
    }
}

impl DistributionModel for Exponential {
    fn name(&self) -> &'static str {
        NAME
    }

    fn dist_type(&self) -> DistType {
        DistType::Continuous
    }

    fn domain(&self) -> Range {
        Range::non_negative()
    }

    fn parameter_count(&self) -> usize {
        1
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        (-x / self.scale).exp() / self.scale
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        -(-x / self.scale).exp_m1()
    }

    fn inverse_cdf(&self, level: f64) -> f64 {
        if level >= 1.0 {
            return f64::INFINITY;
        }
        -self.scale * (-level).ln_1p()
    }

    fn mode(&self) -> f64 {
        0.0
    }

    fn mean(&self) -> f64 {
        self.scale
    }

    fn variance(&self) -> f64 {
        self.scale * self.scale
    }

    fn skewness(&self) -> f64 {
        2.0
    }

    fn kurtosis(&self) -> f64 {
        6.0
    }
}

impl FromObservations for Exponential {
    /// `scale = median / ln 2`
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_in_domain(NAME, observations, Range::non_negative())?;
        let scale = ensure_estimate(NAME, "scale", observations.median() / LN_2)?;
        Self::new(scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_values() {
        let e = Exponential::new(2.0).unwrap();
        assert_eq!(e.cdf(0.0), 0.0);
        assert_eq!(e.cdf(-1.0), 0.0);
        assert_eq!(e.pdf(-1.0), 0.0);
        assert_relative_eq!(e.pdf(0.0), 0.5);
        assert_relative_eq!(e.cdf(2.0), 1.0 - (-1.0f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(e.median(), 2.0 * LN_2, epsilon = 1e-15);
        assert_eq!(e.quantile(1.0).unwrap(), f64::INFINITY);
        assert_eq!(e.quantile(0.0).unwrap(), 0.0);
        assert_eq!(e.rate(), 0.5);
    }

    #[test]
    fn test_moments() {
        let e = Exponential::new(3.0).unwrap();
        assert_eq!(e.mean(), 3.0);
        assert_eq!(e.variance(), 9.0);
        assert_eq!(e.skewness(), 2.0);
        assert_eq!(e.kurtosis(), 6.0);
    }

    #[test]
    fn test_fit_scale_from_median() {
        let data = [0.1, 0.4, 0.7, 1.2, 2.5];
        let e = Exponential::from_data(&data).unwrap();
        assert_relative_eq!(e.scale(), 0.7 / LN_2, epsilon = 1e-15);
    }

    #[test]
    fn test_fit_rejects_negative_data() {
        let err = Exponential::from_data(&[-1.0, 0.5, 2.0]).unwrap_err();
        assert!(matches!(err, Error::OutOfDomain { family: "Exponential", .. }));
    }

    #[test]
    fn test_fit_rejects_zero_median() {
        assert!(Exponential::from_data(&[0.0, 0.0, 1.0]).is_err());
    }
}
