//! Continuous uniform distribution

use crate::traits::{ensure_in_domain, DistType, DistributionModel, FromObservations};
use distfit_core::{Error, Observations, Range, Result};

/// Uniform distribution on `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    support: Range,
}

impl Uniform {
    /// Create a uniform distribution
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless both bounds are finite and `min < max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        Error::check_finite("min", min)?;
        Error::check_finite("max", max)?;
        if min >= max {
            return Err(Error::InvalidArgument(format!(
                "Uniform bounds must satisfy min < max, got [{min}, {max}]"
            )));
        }
        Ok(Self {
            support: Range::new(min, max)?,
        })
    }

    /// Lower bound
    pub fn min(&self) -> f64 {
        self.support.min()
    }

    /// Upper bound
    pub fn max(&self) -> f64 {
        self.support.max()
    }
}

impl DistributionModel for Uniform {
    fn name(&self) -> &'static str {
        "Uniform"
    }

    fn dist_type(&self) -> DistType {
        DistType::Continuous
    }

    fn domain(&self) -> Range {
        self.support
    }

    fn parameter_count(&self) -> usize {
        2
    }

    fn pdf(&self, x: f64) -> f64 {
        if self.support.contains(x) {
            1.0 / self.support.length()
        } else {
            0.0
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        (self.support.clamp(x) - self.min()) / self.support.length()
    }

    fn inverse_cdf(&self, level: f64) -> f64 {
        self.support
            .clamp(self.min() + level * self.support.length())
    }

    /// Every point is a mode; the midpoint is reported
    fn mode(&self) -> f64 {
        self.mean()
    }

    fn mean(&self) -> f64 {
        (self.min() + self.max()) / 2.0
    }

    fn variance(&self) -> f64 {
        self.support.length().powi(2) / 12.0
    }

    fn skewness(&self) -> f64 {
        0.0
    }

    fn kurtosis(&self) -> f64 {
        -1.2
    }
}

impl FromObservations for Uniform {
    /// Sample minimum and maximum
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_in_domain("Uniform", observations, Range::real_line())?;
        if observations.min() >= observations.max() {
            return Err(Error::Estimation {
                family: "Uniform",
                parameter: "range",
            });
        }
        Self::new(observations.min(), observations.max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_values() {
        let u = Uniform::new(2.0, 6.0).unwrap();
        assert_eq!(u.pdf(1.0), 0.0);
        assert_eq!(u.pdf(3.0), 0.25);
        assert_eq!(u.cdf(1.0), 0.0);
        assert_eq!(u.cdf(3.0), 0.25);
        assert_eq!(u.cdf(7.0), 1.0);
        assert_eq!(u.quantile(0.0).unwrap(), 2.0);
        assert_eq!(u.quantile(1.0).unwrap(), 6.0);
        assert_eq!(u.median(), 4.0);
        assert_relative_eq!(u.variance(), 16.0 / 12.0);
    }

    #[test]
    fn test_invalid() {
        assert!(Uniform::new(1.0, 1.0).is_err());
        assert!(Uniform::new(2.0, 1.0).is_err());
        assert!(Uniform::new(f64::NEG_INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_fit() {
        let u = Uniform::from_data(&[0.3, -1.0, 4.0]).unwrap();
        assert_eq!(u.min(), -1.0);
        assert_eq!(u.max(), 4.0);
        assert!(Uniform::from_data(&[1.0, 1.0]).is_err());
    }
}
