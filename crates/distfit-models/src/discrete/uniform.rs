//! Discrete uniform distribution

use super::is_whole;
use crate::traits::{ensure_integral_in_domain, DistType, DistributionModel, FromObservations};
use distfit_core::{Error, Observations, Range, Result};

/// Equal mass on every integer in `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscreteUniform {
    min: i64,
    max: i64,
}

impl DiscreteUniform {
    /// Uniform distribution on the integers `min..=max`; fails if `min > max`
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidArgument(format!(
                "Discrete uniform bounds must satisfy min <= max, got [{min}, {max}]"
            )));
        }
        Ok(Self { min, max })
    }

    /// Smallest value in the support
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Largest value in the support
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Number of support points
    fn count(&self) -> f64 {
        (self.max - self.min) as f64 + 1.0
    }
}

impl DistributionModel for DiscreteUniform {
    fn name(&self) -> &'static str {
        "Uniform"
    }

    fn dist_type(&self) -> DistType {
        DistType::Discrete
    }

    fn domain(&self) -> Range {
        Range::new(self.min as f64, self.max as f64).unwrap_or_else(|_| Range::real_line())
    }

    fn parameter_count(&self) -> usize {
        2
    }

    fn pdf(&self, x: f64) -> f64 {
        if is_whole(x) && self.domain().contains(x) {
            1.0 / self.count()
        } else {
            0.0
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        let k = x.floor();
        if k < self.min as f64 {
            return 0.0;
        }
        if k >= self.max as f64 {
            return 1.0;
        }
        (k - self.min as f64 + 1.0) / self.count()
    }

    fn inverse_cdf(&self, level: f64) -> f64 {
        if level <= 0.0 {
            return self.min as f64;
        }
        let k = self.min as f64 + (level * self.count()).ceil() - 1.0;
        self.domain().clamp(k)
    }

    /// Every support point is a mode; the midpoint is reported
    fn mode(&self) -> f64 {
        self.mean()
    }

    fn mean(&self) -> f64 {
        (self.min as f64 + self.max as f64) / 2.0
    }

    fn variance(&self) -> f64 {
        let n = self.count();
        (n * n - 1.0) / 12.0
    }

    fn skewness(&self) -> f64 {
        0.0
    }

    fn kurtosis(&self) -> f64 {
        let n2 = self.count().powi(2);
        if n2 == 1.0 {
            return f64::NAN;
        }
        -6.0 * (n2 + 1.0) / (5.0 * (n2 - 1.0))
    }
}

impl FromObservations for DiscreteUniform {
    /// Sample minimum and maximum
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_integral_in_domain("Uniform", observations, Range::real_line())?;
        Self::new(observations.min() as i64, observations.max() as i64)
    }
}
