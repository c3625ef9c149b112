//! Bernoulli distribution

use crate::traits::{ensure_integral_in_domain, DistType, DistributionModel, FromObservations};
use distfit_core::{Error, Observations, Range, Result};

/// A single trial: 1 with probability `p`, 0 otherwise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bernoulli {
    p: f64,
}

impl Bernoulli {
    /// Bernoulli distribution with success probability `p` in `[0, 1]`
    pub fn new(p: f64) -> Result<Self> {
        Error::check_probability("p", p)?;
        Ok(Self { p })
    }

    /// Success probability
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl DistributionModel for Bernoulli {
    fn name(&self) -> &'static str {
        "Bernoulli"
    }

    fn dist_type(&self) -> DistType {
        DistType::Discrete
    }

    fn domain(&self) -> Range {
        Range::unit()
    }

    fn parameter_count(&self) -> usize {
        1
    }

    fn pdf(&self, x: f64) -> f64 {
        if x == 0.0 {
            1.0 - self.p
        } else if x == 1.0 {
            self.p
        } else {
            0.0
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            0.0
        } else if x < 1.0 {
            1.0 - self.p
        } else {
            1.0
        }
    }

    fn inverse_cdf(&self, level: f64) -> f64 {
        if level <= 1.0 - self.p {
            0.0
        } else {
            1.0
        }
    }

    fn mode(&self) -> f64 {
        if self.p > 0.5 {
            1.0
        } else {
            0.0
        }
    }

    fn mean(&self) -> f64 {
        self.p
    }

    fn variance(&self) -> f64 {
        self.p * (1.0 - self.p)
    }

    fn skewness(&self) -> f64 {
        (1.0 - 2.0 * self.p) / self.variance().sqrt()
    }

    fn kurtosis(&self) -> f64 {
        (1.0 - 6.0 * self.variance()) / self.variance()
    }
}

impl FromObservations for Bernoulli {
    /// `p = m`
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_integral_in_domain("Bernoulli", observations, Range::unit())?;
        Self::new(observations.mean())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_values() {
        let b = Bernoulli::new(0.3).unwrap();
        assert_relative_eq!(b.pdf(0.0), 0.7);
        assert_eq!(b.pdf(1.0), 0.3);
        assert_eq!(b.pdf(0.5), 0.0);
        assert_eq!(b.cdf(-0.1), 0.0);
        assert_relative_eq!(b.cdf(0.5), 0.7);
        assert_eq!(b.cdf(1.0), 1.0);
        assert_eq!(b.quantile(0.69).unwrap(), 0.0);
        assert_eq!(b.quantile(0.71).unwrap(), 1.0);
        assert_eq!(b.mode(), 0.0);
        assert!(Bernoulli::new(-0.1).is_err());
    }

    #[test]
    fn test_fit() {
        let b = Bernoulli::from_data(&[0.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(b.p(), 0.75);
        assert_eq!(b.mode(), 1.0);
        assert!(Bernoulli::from_data(&[0.0, 2.0]).is_err());
    }
}
