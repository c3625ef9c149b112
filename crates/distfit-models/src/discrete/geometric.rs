//! Geometric distribution

use super::is_whole;
use crate::traits::{ensure_estimate, ensure_integral_in_domain, DistType, DistributionModel, FromObservations};
use distfit_core::{Error, Observations, Range, Result};

/// Number of failures before the first success, success probability `p`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometric {
    p: f64,
}

impl Geometric {
    /// Create a geometric distribution
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `0 < p <= 1`.
    pub fn new(p: f64) -> Result<Self> {
        Error::check_positive("p", p)?;
        Error::check_probability("p", p)?;
        Ok(Self { p })
    }

    /// Success probability per trial
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl DistributionModel for Geometric {
    fn name(&self) -> &'static str {
        "Geometric"
    }

    fn dist_type(&self) -> DistType {
        DistType::Discrete
    }

    fn domain(&self) -> Range {
        Range::non_negative()
    }

    fn parameter_count(&self) -> usize {
        1
    }

    fn pdf(&self, x: f64) -> f64 {
        if !is_whole(x) || x < 0.0 {
            return 0.0;
        }
        (1.0 - self.p).powf(x) * self.p
    }

    fn cdf(&self, x: f64) -> f64 {
        let k = x.floor();
        if k < 0.0 {
            return 0.0;
        }
        1.0 - (1.0 - self.p).powf(k + 1.0)
    }

    fn mode(&self) -> f64 {
        0.0
    }

    fn mean(&self) -> f64 {
        (1.0 - self.p) / self.p
    }

    fn variance(&self) -> f64 {
        (1.0 - self.p) / (self.p * self.p)
    }

    fn skewness(&self) -> f64 {
        (2.0 - self.p) / (1.0 - self.p).sqrt()
    }

    fn kurtosis(&self) -> f64 {
        6.0 + self.p * self.p / (1.0 - self.p)
    }
}

impl FromObservations for Geometric {
    /// `p = 1/(1 + m)`
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_integral_in_domain("Geometric", observations, Range::non_negative())?;
        let p = ensure_estimate("Geometric", "p", 1.0 / (1.0 + observations.mean()))?;
        Self::new(p)
    }
}
