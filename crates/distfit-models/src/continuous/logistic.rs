//! Logistic distribution

use crate::traits::{ensure_estimate, ensure_in_domain, DistType, DistributionModel, FromObservations};
use distfit_core::{Error, Observations, Range, Result};
use std::f64::consts::PI;

/// Logistic distribution with location μ and scale s
///
/// F(x) = 1 / (1 + exp(-(x-μ)/s))
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Logistic {
    location: f64,
    scale: f64,
}

impl Logistic {
    /// Create a logistic distribution
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `location` is not finite or `scale` is not positive.
    pub fn new(location: f64, scale: f64) -> Result<Self> {
        Error::check_finite("location", location)?;
        Error::check_positive("scale", scale)?;
        Ok(Self { location, scale })
    }

    /// Location μ, the mean and median
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Scale s
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl DistributionModel for Logistic {
    fn name(&self) -> &'static str {
        "Logistic"
    }

    fn dist_type(&self) -> DistType {
        DistType::Continuous
    }

    fn domain(&self) -> Range {
        Range::real_line()
    }

    fn parameter_count(&self) -> usize {
        2
    }

    fn pdf(&self, x: f64) -> f64 {
        // Symmetric, so evaluate on the non-positive side to keep exp bounded
        let z = -((x - self.location) / self.scale).abs();
        let e = z.exp();
        e / (self.scale * (1.0 + e) * (1.0 + e))
    }

    fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.location) / self.scale;
        1.0 / (1.0 + (-z).exp())
    }

    fn inverse_cdf(&self, level: f64) -> f64 {
        if level <= 0.0 {
            return f64::NEG_INFINITY;
        }
        if level >= 1.0 {
            return f64::INFINITY;
        }
        self.location + self.scale * (level / (1.0 - level)).ln()
    }

    fn mode(&self) -> f64 {
        self.location
    }

    fn mean(&self) -> f64 {
        self.location
    }

    fn variance(&self) -> f64 {
        self.scale * self.scale * PI * PI / 3.0
    }

    fn skewness(&self) -> f64 {
        0.0
    }

    fn kurtosis(&self) -> f64 {
        1.2
    }
}

impl FromObservations for Logistic {
    /// `μ = m`, `s = √(3v)/π`
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_in_domain("Logistic", observations, Range::real_line())?;
        let scale = (3.0 * observations.variance()).sqrt() / PI;
        let scale = ensure_estimate("Logistic", "scale", scale)?;
        Self::new(observations.mean(), scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_values() {
        let l = Logistic::new(0.0, 1.0).unwrap();
        assert_eq!(l.cdf(0.0), 0.5);
        assert_eq!(l.pdf(0.0), 0.25);
        assert_eq!(l.median(), 0.0);
        assert_relative_eq!(l.pdf(2.0), l.pdf(-2.0));
        assert_relative_eq!(l.cdf(l.quantile(0.8).unwrap()), 0.8, epsilon = 1e-14);
        assert!(l.pdf(1000.0) >= 0.0);
        assert_eq!(l.cdf(-1000.0), 0.0);
    }

    #[test]
    fn test_fit_matches_variance() {
        let data = [-2.0, -1.0, 0.0, 1.0, 2.0, 6.0];
        let obs = Observations::new(&data).unwrap();
        let l = Logistic::from_observations(&obs).unwrap();
        assert_relative_eq!(l.location(), 1.0);
        assert_relative_eq!(l.variance(), obs.variance(), epsilon = 1e-12);
    }
}
