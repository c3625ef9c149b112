//! Poisson distribution

use super::is_whole;
use crate::traits::{ensure_estimate, ensure_integral_in_domain, DistType, DistributionModel, FromObservations};
use distfit_core::special::{ln_gamma, upper_gamma_reg};
use distfit_core::{Error, Observations, Range, Result};

/// Poisson distribution with rate λ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// Poisson distribution with positive rate λ
    pub fn new(lambda: f64) -> Result<Self> {
        Error::check_positive("lambda", lambda)?;
        Ok(Self { lambda })
    }

    /// Rate λ
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl DistributionModel for Poisson {
    fn name(&self) -> &'static str {
        "Poisson"
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
        (x * self.lambda.ln() - self.lambda - ln_gamma(x + 1.0)).exp()
    }

    /// `P(X <= k) = Q(k + 1, λ)`
    fn cdf(&self, x: f64) -> f64 {
        let k = x.floor();
        if k < 0.0 {
            return 0.0;
        }
        if k.is_infinite() {
            return 1.0;
        }
        upper_gamma_reg(k + 1.0, self.lambda)
    }

    fn mode(&self) -> f64 {
        self.lambda.floor()
    }

    fn mean(&self) -> f64 {
        self.lambda
    }

    fn variance(&self) -> f64 {
        self.lambda
    }

    fn skewness(&self) -> f64 {
        1.0 / self.lambda.sqrt()
    }

    fn kurtosis(&self) -> f64 {
        1.0 / self.lambda
    }
}

impl FromObservations for Poisson {
    /// `λ = m`
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_integral_in_domain("Poisson", observations, Range::non_negative())?;
        let lambda = ensure_estimate("Poisson", "lambda", observations.mean())?;
        Self::new(lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_values() {
        let p = Poisson::new(2.0).unwrap();
        let e2 = (-2.0f64).exp();
        assert_relative_eq!(p.pdf(0.0), e2, epsilon = 1e-15);
        assert_relative_eq!(p.pdf(2.0), 2.0 * e2, epsilon = 1e-14);
        assert_eq!(p.pdf(1.5), 0.0);
        assert_eq!(p.pdf(-1.0), 0.0);
        assert_relative_eq!(p.cdf(0.0), e2, epsilon = 1e-14);
        assert_relative_eq!(p.cdf(2.0), 5.0 * e2, epsilon = 1e-14);
        assert_relative_eq!(p.cdf(2.7), 5.0 * e2, epsilon = 1e-14);
        assert_eq!(p.cdf(-0.5), 0.0);
        assert_eq!(p.mode(), 2.0);
        assert_eq!(p.quantile(0.5).unwrap(), 2.0);
        assert_eq!(p.quantile(1.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_fit() {
        let p = Poisson::from_data(&[0.0, 1.0, 3.0, 4.0]).unwrap();
        assert_eq!(p.lambda(), 2.0);
        assert!(Poisson::from_data(&[0.0, 0.0]).is_err());
        assert!(Poisson::from_data(&[-1.0, 2.0]).is_err());
        assert!(Poisson::from_data(&[1.5, 2.0]).is_err());
    }
}
