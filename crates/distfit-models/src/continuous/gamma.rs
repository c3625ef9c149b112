//! Gamma distribution and its integer-shape relatives
//!
//! [`Erlang`] and [`ChiSquared`] are gamma distributions with constrained
//! parameters; both delegate density, CDF and moments to an inner [`Gamma`]
//! and only differ in parameterization and estimator.

use crate::traits::{ensure_estimate, ensure_in_domain, DistType, DistributionModel, FromObservations};
use distfit_core::special::{ln_gamma, lower_gamma_reg};
use distfit_core::{Error, Observations, Range, Result};

/// Gamma distribution with shape k and scale θ
///
/// f(x) = x^(k-1) e^(-x/θ) / (Γ(k) θ^k) for x >= 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamma {
    shape: f64,
    scale: f64,
}

impl Gamma {
    /// Create a gamma distribution
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `shape` and `scale` are finite and positive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use distfit_models::{continuous::Gamma, DistributionModel};
    ///
    /// let gamma = Gamma::new(2.0, 3.0).unwrap();
    /// assert!((gamma.mean() - 6.0).abs() < 1e-12);
    /// assert!(Gamma::new(0.0, 1.0).is_err());
    /// ```
    /// `InvalidArgument` unless `shape` and `scale` are finite and positive.
    pub fn new(shape: f64, scale: f64) -> Result<Self> {
        Error::check_positive("shape", shape)?;
        Error::check_positive("scale", scale)?;
        Ok(Self { shape, scale })
    }

    /// Shape parameter k
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Scale parameter θ
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl DistributionModel for Gamma {
    fn name(&self) -> &'static str {
        "Gamma"
    }

    fn dist_type(&self) -> DistType {
        DistType::Continuous
    }

    fn domain(&self) -> Range {
        Range::non_negative()
    }

    fn parameter_count(&self) -> usize {
        2
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 {
            return match self.shape {
                k if k < 1.0 => f64::INFINITY,
                k if k == 1.0 => 1.0 / self.scale,
                _ => 0.0,
            };
        }
        let k = self.shape;
        ((k - 1.0) * x.ln() - x / self.scale - ln_gamma(k) - k * self.scale.ln()).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        lower_gamma_reg(self.shape, x / self.scale)
    }

    fn mode(&self) -> f64 {
        if self.shape >= 1.0 {
            (self.shape - 1.0) * self.scale
        } else {
            0.0
        }
    }

    fn mean(&self) -> f64 {
        self.shape * self.scale
    }

    fn variance(&self) -> f64 {
        self.shape * self.scale * self.scale
    }

    fn skewness(&self) -> f64 {
        2.0 / self.shape.sqrt()
    }

    fn kurtosis(&self) -> f64 {
        6.0 / self.shape
    }
}

impl FromObservations for Gamma {
    /// `shape = m²/v`, `scale = v/m`
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_in_domain("Gamma", observations, Range::non_negative())?;
        let m = observations.mean();
        let v = observations.variance();
        let shape = ensure_estimate("Gamma", "shape", m * m / v)?;
        let scale = ensure_estimate("Gamma", "scale", v / m)?;
        Self::new(shape, scale)
    }
}

/// Erlang distribution: a gamma distribution with a whole-number shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Erlang {
    shape: u32,
    gamma: Gamma,
}

impl Erlang {
    /// Create an Erlang distribution
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `shape` is zero or `scale` is not positive.
    pub fn new(shape: u32, scale: f64) -> Result<Self> {
        if shape == 0 {
            return Err(Error::InvalidArgument(
                "Erlang shape must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            shape,
            gamma: Gamma::new(f64::from(shape), scale)?,
        })
    }

    /// Number of exponential stages
    pub fn shape(&self) -> u32 {
        self.shape
    }

    /// Scale of each stage
    pub fn scale(&self) -> f64 {
        self.gamma.scale
    }
}

impl DistributionModel for Erlang {
    fn name(&self) -> &'static str {
        "Erlang"
    }

    fn dist_type(&self) -> DistType {
        DistType::Continuous
    }

    fn domain(&self) -> Range {
        Range::non_negative()
    }

    fn parameter_count(&self) -> usize {
        2
    }

    fn pdf(&self, x: f64) -> f64 {
        self.gamma.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.gamma.cdf(x)
    }

    fn mode(&self) -> f64 {
        self.gamma.mode()
    }

    fn mean(&self) -> f64 {
        self.gamma.mean()
    }

    fn variance(&self) -> f64 {
        self.gamma.variance()
    }

    fn skewness(&self) -> f64 {
        self.gamma.skewness()
    }

    fn kurtosis(&self) -> f64 {
        self.gamma.kurtosis()
    }
}

impl FromObservations for Erlang {
    /// `shape = max(1, round(m²/v))`, `scale = m / shape`
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_in_domain("Erlang", observations, Range::non_negative())?;
        let m = observations.mean();
        let v = observations.variance();
        let raw = ensure_estimate("Erlang", "shape", m * m / v)?;
        if raw > f64::from(u32::MAX) {
            return Err(Error::Estimation {
                family: "Erlang",
                parameter: "shape",
            });
        }
        let shape = raw.round().max(1.0) as u32;
        let scale = ensure_estimate("Erlang", "scale", m / f64::from(shape))?;
        Self::new(shape, scale)
    }
}

/// Chi-squared distribution with `df` degrees of freedom, i.e. Gamma(df/2, 2)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquared {
    df: f64,
    gamma: Gamma,
}

impl ChiSquared {
    /// Chi-squared distribution with `df > 0` degrees of freedom
    pub fn new(df: f64) -> Result<Self> {
        Error::check_positive("degrees of freedom", df)?;
        Ok(Self {
            df,
            gamma: Gamma::new(df / 2.0, 2.0)?,
        })
    }

    /// Degrees of freedom
    pub fn df(&self) -> f64 {
        self.df
    }
}

impl DistributionModel for ChiSquared {
    fn name(&self) -> &'static str {
        "ChiSquared"
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
        self.gamma.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.gamma.cdf(x)
    }

    fn mode(&self) -> f64 {
        (self.df - 2.0).max(0.0)
    }

    fn mean(&self) -> f64 {
        self.df
    }

    fn variance(&self) -> f64 {
        2.0 * self.df
    }

    fn skewness(&self) -> f64 {
        (8.0 / self.df).sqrt()
    }

    fn kurtosis(&self) -> f64 {
        12.0 / self.df
    }
}

impl FromObservations for ChiSquared {
    /// `df = max(1, round(m))`
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_in_domain("ChiSquared", observations, Range::non_negative())?;
        let m = observations.mean();
        Self::new(m.round().max(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gamma_values() {
        let g = Gamma::new(2.0, 1.0).unwrap();
        assert_eq!(g.pdf(0.0), 0.0);
        assert_relative_eq!(g.pdf(1.0), (-1.0f64).exp(), epsilon = 1e-14);
        // P(2, x) = 1 - (1 + x) e^-x
        assert_relative_eq!(g.cdf(1.0), 1.0 - 2.0 * (-1.0f64).exp(), epsilon = 1e-14);
        assert_eq!(g.mode(), 1.0);
        assert_eq!(g.mean(), 2.0);
        assert_eq!(g.variance(), 2.0);
        assert_relative_eq!(g.skewness(), 2.0f64.sqrt());
        assert_eq!(g.kurtosis(), 3.0);
    }

    #[test]
    fn test_gamma_small_shape_is_singular_at_zero() {
        let g = Gamma::new(0.5, 1.0).unwrap();
        assert!(g.pdf(0.0).is_infinite());
        assert_eq!(g.mode(), 0.0);
        let x = g.quantile(0.5).unwrap();
        assert_relative_eq!(g.cdf(x), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_gamma_non_integral_shape_cdf() {
        // Γ(2.3) shape falls back to statrs
        let g = Gamma::new(2.3, 1.5).unwrap();
        let x = g.quantile(0.7).unwrap();
        assert_relative_eq!(g.cdf(x), 0.7, epsilon = 1e-8);
    }

    #[test]
    fn test_gamma_fit() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        let g = Gamma::from_data(&data).unwrap();
        // m = 3, v = 2.5
        assert_relative_eq!(g.shape(), 3.6);
        assert_relative_eq!(g.scale(), 2.5 / 3.0);
        assert!(Gamma::from_data(&[2.0, 2.0, 2.0]).is_err());
        assert!(Gamma::from_data(&[-1.0, 2.0]).is_err());
    }

    #[test]
    fn test_erlang() {
        assert!(Erlang::new(0, 1.0).is_err());
        let e = Erlang::new(3, 2.0).unwrap();
        assert_eq!(e.mean(), 6.0);
        assert_eq!(e.variance(), 12.0);
        assert_eq!(e.mode(), 4.0);
        let x = e.quantile(0.5).unwrap();
        assert_relative_eq!(e.cdf(x), 0.5, epsilon = 1e-9);

        // m = 3, v = 2.5: shape = round(3.6) = 4, scale = 0.75
        let fitted = Erlang::from_data(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(fitted.shape(), 4);
        assert_relative_eq!(fitted.scale(), 0.75);
    }

    #[test]
    fn test_chi_squared() {
        let c = ChiSquared::new(4.0).unwrap();
        assert_eq!(c.mean(), 4.0);
        assert_eq!(c.variance(), 8.0);
        assert_eq!(c.mode(), 2.0);
        // P(X <= 9.487729) = 0.95 for 4 degrees of freedom
        assert_relative_eq!(c.cdf(9.487_729_036_781_154), 0.95, epsilon = 1e-9);

        let c1 = ChiSquared::new(1.0).unwrap();
        assert_relative_eq!(c1.cdf(3.841_458_820_694_124), 0.95, epsilon = 1e-9);
        assert_eq!(c1.mode(), 0.0);

        let fitted = ChiSquared::from_data(&[0.2, 0.9, 1.4, 3.5]).unwrap();
        assert_eq!(fitted.df(), 2.0);
        // Mean below 0.5 still yields one degree of freedom
        let fitted = ChiSquared::from_data(&[0.1, 0.2]).unwrap();
        assert_eq!(fitted.df(), 1.0);
    }
}
