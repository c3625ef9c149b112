//! Normal (Gaussian) distribution

use crate::traits::{ensure_estimate, ensure_in_domain, DistType, DistributionModel, FromObservations};
use distfit_core::special::normal;
use distfit_core::{Error, Observations, Range, Result};

const NAME: &str = "Normal";

/// Normal distribution with location μ and scale σ
///
/// f(x) = exp(-(x-μ)² / (2σ²)) / (σ√(2π))
///
/// # Examples
///
/// ```rust
/// use distfit_models::{continuous::Normal, DistributionModel};
///
/// let n = Normal::standard();
/// assert_eq!(n.cdf(0.0), 0.5);
/// assert_eq!(n.quantile(0.5).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    location: f64,
    scale: f64,
}

impl Normal {
    /// Create a normal distribution
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `location` is not finite or `scale` is not positive.
    pub fn new(location: f64, scale: f64) -> Result<Self> {
        Error::check_finite("location", location)?;
        Error::check_positive("scale", scale)?;
        Ok(Self { location, scale })
    }

    /// N(0, 1)
    pub fn standard() -> Self {
        Self {
            location: 0.0,
            scale: 1.0,
        }
    }

    /// Location parameter μ
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Scale parameter σ
    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn standardize(&self, x: f64) -> f64 {
        (x - self.location) / self.scale
    }
}

impl DistributionModel for Normal {
    fn name(&self) -> &'static str {
        NAME
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
        normal::pdf(self.standardize(x)) / self.scale
    }

    fn cdf(&self, x: f64) -> f64 {
        normal::cdf(self.standardize(x))
    }

    fn inverse_cdf(&self, level: f64) -> f64 {
        self.location + self.scale * normal::ppf(level)
    }

    fn mode(&self) -> f64 {
        self.location
    }

    fn mean(&self) -> f64 {
        self.location
    }

    fn variance(&self) -> f64 {
        self.scale * self.scale
    }

    fn skewness(&self) -> f64 {
        0.0
    }

    fn kurtosis(&self) -> f64 {
        0.0
    }
}

impl FromObservations for Normal {
    /// Median for location, IQR rescaled by `2√2·erf⁻¹(½)` for scale
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_in_domain(NAME, observations, Range::real_line())?;
        let scale = observations.inter_quartile_range() / normal::iqr_to_sigma();
        let scale = ensure_estimate(NAME, "scale", scale)?;
        Self::new(observations.median(), scale)
    }
}
