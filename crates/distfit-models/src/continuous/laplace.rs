//! Laplace and asymmetric Laplace distributions

use crate::traits::{ensure_estimate, ensure_in_domain, DistType, DistributionModel, FromObservations};
use distfit_core::{Error, Observations, Range, Result};
use std::f64::consts::LN_2;

/// Laplace (double exponential) distribution with location μ and scale b
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Laplace {
    location: f64,
    scale: f64,
}

impl Laplace {
    /// Create a Laplace distribution
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `location` is not finite or `scale` is not positive.
    pub fn new(location: f64, scale: f64) -> Result<Self> {
        Error::check_finite("location", location)?;
        Error::check_positive("scale", scale)?;
        Ok(Self { location, scale })
    }

    /// Location μ, the median
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Scale b
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl DistributionModel for Laplace {
    fn name(&self) -> &'static str {
        "Laplace"
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
        (-(x - self.location).abs() / self.scale).exp() / (2.0 * self.scale)
    }

    fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.location) / self.scale;
        if z < 0.0 {
            0.5 * z.exp()
        } else {
            1.0 - 0.5 * (-z).exp()
        }
    }

    fn inverse_cdf(&self, level: f64) -> f64 {
        if level <= 0.0 {
            return f64::NEG_INFINITY;
        }
        if level >= 1.0 {
            return f64::INFINITY;
        }
        if level < 0.5 {
            self.location + self.scale * (2.0 * level).ln()
        } else {
            self.location - self.scale * (2.0 - 2.0 * level).ln()
        }
    }

    fn mode(&self) -> f64 {
        self.location
    }

    fn mean(&self) -> f64 {
        self.location
    }

    fn variance(&self) -> f64 {
        2.0 * self.scale * self.scale
    }

    fn skewness(&self) -> f64 {
        0.0
    }

    fn kurtosis(&self) -> f64 {
        3.0
    }
}

impl FromObservations for Laplace {
    /// Median for location, `IQR / (2 ln 2)` for scale
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_in_domain("Laplace", observations, Range::real_line())?;
        let scale = observations.inter_quartile_range() / (2.0 * LN_2);
        let scale = ensure_estimate("Laplace", "scale", scale)?;
        Self::new(observations.median(), scale)
    }
}

/// Skewness reachable by the asymmetric Laplace family lies in (-2, 2)
const MAX_ABS_SKEWNESS: f64 = 1.99;
const ASYMMETRY_ITERATIONS: usize = 8;

/// Asymmetric Laplace distribution with location m, rate λ and asymmetry κ
///
/// The left tail decays with rate λ/κ and the right tail with rate λκ, so
/// κ < 1 skews right and κ = 1 is the symmetric Laplace with scale 1/λ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AsymmetricLaplace {
    location: f64,
    rate: f64,
    asymmetry: f64,
}

impl AsymmetricLaplace {
    /// Create an asymmetric Laplace distribution
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `location` is not finite or `rate` or `asymmetry`
    /// is not positive.
    pub fn new(location: f64, rate: f64, asymmetry: f64) -> Result<Self> {
        Error::check_finite("location", location)?;
        Error::check_positive("rate", rate)?;
        Error::check_positive("asymmetry", asymmetry)?;
        Ok(Self {
            location,
            rate,
            asymmetry,
        })
    }

    /// Location m, the mode
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Rate λ
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Asymmetry κ; 1 is the symmetric Laplace
    pub fn asymmetry(&self) -> f64 {
        self.asymmetry
    }

    /// Probability mass left of the location
    fn left_mass(&self) -> f64 {
        let k2 = self.asymmetry * self.asymmetry;
        k2 / (1.0 + k2)
    }
}

/// Skewness as a function of the asymmetry κ
fn skewness_of(kappa: f64) -> f64 {
    let k4 = kappa.powi(4);
    2.0 * (1.0 - kappa.powi(6)) / (1.0 + k4).powf(1.5)
}

fn skewness_derivative(kappa: f64) -> f64 {
    let k2 = kappa * kappa;
    -12.0 * kappa.powi(3) * (1.0 + k2) / (1.0 + k2 * k2).powf(2.5)
}

/// Solve `skewness_of(κ) = target` with a fixed Newton budget from κ = 1
fn asymmetry_for_skewness(target: f64) -> f64 {
    let target = target.clamp(-MAX_ABS_SKEWNESS, MAX_ABS_SKEWNESS);
    let mut kappa = 1.0_f64;
    for _ in 0..ASYMMETRY_ITERATIONS {
        let next = kappa - (skewness_of(kappa) - target) / skewness_derivative(kappa);
        // Newton can jump past zero on strongly skewed targets
        kappa = if next > 0.0 { next } else { kappa / 2.0 };
    }
    kappa
}

impl DistributionModel for AsymmetricLaplace {
    fn name(&self) -> &'static str {
        "AsymmetricLaplace"
    }

    fn dist_type(&self) -> DistType {
        DistType::Continuous
    }

    fn domain(&self) -> Range {
        Range::real_line()
    }

    fn parameter_count(&self) -> usize {
        3
    }

    fn pdf(&self, x: f64) -> f64 {
        let k = self.asymmetry;
        let norm = self.rate / (k + 1.0 / k);
        let d = x - self.location;
        if d < 0.0 {
            norm * (d * self.rate / k).exp()
        } else {
            norm * (-d * self.rate * k).exp()
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        let k = self.asymmetry;
        let d = x - self.location;
        if d <= 0.0 {
            self.left_mass() * (d * self.rate / k).exp()
        } else {
            1.0 - (-d * self.rate * k).exp() / (1.0 + k * k)
        }
    }

    fn inverse_cdf(&self, level: f64) -> f64 {
        if level <= 0.0 {
            return f64::NEG_INFINITY;
        }
        if level >= 1.0 {
            return f64::INFINITY;
        }
        let k = self.asymmetry;
        if level <= self.left_mass() {
            self.location + k / self.rate * (level / self.left_mass()).ln()
        } else {
            self.location - ((1.0 - level) * (1.0 + k * k)).ln() / (self.rate * k)
        }
    }

    fn mode(&self) -> f64 {
        self.location
    }

    fn mean(&self) -> f64 {
        let k = self.asymmetry;
        self.location + (1.0 - k * k) / (self.rate * k)
    }

    fn variance(&self) -> f64 {
        let k2 = self.asymmetry * self.asymmetry;
        (1.0 + k2 * k2) / (self.rate * self.rate * k2)
    }

    fn skewness(&self) -> f64 {
        skewness_of(self.asymmetry)
    }

    fn kurtosis(&self) -> f64 {
        let k4 = self.asymmetry.powi(4);
        6.0 * (1.0 + k4 * k4) / ((1.0 + k4) * (1.0 + k4))
    }
}

impl FromObservations for AsymmetricLaplace {
    /// Asymmetry from the sample skewness, rate from the variance and
    /// location from the mean
    fn from_observations(observations: &Observations) -> Result<Self> {
        const NAME: &str = "AsymmetricLaplace";
        ensure_in_domain(NAME, observations, Range::real_line())?;

        let skewness = observations.skewness();
        if !skewness.is_finite() {
            return Err(Error::Estimation {
                family: NAME,
                parameter: "asymmetry",
            });
        }
        let kappa = ensure_estimate(NAME, "asymmetry", asymmetry_for_skewness(skewness))?;
        let k2 = kappa * kappa;
        let rate = ((1.0 + k2 * k2) / (observations.variance() * k2)).sqrt();
        let rate = ensure_estimate(NAME, "rate", rate)?;
        let location = observations.mean() - (1.0 - k2) / (rate * kappa);
        Self::new(location, rate, kappa)
    }
}
