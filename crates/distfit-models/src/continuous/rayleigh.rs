//! Rayleigh distribution

use crate::traits::{ensure_estimate, ensure_in_domain, DistType, DistributionModel, FromObservations};
use distfit_core::{Error, Observations, Range, Result};
use std::f64::consts::{LN_2, PI};

const NAME: &str = "Rayleigh";

/// Rayleigh distribution with scale σ
///
/// f(x) = x/σ² · exp(-x² / (2σ²)) for x >= 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rayleigh {
    scale: f64,
}

impl Rayleigh {
    /// Rayleigh distribution with positive scale σ
    pub fn new(scale: f64) -> Result<Self> {
        Error::check_positive("scale", scale)?;
        Ok(Self { scale })
    }

    /// Scale parameter σ
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl DistributionModel for Rayleigh {
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
        let s2 = self.scale * self.scale;
        x / s2 * (-x * x / (2.0 * s2)).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let s2 = self.scale * self.scale;
        -(-x * x / (2.0 * s2)).exp_m1()
    }

    fn inverse_cdf(&self, level: f64) -> f64 {
        if level >= 1.0 {
            return f64::INFINITY;
        }
        self.scale * (-2.0 * (-level).ln_1p()).sqrt()
    }

    fn mode(&self) -> f64 {
        self.scale
    }

    fn mean(&self) -> f64 {
        self.scale * (PI / 2.0).sqrt()
    }

    fn variance(&self) -> f64 {
        (4.0 - PI) / 2.0 * self.scale * self.scale
    }

    fn skewness(&self) -> f64 {
        2.0 * PI.sqrt() * (PI - 3.0) / (4.0 - PI).powf(1.5)
    }

    fn kurtosis(&self) -> f64 {
        -(6.0 * PI * PI - 24.0 * PI + 16.0) / ((4.0 - PI) * (4.0 - PI))
    }
}

impl FromObservations for Rayleigh {
    /// `σ = median / √(2 ln 2)`
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_in_domain(NAME, observations, Range::non_negative())?;
        let scale = observations.median() / (2.0 * LN_2).sqrt();
        Self::new(ensure_estimate(NAME, "scale", scale)?)
    }
}
