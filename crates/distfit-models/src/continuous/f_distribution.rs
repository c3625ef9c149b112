//! Fisher–Snedecor F distribution

use crate::traits::{ensure_estimate, ensure_in_domain, DistType, DistributionModel, FromObservations};
use distfit_core::special::{beta_reg, ln_beta};
use distfit_core::{Error, Observations, Range, Result};

const NAME: &str = "F";

/// F distribution with numerator and denominator degrees of freedom d1, d2
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FDistribution {
    d1: f64,
    d2: f64,
}

impl FDistribution {
    /// F distribution with `d1` and `d2` degrees of freedom, both positive
    pub fn new(d1: f64, d2: f64) -> Result<Self> {
        Error::check_positive("d1", d1)?;
        Error::check_positive("d2", d2)?;
        Ok(Self { d1, d2 })
    }

    /// Numerator degrees of freedom
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// Denominator degrees of freedom
    pub fn d2(&self) -> f64 {
        self.d2
    }
}

/// Method-of-moments inversion: `d2` from the mean, then `d1` from the variance
fn degrees_from_moments(mean: f64, variance: f64) -> (f64, f64) {
    let d2 = 2.0 * mean / (mean - 1.0);
    let d1 = 2.0 * d2 * d2 * (d2 - 2.0)
        / (variance * (d2 - 2.0) * (d2 - 2.0) * (d2 - 4.0) - 2.0 * d2 * d2);
    (d1, d2)
}

impl DistributionModel for FDistribution {
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
        2
    }

    fn pdf(&self, x: f64) -> f64 {
        let (d1, d2) = (self.d1, self.d2);
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 {
            return match d1 {
                d if d < 2.0 => f64::INFINITY,
                d if d == 2.0 => 1.0,
                _ => 0.0,
            };
        }
        let ln_num = d1 * (d1 * x).ln() + d2 * d2.ln() - (d1 + d2) * (d1 * x + d2).ln();
        (0.5 * ln_num - x.ln() - ln_beta(d1 / 2.0, d2 / 2.0)).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x == f64::INFINITY {
            return 1.0;
        }
        let t = self.d1 * x;
        beta_reg(t / (t + self.d2), self.d1 / 2.0, self.d2 / 2.0)
    }

    fn mode(&self) -> f64 {
        let (d1, d2) = (self.d1, self.d2);
        if d1 > 2.0 {
            (d1 - 2.0) / d1 * d2 / (d2 + 2.0)
        } else {
            0.0
        }
    }

    fn mean(&self) -> f64 {
        let d2 = self.d2;
        if d2 > 2.0 {
            d2 / (d2 - 2.0)
        } else {
            f64::INFINITY
        }
    }

    fn variance(&self) -> f64 {
        let (d1, d2) = (self.d1, self.d2);
        match d2 {
            d if d > 4.0 => {
                2.0 * d2 * d2 * (d1 + d2 - 2.0) / (d1 * (d2 - 2.0) * (d2 - 2.0) * (d2 - 4.0))
            }
            d if d > 2.0 => f64::INFINITY,
            _ => f64::NAN,
        }
    }

    fn skewness(&self) -> f64 {
        let (d1, d2) = (self.d1, self.d2);
        if d2 <= 6.0 {
            return f64::NAN;
        }
        (2.0 * d1 + d2 - 2.0) * (8.0 * (d2 - 4.0)).sqrt()
            / ((d2 - 6.0) * (d1 * (d1 + d2 - 2.0)).sqrt())
    }

    fn kurtosis(&self) -> f64 {
        let (d1, d2) = (self.d1, self.d2);
        if d2 <= 8.0 {
            return f64::NAN;
        }
        let num = d1 * (5.0 * d2 - 22.0) * (d1 + d2 - 2.0) + (d2 - 4.0) * (d2 - 2.0).powi(2);
        12.0 * num / (d1 * (d2 - 6.0) * (d2 - 8.0) * (d1 + d2 - 2.0))
    }
}

impl FromObservations for FDistribution {
    /// `d2 = 2m/(m - 1)`, `d1 = 2d2²(d2 - 2) / (v(d2 - 2)²(d2 - 4) - 2d2²)`
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_in_domain(NAME, observations, Range::non_negative())?;
        let m = observations.mean();
        if m <= 1.0 {
            return Err(Error::Estimation {
                family: NAME,
                parameter: "d2",
            });
        }
        let (d1, d2) = degrees_from_moments(m, observations.variance());
        let d2 = ensure_estimate(NAME, "d2", d2)?;
        let d1 = ensure_estimate(NAME, "d1", d1)?;
        Self::new(d1, d2)
    }
}
