//! Negative binomial distribution

use super::{is_whole, ln_choose};
use crate::traits::{ensure_estimate, ensure_integral_in_domain, DistType, DistributionModel, FromObservations};
use distfit_core::special::beta_reg;
use distfit_core::{Error, Observations, Range, Result};

const NAME: &str = "NegativeBinomial";

/// Number of failures before `r` successes, success probability `p`
///
/// `r` may be any positive real, which makes this the gamma–Poisson mixture
/// used for over-dispersed counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegativeBinomial {
    r: f64,
    p: f64,
}

impl NegativeBinomial {
    /// Create a negative binomial distribution
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless `r > 0` and `0 < p <= 1`.
    pub fn new(r: f64, p: f64) -> Result<Self> {
        Error::check_positive("r", r)?;
        Error::check_positive("p", p)?;
        Error::check_probability("p", p)?;
        Ok(Self { r, p })
    }

    /// Number of successes r
    pub fn r(&self) -> f64 {
        self.r
    }

    /// Success probability p
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl DistributionModel for NegativeBinomial {
    fn name(&self) -> &'static str {
        NAME
    }

    fn dist_type(&self) -> DistType {
        DistType::Discrete
    }

    fn domain(&self) -> Range {
        Range::non_negative()
    }

    fn parameter_count(&self) -> usize {
        2
    }

    fn pdf(&self, x: f64) -> f64 {
        if !is_whole(x) || x < 0.0 {
            return 0.0;
        }
        if self.p == 1.0 {
            return if x == 0.0 { 1.0 } else { 0.0 };
        }
        let ln_mass =
            ln_choose(x + self.r - 1.0, x) + self.r * self.p.ln() + x * (-self.p).ln_1p();
        ln_mass.exp()
    }

    /// `P(X <= k) = I_p(r, k + 1)`
    fn cdf(&self, x: f64) -> f64 {
        let k = x.floor();
        if k < 0.0 {
            return 0.0;
        }
        if k.is_infinite() {
            return 1.0;
        }
        beta_reg(self.p, self.r, k + 1.0)
    }

    fn mode(&self) -> f64 {
        if self.r > 1.0 {
            ((self.r - 1.0) * (1.0 - self.p) / self.p).floor()
        } else {
            0.0
        }
    }

    fn mean(&self) -> f64 {
        self.r * (1.0 - self.p) / self.p
    }

    fn variance(&self) -> f64 {
        self.r * (1.0 - self.p) / (self.p * self.p)
    }

    fn skewness(&self) -> f64 {
        (2.0 - self.p) / ((1.0 - self.p) * self.r).sqrt()
    }

    fn kurtosis(&self) -> f64 {
        6.0 / self.r + self.p * self.p / ((1.0 - self.p) * self.r)
    }
}

impl FromObservations for NegativeBinomial {
    /// `p = m/v`, `r = m²/(v - m)`; needs variance above the mean
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_integral_in_domain(NAME, observations, Range::non_negative())?;
        let m = observations.mean();
        let v = observations.variance();
        if v <= m {
            return Err(Error::Estimation {
                family: NAME,
                parameter: "r",
            });
        }
        let p = ensure_estimate(NAME, "p", m / v)?;
        let r = ensure_estimate(NAME, "r", m * m / (v - m))?;
        Self::new(r, p)
    }
}
