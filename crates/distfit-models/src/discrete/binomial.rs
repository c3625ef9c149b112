//! Binomial distribution

use super::{is_whole, ln_choose};
use crate::traits::{ensure_estimate, ensure_integral_in_domain, DistType, DistributionModel, FromObservations};
use distfit_core::special::beta_reg;
use distfit_core::{Error, Observations, Range, Result};

const NAME: &str = "Binomial";

/// Number of successes in `n` independent trials with success probability `p`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    trials: u64,
    p: f64,
}

impl Binomial {
    /// Create a binomial distribution
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for zero trials or `p` outside `[0, 1]`.
    pub fn new(trials: u64, p: f64) -> Result<Self> {
        if trials == 0 {
            return Err(Error::InvalidArgument(
                "Binomial needs at least one trial".to_string(),
            ));
        }
        Error::check_probability("p", p)?;
        Ok(Self { trials, p })
    }

    /// Number of trials n
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Success probability
    pub fn p(&self) -> f64 {
        self.p
    }

    fn n(&self) -> f64 {
        self.trials as f64
    }
}

impl DistributionModel for Binomial {
    fn name(&self) -> &'static str {
        NAME
    }

    fn dist_type(&self) -> DistType {
        DistType::Discrete
    }

    fn domain(&self) -> Range {
        Range::new(0.0, self.n()).unwrap_or_else(|_| Range::non_negative())
    }

    fn parameter_count(&self) -> usize {
        2
    }

    fn pdf(&self, x: f64) -> f64 {
        if !is_whole(x) || x < 0.0 || x > self.n() {
            return 0.0;
        }
        let n = self.n();
        if self.p == 0.0 {
            return if x == 0.0 { 1.0 } else { 0.0 };
        }
        if self.p == 1.0 {
            return if x == n { 1.0 } else { 0.0 };
        }
        (ln_choose(n, x) + x * self.p.ln() + (n - x) * (-self.p).ln_1p()).exp()
    }

    /// `P(X <= k) = I_(1-p)(n - k, k + 1)`
    fn cdf(&self, x: f64) -> f64 {
        let k = x.floor();
        if k < 0.0 {
            return 0.0;
        }
        if k >= self.n() {
            return 1.0;
        }
        beta_reg(1.0 - self.p, self.n() - k, k + 1.0)
    }

    fn mode(&self) -> f64 {
        ((self.n() + 1.0) * self.p).floor().min(self.n())
    }

    fn mean(&self) -> f64 {
        self.n() * self.p
    }

    fn variance(&self) -> f64 {
        self.n() * self.p * (1.0 - self.p)
    }

    fn skewness(&self) -> f64 {
        (1.0 - 2.0 * self.p) / self.variance().sqrt()
    }

    fn kurtosis(&self) -> f64 {
        (1.0 - 6.0 * self.p * (1.0 - self.p)) / self.variance()
    }
}

impl FromObservations for Binomial {
    /// `p = 1 - v/m`, `n = max(round(m/p), max)`, then `p = m/n`
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_integral_in_domain(NAME, observations, Range::non_negative())?;
        let m = observations.mean();
        let v = observations.variance();
        let p = ensure_estimate(NAME, "p", 1.0 - v / m)?;
        let trials = ensure_estimate(NAME, "trials", (m / p).round().max(observations.max()))?;
        let p = ensure_estimate(NAME, "p", m / trials)?;
        Self::new(trials as u64, p)
    }
}
