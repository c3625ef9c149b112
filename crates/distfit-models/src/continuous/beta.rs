//! Beta distribution on the unit interval

use crate::traits::{ensure_estimate, ensure_in_domain, DistType, DistributionModel, FromObservations};
use distfit_core::special::{beta_reg, ln_beta};
use distfit_core::{Error, Observations, Range, Result};

const NAME: &str = "Beta";

/// Beta distribution with shapes α and β
///
/// f(x) = x^(α-1) (1-x)^(β-1) / B(α, β) for x in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beta {
    alpha: f64,
    beta: f64,
}

impl Beta {
    /// Create a beta distribution
    ///
    /// # Errors
    ///
    /// `InvalidArgument` unless both shapes are finite and positive.
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        Error::check_positive("alpha", alpha)?;
        Error::check_positive("beta", beta)?;
        Ok(Self { alpha, beta })
    }

    /// First shape parameter α
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Second shape parameter β
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Density at an end point, where `x^(α-1)` may blow up
    fn boundary_density(shape: f64, other: f64) -> f64 {
        if shape < 1.0 {
            f64::INFINITY
        } else if shape == 1.0 {
            (-ln_beta(1.0, other)).exp()
        } else {
            0.0
        }
    }
}

impl DistributionModel for Beta {
    fn name(&self) -> &'static str {
        NAME
    }

    fn dist_type(&self) -> DistType {
        DistType::Continuous
    }

    fn domain(&self) -> Range {
        Range::unit()
    }

    fn parameter_count(&self) -> usize {
        2
    }

    fn pdf(&self, x: f64) -> f64 {
        if !(0.0..=1.0).contains(&x) {
            return 0.0;
        }
        if x == 0.0 {
            return Self::boundary_density(self.alpha, self.beta);
        }
        if x == 1.0 {
            return Self::boundary_density(self.beta, self.alpha);
        }
        ((self.alpha - 1.0) * x.ln() + (self.beta - 1.0) * (-x).ln_1p()
            - ln_beta(self.alpha, self.beta))
        .exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        beta_reg(x, self.alpha, self.beta)
    }

    /// Interior mode when both shapes exceed 1, the favoured end point when
    /// only one does, NaN otherwise
    fn mode(&self) -> f64 {
        match (self.alpha > 1.0, self.beta > 1.0) {
            (true, true) => (self.alpha - 1.0) / (self.alpha + self.beta - 2.0),
            (false, true) => 0.0,
            (true, false) => 1.0,
            (false, false) => f64::NAN,
        }
    }

    fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    fn variance(&self) -> f64 {
        let s = self.alpha + self.beta;
        self.alpha * self.beta / (s * s * (s + 1.0))
    }

    fn skewness(&self) -> f64 {
        let (a, b) = (self.alpha, self.beta);
        2.0 * (b - a) * (a + b + 1.0).sqrt() / ((a + b + 2.0) * (a * b).sqrt())
    }

    fn kurtosis(&self) -> f64 {
        let (a, b) = (self.alpha, self.beta);
        let num = (a - b).powi(2) * (a + b + 1.0) - a * b * (a + b + 2.0);
        6.0 * num / (a * b * (a + b + 2.0) * (a + b + 3.0))
    }
}

impl FromObservations for Beta {
    /// `c = m(1-m)/v - 1`, `α = m·c`, `β = (1-m)·c`
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_in_domain(NAME, observations, Range::unit())?;
        let m = observations.mean();
        let v = observations.variance();
        let common = m * (1.0 - m) / v - 1.0;
        let alpha = ensure_estimate(NAME, "alpha", m * common)?;
        let beta = ensure_estimate(NAME, "beta", (1.0 - m) * common)?;
        Self::new(alpha, beta)
    }
}
