//! Student's t distribution

use crate::traits::{ensure_estimate, ensure_in_domain, DistType, DistributionModel, FromObservations};
use distfit_core::special::{beta_reg, ln_beta};
use distfit_core::{Error, Observations, Range, Result};

/// Standard Student's t distribution with ν degrees of freedom
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentT {
    df: f64,
}

impl StudentT {
    /// Standard Student's t with `df > 0` degrees of freedom
    pub fn new(df: f64) -> Result<Self> {
        Error::check_positive("degrees of freedom", df)?;
        Ok(Self { df })
    }

    /// Degrees of freedom ν
    pub fn df(&self) -> f64 {
        self.df
    }
}

impl DistributionModel for StudentT {
    fn name(&self) -> &'static str {
        "StudentT"
    }

    fn dist_type(&self) -> DistType {
        DistType::Continuous
    }

    fn domain(&self) -> Range {
        Range::real_line()
    }

    fn parameter_count(&self) -> usize {
        1
    }

    fn pdf(&self, x: f64) -> f64 {
        let v = self.df;
        let ln_norm = -0.5 * v.ln() - ln_beta(0.5, v / 2.0);
        (ln_norm - (v + 1.0) / 2.0 * (x * x / v).ln_1p()).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x == f64::NEG_INFINITY {
            return 0.0;
        }
        if x == f64::INFINITY {
            return 1.0;
        }
        let v = self.df;
        let tail = 0.5 * beta_reg(v / (v + x * x), v / 2.0, 0.5);
        if x < 0.0 {
            tail
        } else {
            1.0 - tail
        }
    }

    fn mode(&self) -> f64 {
        0.0
    }

    fn mean(&self) -> f64 {
        if self.df > 1.0 {
            0.0
        } else {
            f64::NAN
        }
    }

    fn variance(&self) -> f64 {
        match self.df {
            v if v > 2.0 => v / (v - 2.0),
            v if v > 1.0 => f64::INFINITY,
            _ => f64::NAN,
        }
    }

    fn skewness(&self) -> f64 {
        if self.df > 3.0 {
            0.0
        } else {
            f64::NAN
        }
    }

    fn kurtosis(&self) -> f64 {
        match self.df {
            v if v > 4.0 => 6.0 / (v - 4.0),
            v if v > 2.0 => f64::INFINITY,
            _ => f64::NAN,
        }
    }
}

impl FromObservations for StudentT {
    /// `ν = 2v/(v - 1)`, defined for sample variance above 1
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_in_domain("StudentT", observations, Range::real_line())?;
        let v = observations.variance();
        if v <= 1.0 {
            return Err(Error::Estimation {
                family: "StudentT",
                parameter: "degrees of freedom",
            });
        }
        let df = ensure_estimate("StudentT", "degrees of freedom", 2.0 * v / (v - 1.0))?;
        Self::new(df)
    }
}
