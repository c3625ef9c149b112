//! The distribution-model contract shared by every family

use crate::solver;
use distfit_core::{Error, Observations, Range, Result};
use rand::distributions::{Distribution, Open01};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a model is supported on integers or on an interval of reals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistType {
    /// Probability mass on whole numbers; quantiles are found by step search
    Discrete,
    /// Probability density on an interval; quantiles are found by Newton's method
    Continuous,
}

impl DistType {
    /// Get the name of the distribution type
    pub fn name(&self) -> &'static str {
        match self {
            Self::Discrete => "discrete",
            Self::Continuous => "continuous",
        }
    }
}

impl fmt::Display for DistType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A univariate probability distribution with fixed parameters
///
/// Implementors validate their parameters on construction and are immutable
/// afterwards. Undefined moments are reported as `NaN` or `±inf`, never as
/// errors. [`kurtosis`](Self::kurtosis) is the excess kurtosis (0 for the
/// normal distribution).
///
/// Families without a closed-form inverse CDF inherit
/// [`inverse_cdf`](Self::inverse_cdf), which dispatches to the shared
/// solvers in [`crate::solver`].
pub trait DistributionModel: fmt::Debug + Send + Sync {
    /// Family name
    fn name(&self) -> &'static str;

    /// Discrete or continuous
    fn dist_type(&self) -> DistType;

    /// Support of the distribution
    fn domain(&self) -> Range;

    /// Number of free parameters
    fn parameter_count(&self) -> usize;

    /// Density (continuous) or mass (discrete) at `x`; 0 outside the domain
    fn pdf(&self, x: f64) -> f64;

    /// `P(X <= x)`
    fn cdf(&self, x: f64) -> f64;

    /// Most likely value
    fn mode(&self) -> f64;

    /// Expected value
    fn mean(&self) -> f64;

    /// Variance
    fn variance(&self) -> f64;

    /// Skewness
    fn skewness(&self) -> f64;

    /// Excess kurtosis
    fn kurtosis(&self) -> f64;

    /// Standard deviation
    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Inverse CDF for a level the caller has already checked is in `[0, 1]`
    ///
    /// Levels 0 and 1 map to the domain bounds.
    fn inverse_cdf(&self, level: f64) -> f64 {
        match self.dist_type() {
            DistType::Continuous => solver::newton_quantile(self, level),
            DistType::Discrete => solver::discrete_quantile(self, level),
        }
    }

    /// Inverse CDF
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `level` is outside `[0, 1]`.
    fn quantile(&self, level: f64) -> Result<f64> {
        Error::check_level(level)?;
        Ok(self.inverse_cdf(level))
    }

    /// Median
    fn median(&self) -> f64 {
        self.inverse_cdf(0.5)
    }

    /// First quartile
    fn lower_quartile(&self) -> f64 {
        self.inverse_cdf(0.25)
    }

    /// Third quartile
    fn upper_quartile(&self) -> f64 {
        self.inverse_cdf(0.75)
    }

    /// `Q3 - Q1`
    fn inter_quartile_range(&self) -> f64 {
        self.upper_quartile() - self.lower_quartile()
    }

    /// `(Q1 + Q3) / 2`
    fn mid_hinge(&self) -> f64 {
        (self.lower_quartile() + self.upper_quartile()) / 2.0
    }

    /// Tukey's trimean `(Q1 + 2·Q2 + Q3) / 4`
    fn tri_mean(&self) -> f64 {
        (self.lower_quartile() + 2.0 * self.median() + self.upper_quartile()) / 4.0
    }

    /// Bowley's quartile skewness `(Q3 - 2·Q2 + Q1) / (Q3 - Q1)`
    fn quartile_skewness(&self) -> f64 {
        let q1 = self.lower_quartile();
        let q2 = self.median();
        let q3 = self.upper_quartile();
        (q3 - 2.0 * q2 + q1) / (q3 - q1)
    }

    /// Whether `range` lies inside the model domain
    fn in_domain(&self, range: &Range) -> bool {
        range.is_subset_of(&self.domain())
    }

    /// Draw `count` values by inverse-CDF sampling
    fn generate(&self, rng: &mut dyn RngCore, count: usize) -> Vec<f64> {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            let level: f64 = Open01.sample(&mut *rng);
            values.push(self.inverse_cdf(level));
        }
        values
    }
}

/// Families that can estimate their parameters from a sample
pub trait FromObservations: DistributionModel + Sized {
    /// Estimate parameters from sorted observations
    ///
    /// # Errors
    ///
    /// `OutOfDomain` when the sample does not fit the family,
    /// `Estimation` when a derived parameter is invalid.
    fn from_observations(observations: &Observations) -> Result<Self>;

    /// Convenience wrapper sorting raw data first
    fn from_data(data: &[f64]) -> Result<Self> {
        Self::from_observations(&Observations::new(data)?)
    }
}

/// Fail with `OutOfDomain` unless the sample range lies inside `domain`
pub(crate) fn ensure_in_domain(
    family: &'static str,
    observations: &Observations,
    domain: Range,
) -> Result<()> {
    let sample = observations.range();
    if !sample.is_subset_of(&domain) {
        return Err(Error::OutOfDomain {
            family,
            sample,
            domain,
        });
    }
    Ok(())
}

/// Domain check for discrete families, which also need whole numbers
pub(crate) fn ensure_integral_in_domain(
    family: &'static str,
    observations: &Observations,
    domain: Range,
) -> Result<()> {
    ensure_in_domain(family, observations, domain)?;
    if !observations.is_integral() {
        return Err(Error::OutOfDomain {
            family,
            sample: observations.range(),
            domain,
        });
    }
    Ok(())
}

/// Fail with `Estimation` unless `value` is finite and positive
pub(crate) fn ensure_estimate(
    family: &'static str,
    parameter: &'static str,
    value: f64,
) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::Estimation { family, parameter })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::continuous::{Exponential, Normal};
    use crate::discrete::Poisson;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_quantile_rejects_bad_levels() {
        let normal = Normal::standard();
        assert!(normal.quantile(-0.01).is_err());
        assert!(normal.quantile(1.01).is_err());
        assert!(normal.quantile(f64::NAN).is_err());
        assert!(normal.quantile(0.3).is_ok());
    }

    #[test]
    fn test_derived_quartile_statistics() {
        let normal = Normal::new(10.0, 2.0).unwrap();
        assert_relative_eq!(normal.median(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(normal.mid_hinge(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(normal.tri_mean(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(normal.quartile_skewness(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(normal.inter_quartile_range(), 2.0 * 1.348_979_5, epsilon = 1e-6);

        // Right-skewed families have positive quartile skewness
        let exp = Exponential::new(1.0).unwrap();
        assert!(exp.quartile_skewness() > 0.0);
    }

    #[test]
    fn test_in_domain() {
        let exp = Exponential::new(1.0).unwrap();
        assert!(exp.in_domain(&Range::new(0.0, 5.0).unwrap()));
        assert!(!exp.in_domain(&Range::new(-1.0, 5.0).unwrap()));
    }

    #[test]
    fn test_generate_is_seed_deterministic() {
        let exp = Exponential::new(2.0).unwrap();
        let a = exp.generate(&mut ChaCha8Rng::seed_from_u64(7), 100);
        let b = exp.generate(&mut ChaCha8Rng::seed_from_u64(7), 100);
        assert_eq!(a, b);
        assert_eq!(a.len(), 100);
        assert!(a.iter().all(|&x| x >= 0.0 && x.is_finite()));
    }

    #[test]
    fn test_generate_discrete_values_are_integral() {
        let poisson = Poisson::new(3.5).unwrap();
        let draws = poisson.generate(&mut ChaCha8Rng::seed_from_u64(11), 500);
        assert!(draws.iter().all(|x| x.fract() == 0.0 && *x >= 0.0));
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        assert!((mean - 3.5).abs() < 0.3, "mean = {mean}");
    }

    #[test]
    fn test_domain_helpers() {
        let obs = Observations::new(&[0.5, 1.5]).unwrap();
        assert!(ensure_in_domain("Exponential", &obs, Range::non_negative()).is_ok());
        assert!(matches!(
            ensure_in_domain("Beta", &obs, Range::unit()),
            Err(Error::OutOfDomain { family: "Beta", .. })
        ));
        assert!(ensure_integral_in_domain("Poisson", &obs, Range::non_negative()).is_err());
        assert!(ensure_estimate("Gamma", "shape", -1.0).is_err());
        assert_eq!(ensure_estimate("Gamma", "shape", 2.0).unwrap(), 2.0);
    }

    #[test]
    fn test_dist_type_display() {
        assert_eq!(DistType::Discrete.to_string(), "discrete");
        assert_eq!(DistType::Continuous.to_string(), "continuous");
    }
}
