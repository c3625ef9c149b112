//! Pareto (type I) distribution

use crate::traits::{ensure_estimate, ensure_in_domain, DistType, DistributionModel, FromObservations};
use distfit_core::{Error, Observations, Range, Result};
use std::f64::consts::LN_2;

const NAME: &str = "Pareto";
const SHAPE_ITERATIONS: usize = 8;

/// Pareto distribution with scale xₘ (the minimum) and shape α
///
/// F(x) = 1 - (xₘ/x)^α for x >= xₘ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pareto {
    scale: f64,
    shape: f64,
}

impl Pareto {
    /// Pareto distribution with minimum `scale` and tail index `shape`; both must be positive
    pub fn new(scale: f64, shape: f64) -> Result<Self> {
        Error::check_positive("scale", scale)?;
        Error::check_positive("shape", shape)?;
        Ok(Self { scale, shape })
    }

    /// Scale parameter xₘ, the lower end of the support
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Shape (tail index) α
    pub fn shape(&self) -> f64 {
        self.shape
    }
}

impl DistributionModel for Pareto {
    fn name(&self) -> &'static str {
        NAME
    }

    fn dist_type(&self) -> DistType {
        DistType::Continuous
    }

    fn domain(&self) -> Range {
        Range::new(self.scale, f64::INFINITY).unwrap_or_else(|_| Range::non_negative())
    }

    fn parameter_count(&self) -> usize {
        2
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < self.scale {
            return 0.0;
        }
        let a = self.shape;
        a / x * (self.scale / x).powf(a)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.scale {
            return 0.0;
        }
        1.0 - (self.scale / x).powf(self.shape)
    }

    fn inverse_cdf(&self, level: f64) -> f64 {
        if level >= 1.0 {
            return f64::INFINITY;
        }
        self.scale * (1.0 - level).powf(-1.0 / self.shape)
    }

    fn mode(&self) -> f64 {
        self.scale
    }

    fn mean(&self) -> f64 {
        let a = self.shape;
        if a <= 1.0 {
            return f64::INFINITY;
        }
        a * self.scale / (a - 1.0)
    }

    fn variance(&self) -> f64 {
        let a = self.shape;
        if a <= 2.0 {
            return f64::INFINITY;
        }
        self.scale * self.scale * a / ((a - 1.0) * (a - 1.0) * (a - 2.0))
    }

    fn skewness(&self) -> f64 {
        let a = self.shape;
        if a <= 3.0 {
            return f64::NAN;
        }
        2.0 * (1.0 + a) / (a - 3.0) * ((a - 2.0) / a).sqrt()
    }

    fn kurtosis(&self) -> f64 {
        let a = self.shape;
        if a <= 4.0 {
            return f64::NAN;
        }
        6.0 * (a.powi(3) + a * a - 6.0 * a - 2.0) / (a * (a - 3.0) * (a - 4.0))
    }
}

impl FromObservations for Pareto {
    /// Match the median `xₘ·2^(1/α)` while debiasing the sample minimum,
    /// whose expectation is `xₘ·nα/(nα - 1)`
    ///
    /// Runs a fixed Newton budget on `f(α) = min·(1 - 1/(nα))·2^(1/α) - median`
    /// from `α₀ = ln 2 / ln(median/min)`.
    fn from_observations(observations: &Observations) -> Result<Self> {
        ensure_in_domain(NAME, observations, Range::non_negative())?;
        let min = observations.min();
        if min <= 0.0 {
            return Err(Error::OutOfDomain {
                family: NAME,
                sample: observations.range(),
                domain: Range::non_negative(),
            });
        }
        let median = observations.median();
        if median <= min {
            return Err(Error::Estimation {
                family: NAME,
                parameter: "shape",
            });
        }

        let n = observations.len() as f64;
        let mut alpha = LN_2 / (median / min).ln();
        for _ in 0..SHAPE_ITERATIONS {
            let bias = 1.0 - 1.0 / (n * alpha);
            let growth = 2.0_f64.powf(1.0 / alpha);
            let f = min * bias * growth - median;
            let df = min * growth / (alpha * alpha) * (1.0 / n - bias * LN_2);
            if f == 0.0 || df == 0.0 || !df.is_finite() {
                break;
            }
            alpha -= f / df;
        }

        let shape = ensure_estimate(NAME, "shape", alpha)?;
        let scale = ensure_estimate(NAME, "scale", min * (1.0 - 1.0 / (n * shape)))?;
        Self::new(scale, shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_values() {
        let p = Pareto::new(1.0, 3.0).unwrap();
        assert_eq!(p.domain().min(), 1.0);
        assert_eq!(p.pdf(0.5), 0.0);
        assert_eq!(p.cdf(1.0), 0.0);
        assert_relative_eq!(p.pdf(1.0), 3.0);
        assert_relative_eq!(p.cdf(2.0), 0.875);
        assert_relative_eq!(p.median(), 2.0f64.powf(1.0 / 3.0), epsilon = 1e-15);
        assert_eq!(p.quantile(0.0).unwrap(), 1.0);
        assert_eq!(p.quantile(1.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_moments_by_shape() {
        let p = Pareto::new(1.0, 5.0).unwrap();
        assert_relative_eq!(p.mean(), 1.25);
        assert_relative_eq!(p.variance(), 5.0 / 48.0);
        assert!(p.skewness().is_finite());
        assert!(p.kurtosis().is_finite());

        let heavy = Pareto::new(1.0, 1.0).unwrap();
        assert_eq!(heavy.mean(), f64::INFINITY);
        assert_eq!(heavy.variance(), f64::INFINITY);
        assert!(heavy.skewness().is_nan());
        assert!(heavy.kurtosis().is_nan());
    }

    #[test]
    fn test_fit_reproduces_median() {
        let truth = Pareto::new(1.0, 3.0).unwrap();
        let n = 9;
        let data: Vec<f64> = (0..n)
            .map(|i| truth.inverse_cdf((i as f64 + 0.5) / n as f64))
            .collect();
        let obs = Observations::new(&data).unwrap();
        let fitted = Pareto::from_observations(&obs).unwrap();
        assert_relative_eq!(fitted.median(), obs.median(), epsilon = 1e-9);
        assert!((fitted.shape() - 3.0).abs() < 0.5);
        assert!(fitted.scale() < obs.min());
        assert!((fitted.scale() - 1.0).abs() < 0.05);
    }

    #[test]
    fn test_fit_rejects_non_positive_and_flat_data() {
        let err = Pareto::from_data(&[0.0, 1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::OutOfDomain { family: "Pareto", .. }));
        let err = Pareto::from_data(&[2.0, 2.0, 2.0, 5.0]).unwrap_err();
        assert!(matches!(err, Error::Estimation { family: "Pareto", parameter: "shape" }));
    }
}
