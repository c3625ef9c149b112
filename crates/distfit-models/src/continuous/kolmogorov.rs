//! Kolmogorov distribution
//!
//! The limiting distribution of `√n·D` for the Kolmogorov–Smirnov statistic
//! `D`. Both the CDF and the density are evaluated with one of two six-term
//! series, chosen on either side of `√(ln 2)`:
//!
//! - below: `K(x) = √(2π)/x · Σ exp(-(2k-1)²π²/(8x²))`
//! - at or above: `K(x) = 1 - 2 Σ (-1)^(k-1) exp(-2k²x²)`
//!
//! Six terms are enough for double precision on both sides of the split.

use crate::traits::{DistType, DistributionModel};
use distfit_core::Range;
use std::f64::consts::{LN_2, PI};

const TERMS: usize = 6;

/// Approximate location of the density maximum
const MODE: f64 = 0.735_467;

/// Apéry's constant ζ(3)
const ZETA_3: f64 = 1.202_056_903_159_594_3;

/// Kolmogorov distribution (no parameters)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Kolmogorov;

impl Kolmogorov {
    /// The limiting distribution of `√n·D`
    pub fn new() -> Self {
        Self
    }

    fn split() -> f64 {
        LN_2.sqrt()
    }

    /// `E[K^s]` for s = 1..4, from `s·Γ(s/2)·2^(-s/2)·η(s)`
    fn raw_moments() -> [f64; 4] {
        let m1 = (PI / 2.0).sqrt() * LN_2;
        let m2 = PI * PI / 12.0;
        let m3 = 3.0 * (PI.sqrt() / 2.0) * 2.0_f64.powf(-1.5) * 0.75 * ZETA_3;
        let m4 = 7.0 * PI.powi(4) / 720.0;
        [m1, m2, m3, m4]
    }
}

/// `(2k-1)²π²/8` for the k-th term of the small-x series
fn small_coefficient(k: usize) -> f64 {
    let odd = (2 * k - 1) as f64;
    odd * odd * PI * PI / 8.0
}

fn small_cdf(x: f64) -> f64 {
    let x2 = x * x;
    let sum: f64 = (1..=TERMS)
        .map(|k| (-small_coefficient(k) / x2).exp())
        .sum();
    (2.0 * PI).sqrt() / x * sum
}

fn small_pdf(x: f64) -> f64 {
    let x2 = x * x;
    let sum: f64 = (1..=TERMS)
        .map(|k| {
            let a = small_coefficient(k);
            (-a / x2).exp() * (2.0 * a / x2 - 1.0)
        })
        .sum();
    (2.0 * PI).sqrt() / x2 * sum
}

fn alternating(k: usize) -> f64 {
    if k % 2 == 1 {
        1.0
    } else {
        -1.0
    }
}

fn large_cdf(x: f64) -> f64 {
    let x2 = x * x;
    let sum: f64 = (1..=TERMS)
        .map(|k| {
            let kf = k as f64;
            alternating(k) * (-2.0 * kf * kf * x2).exp()
        })
        .sum();
    1.0 - 2.0 * sum
}

fn large_pdf(x: f64) -> f64 {
    let x2 = x * x;
    let sum: f64 = (1..=TERMS)
        .map(|k| {
            let kf = k as f64;
            alternating(k) * kf * kf * (-2.0 * kf * kf * x2).exp()
        })
        .sum();
    8.0 * x * sum
}

impl DistributionModel for Kolmogorov {
    fn name(&self) -> &'static str {
        "Kolmogorov"
    }

    fn dist_type(&self) -> DistType {
        DistType::Continuous
    }

    fn domain(&self) -> Range {
        Range::non_negative()
    }

    fn parameter_count(&self) -> usize {
        0
    }

    fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 || x.is_infinite() {
            return 0.0;
        }
        if x < Self::split() {
            small_pdf(x)
        } else {
            large_pdf(x)
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x.is_infinite() {
            return 1.0;
        }
        if x < Self::split() {
            small_cdf(x)
        } else {
            large_cdf(x)
        }
    }

    fn mode(&self) -> f64 {
        MODE
    }

    fn mean(&self) -> f64 {
        Self::raw_moments()[0]
    }

    fn variance(&self) -> f64 {
        let [m1, m2, ..] = Self::raw_moments();
        m2 - m1 * m1
    }

    fn skewness(&self) -> f64 {
        let [m1, m2, m3, _] = Self::raw_moments();
        let var = m2 - m1 * m1;
        (m3 - 3.0 * m1 * m2 + 2.0 * m1.powi(3)) / var.powf(1.5)
    }

    fn kurtosis(&self) -> f64 {
        let [m1, m2, m3, m4] = Self::raw_moments();
        let var = m2 - m1 * m1;
        let central4 = m4 - 4.0 * m1 * m3 + 6.0 * m1 * m1 * m2 - 3.0 * m1.powi(4);
        central4 / (var * var) - 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bounds() {
        let k = Kolmogorov::new();
        assert_eq!(k.cdf(0.0), 0.0);
        assert_eq!(k.cdf(-1.0), 0.0);
        assert_eq!(k.pdf(0.0), 0.0);
        assert_abs_diff_eq!(k.cdf(10.0), 1.0, epsilon = 1e-15);
        assert_eq!(k.cdf(f64::INFINITY), 1.0);
        assert!(k.cdf(1e-3) >= 0.0);
    }

    #[test]
    fn test_branches_agree_at_split() {
        let x = Kolmogorov::split();
        assert_abs_diff_eq!(small_cdf(x), large_cdf(x), epsilon = 1e-12);
        assert_abs_diff_eq!(small_pdf(x), large_pdf(x), epsilon = 1e-10);
    }

    #[test]
    fn test_critical_values() {
        let k = Kolmogorov::new();
        assert_abs_diff_eq!(k.cdf(1.358_1), 0.95, epsilon = 1e-4);
        assert_abs_diff_eq!(k.cdf(1.627_6), 0.99, epsilon = 1e-4);
        assert_abs_diff_eq!(k.quantile(0.95).unwrap(), 1.358_1, epsilon = 1e-3);
        assert_abs_diff_eq!(k.quantile(0.90).unwrap(), 1.223_8, epsilon = 1e-3);
    }

    #[test]
    fn test_moments() {
        let k = Kolmogorov::new();
        assert_abs_diff_eq!(k.mean(), 0.868_731, epsilon = 1e-6);
        assert_abs_diff_eq!(k.variance(), 0.067_773, epsilon = 1e-5);
        assert!(k.skewness() > 0.0);
        assert!(k.kurtosis() > 0.0);
    }

    #[test]
    fn test_density_peaks_at_mode() {
        let k = Kolmogorov::new();
        let peak = k.pdf(MODE);
        assert!(peak > k.pdf(MODE - 0.05));
        assert!(peak > k.pdf(MODE + 0.05));
    }
}
