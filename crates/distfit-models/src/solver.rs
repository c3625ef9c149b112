//! Generic inverse-CDF solvers shared by every model family
//!
//! Continuous families without a closed-form quantile run a constant-budget
//! Newton–Raphson iteration on `CDF(x) - level`. Discrete families walk the
//! integer support until the CDF reaches the level.

use crate::traits::DistributionModel;
use distfit_core::Range;
use tracing::trace;

/// Number of Newton steps taken for every continuous quantile
pub const NEWTON_ITERATIONS: usize = 8;

/// Fraction of the residual stepped when the density cannot be divided by
pub const SINGULAR_STEP: f64 = 0.001;

/// Move in the working coordinate when Newton leaves a half-open bracket
pub const UNBRACKETED_STEP: f64 = 1.0;

/// Upper bound on integer steps taken by the discrete search
pub const MAX_DISCRETE_STEPS: usize = 1_000_000;

/// Where the Newton iteration starts: mode, else mean, else zero
fn starting_point<M: DistributionModel + ?Sized>(model: &M) -> f64 {
    let mode = model.mode();
    if mode.is_finite() {
        return mode;
    }
    let mean = model.mean();
    if mean.is_finite() {
        return mean;
    }
    0.0
}

/// Coordinate the Newton iteration runs in
///
/// Finite domain bounds are pushed to infinity so that power-law behaviour
/// at a bound, including an infinite density there, becomes exponential in
/// `t` and no step can land outside the domain.
#[derive(Debug, Clone, Copy)]
enum Coordinate {
    /// `x = t` on the real line
    Linear,
    /// `x = lower + e^t` on `[lower, ∞)`
    Log { lower: f64 },
    /// `x = upper - e^-t` on `(-∞, upper]`
    ReflectedLog { upper: f64 },
    /// `x = (lower + upper·e^t) / (1 + e^t)` on `[lower, upper]`
    Logit { lower: f64, upper: f64 },
}

impl Coordinate {
    fn for_domain(domain: &Range) -> Self {
        let (lower, upper) = (domain.min(), domain.max());
        match (lower.is_finite(), upper.is_finite()) {
            (true, true) => Self::Logit { lower, upper },
            (true, false) => Self::Log { lower },
            (false, true) => Self::ReflectedLog { upper },
            (false, false) => Self::Linear,
        }
    }

    /// `±inf` on a finite bound, NaN outside the domain
    fn to_t(self, x: f64) -> f64 {
        match self {
            Self::Linear => x,
            Self::Log { lower } => (x - lower).ln(),
            Self::ReflectedLog { upper } => -(upper - x).ln(),
            Self::Logit { lower, upper } => ((x - lower) / (upper - x)).ln(),
        }
    }

    fn to_x(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Log { lower } => lower + t.exp(),
            Self::ReflectedLog { upper } => upper - (-t).exp(),
            Self::Logit { lower, upper } if t >= 0.0 => {
                let e = (-t).exp();
                (upper + lower * e) / (1.0 + e)
            }
            Self::Logit { lower, upper } => {
                let e = t.exp();
                (lower + upper * e) / (1.0 + e)
            }
        }
    }

    /// `dx/dt` at `x`
    fn jacobian(self, x: f64) -> f64 {
        match self {
            Self::Linear => 1.0,
            Self::Log { lower } => x - lower,
            Self::ReflectedLog { upper } => upper - x,
            Self::Logit { lower, upper } => (x - lower) * (upper - x) / (upper - lower),
        }
    }
}

/// Newton–Raphson quantile of a continuous model
///
/// Runs at most [`NEWTON_ITERATIONS`] steps of `t ← t − (F(x) − p) / (f(x)·dx/dt)`
/// in a coordinate `t` that maps the domain onto the real line (log distance
/// from a finite bound, logit between two). Where the slope is infinite or
/// zero, the step is `SINGULAR_STEP × residual` in the direction that shrinks
/// the residual. Every evaluated point tightens a bracket around the root; a
/// step that leaves the bracket is replaced by the bracket midpoint, or by
/// [`UNBRACKETED_STEP`] towards the root while one side is still open.
/// Levels 0 and 1 return the domain bounds directly.
pub fn newton_quantile<M: DistributionModel + ?Sized>(model: &M, level: f64) -> f64 {
    let domain = model.domain();
    if level <= 0.0 {
        return domain.min();
    }
    if level >= 1.0 {
        return domain.max();
    }

    let coordinate = Coordinate::for_domain(&domain);
    let mut t = coordinate.to_t(domain.clamp(starting_point(model)));
    if !t.is_finite() {
        // Started on a bound; retry from the mean, else the centre of `t`
        t = coordinate.to_t(model.mean());
        if !t.is_finite() {
            t = 0.0;
        }
    }

    let mut below = f64::NEG_INFINITY;
    let mut above = f64::INFINITY;
    for iteration in 0..NEWTON_ITERATIONS {
        let x = coordinate.to_x(t);
        let residual = model.cdf(x) - level;
        if residual == 0.0 {
            break;
        }
        if residual < 0.0 {
            below = t;
        } else {
            above = t;
        }

        let slope = model.pdf(x) * coordinate.jacobian(x);
        let mut next = if slope.is_finite() && slope > 0.0 {
            t - residual / slope
        } else {
            trace!(
                model = model.name(),
                iteration,
                x,
                slope,
                "escaping singular density"
            );
            t - SINGULAR_STEP * residual
        };

        if !(below..=above).contains(&next) {
            next = if below.is_finite() && above.is_finite() {
                0.5 * (below + above)
            } else if residual < 0.0 {
                t + UNBRACKETED_STEP
            } else {
                t - UNBRACKETED_STEP
            };
        }
        t = next;
    }
    domain.clamp(coordinate.to_x(t))
}

/// Smallest whole number `k` in the domain with `CDF(k) >= level`
///
/// The search starts at `floor(mean)` (or the domain minimum when the mean
/// is undefined) and walks one integer at a time.
pub fn discrete_quantile<M: DistributionModel + ?Sized>(model: &M, level: f64) -> f64 {
    let domain = model.domain();
    if level <= 0.0 {
        return domain.min();
    }
    if level >= 1.0 {
        return domain.max();
    }

    let mean = model.mean();
    let mut k = if mean.is_finite() {
        domain.clamp(mean.floor())
    } else {
        domain.min()
    };
    if !k.is_finite() {
        k = 0.0;
    }

    let mut steps = 0;
    if model.cdf(k) >= level {
        while k - 1.0 >= domain.min() && model.cdf(k - 1.0) >= level && steps < MAX_DISCRETE_STEPS {
            k -= 1.0;
            steps += 1;
        }
    } else {
        while model.cdf(k) < level && k + 1.0 <= domain.max() && steps < MAX_DISCRETE_STEPS {
            k += 1.0;
            steps += 1;
        }
    }
    k
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::continuous::{Beta, ChiSquared, FDistribution, Gamma, Kolmogorov, StudentT};
    use crate::discrete::{Binomial, Geometric};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_newton_recovers_levels() {
        let gamma = Gamma::new(2.0, 1.0).unwrap();
        for &p in &[0.1, 0.25, 0.5, 0.75, 0.9] {
            let x = newton_quantile(&gamma, p);
            assert_abs_diff_eq!(gamma.cdf(x), p, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_newton_bounds() {
        let gamma = Gamma::new(2.0, 1.0).unwrap();
        assert_eq!(newton_quantile(&gamma, 0.0), 0.0);
        assert_eq!(newton_quantile(&gamma, 1.0), f64::INFINITY);

        let t = StudentT::new(5.0).unwrap();
        assert_eq!(newton_quantile(&t, 0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_newton_escapes_boundary_singularity() {
        // Density is infinite at 0
        let beta = Beta::new(0.5, 2.0).unwrap();
        assert!(beta.pdf(0.0).is_infinite());
        let x = newton_quantile(&beta, 0.3);
        assert!(x > 0.0 && x < 1.0);
        assert_abs_diff_eq!(beta.cdf(x), 0.3, epsilon = 1e-10);
    }

    #[test]
    fn test_newton_small_quantiles_near_singular_bound() {
        let gamma = Gamma::new(0.3, 1.0).unwrap();
        let x = newton_quantile(&gamma, 0.01);
        assert!(x > 0.0);
        assert_abs_diff_eq!(gamma.cdf(x), 0.01, epsilon = 1e-9);

        let beta = Beta::new(0.3, 4.0).unwrap();
        for &p in &[0.01, 0.05, 0.5, 0.99] {
            let x = newton_quantile(&beta, p);
            assert!(x > 0.0 && x < 1.0);
            assert_abs_diff_eq!(beta.cdf(x), p, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_newton_extreme_tails_within_budget() {
        // Eight steps leave a small residual beyond [0.01, 0.99]
        let chi = ChiSquared::new(1.0).unwrap();
        let f = FDistribution::new(1.0, 5.0).unwrap();
        for &p in &[0.001, 0.999] {
            assert_abs_diff_eq!(chi.cdf(newton_quantile(&chi, p)), p, epsilon = 1e-4);
            assert_abs_diff_eq!(f.cdf(newton_quantile(&f, p)), p, epsilon = 1e-4);
        }
        let t = StudentT::new(5.0).unwrap();
        assert_abs_diff_eq!(t.cdf(newton_quantile(&t, 0.001)), 0.001, epsilon = 1e-4);
    }

    #[test]
    fn test_coordinate_round_trip() {
        let cases = [
            (Coordinate::Linear, -3.5),
            (Coordinate::Log { lower: 2.0 }, 2.25),
            (Coordinate::ReflectedLog { upper: 1.0 }, -4.0),
            (Coordinate::Logit { lower: 0.0, upper: 1.0 }, 0.9),
        ];
        for (coordinate, x) in cases {
            let t = coordinate.to_t(x);
            assert_abs_diff_eq!(coordinate.to_x(t), x, epsilon = 1e-12);
        }
        let logit = Coordinate::Logit { lower: 0.0, upper: 1.0 };
        assert_eq!(logit.to_t(0.0), f64::NEG_INFINITY);
        assert_eq!(logit.to_t(1.0), f64::INFINITY);
        assert!(Coordinate::Log { lower: 0.0 }.to_t(-1.0).is_nan());
    }

    #[test]
    fn test_newton_on_kolmogorov() {
        let k = Kolmogorov::new();
        let critical = newton_quantile(&k, 0.95);
        assert_abs_diff_eq!(critical, 1.358_1, epsilon = 1e-3);
    }

    #[test]
    fn test_discrete_search() {
        let binomial = Binomial::new(10, 0.5).unwrap();
        assert_eq!(discrete_quantile(&binomial, 0.5), 5.0);
        assert_eq!(discrete_quantile(&binomial, 1e-6), 0.0);
        assert_eq!(discrete_quantile(&binomial, 1.0), 10.0);

        // P(X <= 0) = 0.5 for a fair geometric
        let geometric = Geometric::new(0.5).unwrap();
        assert_eq!(discrete_quantile(&geometric, 0.5), 0.0);
        assert_eq!(discrete_quantile(&geometric, 0.8), 2.0);
    }
}
