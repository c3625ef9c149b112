//! Discrete distribution families
//!
//! Every family here is supported on whole numbers. Mass functions return 0
//! for non-integral arguments; CDFs are right-continuous step functions
//! evaluated at `floor(x)`.

mod bernoulli;
mod binomial;
mod geometric;
mod negative_binomial;
mod poisson;
mod uniform;

pub use bernoulli::Bernoulli;
pub use binomial::Binomial;
pub use geometric::Geometric;
pub use negative_binomial::NegativeBinomial;
pub use poisson::Poisson;
pub use uniform::DiscreteUniform;

/// Whether `x` is a finite whole number
pub(crate) fn is_whole(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}

/// `ln C(n, k)` for real-valued arguments
pub(crate) fn ln_choose(n: f64, k: f64) -> f64 {
    use distfit_core::special::ln_gamma;
    ln_gamma(n + 1.0) - ln_gamma(k + 1.0) - ln_gamma(n - k + 1.0)
}
