//! Probability distribution models with method-of-moments estimators
//!
//! Every family implements [`DistributionModel`] (density, CDF, quantile,
//! moments and the quartile-based summaries derived from them) and, when it
//! can be estimated from a sample, [`FromObservations`].
//!
//! # Features
//!
//! - **Continuous families**: Normal, Exponential, Rayleigh, Gamma, Erlang,
//!   ChiSquared, Beta, Laplace, AsymmetricLaplace, Logistic, Pareto, Uniform,
//!   StudentT, F and the Kolmogorov distribution
//! - **Discrete families**: Uniform, Binomial, Poisson, Geometric, Bernoulli,
//!   NegativeBinomial
//! - **Shared quantile solvers**: a fixed-budget Newton iteration for
//!   continuous families without a closed-form inverse, a step search for
//!   discrete ones
//! - **Family catalogue**: [`ModelFamily`] fits any family behind a trait
//!   object
//!
//! # Example
//!
//! ```rust
//! use distfit_models::{continuous::Exponential, DistributionModel, FromObservations};
//!
//! let model = Exponential::from_data(&[0.2, 0.5, 0.9, 1.4, 3.1]).unwrap();
//! let p = model.cdf(model.median());
//! assert!((p - 0.5).abs() < 1e-12);
//! ```

pub mod continuous;
pub mod discrete;
pub mod family;
pub mod solver;
pub mod traits;

// Re-export main types
pub use family::ModelFamily;
pub use traits::{DistType, DistributionModel, FromObservations};

// Re-export from distfit-core
pub use distfit_core::{Error, Observations, Range, Result};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::continuous::{Kolmogorov, Normal};
    pub use crate::{
        DistType, DistributionModel, Error, FromObservations, ModelFamily, Observations, Range,
        Result,
    };
}
