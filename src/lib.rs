//! Distribution fitting and Kolmogorov–Smirnov goodness-of-fit
//!
//! `distfit` bundles the workspace crates behind one dependency:
//!
//! - [`distfit_core`]: errors, ranges, observations and special functions
//! - [`models`]: discrete and continuous distribution families with
//!   method-of-moments estimators
//! - [`gof`]: empirical CDFs, one- and two-sample KS tests and the
//!   model-ranking score table
//!
//! # Example
//!
//! ```rust
//! use distfit::prelude::*;
//! use distfit::models::continuous::Exponential;
//!
//! let data = [0.3, 1.1, 0.2, 2.4, 0.7, 0.05, 1.6, 0.9, 0.4, 3.3];
//! let model = Exponential::from_data(&data).unwrap();
//! let ks = KolmogorovSmirnov::with_model(&data, &model).unwrap();
//! assert!(ks.kolmogorov_smirnov_test(0.95).unwrap());
//!
//! for row in KolmogorovSmirnov::score_table(&data).unwrap().iter().take(3) {
//!     println!("{row}");
//! }
//! ```

pub use distfit_core;
pub use distfit_gof as gof;
pub use distfit_models as models;

pub use distfit_core::{Error, Observations, Range, Result};
pub use distfit_gof::{CdfKind, EmpiricalCdf, KolmogorovScore, KolmogorovSmirnov, ScoreTableConfig};
pub use distfit_models::{DistType, DistributionModel, FromObservations, ModelFamily};

/// Prelude for convenient imports
pub mod prelude {
    pub use distfit_gof::prelude::*;
    pub use distfit_models::prelude::*;
}
