//! Kolmogorov–Smirnov goodness-of-fit testing
//!
//! This crate compares samples against fitted models or against each other:
//!
//! - [`EmpiricalCdf`]: step-function CDF snapshots, empirical or evaluated
//!   from a model on a sample's support
//! - [`KolmogorovSmirnov`]: one- and two-sample statistics, the confidence
//!   level of a one-sample fit and the accept/reject test
//! - [`KolmogorovSmirnov::score_table`]: fit every candidate family to a
//!   sample and rank them by confidence level
//!
//! # Features
//!
//! - `parallel`: score candidate families on the rayon thread pool
//!
//! # Example
//!
//! ```rust
//! use distfit_gof::KolmogorovSmirnov;
//!
//! let data = [0.3, 1.1, 0.2, 2.4, 0.7, 0.05, 1.6, 0.9, 0.4, 3.3];
//! let table = KolmogorovSmirnov::score_table(&data).unwrap();
//! assert!(!table.is_empty());
//! assert!(table.windows(2).all(|w| w[0].score >= w[1].score));
//! ```

pub mod comparator;
pub mod config;
pub mod ecdf;
pub mod score;

// Re-export main types
pub use comparator::KolmogorovSmirnov;
pub use config::ScoreTableConfig;
pub use ecdf::{CdfKind, EmpiricalCdf};
pub use score::KolmogorovScore;

// Re-export from lower layers
pub use distfit_core::{Error, Observations, Result};
pub use distfit_models::{DistType, DistributionModel, ModelFamily};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        CdfKind, DistType, DistributionModel, EmpiricalCdf, Error, KolmogorovScore,
        KolmogorovSmirnov, ModelFamily, Result, ScoreTableConfig,
    };
}
