//! Core types for distribution fitting and goodness-of-fit testing
//!
//! This crate provides the leaves every other distfit crate builds on:
//!
//! - [`Error`] / [`Result`]: the shared error taxonomy
//! - [`Range`]: closed intervals for model domains and sample support
//! - [`Observations`]: a sorted sample with the summary statistics that
//!   method-of-moments estimators consume
//! - [`special`]: the regularized incomplete beta and gamma kernels
//!
//! # Example
//!
//! ```rust
//! use distfit_core::{special, Observations, Range};
//!
//! let obs = Observations::new(&[0.2, 0.4, 0.9, 0.1]).unwrap();
//! assert!(obs.range().is_subset_of(&Range::unit()));
//!
//! let p = special::regularized_incomplete_beta(0.5, 2.0, 2.0).unwrap();
//! assert!((p - 0.5).abs() < 1e-12);
//! ```

pub mod error;
pub mod observations;
pub mod range;
pub mod special;

// Re-export core types
pub use error::{Error, Result};
pub use observations::Observations;
pub use range::Range;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
