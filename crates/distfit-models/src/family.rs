//! Catalogue of fittable families
//!
//! [`ModelFamily`] names every family that can be estimated from a sample and
//! builds the fitted model behind a trait object, so callers can sweep a list
//! of candidates without knowing their concrete types.

use crate::continuous::{
    AsymmetricLaplace, Beta, ChiSquared, Erlang, Exponential, FDistribution, Gamma, Laplace,
    Logistic, Normal, Pareto, Rayleigh, StudentT, Uniform,
};
use crate::discrete::{Bernoulli, Binomial, DiscreteUniform, Geometric, NegativeBinomial, Poisson};
use crate::traits::{DistType, DistributionModel, FromObservations};
use distfit_core::{Observations, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A distribution family with a method-of-moments estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelFamily {
    // Discrete
    DiscreteUniform,
    Binomial,
    NegativeBinomial,
    Bernoulli,
    Geometric,
    Poisson,
    // Continuous
    Uniform,
    Pareto,
    Rayleigh,
    Exponential,
    Erlang,
    ChiSquared,
    Gamma,
    Beta,
    Logistic,
    Normal,
    Laplace,
    AsymmetricLaplace,
    StudentT,
    F,
}

/// Discrete families in score-table order
const DISCRETE_BATTERY: [ModelFamily; 6] = [
    ModelFamily::DiscreteUniform,
    ModelFamily::Binomial,
    ModelFamily::NegativeBinomial,
    ModelFamily::Bernoulli,
    ModelFamily::Geometric,
    ModelFamily::Poisson,
];

/// Continuous families in score-table order
const CONTINUOUS_BATTERY: [ModelFamily; 12] = [
    ModelFamily::Uniform,
    ModelFamily::Pareto,
    ModelFamily::Rayleigh,
    ModelFamily::Exponential,
    ModelFamily::Erlang,
    ModelFamily::ChiSquared,
    ModelFamily::Gamma,
    ModelFamily::Beta,
    ModelFamily::Logistic,
    ModelFamily::Normal,
    ModelFamily::Laplace,
    ModelFamily::AsymmetricLaplace,
];

impl ModelFamily {
    /// Display name, identical to the fitted model's [`DistributionModel::name`]
    pub fn name(&self) -> &'static str {
        match self {
            Self::DiscreteUniform | Self::Uniform => "Uniform",
            Self::Binomial => "Binomial",
            Self::NegativeBinomial => "NegativeBinomial",
            Self::Bernoulli => "Bernoulli",
            Self::Geometric => "Geometric",
            Self::Poisson => "Poisson",
            Self::Pareto => "Pareto",
            Self::Rayleigh => "Rayleigh",
            Self::Exponential => "Exponential",
            Self::Erlang => "Erlang",
            Self::ChiSquared => "ChiSquared",
            Self::Gamma => "Gamma",
            Self::Beta => "Beta",
            Self::Logistic => "Logistic",
            Self::Normal => "Normal",
            Self::Laplace => "Laplace",
            Self::AsymmetricLaplace => "AsymmetricLaplace",
            Self::StudentT => "StudentT",
            Self::F => "F",
        }
    }

    /// Whether the family is supported on integers or reals
    pub fn dist_type(&self) -> DistType {
        match self {
            Self::DiscreteUniform
            | Self::Binomial
            | Self::NegativeBinomial
            | Self::Bernoulli
            | Self::Geometric
            | Self::Poisson => DistType::Discrete,
            _ => DistType::Continuous,
        }
    }

    /// Estimate the family's parameters from `observations`
    ///
    /// # Errors
    ///
    /// Whatever the family's estimator reports: `OutOfDomain` for samples
    /// outside its support, `Estimation` for degenerate parameters.
    pub fn fit(&self, observations: &Observations) -> Result<Box<dyn DistributionModel>> {
        fn boxed<M: FromObservations + 'static>(
            observations: &Observations,
        ) -> Result<Box<dyn DistributionModel>> {
            Ok(Box::new(M::from_observations(observations)?))
        }

        match self {
            Self::DiscreteUniform => boxed::<DiscreteUniform>(observations),
            Self::Binomial => boxed::<Binomial>(observations),
            Self::NegativeBinomial => boxed::<NegativeBinomial>(observations),
            Self::Bernoulli => boxed::<Bernoulli>(observations),
            Self::Geometric => boxed::<Geometric>(observations),
            Self::Poisson => boxed::<Poisson>(observations),
            Self::Uniform => boxed::<Uniform>(observations),
            Self::Pareto => boxed::<Pareto>(observations),
            Self::Rayleigh => boxed::<Rayleigh>(observations),
            Self::Exponential => boxed::<Exponential>(observations),
            Self::Erlang => boxed::<Erlang>(observations),
            Self::ChiSquared => boxed::<ChiSquared>(observations),
            Self::Gamma => boxed::<Gamma>(observations),
            Self::Beta => boxed::<Beta>(observations),
            Self::Logistic => boxed::<Logistic>(observations),
            Self::Normal => boxed::<Normal>(observations),
            Self::Laplace => boxed::<Laplace>(observations),
            Self::AsymmetricLaplace => boxed::<AsymmetricLaplace>(observations),
            Self::StudentT => boxed::<StudentT>(observations),
            Self::F => boxed::<FDistribution>(observations),
        }
    }

    /// The discrete score-table battery
    pub fn discrete() -> &'static [ModelFamily] {
        &DISCRETE_BATTERY
    }

    /// The continuous score-table battery
    pub fn continuous() -> &'static [ModelFamily] {
        &CONTINUOUS_BATTERY
    }

    /// Discrete battery followed by the continuous one
    pub fn all() -> Vec<ModelFamily> {
        DISCRETE_BATTERY
            .iter()
            .chain(CONTINUOUS_BATTERY.iter())
            .copied()
            .collect()
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DiscreteUniform => f.write_str("Uniform (discrete)"),
            other => f.write_str(other.name()),
        }
    }
}
