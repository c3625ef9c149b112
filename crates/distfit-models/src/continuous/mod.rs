//! Continuous distribution families

mod beta;
mod exponential;
mod f_distribution;
mod gamma;
mod kolmogorov;
mod laplace;
mod logistic;
mod normal;
mod pareto;
mod rayleigh;
mod student_t;
mod uniform;

pub use beta::Beta;
pub use exponential::Exponential;
pub use f_distribution::FDistribution;
pub use gamma::{ChiSquared, Erlang, Gamma};
pub use kolmogorov::Kolmogorov;
pub use laplace::{AsymmetricLaplace, Laplace};
pub use logistic::Logistic;
pub use normal::Normal;
pub use pareto::Pareto;
pub use rayleigh::Rayleigh;
pub use student_t::StudentT;
pub use uniform::Uniform;
