//! Ranked goodness-of-fit scores

use distfit_models::ModelFamily;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// How well one fitted family explains a sample
///
/// `score` is the Kolmogorov–Smirnov confidence level in `[0, 1]`; higher is
/// a better fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KolmogorovScore {
    pub family: ModelFamily,
    pub name: String,
    pub score: f64,
}

impl KolmogorovScore {
    pub fn new(family: ModelFamily, score: f64) -> Self {
        Self {
            family,
            name: family.name().to_string(),
            score,
        }
    }
}

impl fmt::Display for KolmogorovScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.4}", self.name, self.score)
    }
}

/// Stable sort by descending score; ties keep evaluation order
pub(crate) fn rank(scores: &mut [KolmogorovScore]) {
    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}
