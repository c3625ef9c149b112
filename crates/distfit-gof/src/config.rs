//! Configuration for the model-ranking score table

use distfit_models::{DistType, ModelFamily};
use serde::{Deserialize, Serialize};

/// Which families a score table tries, in order
///
/// Defaults to the discrete battery followed by the continuous one. Families
/// that cannot be fitted to a given sample are skipped at scoring time, so
/// a broad candidate list is safe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTableConfig {
    families: Vec<ModelFamily>,
}

impl Default for ScoreTableConfig {
    fn default() -> Self {
        Self {
            families: ModelFamily::all(),
        }
    }
}

impl ScoreTableConfig {
    /// The discrete battery only
    pub fn discrete() -> Self {
        Self {
            families: ModelFamily::discrete().to_vec(),
        }
    }

    /// The continuous battery only
    pub fn continuous() -> Self {
        Self {
            families: ModelFamily::continuous().to_vec(),
        }
    }

    /// Battery matching `dist_type`
    pub fn for_type(dist_type: DistType) -> Self {
        match dist_type {
            DistType::Discrete => Self::discrete(),
            DistType::Continuous => Self::continuous(),
        }
    }

    /// Replace the candidate list
    pub fn with_families(mut self, families: impl IntoIterator<Item = ModelFamily>) -> Self {
        self.families = families.into_iter().collect();
        self
    }

    /// Append one candidate unless it is already listed
    pub fn with_family(mut self, family: ModelFamily) -> Self {
        if !self.families.contains(&family) {
            self.families.push(family);
        }
        self
    }

    /// Candidate families in evaluation order
    pub fn families(&self) -> &[ModelFamily] {
        &self.families
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(ScoreTableConfig::default().families().len(), 18);
        assert_eq!(ScoreTableConfig::discrete().families()[0], ModelFamily::DiscreteUniform);
        assert_eq!(ScoreTableConfig::continuous().families()[0], ModelFamily::Uniform);
        assert_eq!(
            ScoreTableConfig::for_type(DistType::Discrete),
            ScoreTableConfig::discrete()
        );
    }

    #[test]
    fn test_builders() {
        let config = ScoreTableConfig::default()
            .with_families([ModelFamily::Normal, ModelFamily::Laplace])
            .with_family(ModelFamily::StudentT)
            .with_family(ModelFamily::Normal);
        assert_eq!(
            config.families(),
            &[ModelFamily::Normal, ModelFamily::Laplace, ModelFamily::StudentT]
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let config = ScoreTableConfig::discrete();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("Poisson"));
        let back: ScoreTableConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
