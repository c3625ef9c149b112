//! Kolmogorov–Smirnov goodness-of-fit engine
//!
//! A [`KolmogorovSmirnov`] comparator holds the empirical CDF of a sample and
//! a reference CDF, which is either a model evaluated on the sample support
//! (one-sample test) or the empirical CDF of a second sample (two-sample
//! test). The statistic, confidence level and accept/reject decision all
//! dispatch on the kind of reference currently held.

use crate::config::ScoreTableConfig;
use crate::ecdf::{CdfKind, EmpiricalCdf};
use crate::score::{rank, KolmogorovScore};
use distfit_core::{Error, Observations, Result};
use distfit_models::continuous::Kolmogorov;
use distfit_models::{DistributionModel, ModelFamily};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One- and two-sample Kolmogorov–Smirnov comparator
///
/// # Examples
///
/// ```rust
/// use distfit_gof::KolmogorovSmirnov;
/// use distfit_models::continuous::Normal;
///
/// let data = [-1.2, -0.4, -0.1, 0.3, 0.5, 0.9, 1.6];
/// let ks = KolmogorovSmirnov::with_model(&data, &Normal::standard()).unwrap();
/// assert!(ks.kolmogorov_smirnov_test(0.95).unwrap());
/// let confidence = ks.confidence_level().unwrap();
/// assert!(confidence > 0.05 && confidence <= 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct KolmogorovSmirnov {
    sample: EmpiricalCdf,
    reference: EmpiricalCdf,
}

impl KolmogorovSmirnov {
    /// Comparator whose reference is the sample itself
    ///
    /// The statistic is 0 until the reference is re-pointed with
    /// [`set_reference_sample`](Self::set_reference_sample) or
    /// [`set_reference_model`](Self::set_reference_model).
    pub fn new(data: &[f64]) -> Result<Self> {
        let sample = EmpiricalCdf::from_data(data)?;
        Ok(Self {
            reference: sample.clone(),
            sample,
        })
    }

    /// One-sample comparator against `model`
    #[instrument(skip(data, model), fields(n = data.len(), model = model.name()))]
    pub fn with_model<M: DistributionModel + ?Sized>(data: &[f64], model: &M) -> Result<Self> {
        let observations = Observations::new(data)?;
        Ok(Self::from_observations(&observations, model))
    }

    /// One-sample comparator for pre-sorted observations
    pub fn from_observations<M: DistributionModel + ?Sized>(
        observations: &Observations,
        model: &M,
    ) -> Self {
        let sample = EmpiricalCdf::from_observations(observations);
        let reference = EmpiricalCdf::from_model(model, &sample);
        Self { sample, reference }
    }

    /// Two-sample comparator
    #[instrument(skip(first, second), fields(n1 = first.len(), n2 = second.len()))]
    pub fn two_sample(first: &[f64], second: &[f64]) -> Result<Self> {
        Ok(Self {
            sample: EmpiricalCdf::from_data(first)?,
            reference: EmpiricalCdf::from_data(second)?,
        })
    }

    /// Compare against the empirical CDF of `data` from now on
    pub fn set_reference_sample(&mut self, data: &[f64]) -> Result<()> {
        self.reference = EmpiricalCdf::from_data(data)?;
        Ok(())
    }

    /// Compare against `model` evaluated on the sample support from now on
    pub fn set_reference_model<M: DistributionModel + ?Sized>(&mut self, model: &M) {
        self.reference = EmpiricalCdf::from_model(model, &self.sample);
    }

    /// Empirical CDF of the sample under test
    pub fn sample(&self) -> &EmpiricalCdf {
        &self.sample
    }

    /// Current reference CDF
    pub fn reference(&self) -> &EmpiricalCdf {
        &self.reference
    }

    /// The scaled statistic for the current reference kind
    ///
    /// Against a model this is the one-sample `√n·D` with its small-sample
    /// correction; against another sample it is the two-sample
    /// `D·√(n₁n₂/(n₁ + n₂))` over the merged supports.
    pub fn statistic(&self) -> f64 {
        match self.reference.kind() {
            CdfKind::Theoretical => self.one_sample_statistic(),
            CdfKind::Empirical => self.two_sample_statistic(),
        }
    }

    /// `K = √n·D + 1/(6√n) + (√n·D - 1)/(4n)` with
    /// `D = max_i |sample.cdf[i] - reference.cdf[i]|`
    ///
    /// The reference must be tabulated on the sample support, which
    /// [`set_reference_model`](Self::set_reference_model) guarantees.
    fn one_sample_statistic(&self) -> f64 {
        let distance = self
            .sample
            .cdf()
            .iter()
            .zip(self.reference.cdf())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);

        let n = self.sample.sample_size() as f64;
        let root_n = n.sqrt();
        let scaled = root_n * distance;
        let statistic = scaled + 1.0 / (6.0 * root_n) + (scaled - 1.0) / (4.0 * n);
        debug!(distance, statistic, "one-sample KS statistic");
        statistic
    }

    /// `sup |F₁ - F₂| · √(n₁n₂/(n₁ + n₂))` over the merged supports
    fn two_sample_statistic(&self) -> f64 {
        let mut support: Vec<f64> = self
            .sample
            .values()
            .iter()
            .chain(self.reference.values())
            .copied()
            .collect();
        support.sort_by(f64::total_cmp);
        support.dedup();

        let distance = support
            .iter()
            .map(|&x| (self.sample.evaluate(x) - self.reference.evaluate(x)).abs())
            .fold(0.0, f64::max);

        let n1 = self.sample.sample_size() as f64;
        let n2 = self.reference.sample_size() as f64;
        let statistic = distance * (n1 * n2 / (n1 + n2)).sqrt();
        debug!(distance, statistic, "two-sample KS statistic");
        statistic
    }

    /// `1 - K(statistic)`, where K is the Kolmogorov CDF
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when the reference is an empirical sample.
    pub fn confidence_level(&self) -> Result<f64> {
        if self.reference.is_empirical() {
            return Err(Error::InvalidArgument(
                "Confidence level needs a theoretical reference distribution".to_string(),
            ));
        }
        Ok(1.0 - Kolmogorov::new().cdf(self.one_sample_statistic()))
    }

    /// Whether the sample is consistent with the reference at confidence
    /// `level`
    ///
    /// Accepts when the statistic does not exceed the Kolmogorov quantile at
    /// `level`, e.g. about 1.358 for 0.95.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `level` is outside `[0, 1]`.
    pub fn kolmogorov_smirnov_test(&self, level: f64) -> Result<bool> {
        let critical = Kolmogorov::new().quantile(level)?;
        let statistic = self.statistic();
        debug!(level, critical, statistic, "KS test");
        Ok(statistic <= critical)
    }

    /// Rank every family of the default battery by confidence level
    ///
    /// # Errors
    ///
    /// Only for unusable input (empty or non-finite data); families that
    /// cannot be fitted are left out of the table.
    pub fn score_table(data: &[f64]) -> Result<Vec<KolmogorovScore>> {
        Self::score_table_with(data, &ScoreTableConfig::default())
    }

    /// Rank the families selected by `config` by confidence level
    #[instrument(skip(data, config), fields(n = data.len(), families = config.families().len()))]
    pub fn score_table_with(
        data: &[f64],
        config: &ScoreTableConfig,
    ) -> Result<Vec<KolmogorovScore>> {
        let observations = Observations::new(data)?;

        #[cfg(feature = "parallel")]
        let candidates = config.families().par_iter();
        #[cfg(not(feature = "parallel"))]
        let candidates = config.families().iter();

        let mut scores: Vec<KolmogorovScore> = candidates
            .filter_map(|family| score_family(*family, &observations))
            .collect();

        rank(&mut scores);
        debug!(scored = scores.len(), "score table complete");
        Ok(scores)
    }
}

/// Confidence level of one family, or `None` if it cannot be fitted
fn score_family(family: ModelFamily, observations: &Observations) -> Option<KolmogorovScore> {
    let model = match family.fit(observations) {
        Ok(model) => model,
        Err(err) => {
            debug!(family = family.name(), error = %err, "skipping family");
            return None;
        }
    };

    let comparator = KolmogorovSmirnov::from_observations(observations, model.as_ref());
    match comparator.confidence_level() {
        Ok(score) if score.is_finite() => Some(KolmogorovScore::new(family, score)),
        Ok(score) => {
            debug!(family = family.name(), score, "skipping non-finite score");
            None
        }
        Err(err) => {
            debug!(family = family.name(), error = %err, "skipping family");
            None
        }
    }
}
