//! Step-function snapshots of empirical and theoretical CDFs

use distfit_core::{Error, Observations, Result};
use distfit_models::DistributionModel;
use serde::{Deserialize, Serialize};

/// Where the CDF values of a snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CdfKind {
    /// Relative frequencies of an observed sample
    Empirical,
    /// A model CDF evaluated on a sample's support
    Theoretical,
}

/// A CDF tabulated on a strictly increasing set of points
///
/// `values[i]` are the support points and `cdf[i]` the cumulative probability
/// at each of them. Between points the CDF is a right-continuous step
/// function. Empirical snapshots always end at exactly 1.
///
/// # Examples
///
/// ```rust
/// use distfit_gof::EmpiricalCdf;
///
/// let ecdf = EmpiricalCdf::from_data(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 4.0]).unwrap();
/// assert_eq!(ecdf.values(), &[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(ecdf.evaluate(3.0), 0.6);
/// assert_eq!(ecdf.evaluate(0.0), 0.0);
/// assert_eq!(ecdf.evaluate(4.0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEmpiricalCdf")]
pub struct EmpiricalCdf {
    values: Vec<f64>,
    cdf: Vec<f64>,
    kind: CdfKind,
    sample_size: usize,
}

#[derive(Deserialize)]
struct RawEmpiricalCdf {
    values: Vec<f64>,
    cdf: Vec<f64>,
    kind: CdfKind,
    sample_size: usize,
}

impl TryFrom<RawEmpiricalCdf> for EmpiricalCdf {
    type Error = Error;

    fn try_from(raw: RawEmpiricalCdf) -> Result<Self> {
        if raw.values.is_empty() || raw.sample_size == 0 {
            return Err(Error::empty_input());
        }
        if raw.values.len() != raw.cdf.len() {
            return Err(Error::InvalidArgument(format!(
                "{} support points but {} CDF values",
                raw.values.len(),
                raw.cdf.len()
            )));
        }
        if raw.values.iter().any(|v| !v.is_finite())
            || raw.values.windows(2).any(|w| w[0] >= w[1])
        {
            return Err(Error::InvalidArgument(
                "Support points must be finite and strictly increasing".to_string(),
            ));
        }
        for &p in &raw.cdf {
            Error::check_probability("CDF value", p)?;
        }
        if raw.cdf.windows(2).any(|w| w[0] > w[1]) {
            return Err(Error::InvalidArgument(
                "CDF values must be non-decreasing".to_string(),
            ));
        }
        if raw.kind == CdfKind::Empirical && raw.cdf.last() != Some(&1.0) {
            return Err(Error::InvalidArgument(
                "Empirical CDF must end at 1".to_string(),
            ));
        }

        Ok(Self {
            values: raw.values,
            cdf: raw.cdf,
            kind: raw.kind,
            sample_size: raw.sample_size,
        })
    }
}

impl EmpiricalCdf {
    /// Relative cumulative frequencies at each distinct observation
    pub fn from_observations(observations: &Observations) -> Self {
        let sorted = observations.as_slice();
        let n = sorted.len();
        let distinct = observations.distinct_count();
        let mut values = Vec::with_capacity(distinct);
        let mut cdf = Vec::with_capacity(distinct);

        for (i, &x) in sorted.iter().enumerate() {
            // Record each value at its last occurrence
            if i + 1 == n || sorted[i + 1] != x {
                values.push(x);
                cdf.push((i + 1) as f64 / n as f64);
            }
        }

        Self {
            values,
            cdf,
            kind: CdfKind::Empirical,
            sample_size: n,
        }
    }

    /// Sort `data` and build its empirical CDF
    ///
    /// # Errors
    ///
    /// `InsufficientData` for empty input, `InvalidArgument` for non-finite
    /// values.
    pub fn from_data(data: &[f64]) -> Result<Self> {
        Ok(Self::from_observations(&Observations::new(data)?))
    }

    /// Evaluate `model` on the support of `support`
    ///
    /// The snapshot inherits the support's points and sample size so that it
    /// can be compared index by index.
    pub fn from_model<M: DistributionModel + ?Sized>(model: &M, support: &EmpiricalCdf) -> Self {
        let cdf = support.values.iter().map(|&x| model.cdf(x)).collect();
        Self {
            values: support.values.clone(),
            cdf,
            kind: CdfKind::Theoretical,
            sample_size: support.sample_size,
        }
    }

    /// Support points, strictly increasing
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Cumulative probabilities, one per support point
    pub fn cdf(&self) -> &[f64] {
        &self.cdf
    }

    /// Whether the steps came from the sample or from a model
    pub fn kind(&self) -> CdfKind {
        self.kind
    }

    /// Shorthand for `kind() == CdfKind::Empirical`
    pub fn is_empirical(&self) -> bool {
        self.kind == CdfKind::Empirical
    }

    /// Number of observations behind the snapshot
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Number of support points
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Step-function value `P(X <= x)`
    ///
    /// 0 below the first support point; otherwise the CDF at the largest
    /// support point not exceeding `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self.values.partition_point(|&v| v <= x) {
            0 => 0.0,
            idx => self.cdf[idx - 1],
        }
    }
}
