//! Sorted empirical observations and the summary statistics estimators need

use crate::error::{Error, Result};
use crate::range::Range;
use ordered_float::OrderedFloat;

/// A non-empty, sorted sample of finite observations
///
/// The data is sorted once on construction; its [`Range`] is cached so
/// estimators can cheaply check it against a family domain.
///
/// # Examples
///
/// ```rust
/// use distfit_core::Observations;
///
/// let obs = Observations::new(&[3.0, 1.0, 2.0, 4.0]).unwrap();
/// assert_eq!(obs.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(obs.mean(), 2.5);
/// assert_eq!(obs.median(), 2.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Observations {
    sorted: Vec<f64>,
    range: Range,
}

impl Observations {
    /// Copy and sort `data`
    ///
    /// # Errors
    ///
    /// `InsufficientData` for an empty slice, `InvalidArgument` if any value
    /// is NaN or infinite.
    pub fn new(data: &[f64]) -> Result<Self> {
        Self::from_vec(data.to_vec())
    }

    /// Take ownership of `data` and sort it in place
    pub fn from_vec(mut data: Vec<f64>) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::empty_input());
        }
        if let Some(bad) = data.iter().find(|x| !x.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "Observations must be finite, got {bad}"
            )));
        }

        data.sort_unstable_by_key(|&x| OrderedFloat(x));
        let range = Range::new(data[0], data[data.len() - 1])?;
        Ok(Self {
            sorted: data,
            range,
        })
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Always `false`; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// The sorted observations
    pub fn as_slice(&self) -> &[f64] {
        &self.sorted
    }

    /// Support of the sample, `[min, max]`
    pub fn range(&self) -> Range {
        self.range
    }

    /// Smallest observation
    pub fn min(&self) -> f64 {
        self.range.min()
    }

    /// Largest observation
    pub fn max(&self) -> f64 {
        self.range.max()
    }

    /// Whether every observation is a whole number
    pub fn is_integral(&self) -> bool {
        self.sorted.iter().all(|x| x.fract() == 0.0)
    }

    /// Number of distinct values
    pub fn distinct_count(&self) -> usize {
        1 + self.sorted.windows(2).filter(|w| w[0] != w[1]).count()
    }

    /// Arithmetic mean
    pub fn mean(&self) -> f64 {
        self.sorted.iter().sum::<f64>() / self.len() as f64
    }

    /// Sample variance with the `n - 1` denominator (0 for a single value)
    pub fn variance(&self) -> f64 {
        if self.len() < 2 {
            return 0.0;
        }
        self.central_moment_sum(2) / (self.len() - 1) as f64
    }

    /// Sample standard deviation
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Moment coefficient of skewness `g1`
    ///
    /// NaN for fewer than three observations, 0 for a constant sample.
    pub fn skewness(&self) -> f64 {
        if self.len() < 3 {
            return f64::NAN;
        }
        let n = self.len() as f64;
        let m2 = self.central_moment_sum(2) / n;
        if m2 < f64::EPSILON {
            return 0.0;
        }
        let m3 = self.central_moment_sum(3) / n;
        m3 / m2.powf(1.5)
    }

    /// Excess kurtosis `g2`
    ///
    /// NaN for fewer than four observations, 0 for a constant sample.
    pub fn kurtosis(&self) -> f64 {
        if self.len() < 4 {
            return f64::NAN;
        }
        let n = self.len() as f64;
        let m2 = self.central_moment_sum(2) / n;
        if m2 < f64::EPSILON {
            return 0.0;
        }
        let m4 = self.central_moment_sum(4) / n;
        m4 / (m2 * m2) - 3.0
    }

    fn central_moment_sum(&self, power: i32) -> f64 {
        let mean = self.mean();
        self.sorted.iter().map(|&x| (x - mean).powi(power)).sum()
    }

    /// Sample quantile with linear interpolation between order statistics
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `level` is outside `[0, 1]`.
    pub fn quantile(&self, level: f64) -> Result<f64> {
        Error::check_level(level)?;
        Ok(self.interpolate(level))
    }

    fn interpolate(&self, level: f64) -> f64 {
        let h = (self.len() - 1) as f64 * level;
        let lo = h.floor() as usize;
        let hi = h.ceil() as usize;
        let frac = h - lo as f64;
        self.sorted[lo] + frac * (self.sorted[hi] - self.sorted[lo])
    }

    /// Sample median
    pub fn median(&self) -> f64 {
        self.interpolate(0.5)
    }

    /// First quartile
    pub fn lower_quartile(&self) -> f64 {
        self.interpolate(0.25)
    }

    /// Third quartile
    pub fn upper_quartile(&self) -> f64 {
        self.interpolate(0.75)
    }

    /// Interquartile range `Q3 - Q1`
    pub fn inter_quartile_range(&self) -> f64 {
        self.upper_quartile() - self.lower_quartile()
    }
}

impl TryFrom<Vec<f64>> for Observations {
    type Error = Error;

    fn try_from(data: Vec<f64>) -> Result<Self> {
        Self::from_vec(data)
    }
}

impl TryFrom<&[f64]> for Observations {
    type Error = Error;

    fn try_from(data: &[f64]) -> Result<Self> {
        Self::new(data)
    }
}

impl AsRef<[f64]> for Observations {
    fn as_ref(&self) -> &[f64] {
        &self.sorted
    }
}
