//! Closed numeric interval used for model domains and sample support

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable closed interval `[min, max]`
///
/// Bounds may be infinite, so the same type describes the support of a
/// sample and the domain of a distribution family.
///
/// # Examples
///
/// ```rust
/// use distfit_core::Range;
///
/// let range = Range::new(0.0, 10.0).unwrap();
/// assert_eq!(range.length(), 10.0);
/// assert_eq!(range.clamp(12.0), 10.0);
/// assert_eq!(range.split(4).unwrap(), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct Range {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawRange {
    min: f64,
    max: f64,
}

impl TryFrom<RawRange> for Range {
    type Error = Error;

    fn try_from(raw: RawRange) -> Result<Self> {
        Range::new(raw.min, raw.max)
    }
}

impl Range {
    /// Create a new range, failing if `min > max` or a bound is NaN
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min.is_nan() || max.is_nan() {
            return Err(Error::InvalidArgument(
                "Range bounds must not be NaN".to_string(),
            ));
        }
        if min > max {
            return Err(Error::InvalidArgument(format!(
                "Range minimum {min} exceeds maximum {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// The whole real line `(-inf, +inf)`
    pub const fn real_line() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
        }
    }

    /// The non-negative half line `[0, +inf)`
    pub const fn non_negative() -> Self {
        Self {
            min: 0.0,
            max: f64::INFINITY,
        }
    }

    /// The unit interval `[0, 1]`
    pub const fn unit() -> Self {
        Self { min: 0.0, max: 1.0 }
    }

    /// Lower bound
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Length `max - min` (infinite for unbounded ranges)
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Saturate `x` into `[min, max]`
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// Whether `x` lies inside the range
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// Whether this range lies entirely inside `other`
    pub fn is_subset_of(&self, other: &Range) -> bool {
        self.min >= other.min && self.max <= other.max
    }

    /// Whether `other` lies entirely inside this range
    pub fn is_superset_of(&self, other: &Range) -> bool {
        other.is_subset_of(self)
    }

    /// Partition into `bins` equal bins, returning the `bins + 1` edges
    pub fn split(&self, bins: usize) -> Result<Vec<f64>> {
        if bins == 0 {
            return Err(Error::InvalidArgument(
                "Cannot split a range into zero bins".to_string(),
            ));
        }
        if !self.length().is_finite() {
            return Err(Error::InvalidArgument(format!(
                "Cannot split unbounded range {self}"
            )));
        }

        let step = self.length() / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| self.min + step * i as f64).collect();
        // Last edge is exact regardless of rounding in `step`
        edges.push(self.max);
        Ok(edges)
    }
}

impl From<Range> for (f64, f64) {
    fn from(range: Range) -> Self {
        (range.min, range.max)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
