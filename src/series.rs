//! Fixed-length sample series.
//!
//! A [`Series`] is the time axis of a chart: samples ordered oldest to newest,
//! left to right. Its length is fixed at creation; [`Series::slide`] drops the
//! oldest sample and appends a new one, so an animation can scroll without the
//! window ever growing or shrinking.
//!
//! # Example
//!
//! ```
//! use netchart::series::Series;
//!
//! let mut series = Series::from(vec![10.0, 20.0, 30.0]);
//! series.slide(40.0);
//! assert_eq!(series.len(), 3);
//! assert_eq!(series.to_vec(), vec![20.0, 30.0, 40.0]);
//! ```

use std::collections::VecDeque;
use std::fmt;

/// Ordered, fixed-length window of synthetic utilization samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    /// VecDeque gives O(1) pop-front/push-back for sliding.
    data: VecDeque<f64>,
}

impl Series {
    /// Creates an empty series.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the series has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates samples from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &f64> + ExactSizeIterator {
        self.data.iter()
    }

    /// Newest sample.
    #[must_use]
    pub fn latest(&self) -> Option<f64> {
        self.data.back().copied()
    }

    /// Largest sample, or `None` for an empty series.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::max)
    }

    /// The divisor used for relative scaling.
    ///
    /// Falls back to 1.0 when the series is empty or its maximum is not a
    /// positive finite number, so scaling never divides by zero.
    #[must_use]
    pub fn scale_max(&self) -> f64 {
        match self.max() {
            Some(max) if max > 0.0 && max.is_finite() => max,
            _ => 1.0,
        }
    }

    /// Drops the oldest sample and appends `value`, returning the dropped sample.
    ///
    /// An empty series stays empty: the window length never changes.
    pub fn slide(&mut self, value: f64) -> Option<f64> {
        let dropped = self.data.pop_front()?;
        self.data.push_back(value);
        Some(dropped)
    }

    /// Copies the samples into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }

    /// Summary statistics, or `None` for an empty series.
    #[must_use]
    pub fn stats(&self) -> Option<SeriesStats> {
        let max = self.max()?;
        let min = self.data.iter().copied().fold(f64::INFINITY, f64::min);
        let mean = self.data.iter().sum::<f64>() / self.data.len() as f64;
        Some(SeriesStats { min, max, mean })
    }

    /// The first `n` samples rounded to one decimal place.
    #[must_use]
    pub fn preview(&self, n: usize) -> Vec<f64> {
        self.data
            .iter()
            .take(n)
            .map(|v| (v * 10.0).round() / 10.0)
            .collect()
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Self {
            data: values.into(),
        }
    }
}

impl FromIterator<f64> for Series {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

/// Min / max / mean of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
}

impl fmt::Display for SeriesStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min={:.1}, max={:.1}, avg={:.1}",
            self.min, self.max, self.mean
        )
    }
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
