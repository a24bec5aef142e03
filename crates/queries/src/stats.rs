//! Single-pass summary statistics.

use crate::error::{QueryError, Result};

/// Count, sum, minimum and maximum of a numeric sequence, gathered in one pass.
///
/// Minimum, maximum and average are undefined for an empty sequence and
/// return [`QueryError::EmptyResult`] instead of a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics {
    count: u64,
    sum: f64,
    min: f64,
    max: f64,
}

impl SummaryStatistics {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Records one value.
    pub fn accept(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Merges another summary into this one.
    pub fn combine(&mut self, other: &SummaryStatistics) {
        self.count += other.count;
        self.sum += other.sum;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of all values; zero when empty.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn min(&self) -> Result<f64> {
        self.defined("min").map(|()| self.min)
    }

    pub fn max(&self) -> Result<f64> {
        self.defined("max").map(|()| self.max)
    }

    pub fn average(&self) -> Result<f64> {
        self.defined("average")
            .map(|()| self.sum / self.count as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    fn defined(&self, reduction: &'static str) -> Result<()> {
        if self.count == 0 {
            Err(QueryError::EmptyResult { reduction })
        } else {
            Ok(())
        }
    }
}

impl Default for SummaryStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<f64> for SummaryStatistics {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        for value in values {
            self.accept(value);
        }
    }
}

impl FromIterator<f64> for SummaryStatistics {
    fn from_iter<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut stats = Self::new();
        stats.extend(values);
        stats
    }
}

impl std::fmt::Display for SummaryStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.count == 0 {
            return write!(f, "count=0, sum=0.00");
        }
        write!(
            f,
            "count={}, sum={:.2}, min={:.2}, average={:.2}, max={:.2}",
            self.count,
            self.sum,
            self.min,
            self.sum / self.count as f64,
            self.max
        )
    }
}

/// Summarizes a numeric attribute of every element.
pub fn summarize<'a, T, I, F>(items: I, value: F) -> SummaryStatistics
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&'a T) -> f64,
{
    items.into_iter().map(value).collect()
}

/// Arithmetic mean of a sequence; fails on an empty one.
pub fn average(values: impl IntoIterator<Item = f64>) -> Result<f64> {
    values
        .into_iter()
        .collect::<SummaryStatistics>()
        .average()
}
