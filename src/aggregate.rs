//! Per-label sample accumulation and summary statistics.

use std::collections::btree_map::{self, BTreeMap};

/// Errors from statistics computation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("Cannot compute statistics over an empty series")]
    EmptySeries,

    #[error("No samples recorded for label {0}")]
    UnknownLabel(String),
}

/// Summary of one label's samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub min: f64,
    pub average: f64,
    pub max: f64,
    pub samples: usize,
}

impl Statistics {
    /// Compute min, arithmetic mean and max over `samples`.
    pub fn from_samples(samples: &[f64]) -> Result<Self, AggregateError> {
        let (&first, _) = samples.split_first().ok_or(AggregateError::EmptySeries)?;

        let mut min = first;
        let mut max = first;
        let mut sum = 0.0;
        for &value in samples {
            if value < min {
                min = value;
            }
            if value > max {
                max = value;
            }
            sum += value;
        }

        Ok(Self {
            min,
            average: sum / samples.len() as f64,
            max,
            samples: samples.len(),
        })
    }
}

/// Samples grouped by label.
///
/// Samples keep their encounter order within a label; labels iterate in
/// ascending order so reports are deterministic.
#[derive(Debug, Clone)]
pub struct Aggregator<K> {
    series: BTreeMap<K, Vec<f64>>,
}

impl<K: Ord> Default for Aggregator<K> {
    fn default() -> Self {
        Self {
            series: BTreeMap::new(),
        }
    }
}

impl<K: Ord> Aggregator<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample to `label`'s series.
    pub fn record(&mut self, label: K, value: f64) {
        self.series.entry(label).or_default().push(value);
    }

    /// Samples recorded under `label`, in encounter order.
    pub fn samples(&self, label: &K) -> Option<&[f64]> {
        self.series.get(label).map(Vec::as_slice)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Labels in ascending order.
    pub fn labels(&self) -> btree_map::Keys<'_, K, Vec<f64>> {
        self.series.keys()
    }

    /// `(label, samples)` pairs in ascending label order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[f64])> {
        self.series.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn contains(&self, label: &K) -> bool {
        self.series.contains_key(label)
    }
}

impl<K: Ord + std::fmt::Debug> Aggregator<K> {
    /// Statistics over everything recorded under `label`.
    pub fn statistics(&self, label: &K) -> Result<Statistics, AggregateError> {
        let samples = self
            .series
            .get(label)
            .ok_or_else(|| AggregateError::UnknownLabel(format!("{:?}", label)))?;
        Statistics::from_samples(samples)
    }
}
