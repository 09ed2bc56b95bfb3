//! Per-feature summary statistics.

use serde::Serialize;

use crate::error::StatsError;
use crate::{mean, sd};

/// Summary statistics for one feature over one population.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureSummary {
    pub count: usize,
    pub mean: f64,
    pub sd: f64,
    pub min: f64,
    pub max: f64,
}

impl FeatureSummary {
    /// Computes the summary of `data`.
    ///
    /// # Errors
    ///
    /// - [`StatsError::EmptyData`] if `data` is empty
    /// - [`StatsError::NonFiniteValue`] if `data` contains NaN or infinity
    pub fn from_slice(data: &[f64]) -> Result<Self, StatsError> {
        if data.is_empty() {
            return Err(StatsError::EmptyData);
        }
        if let Some(index) = data.iter().position(|v| !v.is_finite()) {
            return Err(StatsError::NonFiniteValue { index });
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in data {
            min = min.min(v);
            max = max.max(v);
        }

        Ok(Self {
            count: data.len(),
            mean: mean(data),
            sd: sd(data),
            min,
            max,
        })
    }
}
