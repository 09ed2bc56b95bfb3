//! Equal-width histograms and bin placement.

use serde::Serialize;

use crate::error::StatsError;

/// Returns the index of the last edge strictly below `value`, or 0 when
/// `value` does not exceed the first edge.
///
/// This is the dashboard's bin-highlight rule: given the edges of a plotted
/// histogram, it picks the bar holding a specific applicant's value so the
/// bar can be recoloured. For a value beyond the last edge it returns the
/// index of the last edge itself; [`Histogram::locate`] clamps that to the
/// final bin.
pub fn bin_index(edges: &[f64], value: f64) -> usize {
    let mut index = 0;
    for (i, &edge) in edges.iter().enumerate() {
        if value > edge {
            index = i;
        }
    }
    index
}

/// An equal-width histogram over a data slice.
///
/// `edges` has `bins + 1` entries spanning `[min, max]`. Values land in the
/// half-open bin `[edges[i], edges[i+1])`; the last bin is right-inclusive
/// so the maximum is counted. Constant data gets a unit-width range centred
/// on the value.
#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    edges: Vec<f64>,
    counts: Vec<usize>,
}

impl Histogram {
    /// Builds a histogram of `data` with `bins` equal-width bins.
    ///
    /// # Errors
    ///
    /// - [`StatsError::EmptyData`] if `data` is empty
    /// - [`StatsError::InvalidBinCount`] if `bins` is zero
    /// - [`StatsError::NonFiniteValue`] if `data` contains NaN or infinity
    pub fn new(data: &[f64], bins: usize) -> Result<Self, StatsError> {
        if data.is_empty() {
            return Err(StatsError::EmptyData);
        }
        if bins == 0 {
            return Err(StatsError::InvalidBinCount { bins });
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
        // Constant data: widen to a unit range around the value.
        if min == max {
            min -= 0.5;
            max += 0.5;
        }

        let width = (max - min) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| min + width * i as f64).collect();

        let mut counts = vec![0usize; bins];
        for &v in data {
            let i = (((v - min) / width) as usize).min(bins - 1);
            counts[i] += 1;
        }

        Ok(Self { edges, counts })
    }

    /// Returns the bin edges (`bins + 1` entries).
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Returns the per-bin counts.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Returns the number of bins.
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Returns the index of the bin holding `value`, clamped to valid bins.
    pub fn locate(&self, value: f64) -> usize {
        bin_index(&self.edges, value).min(self.counts.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bin_index_rule() {
        let edges = [0.0, 1.0, 2.0, 3.0];
        // Below or at the first edge: 0.
        assert_eq!(bin_index(&edges, -1.0), 0);
        assert_eq!(bin_index(&edges, 0.0), 0);
        // Strictly above an edge selects it.
        assert_eq!(bin_index(&edges, 0.5), 0);
        assert_eq!(bin_index(&edges, 1.0), 0);
        assert_eq!(bin_index(&edges, 1.5), 1);
        assert_eq!(bin_index(&edges, 2.5), 2);
        // Beyond the last edge: index of the last edge.
        assert_eq!(bin_index(&edges, 9.0), 3);
    }

    #[test]
    fn test_histogram_edges_and_counts() {
        let data = [0.0, 0.1, 0.2, 0.5, 0.9, 1.0];
        let h = Histogram::new(&data, 2).unwrap();
        assert_eq!(h.bins(), 2);
        assert_abs_diff_eq!(h.edges()[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(h.edges()[1], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(h.edges()[2], 1.0, epsilon = 1e-12);
        // 0.5 falls in the second (half-open) bin; 1.0 is right-inclusive.
        assert_eq!(h.counts(), &[3, 3]);
    }

    #[test]
    fn test_histogram_counts_sum_to_len() {
        let data: Vec<f64> = (0..97).map(|i| (i as f64).sin()).collect();
        let h = Histogram::new(&data, 10).unwrap();
        assert_eq!(h.counts().iter().sum::<usize>(), data.len());
    }

    #[test]
    fn test_constant_data() {
        let h = Histogram::new(&[2.0, 2.0, 2.0], 4).unwrap();
        assert_eq!(h.counts().iter().sum::<usize>(), 3);
        assert_abs_diff_eq!(h.edges()[0], 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(h.edges()[4], 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_locate_clamps() {
        let data = [0.0, 1.0];
        let h = Histogram::new(&data, 4).unwrap();
        assert_eq!(h.locate(-5.0), 0);
        assert_eq!(h.locate(0.3), 1);
        // Maximum and beyond land in the last bin.
        assert_eq!(h.locate(1.0), 3);
        assert_eq!(h.locate(5.0), 3);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            Histogram::new(&[], 4),
            Err(StatsError::EmptyData)
        ));
        assert!(matches!(
            Histogram::new(&[1.0], 0),
            Err(StatsError::InvalidBinCount { bins: 0 })
        ));
        assert!(matches!(
            Histogram::new(&[1.0, f64::NAN], 4),
            Err(StatsError::NonFiniteValue { index: 1 })
        ));
    }
}
