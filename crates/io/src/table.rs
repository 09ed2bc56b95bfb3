//! In-memory applicant table.

/// A batch-scored applicant table.
///
/// One row per loan application: an identifier, numeric feature values, and
/// the model's default-probability score. Rows keep file order; lookups by
/// id scan linearly (tables are a few thousand rows).
#[derive(Debug, Clone)]
pub struct ApplicantTable {
    ids: Vec<u64>,
    feature_names: Vec<String>,
    rows: Vec<Vec<f64>>,
    scores: Vec<f64>,
    score_column: String,
}

impl ApplicantTable {
    pub(crate) fn new(
        ids: Vec<u64>,
        feature_names: Vec<String>,
        rows: Vec<Vec<f64>>,
        scores: Vec<f64>,
        score_column: String,
    ) -> Self {
        debug_assert_eq!(ids.len(), rows.len());
        debug_assert_eq!(ids.len(), scores.len());
        Self {
            ids,
            feature_names,
            rows,
            scores,
            score_column,
        }
    }

    /// Returns the number of applicants.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the applicant identifiers in file order.
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// Returns the feature column names (score column excluded).
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Returns the scores, parallel to [`ids`](Self::ids).
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Returns the name of the score column the table was read with.
    pub fn score_column(&self) -> &str {
        &self.score_column
    }

    /// Returns the feature row for `id`, if present.
    pub fn row(&self, id: u64) -> Option<&[f64]> {
        let i = self.ids.iter().position(|&x| x == id)?;
        Some(&self.rows[i])
    }

    /// Returns the score for `id`, if present.
    pub fn score(&self, id: u64) -> Option<f64> {
        let i = self.ids.iter().position(|&x| x == id)?;
        Some(self.scores[i])
    }

    /// Returns a feature column by name, if present.
    pub fn feature_column(&self, name: &str) -> Option<Vec<f64>> {
        let j = self.feature_names.iter().position(|n| n == name)?;
        Some(self.rows.iter().map(|r| r[j]).collect())
    }

    /// Returns the feature column restricted to a subset of ids.
    ///
    /// Ids absent from the table are skipped.
    pub fn feature_column_for(&self, name: &str, ids: &[u64]) -> Option<Vec<f64>> {
        let j = self.feature_names.iter().position(|n| n == name)?;
        Some(
            ids.iter()
                .filter_map(|id| {
                    self.ids
                        .iter()
                        .position(|x| x == id)
                        .map(|i| self.rows[i][j])
                })
                .collect(),
        )
    }
}
