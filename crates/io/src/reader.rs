//! CSV reader configuration and parsing.

use std::path::Path;

use tracing::{debug, info};

use crate::error::IoError;
use crate::table::ApplicantTable;

/// Configuration for reading a batch-scored applicant CSV.
///
/// The expected layout matches the batch-scoring job's export: the first
/// column is the application id index, remaining columns are numeric
/// features, and one named column carries the model score.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Name of the score column.
    score_column: String,
    /// Field delimiter.
    delimiter: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            score_column: "TARGET_PROB".into(),
            delimiter: b',',
        }
    }
}

impl ReaderConfig {
    /// Set the score column name.
    pub fn with_score_column(mut self, name: impl Into<String>) -> Self {
        self.score_column = name.into();
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Returns the score column name.
    pub fn score_column(&self) -> &str {
        &self.score_column
    }
}

/// Reads an applicant table from a CSV file.
///
/// Parse failures (bad id, non-numeric feature cell) fail fast with the
/// offending row and column. Table-level problems — duplicate ids,
/// non-finite scores, an empty table — are accumulated and reported
/// together in a single [`IoError::Validation`].
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist
/// - [`IoError::Csv`] on malformed CSV
/// - [`IoError::MissingColumn`] if the score column is absent
/// - [`IoError::InvalidCell`] on an unparseable cell
/// - [`IoError::Validation`] on accumulated table-level failures
pub fn read_applicants(path: &Path, config: &ReaderConfig) -> Result<ApplicantTable, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let score_idx = headers
        .iter()
        .position(|h| h == config.score_column)
        .ok_or_else(|| IoError::MissingColumn {
            name: config.score_column.clone(),
            path: path.to_path_buf(),
        })?;
    // Column 0 is the id index; everything else but the score is a feature.
    let feature_idx: Vec<usize> = (1..headers.len()).filter(|&j| j != score_idx).collect();
    let feature_names: Vec<String> = feature_idx
        .iter()
        .map(|&j| headers[j].to_string())
        .collect();
    debug!(
        n_features = feature_names.len(),
        score_column = %config.score_column,
        "parsed header"
    );

    let mut ids = Vec::new();
    let mut rows = Vec::new();
    let mut scores = Vec::new();

    for (row_no, record) in reader.records().enumerate() {
        let record = record?;
        let row_no = row_no + 1;

        let id_cell = &record[0];
        let id: u64 = id_cell.trim().parse().map_err(|_| IoError::InvalidCell {
            row: row_no,
            column: headers[0].to_string(),
            value: id_cell.to_string(),
        })?;

        let mut row = Vec::with_capacity(feature_idx.len());
        for &j in &feature_idx {
            let cell = &record[j];
            let v: f64 = cell.trim().parse().map_err(|_| IoError::InvalidCell {
                row: row_no,
                column: headers[j].to_string(),
                value: cell.to_string(),
            })?;
            row.push(v);
        }

        let score_cell = &record[score_idx];
        let score: f64 = score_cell
            .trim()
            .parse()
            .map_err(|_| IoError::InvalidCell {
                row: row_no,
                column: headers[score_idx].to_string(),
                value: score_cell.to_string(),
            })?;

        ids.push(id);
        rows.push(row);
        scores.push(score);
    }

    validate(&ids, &scores)?;

    info!(
        path = %path.display(),
        n_rows = ids.len(),
        n_features = feature_names.len(),
        "applicant table loaded"
    );

    Ok(ApplicantTable::new(
        ids,
        feature_names,
        rows,
        scores,
        config.score_column.clone(),
    ))
}

/// Accumulates table-level validation failures.
fn validate(ids: &[u64], scores: &[f64]) -> Result<(), IoError> {
    let mut errors = Vec::new();

    if ids.is_empty() {
        errors.push("table has no data rows".to_string());
    }

    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    for &id in ids {
        if !seen.insert(id) {
            errors.push(format!("duplicate id {id}"));
        }
    }

    for (&id, &score) in ids.iter().zip(scores.iter()) {
        if !score.is_finite() {
            errors.push(format!("non-finite score for id {id}"));
        }
    }

    if !errors.is_empty() {
        return Err(IoError::Validation {
            count: errors.len(),
            details: errors.join("; "),
        });
    }
    Ok(())
}
