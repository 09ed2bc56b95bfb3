//! Error types for peerscope-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the peerscope-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a required column is not present in the header.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a cell cannot be parsed as the expected type.
    #[error("row {row}, column '{column}': cannot parse '{value}'")]
    InvalidCell {
        /// 1-based data row (header excluded).
        row: usize,
        /// Column name.
        column: String,
        /// The offending cell content.
        value: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let e = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.csv"),
        };
        assert_eq!(e.to_string(), "file not found: /tmp/missing.csv");
    }

    #[test]
    fn test_missing_column_display() {
        let e = IoError::MissingColumn {
            name: "TARGET_PROB".into(),
            path: PathBuf::from("data.csv"),
        };
        assert_eq!(e.to_string(), "column 'TARGET_PROB' not found in data.csv");
    }

    #[test]
    fn test_invalid_cell_display() {
        let e = IoError::InvalidCell {
            row: 3,
            column: "AMT_CREDIT".into(),
            value: "abc".into(),
        };
        assert_eq!(e.to_string(), "row 3, column 'AMT_CREDIT': cannot parse 'abc'");
    }

    #[test]
    fn test_validation_display() {
        let e = IoError::Validation {
            count: 2,
            details: "duplicate id 1; non-finite score for id 2".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("2 validation error(s)"));
        assert!(msg.contains("duplicate id 1"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<IoError>();
    }
}
