//! Error types for the peerscope-decision crate.

/// Error type for all fallible operations in the peerscope-decision crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DecisionError {
    /// Returned when the approval threshold is outside (0, 1) or non-finite.
    #[error("threshold must be in (0, 1), got {threshold}")]
    InvalidThreshold {
        /// The invalid threshold.
        threshold: f64,
    },

    /// Returned when the review band upper bound is below the threshold,
    /// at or above 1, or non-finite.
    #[error("review upper bound must be in [threshold, 1), got {review_upper} (threshold {threshold})")]
    InvalidReviewBand {
        /// The invalid review band upper bound.
        review_upper: f64,
        /// The threshold it was checked against.
        threshold: f64,
    },

    /// Returned when a score to classify is NaN or infinite.
    #[error("cannot classify non-finite score")]
    NonFiniteScore,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_threshold() {
        let e = DecisionError::InvalidThreshold { threshold: 1.5 };
        assert_eq!(e.to_string(), "threshold must be in (0, 1), got 1.5");
    }

    #[test]
    fn error_invalid_review_band() {
        let e = DecisionError::InvalidReviewBand {
            review_upper: 0.4,
            threshold: 0.49,
        };
        assert_eq!(
            e.to_string(),
            "review upper bound must be in [threshold, 1), got 0.4 (threshold 0.49)"
        );
    }

    #[test]
    fn error_non_finite_score() {
        let e = DecisionError::NonFiniteScore;
        assert_eq!(e.to_string(), "cannot classify non-finite score");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DecisionError>();
    }
}
