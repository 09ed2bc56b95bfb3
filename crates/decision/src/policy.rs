//! Decision policy: threshold and review band.

use serde::Serialize;

use crate::error::DecisionError;

/// Outcome of classifying a default-probability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Score below the approval threshold.
    Approved,
    /// Score at or above the threshold but within the review band: denied,
    /// with room for discussion with an advisor.
    Review,
    /// Score above the review band.
    Denied,
}

/// Classification policy for default-probability scores.
///
/// Scores below `threshold` are approved. Scores from `threshold` up to and
/// including `review_upper` are denied but flagged for review. Anything
/// higher is denied outright.
///
/// # Example
///
/// ```
/// use peerscope_decision::{Decision, DecisionPolicy};
///
/// let policy = DecisionPolicy::default();
/// assert_eq!(policy.classify(0.12).unwrap(), Decision::Approved);
/// assert_eq!(policy.classify(0.50).unwrap(), Decision::Review);
/// assert_eq!(policy.classify(0.80).unwrap(), Decision::Denied);
/// ```
#[derive(Debug, Clone)]
pub struct DecisionPolicy {
    /// Scores strictly below this are approved.
    threshold: f64,
    /// Upper bound (inclusive) of the denied-but-reviewable band.
    review_upper: f64,
}

impl DecisionPolicy {
    /// Creates a policy after validating its bands.
    ///
    /// # Errors
    ///
    /// - [`DecisionError::InvalidThreshold`] if `threshold` is not in (0, 1)
    /// - [`DecisionError::InvalidReviewBand`] if `review_upper` is below
    ///   `threshold` or not below 1
    pub fn new(threshold: f64, review_upper: f64) -> Result<Self, DecisionError> {
        if !threshold.is_finite() || threshold <= 0.0 || threshold >= 1.0 {
            return Err(DecisionError::InvalidThreshold { threshold });
        }
        if !review_upper.is_finite() || review_upper < threshold || review_upper >= 1.0 {
            return Err(DecisionError::InvalidReviewBand {
                review_upper,
                threshold,
            });
        }
        Ok(Self {
            threshold,
            review_upper,
        })
    }

    /// Returns the approval threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the review band upper bound.
    pub fn review_upper(&self) -> f64 {
        self.review_upper
    }

    /// Classifies a single score.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError::NonFiniteScore`] for NaN or infinite scores.
    pub fn classify(&self, score: f64) -> Result<Decision, DecisionError> {
        if !score.is_finite() {
            return Err(DecisionError::NonFiniteScore);
        }
        if score < self.threshold {
            Ok(Decision::Approved)
        } else if score <= self.review_upper {
            Ok(Decision::Review)
        } else {
            Ok(Decision::Denied)
        }
    }
}

impl Default for DecisionPolicy {
    /// The production model's operating point: approve below 0.49, review
    /// up to 0.52.
    fn default() -> Self {
        Self {
            threshold: 0.49,
            review_upper: 0.52,
        }
    }
}
