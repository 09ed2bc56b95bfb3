//! Per-class counts over a group of scores.

use serde::Serialize;

use crate::error::DecisionError;
use crate::policy::{Decision, DecisionPolicy};

/// Counts of each decision class within a group of scores.
///
/// Downstream chart consumers group applicants into accepted and denied
/// populations; this is the aggregate they read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecisionBreakdown {
    /// Scores below the approval threshold.
    pub approved: usize,
    /// Scores within the review band.
    pub review: usize,
    /// Scores above the review band.
    pub denied: usize,
}

impl DecisionBreakdown {
    /// Tallies decisions over `scores` with the given policy.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError::NonFiniteScore`] on the first NaN or
    /// infinite score.
    pub fn tally(scores: &[f64], policy: &DecisionPolicy) -> Result<Self, DecisionError> {
        let mut breakdown = Self::default();
        for &score in scores {
            match policy.classify(score)? {
                Decision::Approved => breakdown.approved += 1,
                Decision::Review => breakdown.review += 1,
                Decision::Denied => breakdown.denied += 1,
            }
        }
        Ok(breakdown)
    }

    /// Returns the total number of tallied scores.
    pub fn total(&self) -> usize {
        self.approved + self.review + self.denied
    }
}
