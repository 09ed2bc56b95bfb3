//! Threshold-based loan decision classification.
//!
//! The scoring model emits a default probability; business policy turns it
//! into a decision with three outcomes:
//!
//! | Band | Outcome |
//! |------|---------|
//! | `score < threshold` | Approved |
//! | `threshold <= score <= review_upper` | Denied, open to review |
//! | `score > review_upper` | Denied |
//!
//! Defaults match the production model's operating point (threshold 0.49,
//! review band up to 0.52). The selector crate does not use this policy; it
//! is applied downstream when grouping an applicant's peers.

pub mod breakdown;
pub mod error;
pub mod policy;

pub use breakdown::DecisionBreakdown;
pub use error::DecisionError;
pub use policy::{Decision, DecisionPolicy};
