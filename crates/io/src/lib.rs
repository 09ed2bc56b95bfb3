//! # peerscope-io
//!
//! Read batch-scored applicant tables from CSV. Bridges the scoring job's
//! file export into peerscope's in-memory table: one row per application,
//! numeric features, and a model-score column.

mod error;
mod reader;
mod table;

pub use error::IoError;
pub use reader::{ReaderConfig, read_applicants};
pub use table::ApplicantTable;
