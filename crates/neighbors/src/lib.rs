//! Nearest-neighbor-by-score window selection.
//!
//! Given a collection of scored loan applications and a target application,
//! this crate returns the contiguous window of applications whose scores are
//! nearest to the target's by rank, target included. An analyst comparing
//! one applicant against "similar" applicants gets a consistently sized peer
//! group regardless of where the applicant falls in the score distribution:
//! slots a boundary-adjacent target cannot fill on one side are borrowed by
//! the other.
//!
//! # Quick start
//!
//! ```
//! use peerscope_neighbors::{ScoredCollection, ScoredEntity, WindowConfig, select_neighbors};
//!
//! // Scores descending with id: entity id i sits at rank i.
//! let entities: Vec<ScoredEntity> = (0..10)
//!     .map(|i| ScoredEntity::new(i, (9 - i) as f64 / 10.0))
//!     .collect();
//! let collection = ScoredCollection::new(entities).unwrap();
//!
//! let window = select_neighbors(&collection, 5, &WindowConfig::new(4)).unwrap();
//! assert_eq!(window.len(), 4);
//! assert!(window.contains(5));
//! ```
//!
//! # Architecture
//!
//! ```text
//! select_neighbors()
//!   ├─ validate config        (config.rs)
//!   ├─ RankIndex::new()       (rank.rs)    stable descending sort + id -> rank
//!   ├─ window_bounds()        (window.rs)  boundary-balanced rank bounds
//!   └─ NeighborWindow         (result.rs)
//! ```
//!
//! Odd window sizes are a caller mistake with a deliberate fallback: the
//! full sorted collection is returned flagged [`WindowMode::DegradedFullSort`]
//! so callers can detect the degraded mode programmatically.

pub mod config;
pub mod entity;
pub mod error;
pub mod result;
pub mod select;

pub(crate) mod rank;
pub(crate) mod window;

pub use config::WindowConfig;
pub use entity::{ScoredCollection, ScoredEntity};
pub use error::SelectError;
pub use result::{NeighborWindow, WindowMode};
pub use select::select_neighbors;
