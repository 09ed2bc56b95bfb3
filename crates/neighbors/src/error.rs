//! Error types for the peerscope-neighbors crate.

/// Error type for all fallible operations in the peerscope-neighbors crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SelectError {
    /// Returned when the collection contains no entities.
    #[error("collection is empty: no window can be computed")]
    EmptyCollection,

    /// Returned when two entities share the same identifier.
    #[error("duplicate entity id {id}")]
    DuplicateId {
        /// The identifier that appeared more than once.
        id: u64,
    },

    /// Returned when an entity's score is NaN or infinite.
    #[error("non-finite score for entity id {id}")]
    NonFiniteScore {
        /// The identifier of the offending entity.
        id: u64,
    },

    /// Returned when the requested window size is zero.
    #[error("window size must be >= 1, got {size}")]
    InvalidWindowSize {
        /// The invalid window size.
        size: usize,
    },

    /// Returned when the target identifier is not present in the collection.
    #[error("target id {id} not found in collection")]
    TargetNotFound {
        /// The identifier that could not be located.
        id: u64,
    },
}
