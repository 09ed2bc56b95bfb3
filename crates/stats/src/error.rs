//! Error types for the peerscope-stats crate.

/// Error type for all fallible operations in the peerscope-stats crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsError {
    /// Returned when a computation requires at least one value.
    #[error("no data provided")]
    EmptyData,

    /// Returned when a histogram is requested with zero bins.
    #[error("bin count must be >= 1, got {bins}")]
    InvalidBinCount {
        /// The invalid bin count.
        bins: usize,
    },

    /// Returned when input data contains NaN or infinity.
    #[error("non-finite value at index {index}")]
    NonFiniteValue {
        /// Position of the offending value.
        index: usize,
    },
}
