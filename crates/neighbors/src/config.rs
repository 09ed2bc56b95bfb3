//! Configuration for window selection queries.

use crate::error::SelectError;

/// Configuration for a neighbor window query.
///
/// The window size counts the target itself, so a size of `2k` yields the
/// target plus `2k - 1` peers. Even sizes produce a proper window; odd sizes
/// trigger the degraded full-sort mode (see [`crate::select_neighbors`]).
///
/// # Example
///
/// ```
/// use peerscope_neighbors::WindowConfig;
///
/// let config = WindowConfig::new(20);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.half(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Total number of entities to return, target included.
    window_size: usize,
}

impl WindowConfig {
    /// Creates a configuration with the given window size.
    pub fn new(window_size: usize) -> Self {
        Self { window_size }
    }

    /// Returns the requested window size.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns half the window size (integer division).
    ///
    /// This is the base number of ranks taken above the target before
    /// boundary balancing.
    pub fn half(&self) -> usize {
        self.window_size / 2
    }

    /// Returns `true` if the window size is even.
    pub fn is_even(&self) -> bool {
        self.window_size % 2 == 0
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the window size is zero. An odd window size is
    /// accepted here: parity is a runtime policy decision (degraded mode),
    /// not a construction error.
    pub fn validate(&self) -> Result<(), SelectError> {
        if self.window_size == 0 {
            return Err(SelectError::InvalidWindowSize {
                size: self.window_size,
            });
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    /// The dashboard's default peer-group size.
    fn default() -> Self {
        Self::new(10)
    }
}
