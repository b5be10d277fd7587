//! Error types for checked swaps.
//!
//! The plain [`exchange`](crate::exchange) cannot fail. Only
//! [`exchange_at`](crate::exchange_at), which addresses slots by index, can be
//! handed two handles to the same cell, and it reports that here instead of
//! writing anything.

use thiserror::Error;

/// All cellswap errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Both handles refer to the same cell
    #[error("aliased cells: both handles refer to {location}")]
    Aliased {
        /// The index named twice
        location: String,
    },

    /// Index past the end of the slice
    #[error("index out of bounds: {index} >= {len}")]
    OutOfBounds {
        /// Requested index
        index: usize,
        /// Slice length
        len: usize,
    },
}

/// Result type for cellswap operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error reports two handles to the same cell.
    pub fn is_aliased(&self) -> bool {
        matches!(self, Error::Aliased { .. })
    }

    /// Check if this error reports an index past the end.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Error::OutOfBounds { .. })
    }
}
