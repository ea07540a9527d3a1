//! Error type shared by every view operation.
//!
//! All errors are detected synchronously at the violating call and leave the
//! view and its backing array untouched.

use core::cell::{BorrowError, BorrowMutError};

/// Errors reported by [`BoundedView`](crate::BoundedView),
/// [`DynamicRangeView`](crate::DynamicRangeView) and [`Backing`](crate::Backing).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    /// An index or position falls outside the view or the backing array.
    ///
    /// Also reported by `pop` on an empty view, as `index: 0, len: 0`.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A `[start, end)` request is reversed or exceeds the available length.
    #[error("invalid slice [{start}, {end}) of length {len}")]
    InvalidSlice { start: usize, end: usize, len: usize },

    /// Bounds from a constructor or a strategy, or stale stored bounds, do not
    /// satisfy `begin <= end <= len`.
    #[error("invalid bounds [{begin}, {end}) for backing array of length {len}")]
    InvalidBounds { begin: usize, end: usize, len: usize },

    /// The backing array is already borrowed in a conflicting way.
    #[error("backing array is already borrowed")]
    Borrowed,
}

impl From<BorrowError> for ViewError {
    fn from(_: BorrowError) -> Self {
        ViewError::Borrowed
    }
}

impl From<BorrowMutError> for ViewError {
    fn from(_: BorrowMutError) -> Self {
        ViewError::Borrowed
    }
}

pub type Result<T, E = ViewError> = core::result::Result<T, E>;

/// Checks `begin <= end <= len`.
pub(crate) fn check_bounds(begin: usize, end: usize, len: usize) -> Result<()> {
    if begin <= end && end <= len {
        Ok(())
    } else {
        tracing::debug!(begin, end, len, "rejected bounds");
        Err(ViewError::InvalidBounds { begin, end, len })
    }
}
