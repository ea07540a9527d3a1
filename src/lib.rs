//! Rangeview - sub-range views over shared growable arrays
//!
//! # Overview
//!
//! A view addresses a contiguous `[begin, end)` window of an array owned
//! elsewhere and edits through it. Several views may share one array:
//!
//! - [`BoundedView`] keeps fixed bounds that move only through its own
//!   mutations.
//! - [`DynamicRangeView`] recomputes its bounds from the array contents with a
//!   [`BoundsStrategy`], on the triggers chosen by a [`RefreshPolicy`].
//! - [`ReadOnlyView`] is a nullable, read-only window onto a `str` or `[T]`.
//!
//! # Quick Start
//!
//! ```
//! use rangeview::{Backing, BoundedView, DynamicRangeView, RefreshPolicy, after_first};
//!
//! let backing = Backing::new(vec![1, 2, -1, 4, 5, 6]);
//!
//! // Everything after the first -1.
//! let tail = DynamicRangeView::with_strategy(
//!     &backing,
//!     after_first(|x: &i32| *x == -1),
//!     RefreshPolicy::default(),
//! )
//! .unwrap();
//!
//! // A fixed view over the first two elements.
//! let mut head = BoundedView::new(&backing, 0, 2).unwrap();
//! head.push(3).unwrap();
//!
//! assert_eq!(backing.to_vec().unwrap(), [1, 2, 3, -1, 4, 5, 6]);
//! assert_eq!(head.to_vec().unwrap(), [1, 2, 3]);
//!
//! // The strategy view finds its anchor again before reporting a length.
//! assert_eq!(tail.len().unwrap(), 3);
//! assert_eq!(tail.to_vec().unwrap(), [4, 5, 6]);
//! ```
//!
//! # Staleness
//!
//! Views are never notified of each other's mutations. A [`BoundedView`] keeps
//! addressing the same indices after a sibling shifts elements, and a
//! [`DynamicRangeView`] uses its cached bounds until it refreshes. Reads
//! through bounds that no longer fit the array fail with
//! [`ViewError::InvalidBounds`] instead of panicking.

#![no_std]

// Re-export public API from rangeview_core
pub use rangeview_core::{
    AfterFirst, Backing, BackingArray, BoundedView, BoundsStrategy, DynamicRangeView, Fixed,
    FromFirst, Position, RefreshPolicy, Result, ViewError, WholeArray, after_first, from_first,
};

// Read-only views
pub use rangeview_read_only::{NullViewError, ReadOnlyView, ViewTarget};
