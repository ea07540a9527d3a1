//! Bounds strategies: how a [`DynamicRangeView`](crate::DynamicRangeView)
//! recomputes `[begin, end)` from the current backing contents.
//!
//! A strategy must be a pure, cheap function of the elements it is given and
//! must return `begin <= end <= items.len()`. Results that break this are
//! rejected by `refresh()` with [`ViewError::InvalidBounds`](crate::ViewError).
//!
//! Any `Fn(&[T]) -> Range<usize>` is a strategy:
//!
//! ```
//! use rangeview_core::BoundsStrategy;
//!
//! let tail = |items: &[i32]| items.len().saturating_sub(2)..items.len();
//! assert_eq!(tail.bounds(&[1, 2, 3, 4][..]), 2..4);
//! ```

use core::fmt;
use core::ops::Range;

pub trait BoundsStrategy<T> {
    fn bounds(&self, items: &[T]) -> Range<usize>;
}

impl<T, F> BoundsStrategy<T> for F
where
    F: Fn(&[T]) -> Range<usize>,
{
    fn bounds(&self, items: &[T]) -> Range<usize> {
        self(items)
    }
}

/// Every element currently in the array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WholeArray;

impl<T> BoundsStrategy<T> for WholeArray {
    fn bounds(&self, items: &[T]) -> Range<usize> {
        0..items.len()
    }
}

/// A constant range, independent of the contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixed(pub Range<usize>);

impl<T> BoundsStrategy<T> for Fixed {
    fn bounds(&self, _items: &[T]) -> Range<usize> {
        self.0.clone()
    }
}

/// From just after the first element matching the predicate to the end.
/// Without a match the range is empty at the end of the array.
#[derive(Clone, Copy)]
pub struct AfterFirst<P>(pub P);

/// From the first element matching the predicate (inclusive) to the end.
/// Without a match the range is empty at the end of the array.
#[derive(Clone, Copy)]
pub struct FromFirst<P>(pub P);

pub fn after_first<T, P: Fn(&T) -> bool>(predicate: P) -> AfterFirst<P> {
    AfterFirst(predicate)
}

pub fn from_first<T, P: Fn(&T) -> bool>(predicate: P) -> FromFirst<P> {
    FromFirst(predicate)
}

impl<T, P: Fn(&T) -> bool> BoundsStrategy<T> for AfterFirst<P> {
    fn bounds(&self, items: &[T]) -> Range<usize> {
        let len = items.len();
        match items.iter().position(&self.0) {
            Some(at) => at + 1..len,
            None => len..len,
        }
    }
}

impl<T, P: Fn(&T) -> bool> BoundsStrategy<T> for FromFirst<P> {
    fn bounds(&self, items: &[T]) -> Range<usize> {
        let len = items.len();
        match items.iter().position(&self.0) {
            Some(at) => at..len,
            None => len..len,
        }
    }
}

impl<P> fmt::Debug for AfterFirst<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AfterFirst").finish_non_exhaustive()
    }
}

impl<P> fmt::Debug for FromFirst<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FromFirst").finish_non_exhaustive()
    }
}
