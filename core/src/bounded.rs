//! Fixed-bounds views.
//!
//! A [`BoundedView`] addresses `[begin, end)` of a [`Backing`] array. Its bounds
//! change only through its own `push`/`pop`/`insert`/`erase` calls; mutations
//! made through the backing array or through any other view are not observed.
//!
//! Positional `insert`/`erase` forward to the backing array at the position the
//! caller supplies and adjust `end` by the number of elements added or removed.
//! `begin` is never moved, even when the position lies before it, so such an
//! operation shifts the view's contents by one element.

use core::cell::{Ref, RefMut};
use core::fmt;
use core::ops::Range;

use crate::backing::{Backing, BackingArray};
use crate::error::check_bounds;
use crate::{Position, Result, Vec, ViewError};

/// A non-owning view of `[begin, end)` in a backing array.
///
/// Views are `Copy`: a copy is an independent handle with its own bounds over
/// the same array.
///
/// # Example
///
/// ```
/// use rangeview_core::{Backing, BoundedView};
///
/// let backing = Backing::new(vec![1, 2, 3, 4, 5, 6]);
/// let mut view = BoundedView::new(&backing, 2, 3).unwrap();
/// assert_eq!(view.to_vec().unwrap(), [3]);
///
/// view.push(30).unwrap();
/// assert_eq!(view.to_vec().unwrap(), [3, 30]);
/// assert_eq!(backing.to_vec().unwrap(), [1, 2, 3, 30, 4, 5, 6]);
/// ```
pub struct BoundedView<'a, A> {
    backing: &'a Backing<A>,
    begin: usize,
    end: usize,
}

impl<'a, A> BoundedView<'a, A> {
    /// A view over `[begin, end)` without validating the bounds.
    ///
    /// Accessors still check the live backing length, so bad bounds surface as
    /// errors on use rather than at construction.
    pub const fn new_unchecked(backing: &'a Backing<A>, begin: usize, end: usize) -> Self {
        BoundedView {
            backing,
            begin,
            end,
        }
    }

    pub const fn backing(&self) -> &'a Backing<A> {
        self.backing
    }

    #[doc(alias = "size")]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    #[doc(alias = "empty")]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn bounds(&self) -> Range<usize> {
        self.begin..self.end
    }

    pub const fn begin(&self) -> Position {
        Position::new(self.begin)
    }

    pub const fn end(&self) -> Position {
        Position::new(self.end)
    }

    pub(crate) fn set_bounds(&mut self, bounds: Range<usize>) {
        self.begin = bounds.start;
        self.end = bounds.end;
    }
}

impl<'a, A: BackingArray> BoundedView<'a, A> {
    /// A view over every element currently in `backing`.
    pub fn full(backing: &'a Backing<A>) -> Result<Self> {
        let len = backing.len()?;
        Ok(Self::new_unchecked(backing, 0, len))
    }

    /// A view over `[begin, end)`. Fails unless `begin <= end <= backing.len()`.
    pub fn new(backing: &'a Backing<A>, begin: usize, end: usize) -> Result<Self> {
        check_bounds(begin, end, backing.len()?)?;
        Ok(Self::new_unchecked(backing, begin, end))
    }

    fn array(&self) -> Result<Ref<'a, A>> {
        self.backing.borrow()
    }

    fn array_mut(&self) -> Result<RefMut<'a, A>> {
        self.backing.borrow_mut()
    }

    /// Maps a view-relative index to a backing index.
    fn locate(&self, index: usize, backing_len: usize) -> Result<usize> {
        if index >= self.len() {
            return Err(ViewError::OutOfRange {
                index,
                len: self.len(),
            });
        }
        check_bounds(self.begin, self.end, backing_len)?;
        Ok(self.begin + index)
    }

    /// The element at `begin + index`.
    #[doc(alias = "at")]
    pub fn get(&self, index: usize) -> Result<Ref<'a, A::Item>> {
        let array = self.array()?;
        let at = self.locate(index, array.len())?;
        Ok(Ref::map(array, |array| &array.as_slice()[at]))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<RefMut<'a, A::Item>> {
        let array = self.array_mut()?;
        let at = self.locate(index, array.len())?;
        Ok(RefMut::map(array, |array| &mut array.as_mut_slice()[at]))
    }

    /// Replaces the element at `index`, returning the old value.
    pub fn set(&mut self, index: usize, value: A::Item) -> Result<A::Item> {
        let mut slot = self.get_mut(index)?;
        Ok(core::mem::replace(&mut *slot, value))
    }

    pub fn first(&self) -> Result<Ref<'a, A::Item>> {
        self.get(0)
    }

    #[doc(alias = "back")]
    pub fn last(&self) -> Result<Ref<'a, A::Item>> {
        match self.len().checked_sub(1) {
            Some(index) => self.get(index),
            None => Err(ViewError::OutOfRange { index: 0, len: 0 }),
        }
    }

    /// The viewed elements as a slice.
    ///
    /// Fails with [`ViewError::InvalidBounds`] if the bounds no longer fit the
    /// backing array.
    pub fn borrow(&self) -> Result<Ref<'a, [A::Item]>> {
        let array = self.array()?;
        check_bounds(self.begin, self.end, array.len())?;
        let range = self.bounds();
        Ok(Ref::map(array, |array| &array.as_slice()[range]))
    }

    pub fn borrow_mut(&mut self) -> Result<RefMut<'a, [A::Item]>> {
        let array = self.array_mut()?;
        check_bounds(self.begin, self.end, array.len())?;
        let range = self.bounds();
        Ok(RefMut::map(array, |array| &mut array.as_mut_slice()[range]))
    }

    /// Copies the viewed elements out.
    pub fn to_vec(&self) -> Result<Vec<A::Item>>
    where
        A::Item: Clone,
    {
        Ok(self.borrow()?.to_vec())
    }

    /// Inserts `value` into the backing array at `end` and grows the view.
    ///
    /// Every element after the view moves up by one, including those addressed
    /// by other views.
    #[doc(alias = "push_back")]
    pub fn push(&mut self, value: A::Item) -> Result<()> {
        let mut array = self.array_mut()?;
        check_bounds(self.begin, self.end, array.len())?;
        array.insert(self.end, value);
        self.end += 1;
        tracing::trace!(begin = self.begin, end = self.end, "push");
        Ok(())
    }

    /// Removes the last element of the view from the backing array.
    #[doc(alias = "pop_back")]
    pub fn pop(&mut self) -> Result<A::Item> {
        if self.is_empty() {
            tracing::debug!(begin = self.begin, "pop on empty view");
            return Err(ViewError::OutOfRange { index: 0, len: 0 });
        }
        let mut array = self.array_mut()?;
        check_bounds(self.begin, self.end, array.len())?;
        let value = array.remove(self.end - 1);
        self.end -= 1;
        tracing::trace!(begin = self.begin, end = self.end, "pop");
        Ok(value)
    }

    /// Inserts `value` into the backing array at `position` and increments `end`.
    ///
    /// `begin` is left as is, even when `position` precedes it.
    pub fn insert(&mut self, position: Position, value: A::Item) -> Result<Position> {
        let mut array = self.array_mut()?;
        let len = array.len();
        if position.index() > len {
            return Err(ViewError::OutOfRange {
                index: position.index(),
                len,
            });
        }
        array.insert(position.index(), value);
        self.end += 1;
        tracing::trace!(at = position.index(), end = self.end, "insert");
        Ok(position)
    }

    /// Removes the element at `position` from the backing array and decrements `end`.
    ///
    /// Fails without mutating anything if the view is already empty.
    pub fn erase(&mut self, position: Position) -> Result<A::Item> {
        let mut array = self.array_mut()?;
        let len = array.len();
        if position.index() >= len {
            return Err(ViewError::OutOfRange {
                index: position.index(),
                len,
            });
        }
        if self.is_empty() {
            return Err(ViewError::OutOfRange {
                index: position.index(),
                len: 0,
            });
        }
        let value = array.remove(position.index());
        self.end -= 1;
        tracing::trace!(at = position.index(), end = self.end, "erase");
        Ok(value)
    }

    /// Removes `[start, stop)` from the backing array and shrinks `end` by the
    /// removed count. Returns `start`, which now addresses the element that
    /// followed the removed range.
    pub fn erase_range(&mut self, start: Position, stop: Position) -> Result<Position> {
        let mut array = self.array_mut()?;
        let len = array.len();
        let (from, to) = (start.index(), stop.index());
        if from > to || to > len {
            return Err(ViewError::InvalidSlice {
                start: from,
                end: to,
                len,
            });
        }
        let count = to - from;
        if count > self.len() {
            return Err(ViewError::InvalidSlice {
                start: from,
                end: to,
                len: self.len(),
            });
        }
        array.remove_range(from..to);
        self.end -= count;
        tracing::trace!(from, to, end = self.end, "erase range");
        Ok(start)
    }

    /// A new view over `[begin + a, begin + b)`. Requires `a <= b <= len()`.
    pub fn slice(&self, a: usize, b: usize) -> Result<BoundedView<'a, A>> {
        if a > b || b > self.len() {
            return Err(ViewError::InvalidSlice {
                start: a,
                end: b,
                len: self.len(),
            });
        }
        Ok(Self::new_unchecked(self.backing, self.begin + a, self.begin + b))
    }
}

impl<A> Clone for BoundedView<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<A> Copy for BoundedView<'_, A> {}

impl<A> fmt::Debug for BoundedView<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedView")
            .field("begin", &self.begin)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}
