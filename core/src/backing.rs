//! The growable array views point into, and the shared cell that owns it.
//!
//! Views never own their data. A [`Backing`] owns exactly one array and hands
//! out shared references; any number of views can hold `&Backing` at once and
//! read or mutate through it. The cell is a `RefCell`, so mutation from one view
//! while another holds a borrow guard is reported as
//! [`ViewError::Borrowed`](crate::ViewError::Borrowed) instead of aliasing.

use core::cell::{Ref, RefCell, RefMut};
use core::fmt;
use core::ops::Range;

use smallvec::SmallVec;

use crate::{Result, Vec};

/// Operations a growable contiguous array must support to back a view.
///
/// `insert` and `remove` shift every element at or after the given index by
/// one, invalidating previously computed offsets past that point.
pub trait BackingArray {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn as_slice(&self) -> &[Self::Item];

    fn as_mut_slice(&mut self) -> &mut [Self::Item];

    /// Appends at the end of the array.
    fn push(&mut self, value: Self::Item);

    /// Inserts at `index`, shifting later elements up. `index <= len()`.
    fn insert(&mut self, index: usize, value: Self::Item);

    /// Removes the element at `index`, shifting later elements down. `index < len()`.
    fn remove(&mut self, index: usize) -> Self::Item;

    /// Removes `[range.start, range.end)`. `range.start <= range.end <= len()`.
    fn remove_range(&mut self, range: Range<usize>);
}

impl<T> BackingArray for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn as_slice(&self) -> &[T] {
        Vec::as_slice(self)
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        Vec::as_mut_slice(self)
    }

    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    fn insert(&mut self, index: usize, value: T) {
        Vec::insert(self, index, value);
    }

    fn remove(&mut self, index: usize) -> T {
        Vec::remove(self, index)
    }

    fn remove_range(&mut self, range: Range<usize>) {
        Vec::drain(self, range).for_each(drop);
    }
}

impl<A: smallvec::Array> BackingArray for SmallVec<A> {
    type Item = A::Item;

    fn len(&self) -> usize {
        SmallVec::len(self)
    }

    fn as_slice(&self) -> &[A::Item] {
        SmallVec::as_slice(self)
    }

    fn as_mut_slice(&mut self) -> &mut [A::Item] {
        SmallVec::as_mut_slice(self)
    }

    fn push(&mut self, value: A::Item) {
        SmallVec::push(self, value);
    }

    fn insert(&mut self, index: usize, value: A::Item) {
        SmallVec::insert(self, index, value);
    }

    fn remove(&mut self, index: usize) -> A::Item {
        SmallVec::remove(self, index)
    }

    fn remove_range(&mut self, range: Range<usize>) {
        SmallVec::drain(self, range).for_each(drop);
    }
}

/// Owner of a backing array, shared by every view over it.
///
/// # Example
///
/// ```
/// use rangeview_core::{Backing, BoundedView};
///
/// let backing = Backing::new(vec![1, 2, 3]);
/// let view = BoundedView::full(&backing).unwrap();
/// backing.push(4).unwrap();
///
/// // The view kept its own bounds.
/// assert_eq!(view.len(), 3);
/// assert_eq!(backing.len().unwrap(), 4);
/// ```
///
/// A view cannot outlive the backing it borrows:
///
/// ```compile_fail
/// use rangeview_core::{Backing, BoundedView};
///
/// let backing = Backing::new(vec![1, 2, 3]);
/// let view = BoundedView::full(&backing).unwrap();
/// drop(backing);
/// assert_eq!(view.len(), 3);
/// ```
pub struct Backing<A> {
    cell: RefCell<A>,
}

impl<A: BackingArray> Backing<A> {
    pub const fn new(array: A) -> Self {
        Backing {
            cell: RefCell::new(array),
        }
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.borrow()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.borrow()?.is_empty())
    }

    /// Shared access to the whole array.
    pub fn borrow(&self) -> Result<Ref<'_, A>> {
        Ok(self.cell.try_borrow()?)
    }

    /// Exclusive access to the whole array.
    ///
    /// Changes made here are invisible to views until they refresh.
    pub fn borrow_mut(&self) -> Result<RefMut<'_, A>> {
        Ok(self.cell.try_borrow_mut()?)
    }

    /// Appends directly to the array, bypassing every view.
    pub fn push(&self, value: A::Item) -> Result<()> {
        self.borrow_mut()?.push(value);
        Ok(())
    }

    pub fn to_vec(&self) -> Result<Vec<A::Item>>
    where
        A::Item: Clone,
    {
        Ok(self.borrow()?.as_slice().to_vec())
    }

    /// Direct access when no view can be alive.
    pub fn get_mut(&mut self) -> &mut A {
        self.cell.get_mut()
    }

    pub fn into_inner(self) -> A {
        self.cell.into_inner()
    }
}

impl<A: BackingArray> From<A> for Backing<A> {
    fn from(array: A) -> Self {
        Backing::new(array)
    }
}

impl<A: BackingArray + Default> Default for Backing<A> {
    fn default() -> Self {
        Backing::new(A::default())
    }
}

impl<A: fmt::Debug> fmt::Debug for Backing<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Backing").field(&self.cell).finish()
    }
}
