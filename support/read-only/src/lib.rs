//! Nullable read-only views over strings and slices.
//!
//! A `ReadOnlyView<str>` or `ReadOnlyView<[T]>` is a borrowed, read-only window
//! onto a buffer owned somewhere else. Unlike a plain `&str` / `&[T]` it can be
//! *unbound* (null) and later rebound, which makes it usable as a field or a
//! container element that is filled in after construction:
//!
//! ```text
//! ReadOnlyView<str>:  Some(&'a str) ──▶ "hello"   (owned elsewhere)
//!                     None                        (null, reads fail)
//! ```
//!
//! Properties:
//!
//! - **Same size as a reference**: the null state uses the `Option<&T>` niche.
//! - **Value semantics over the view**: `Copy`/`Clone` copy the handle, never the data.
//! - **Checked reads**: `as_view` / `as_copy` return [`NullViewError`] on a null view.
//! - **No dangling**: the lifetime `'a` ties the view to its buffer, so a view
//!   cannot be built from a temporary that dies before the view is used.
//!
//! # Example
//!
//! ```
//! use rangeview_read_only::ReadOnlyView;
//!
//! let owned = String::from("101");
//! let view = ReadOnlyView::from(&owned);
//! assert_eq!(view.as_view().unwrap(), "101");
//!
//! // Views are cheap handles and can live in ordinary containers.
//! let list = vec![view; 3];
//! assert!(list.iter().all(|v| v.as_copy().unwrap() == "101"));
//!
//! let numbers = vec![1, 2, 3];
//! let slice: ReadOnlyView<[i32]> = ReadOnlyView::from(&numbers[1..]);
//! assert_eq!(slice.as_view().unwrap(), &[2, 3]);
//! ```
//!
//! Binding to a temporary does not compile:
//!
//! ```compile_fail
//! use rangeview_read_only::ReadOnlyView;
//!
//! let view = ReadOnlyView::from(&String::from("gone"));
//! assert_eq!(view.as_view().unwrap(), "gone");
//! ```

#![no_std]

extern crate alloc;

use alloc::{borrow::ToOwned, string::String, vec::Vec};
use core::fmt;

/// Returned when reading through a view that is not bound to any buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("read through a null view")]
pub struct NullViewError;

/// A read-only view of a `str` or `[T]` that may be null.
///
/// See [crate-level docs](crate) for examples.
pub struct ReadOnlyView<'a, T>
where
    T: 'a + ?Sized + ViewTarget,
{
    target: Option<&'a T>,
}

static_assertions::assert_eq_size!(ReadOnlyView<str>, &str);
static_assertions::assert_eq_size!(ReadOnlyView<[u8]>, &[u8]);
static_assertions::assert_eq_size!(ReadOnlyView<[u128]>, &[u128]);
static_assertions::assert_impl_all!(ReadOnlyView<str>: Copy, Send, Sync);

mod private {
    pub trait Sealed {}
}

/// Types a [`ReadOnlyView`] can point at.
/// This is a sealed trait - it is implemented for `str` and `[T]` only.
pub trait ViewTarget: private::Sealed {
    #[doc(hidden)]
    fn target_len(&self) -> usize;
}

impl private::Sealed for str {}

impl ViewTarget for str {
    fn target_len(&self) -> usize {
        self.len()
    }
}

impl<T> private::Sealed for [T] {}

impl<T> ViewTarget for [T] {
    fn target_len(&self) -> usize {
        self.len()
    }
}

impl<'a, T> ReadOnlyView<'a, T>
where
    T: 'a + ?Sized + ViewTarget,
{
    /// Binds a new view to `target`.
    pub const fn new(target: &'a T) -> Self {
        ReadOnlyView {
            target: Some(target),
        }
    }

    /// A view bound to nothing.
    pub const fn null() -> Self {
        ReadOnlyView { target: None }
    }

    pub const fn is_null(&self) -> bool {
        self.target.is_none()
    }

    /// Points this view at `target`, dropping the previous binding.
    pub fn rebind(&mut self, target: &'a T) {
        self.target = Some(target);
    }

    /// Unbinds the view.
    pub fn clear(&mut self) {
        self.target = None;
    }

    /// Moves the binding out, leaving `self` null.
    pub fn take(&mut self) -> Self {
        ReadOnlyView {
            target: self.target.take(),
        }
    }

    /// Returns the viewed data.
    ///
    /// # Example
    ///
    /// ```
    /// use rangeview_read_only::{NullViewError, ReadOnlyView};
    ///
    /// let text = "abc";
    /// let mut view = ReadOnlyView::new(text);
    /// assert_eq!(view.as_view(), Ok("abc"));
    ///
    /// view.clear();
    /// assert_eq!(view.as_view(), Err(NullViewError));
    /// ```
    pub fn as_view(&self) -> Result<&'a T, NullViewError> {
        self.target.ok_or(NullViewError)
    }

    /// Length of the viewed data (bytes for `str`, elements for slices).
    pub fn len(&self) -> Result<usize, NullViewError> {
        self.as_view().map(T::target_len)
    }

    pub fn is_empty(&self) -> Result<bool, NullViewError> {
        self.len().map(|len| len == 0)
    }
}

impl<'a, T> ReadOnlyView<'a, T>
where
    T: 'a + ?Sized + ViewTarget + ToOwned,
{
    /// Copies the viewed data into an owned buffer (`String` or `Vec<T>`).
    pub fn as_copy(&self) -> Result<T::Owned, NullViewError> {
        self.as_view().map(T::to_owned)
    }
}

impl<'a> From<&'a str> for ReadOnlyView<'a, str> {
    fn from(value: &'a str) -> Self {
        ReadOnlyView::new(value)
    }
}

impl<'a> From<&'a String> for ReadOnlyView<'a, str> {
    fn from(value: &'a String) -> Self {
        ReadOnlyView::new(value.as_str())
    }
}

impl<'a, T> From<&'a [T]> for ReadOnlyView<'a, [T]> {
    fn from(value: &'a [T]) -> Self {
        ReadOnlyView::new(value)
    }
}

impl<'a, T> From<&'a Vec<T>> for ReadOnlyView<'a, [T]> {
    fn from(value: &'a Vec<T>) -> Self {
        ReadOnlyView::new(value.as_slice())
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for ReadOnlyView<'a, [T]> {
    fn from(value: &'a [T; N]) -> Self {
        ReadOnlyView::new(value.as_slice())
    }
}

impl<T: ?Sized + ViewTarget> Clone for ReadOnlyView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: ?Sized + ViewTarget> Copy for ReadOnlyView<'_, T> {}

impl<T: ?Sized + ViewTarget> Default for ReadOnlyView<'_, T> {
    fn default() -> Self {
        ReadOnlyView::null()
    }
}

impl<T: ?Sized + ViewTarget + PartialEq> PartialEq for ReadOnlyView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
    }
}
impl<T: ?Sized + ViewTarget + Eq> Eq for ReadOnlyView<'_, T> {}

impl<T: ?Sized + ViewTarget + fmt::Debug> fmt::Debug for ReadOnlyView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Some(target) => target.fmt(f),
            None => f.write_str("null"),
        }
    }
}

impl fmt::Display for ReadOnlyView<'_, str> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Some(target) => f.write_str(target),
            None => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;
    extern crate std;

    use alloc::format;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;
    use pretty_assertions::assert_eq;

    use super::{NullViewError, ReadOnlyView};

    // ======================
    // String view tests
    // ======================

    #[test]
    fn from_string_as_view() {
        let owned = String::from("101");
        let view = ReadOnlyView::from(&owned);
        assert_eq!(view.as_view(), Ok("101"));
        assert_eq!(view.len(), Ok(3));
    }

    #[test]
    fn from_str_as_copy() {
        let view: ReadOnlyView<str> = ReadOnlyView::from("hello");
        let copy: String = view.as_copy().unwrap();
        assert_eq!(copy, "hello");
    }

    #[test]
    fn unicode_len_is_bytes() {
        let view: ReadOnlyView<str> = ReadOnlyView::new("日本");
        assert_eq!(view.len(), Ok(6));
        assert_eq!(view.as_view().unwrap().chars().count(), 2);
    }

    // ======================
    // Slice view tests
    // ======================

    #[test]
    fn from_vec_as_view() {
        let values = vec![1, 2, 3, 4, 5, 6];
        let view = ReadOnlyView::from(&values);
        assert_eq!(view.as_view(), Ok(&[1, 2, 3, 4, 5, 6][..]));
    }

    #[test]
    fn from_sub_slice() {
        let mut values = vec![1, 2, 3, 4, 5, 6];
        values[2] = 10;
        let view: ReadOnlyView<[i32]> = ReadOnlyView::from(&values[1..3]);
        assert_eq!(view.as_copy(), Ok(vec![2, 10]));
    }

    #[test]
    fn from_array() {
        let values = [1.0f32, 2.0, 3.0];
        let view = ReadOnlyView::from(&values);
        assert_eq!(view.len(), Ok(3));
        assert_eq!(view.is_empty(), Ok(false));
    }

    #[test]
    fn empty_slice_is_not_null() {
        let values: Vec<u8> = Vec::new();
        let view = ReadOnlyView::from(&values);
        assert!(!view.is_null());
        assert_eq!(view.is_empty(), Ok(true));
    }

    // ======================
    // Null state tests
    // ======================

    #[test]
    fn null_reads_fail() {
        let view: ReadOnlyView<str> = ReadOnlyView::null();
        assert!(view.is_null());
        assert_eq!(view.as_view(), Err(NullViewError));
        assert_eq!(view.as_copy(), Err(NullViewError));
        assert_eq!(view.len(), Err(NullViewError));
    }

    #[test]
    fn default_is_null() {
        let view: ReadOnlyView<[i32]> = ReadOnlyView::default();
        assert!(view.is_null());
    }

    #[test]
    fn rebind_and_clear() {
        let first = String::from("first");
        let second = String::from("second");

        let mut view = ReadOnlyView::from(&first);
        view.rebind(&second);
        assert_eq!(view.as_view(), Ok("second"));

        view.clear();
        assert!(view.is_null());
    }

    #[test]
    fn take_leaves_null() {
        let text = String::from("moved");
        let mut view = ReadOnlyView::from(&text);
        let taken = view.take();
        assert!(view.is_null());
        assert_eq!(taken.as_view(), Ok("moved"));
    }

    #[test]
    fn null_error_message() {
        assert_eq!(NullViewError.to_string(), "read through a null view");
    }

    // ======================
    // Value semantics tests
    // ======================

    #[test]
    fn copies_share_target() {
        let text = String::from("abc");
        let view = ReadOnlyView::from(&text);
        let mut copy = view;
        copy.clear();

        // Clearing the copy leaves the original bound.
        assert_eq!(view.as_view(), Ok("abc"));
        assert!(copy.is_null());
    }

    #[test]
    fn stored_in_vec() {
        let text = String::from("Hello");
        let view = ReadOnlyView::from(&text);
        let list: Vec<ReadOnlyView<str>> = vec![view, view, view];
        for item in &list {
            assert_eq!(item.as_view(), Ok("Hello"));
        }
    }

    #[test]
    fn equality_compares_contents() {
        let a = String::from("same");
        let b = String::from("same");
        assert_eq!(ReadOnlyView::from(&a), ReadOnlyView::from(&b));
        assert_ne!(ReadOnlyView::from(&a), ReadOnlyView::null());
    }

    // ======================
    // Debug tests
    // ======================

    #[test]
    fn display_str() {
        let view: ReadOnlyView<str> = ReadOnlyView::new("test");
        assert_eq!(view.to_string(), "test");
        assert_eq!(ReadOnlyView::<str>::null().to_string(), "null");
    }

    #[test]
    fn debug_str() {
        let view: ReadOnlyView<str> = ReadOnlyView::new("test");
        assert_eq!(format!("{:?}", view), "\"test\"");
    }

    #[test]
    fn debug_slice() {
        let values = [1, 2, 3];
        let view = ReadOnlyView::from(&values);
        assert_eq!(format!("{:?}", view), "[1, 2, 3]");
    }

    #[test]
    fn debug_null() {
        let view: ReadOnlyView<str> = ReadOnlyView::null();
        assert_eq!(format!("{:?}", view), "null");
    }

    #[test]
    fn send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<ReadOnlyView<str>>();
        assert_sync::<ReadOnlyView<[i32]>>();
    }
}
