#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Sub-range views over growable arrays.
//!
//! - [`Backing`] owns a growable array ([`BackingArray`]: `Vec`, `SmallVec`).
//! - [`BoundedView`] addresses a fixed `[begin, end)` of it. Its bounds move only
//!   through its own mutations.
//! - [`DynamicRangeView`] recomputes `[begin, end)` with a [`BoundsStrategy`],
//!   on the triggers selected by a [`RefreshPolicy`].
//!
//! Views borrow the [`Backing`], so they cannot outlive it. Any number of views
//! may share one backing array; none of them is told when another one shifts
//! the elements it addresses.

// This works on std and no_std and is harmless.
extern crate alloc;

#[doc(hidden)]
pub mod shim {
    pub use alloc::{format, string::String, string::ToString, vec, vec::Vec};
}

#[allow(unused_imports)]
pub(crate) use shim::*;

pub mod backing;
pub mod bounded;
pub mod dynamic;
pub mod error;
pub mod policy;
pub mod position;
pub mod strategy;

pub use backing::{Backing, BackingArray};
pub use bounded::BoundedView;
pub use dynamic::DynamicRangeView;
pub use error::{Result, ViewError};
pub use policy::RefreshPolicy;
pub use position::Position;
pub use strategy::{
    AfterFirst, BoundsStrategy, Fixed, FromFirst, WholeArray, after_first, from_first,
};
