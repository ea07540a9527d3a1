//! Views whose bounds are recomputed from the backing array.
//!
//! A [`DynamicRangeView`] keeps a cached [`BoundedView`] and a
//! [`BoundsStrategy`]. The cache is refreshed by calling the strategy:
//!
//! - explicitly, through [`refresh`](DynamicRangeView::refresh);
//! - before `len`, `is_empty`, `slice`, `borrow`, `borrow_mut` and `to_vec`
//!   when [`RefreshPolicy::on_len`] is set;
//! - before `push` and `pop` when [`RefreshPolicy::before_push_pop`] is set.
//!
//! Indexed element access, `bounds`/`begin`/`end` and positional
//! `insert`/`erase` use the cached bounds as they are.
//!
//! Views sharing a backing array do not notify each other. A mutation through
//! one view (or through the [`Backing`] directly) leaves every other view's
//! cache stale until that view refreshes. Callers interleaving mutations across
//! views must refresh before relying on bounds.

use core::cell::{Cell, Ref, RefMut};
use core::fmt;
use core::ops::Range;

use crate::backing::{Backing, BackingArray};
use crate::error::check_bounds;
use crate::{BoundedView, BoundsStrategy, Position, RefreshPolicy, Result, Vec, WholeArray};

/// A sub-range view that tracks its bounds through a strategy.
///
/// # Example
///
/// ```
/// use rangeview_core::{Backing, DynamicRangeView, RefreshPolicy, after_first};
///
/// let backing = Backing::new(vec![1, 2, -1, 4, 5, 6]);
/// let tail = DynamicRangeView::with_strategy(
///     &backing,
///     after_first(|x: &i32| *x == -1),
///     RefreshPolicy::default(),
/// )
/// .unwrap();
/// assert_eq!(tail.to_vec().unwrap(), [4, 5, 6]);
///
/// backing.push(7).unwrap();
/// assert_eq!(tail.len().unwrap(), 4);
/// assert_eq!(tail.to_vec().unwrap(), [4, 5, 6, 7]);
/// ```
pub struct DynamicRangeView<'a, A, S = WholeArray> {
    view: Cell<BoundedView<'a, A>>,
    strategy: S,
    policy: RefreshPolicy,
}

impl<'a, A: BackingArray> DynamicRangeView<'a, A> {
    /// A view that always means "every element", refreshed on every trigger.
    pub fn new(backing: &'a Backing<A>) -> Result<Self> {
        Self::with_strategy(backing, WholeArray, RefreshPolicy::default())
    }
}

impl<'a, A, S> DynamicRangeView<'a, A, S>
where
    A: BackingArray,
    S: BoundsStrategy<A::Item>,
{
    /// Runs `strategy` once to establish the initial bounds.
    pub fn with_strategy(
        backing: &'a Backing<A>,
        strategy: S,
        policy: RefreshPolicy,
    ) -> Result<Self> {
        let view = DynamicRangeView {
            view: Cell::new(BoundedView::new_unchecked(backing, 0, 0)),
            strategy,
            policy,
        };
        view.refresh()?;
        Ok(view)
    }

    /// Recomputes the bounds from the current backing contents.
    ///
    /// On invalid strategy output the cached bounds are kept and
    /// [`ViewError::InvalidBounds`](crate::ViewError::InvalidBounds) is returned.
    pub fn refresh(&self) -> Result<Range<usize>> {
        let mut view = self.view.get();
        let bounds = {
            let array = view.backing().borrow()?;
            let bounds = self.strategy.bounds(array.as_slice());
            check_bounds(bounds.start, bounds.end, array.len())?;
            bounds
        };
        tracing::trace!(begin = bounds.start, end = bounds.end, "refresh");
        view.set_bounds(bounds.clone());
        self.view.set(view);
        Ok(bounds)
    }

    /// Whether the strategy currently disagrees with the cached bounds.
    /// Does not update them.
    pub fn is_stale(&self) -> Result<bool> {
        let array = self.backing().borrow()?;
        Ok(self.strategy.bounds(array.as_slice()) != self.bounds())
    }

    fn refresh_if(&self, trigger: bool) -> Result<()> {
        if trigger {
            self.refresh()?;
        }
        Ok(())
    }

    #[doc(alias = "size")]
    pub fn len(&self) -> Result<usize> {
        self.refresh_if(self.policy.on_len)?;
        Ok(self.view.get().len())
    }

    #[doc(alias = "empty")]
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// The cached bounds.
    pub fn bounds(&self) -> Range<usize> {
        self.view.get().bounds()
    }

    /// The cached begin position. Does not refresh.
    pub fn begin(&self) -> Position {
        self.view.get().begin()
    }

    /// The cached end position. Does not refresh.
    pub fn end(&self) -> Position {
        self.view.get().end()
    }

    /// A fixed view over the cached bounds.
    pub fn as_bounded(&self) -> BoundedView<'a, A> {
        self.view.get()
    }

    pub fn backing(&self) -> &'a Backing<A> {
        self.view.get().backing()
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: RefreshPolicy) {
        self.policy = policy;
    }

    #[doc(alias = "at")]
    pub fn get(&self, index: usize) -> Result<Ref<'a, A::Item>> {
        self.view.get().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Result<RefMut<'a, A::Item>> {
        self.view.get_mut().get_mut(index)
    }

    pub fn set(&mut self, index: usize, value: A::Item) -> Result<A::Item> {
        self.view.get_mut().set(index, value)
    }

    pub fn first(&self) -> Result<Ref<'a, A::Item>> {
        self.view.get().first()
    }

    #[doc(alias = "back")]
    pub fn last(&self) -> Result<Ref<'a, A::Item>> {
        self.view.get().last()
    }

    /// The viewed elements as a slice, refreshed first per `on_len`.
    pub fn borrow(&self) -> Result<Ref<'a, [A::Item]>> {
        self.refresh_if(self.policy.on_len)?;
        self.view.get().borrow()
    }

    pub fn borrow_mut(&mut self) -> Result<RefMut<'a, [A::Item]>> {
        self.refresh_if(self.policy.on_len)?;
        self.view.get_mut().borrow_mut()
    }

    pub fn to_vec(&self) -> Result<Vec<A::Item>>
    where
        A::Item: Clone,
    {
        self.refresh_if(self.policy.on_len)?;
        self.view.get().to_vec()
    }

    #[doc(alias = "push_back")]
    pub fn push(&mut self, value: A::Item) -> Result<()> {
        self.refresh_if(self.policy.before_push_pop)?;
        self.view.get_mut().push(value)
    }

    #[doc(alias = "pop_back")]
    pub fn pop(&mut self) -> Result<A::Item> {
        self.refresh_if(self.policy.before_push_pop)?;
        self.view.get_mut().pop()
    }

    /// Positional insert against the cached bounds. Never refreshes.
    pub fn insert(&mut self, position: Position, value: A::Item) -> Result<Position> {
        self.view.get_mut().insert(position, value)
    }

    /// Positional erase against the cached bounds. Never refreshes.
    pub fn erase(&mut self, position: Position) -> Result<A::Item> {
        self.view.get_mut().erase(position)
    }

    pub fn erase_range(&mut self, start: Position, stop: Position) -> Result<Position> {
        self.view.get_mut().erase_range(start, stop)
    }

    /// A fixed view over `[begin + a, begin + b)` of the (refreshed) bounds.
    pub fn slice(&self, a: usize, b: usize) -> Result<BoundedView<'a, A>> {
        self.refresh_if(self.policy.on_len)?;
        self.view.get().slice(a, b)
    }
}

impl<A, S: Clone> Clone for DynamicRangeView<'_, A, S> {
    fn clone(&self) -> Self {
        DynamicRangeView {
            view: Cell::new(self.view.get()),
            strategy: self.strategy.clone(),
            policy: self.policy,
        }
    }
}

impl<A, S: fmt::Debug> fmt::Debug for DynamicRangeView<'_, A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicRangeView")
            .field("bounds", &self.view.get().bounds())
            .field("strategy", &self.strategy)
            .field("policy", &self.policy)
            .finish()
    }
}
