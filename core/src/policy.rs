/// When a [`DynamicRangeView`](crate::DynamicRangeView) re-runs its bounds strategy.
///
/// Positional `insert`/`erase` never refresh; they act on the cached bounds the
/// caller took their position from. Call `refresh()` first when that is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RefreshPolicy {
    /// Refresh before `len`, `is_empty`, `slice`, `borrow`, `borrow_mut` and `to_vec`.
    pub on_len: bool,
    /// Refresh before `push` and `pop`.
    pub before_push_pop: bool,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        RefreshPolicy::ALWAYS
    }
}

impl RefreshPolicy {
    /// Both triggers enabled. This is the default.
    pub const ALWAYS: RefreshPolicy = RefreshPolicy {
        on_len: true,
        before_push_pop: true,
    };

    /// Only explicit `refresh()` calls recompute bounds.
    pub const NEVER: RefreshPolicy = RefreshPolicy {
        on_len: false,
        before_push_pop: false,
    };

    pub const fn with_on_len(self, on_len: bool) -> Self {
        RefreshPolicy { on_len, ..self }
    }

    pub const fn with_before_push_pop(self, before_push_pop: bool) -> Self {
        RefreshPolicy {
            before_push_pop,
            ..self
        }
    }
}
