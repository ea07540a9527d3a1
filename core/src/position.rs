use core::ops::{Add, Sub};

/// An absolute offset into a backing array.
///
/// Produced by `begin()`/`end()` on a view and accepted by positional
/// `insert`/`erase`. A position describes the layout at the time it was taken:
/// any insert or erase at or before it leaves it pointing at a different element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(usize);

impl Position {
    pub const fn new(index: usize) -> Self {
        Position(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    /// `self - rhs`, or `None` if that would go before index 0.
    pub const fn checked_sub(self, rhs: usize) -> Option<Position> {
        match self.0.checked_sub(rhs) {
            Some(index) => Some(Position(index)),
            None => None,
        }
    }
}

impl Add<usize> for Position {
    type Output = Position;

    fn add(self, rhs: usize) -> Position {
        Position(self.0 + rhs)
    }
}

/// Panics if `rhs` is greater than the index. See [`Position::checked_sub`].
impl Sub<usize> for Position {
    type Output = Position;

    fn sub(self, rhs: usize) -> Position {
        Position(self.0 - rhs)
    }
}

/// Distance between two positions. Panics if `rhs` is past `self`.
impl Sub<Position> for Position {
    type Output = usize;

    fn sub(self, rhs: Position) -> usize {
        self.0 - rhs.0
    }
}

impl From<usize> for Position {
    fn from(index: usize) -> Self {
        Position(index)
    }
}

impl From<Position> for usize {
    fn from(position: Position) -> Self {
        position.0
    }
}
