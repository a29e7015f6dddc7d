//! Board positions and the four placement directions.

use core::fmt;
use core::ops::{Add, Mul};
use rand::Rng;

/// A (row, column) position. Only meaningful next to a board size, see
/// [`Coordinate::is_in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// `true` when both axes lie in `[0, size)`.
    pub fn is_in_bounds(&self, size: usize) -> bool {
        let inside = |v: i32| v >= 0 && (v as usize) < size;
        inside(self.row) && inside(self.col)
    }

    /// Draw a coordinate with each axis uniform over the inclusive range
    /// `[0, max]`.
    ///
    /// The upper bound is one past the last valid index of a `max`-sized
    /// board, so the result must be checked with [`Coordinate::is_in_bounds`]
    /// (or handed to a board that rejects it) before use.
    pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, max: usize) -> Self {
        let max = i32::try_from(max).unwrap_or(i32::MAX);
        Self {
            row: rng.random_range(0..=max),
            col: rng.random_range(0..=max),
        }
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Mul<i32> for Coordinate {
    type Output = Coordinate;

    fn mul(self, k: i32) -> Coordinate {
        Coordinate::new(self.row * k, self.col * k)
    }
}

impl Mul for Coordinate {
    type Output = Coordinate;

    fn mul(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.row * rhs.row, self.col * rhs.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Unit step along one board axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in the order the automated placement tries them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The unit vector for this direction.
    pub const fn offset(self) -> Coordinate {
        match self {
            Direction::Up => Coordinate::new(-1, 0),
            Direction::Down => Coordinate::new(1, 0),
            Direction::Left => Coordinate::new(0, -1),
            Direction::Right => Coordinate::new(0, 1),
        }
    }
}
