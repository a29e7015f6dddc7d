//! Ship placement requests.

use core::num::NonZeroUsize;

use crate::common::ConfigError;
use crate::coordinate::{Coordinate, Direction};

/// A ship of `size` cells starting at `anchor` and extending along
/// `direction`.
///
/// Ships are transient: a board keeps only the tiles a ship marked, never the
/// ship itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    size: NonZeroUsize,
    anchor: Coordinate,
    direction: Direction,
}

impl Ship {
    /// Build a ship, rejecting size zero.
    pub fn new(
        size: usize,
        anchor: Coordinate,
        direction: Direction,
    ) -> Result<Self, ConfigError> {
        let size = NonZeroUsize::new(size).ok_or(ConfigError::ZeroShipSize)?;
        Ok(Self::with_size(size, anchor, direction))
    }

    pub const fn with_size(size: NonZeroUsize, anchor: Coordinate, direction: Direction) -> Self {
        Self {
            size,
            anchor,
            direction,
        }
    }

    pub fn size(&self) -> usize {
        self.size.get()
    }

    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Occupied cells: `anchor`, `anchor + direction`, ... in that order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let anchor = self.anchor;
        let step = self.direction.offset();
        (0..self.size.get()).map(move |i| anchor + step * i as i32)
    }
}
