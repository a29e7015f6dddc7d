//! Board state: a square grid of tiles, ship placement and shot resolution.

use alloc::vec;
use alloc::vec::Vec;

use crate::common::{PlacementError, ShotError, ShotOutcome};
use crate::coordinate::{Coordinate, Direction};
use crate::ship::Ship;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TileState {
    /// Untouched open water.
    Water,
    /// Untouched ship segment.
    ShipPresent,
    /// A shot landed on a ship segment.
    Hit,
    /// A shot landed on open water.
    Miss,
}

impl TileState {
    /// The state as seen by the opponent: unhit ships look like water.
    pub fn concealed(self) -> TileState {
        match self {
            TileState::ShipPresent => TileState::Water,
            other => other,
        }
    }

    /// `true` for cells a shot may still land on.
    pub fn is_open(self) -> bool {
        matches!(self, TileState::Water | TileState::ShipPresent)
    }
}

/// A `size × size` grid owned by one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    tiles: Vec<TileState>,
}

impl Board {
    /// Create an all-water board.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            tiles: vec![TileState::Water; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// State of the tile at `coord`, or `None` when it lies off the board.
    pub fn tile(&self, coord: Coordinate) -> Option<TileState> {
        self.index(coord).map(|i| self.tiles[i])
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        if coord.is_in_bounds(self.size) {
            Some(coord.row as usize * self.size + coord.col as usize)
        } else {
            None
        }
    }

    fn is_ship(&self, coord: Coordinate) -> bool {
        self.tile(coord) == Some(TileState::ShipPresent)
    }

    /// Mark every cell of `ship` as occupied.
    ///
    /// All cells are validated before anything is written, so a rejected ship
    /// leaves the board unchanged.
    pub fn place_ship(&mut self, ship: &Ship) -> Result<(), PlacementError> {
        for cell in ship.cells() {
            if !cell.is_in_bounds(self.size) {
                return Err(PlacementError::OutOfBounds { cell });
            }
            if self.is_ship(cell) {
                return Err(PlacementError::Intersection { cell });
            }
            if Direction::ALL
                .iter()
                .any(|dir| self.is_ship(cell + dir.offset()))
            {
                return Err(PlacementError::Intersection { cell });
            }
        }

        for cell in ship.cells() {
            if let Some(i) = self.index(cell) {
                self.tiles[i] = TileState::ShipPresent;
            }
        }
        log::debug!(
            "placed ship of size {} at {} facing {:?}",
            ship.size(),
            ship.anchor(),
            ship.direction()
        );
        Ok(())
    }

    /// Resolve a shot at `target`, turning water into a miss or a ship
    /// segment into a hit.
    pub fn place_shot(&mut self, target: Coordinate) -> Result<ShotOutcome, ShotError> {
        let i = self
            .index(target)
            .ok_or(ShotError::OutOfBounds { target })?;
        match self.tiles[i] {
            TileState::Hit | TileState::Miss => Err(ShotError::AlreadyShot { target }),
            TileState::Water => {
                self.tiles[i] = TileState::Miss;
                Ok(ShotOutcome::Miss)
            }
            TileState::ShipPresent => {
                self.tiles[i] = TileState::Hit;
                Ok(ShotOutcome::Hit)
            }
        }
    }

    /// Returns `true` while any ship segment is still unhit.
    pub fn has_remaining_ships(&self) -> bool {
        self.tiles.contains(&TileState::ShipPresent)
    }

    /// Number of ship segments not yet hit.
    pub fn remaining_ship_cells(&self) -> usize {
        self.count(TileState::ShipPresent)
    }

    /// Number of cells that have not been shot at.
    pub fn open_cells(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_open()).count()
    }

    fn count(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|&&t| t == state).count()
    }

    /// Copy of one row. With `conceal_ships` set, unhit ship segments are
    /// reported as water. Rows past the board edge come back empty.
    pub fn view_row(&self, row: usize, conceal_ships: bool) -> Vec<TileState> {
        if row >= self.size {
            return Vec::new();
        }
        let start = row * self.size;
        self.tiles[start..start + self.size]
            .iter()
            .map(|&t| if conceal_ships { t.concealed() } else { t })
            .collect()
    }
}
