//! Common types for the duel engine: shot outcomes and the error kinds
//! raised by boards, placement and configuration.

use core::fmt;

use crate::coordinate::Coordinate;

/// Result of a shot that landed on an unresolved cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The cell held part of a ship.
    Hit,
    /// The cell was open water.
    Miss,
}

/// Errors returned by [`Board::place_ship`](crate::Board::place_ship).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A ship cell lies outside the board.
    OutOfBounds { cell: Coordinate },
    /// A ship cell overlaps or touches an existing ship.
    Intersection { cell: Coordinate },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds { cell } => {
                write!(f, "the ship (or its parts) are outside of the field at {}", cell)
            }
            PlacementError::Intersection { cell } => write!(
                f,
                "ships are intersecting or too close at {}, \
                 the distance between ships must be at least 1 tile",
                cell
            ),
        }
    }
}

/// Errors returned by [`Board::place_shot`](crate::Board::place_shot).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target lies outside the board.
    OutOfBounds { target: Coordinate },
    /// Target already resolved to a hit or a miss.
    AlreadyShot { target: Coordinate },
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds { target } => {
                write!(f, "{} is outside the field", target)
            }
            ShotError::AlreadyShot { target } => {
                write!(f, "already shot there {}", target)
            }
        }
    }
}

/// An automated population pass ran out of attempts for one ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulationFailed {
    /// Size of the ship that could not be placed.
    pub ship_size: usize,
    /// Attempts spent on that ship before giving up.
    pub attempts: usize,
}

impl fmt::Display for PopulationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unable to place a ship of size {} after {} attempts",
            self.ship_size, self.attempts
        )
    }
}

/// Errors raised while building a [`GameConfig`](crate::GameConfig) or a
/// [`Fleet`](crate::Fleet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board size must be at least one.
    EmptyBoard,
    /// Board side exceeds the supported maximum.
    BoardTooLarge { board_size: usize, max: usize },
    /// Fleet contains no ships.
    EmptyFleet,
    /// A fleet entry has ship size zero.
    ZeroShipSize,
    /// A ship is longer than the board side.
    ShipTooLarge { ship_size: usize, board_size: usize },
    /// The fleet needs more cells than the board has.
    FleetTooLarge { cells: usize, board_cells: usize },
    /// Ship or cell totals do not fit in a `usize`.
    FleetOverflow,
    /// More ships than can be kept apart on the board.
    TooManyShips { ships: usize, max: usize },
    /// A fleet description entry could not be read (expects `SIZExCOUNT`).
    InvalidFleetEntry(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBoard => write!(f, "Board size must be at least 1"),
            ConfigError::BoardTooLarge { board_size, max } => {
                write!(f, "Board size {} exceeds the maximum of {}", board_size, max)
            }
            ConfigError::EmptyFleet => write!(f, "Fleet must contain at least one ship"),
            ConfigError::ZeroShipSize => write!(f, "Ship size must be at least 1"),
            ConfigError::ShipTooLarge {
                ship_size,
                board_size,
            } => write!(
                f,
                "Ship of size {} does not fit a {}x{} board",
                ship_size, board_size, board_size
            ),
            ConfigError::FleetTooLarge { cells, board_cells } => write!(
                f,
                "Fleet needs {} cells but the board only has {}",
                cells, board_cells
            ),
            ConfigError::FleetOverflow => write!(f, "Fleet is too large to count"),
            ConfigError::TooManyShips { ships, max } => write!(
                f,
                "{} ships cannot be kept apart, the board holds at most {}",
                ships, max
            ),
            ConfigError::InvalidFleetEntry(reason) => {
                write!(f, "Invalid fleet entry: {}", reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for ShotError {}
#[cfg(feature = "std")]
impl std::error::Error for PopulationFailed {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
