//! Game configuration: board size, fleet composition and placement budget.

use alloc::vec::Vec;
use core::num::NonZeroUsize;
use core::str::FromStr;

use crate::common::ConfigError;

pub const DEFAULT_BOARD_SIZE: usize = 6;
/// Largest accepted board side.
pub const MAX_BOARD_SIZE: usize = 1024;
/// Reference fleet as `(ship size, count)` pairs.
pub const DEFAULT_FLEET: [(usize, usize); 3] = [(3, 1), (2, 2), (1, 4)];
/// Attempts the automated placement spends on one ship before abandoning the
/// population pass.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// `count` ships of `size` cells each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetEntry {
    pub size: NonZeroUsize,
    pub count: usize,
}

/// Ordered list of ships every player must place before play begins.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<FleetEntry>", into = "Vec<FleetEntry>")
)]
pub struct Fleet {
    entries: Vec<FleetEntry>,
}

impl Fleet {
    /// Build a fleet from `(size, count)` pairs.
    pub fn new<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(size, count)| {
                let size = NonZeroUsize::new(size).ok_or(ConfigError::ZeroShipSize)?;
                Ok(FleetEntry { size, count })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Self::from_entries(entries)
    }

    fn from_entries(entries: Vec<FleetEntry>) -> Result<Self, ConfigError> {
        let (ships, _cells) = entries
            .iter()
            .try_fold((0usize, 0usize), |(ships, cells), e| {
                let ships = ships.checked_add(e.count)?;
                let cells = cells.checked_add(e.size.get().checked_mul(e.count)?)?;
                Some((ships, cells))
            })
            .ok_or(ConfigError::FleetOverflow)?;
        if ships == 0 {
            return Err(ConfigError::EmptyFleet);
        }
        Ok(Fleet { entries })
    }

    pub fn entries(&self) -> &[FleetEntry] {
        &self.entries
    }

    /// Size of every ship instance, in placement order.
    pub fn ship_sizes(&self) -> impl Iterator<Item = NonZeroUsize> + '_ {
        self.entries
            .iter()
            .flat_map(|e| core::iter::repeat(e.size).take(e.count))
    }

    // Both totals were checked for overflow in `from_entries`.
    pub fn total_ships(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Cells the whole fleet occupies.
    pub fn total_cells(&self) -> usize {
        self.entries.iter().map(|e| e.size.get() * e.count).sum()
    }

    fn largest_ship(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.count > 0)
            .map(|e| e.size.get())
            .max()
            .unwrap_or(0)
    }
}

impl Default for Fleet {
    fn default() -> Self {
        let entries = DEFAULT_FLEET
            .iter()
            .filter_map(|&(size, count)| {
                NonZeroUsize::new(size).map(|size| FleetEntry { size, count })
            })
            .collect();
        Fleet { entries }
    }
}

impl TryFrom<Vec<FleetEntry>> for Fleet {
    type Error = ConfigError;

    fn try_from(entries: Vec<FleetEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

impl From<Fleet> for Vec<FleetEntry> {
    fn from(fleet: Fleet) -> Self {
        fleet.entries
    }
}

/// Reads `SIZExCOUNT` entries separated by commas, e.g. `3x1,2x2,1x4`.
impl FromStr for Fleet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut pairs = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (size, count) = part
                .split_once(['x', 'X'])
                .ok_or(ConfigError::InvalidFleetEntry("expected SIZExCOUNT"))?;
            let size: usize = size
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidFleetEntry("ship size is not a number"))?;
            let count: usize = count
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidFleetEntry("ship count is not a number"))?;
            pairs.push((size, count));
        }
        Fleet::new(pairs)
    }
}

/// Board size and fleet shared by both players.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub board_size: usize,
    pub fleet: Fleet,
}

impl GameConfig {
    /// Build a configuration, rejecting fleets that cannot fit the board.
    pub fn new(board_size: usize, fleet: Fleet) -> Result<Self, ConfigError> {
        let config = GameConfig { board_size, fleet };
        config.validate()?;
        Ok(config)
    }

    /// Check the board size is in `1..=MAX_BOARD_SIZE`, every ship fits along
    /// one side, the fleet's cells fit in the board area and no two ships
    /// would be forced next to each other.
    ///
    /// Ships may not touch orthogonally, so one cell from each ship forms a
    /// set of pairwise non-adjacent cells. A square grid of `n²` cells holds
    /// at most `ceil(n² / 2)` of those.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                board_size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        let largest = self.fleet.largest_ship();
        if largest > self.board_size {
            return Err(ConfigError::ShipTooLarge {
                ship_size: largest,
                board_size: self.board_size,
            });
        }
        let cells = self.fleet.total_cells();
        let board_cells = self.board_size.pow(2);
        if cells > board_cells {
            return Err(ConfigError::FleetTooLarge { cells, board_cells });
        }
        let ships = self.fleet.total_ships();
        let max = board_cells.div_ceil(2);
        if ships > max {
            return Err(ConfigError::TooManyShips { ships, max });
        }
        Ok(())
    }

    /// Load and validate a configuration from JSON.
    #[cfg(feature = "std")]
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            fleet: Fleet::default(),
        }
    }
}
