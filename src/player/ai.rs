use core::fmt;

use rand::Rng;

use crate::board::Board;
use crate::common::PopulationFailed;
use crate::config::{Fleet, MAX_PLACEMENT_ATTEMPTS};
use crate::coordinate::{Coordinate, Direction};
use crate::ship::Ship;

use super::{Player, Shot};

/// Run one population pass: place every ship of `fleet` at random.
///
/// Each ship gets its own budget of `max_attempts` placement tries. A try is
/// one direction at one random anchor; all four directions are tried for an
/// anchor before a new one is drawn. When a ship exhausts its budget the pass
/// stops with [`PopulationFailed`] and `board` holds whatever was placed so
/// far, so the caller must discard it.
pub fn populate<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    fleet: &Fleet,
    max_attempts: usize,
) -> Result<(), PopulationFailed> {
    for size in fleet.ship_sizes() {
        let mut attempts = 0;
        'ship: loop {
            if attempts >= max_attempts {
                return Err(PopulationFailed {
                    ship_size: size.get(),
                    attempts,
                });
            }
            let anchor = Coordinate::random_in_range(rng, board.size());
            for dir in Direction::ALL {
                attempts += 1;
                match board.place_ship(&Ship::with_size(size, anchor, dir)) {
                    Ok(()) => break 'ship,
                    Err(e) => log::trace!("rejected placement: {}", e),
                }
            }
        }
    }
    Ok(())
}

/// Failures of the automated player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotError {
    /// Asked to shoot at a board with no cell left to shoot.
    BoardExhausted,
    /// The reset limit ran out before a population pass succeeded.
    PlacementAbandoned {
        resets: usize,
        last: PopulationFailed,
    },
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::BoardExhausted => write!(f, "No open cell left on the opponent board"),
            BotError::PlacementAbandoned { resets, last } => {
                write!(f, "Gave up placing the fleet after {} board resets: {}", resets, last)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BotError {}

/// Automated player: random placement with whole-board restarts and random
/// shooting.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    max_attempts: usize,
    reset_limit: Option<usize>,
    resets: usize,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::with_attempt_budget(MAX_PLACEMENT_ATTEMPTS)
    }

    /// Use a per-ship placement budget other than [`MAX_PLACEMENT_ATTEMPTS`].
    /// A budget of zero is raised to one.
    pub fn with_attempt_budget(max_attempts: usize) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            reset_limit: None,
            resets: 0,
        }
    }

    /// Stop after `limit` board resets instead of retrying forever.
    pub fn with_reset_limit(mut self, limit: usize) -> Self {
        self.reset_limit = Some(limit);
        self
    }

    /// Boards thrown away by the last [`Player::place_fleet`] call.
    pub fn resets(&self) -> usize {
        self.resets
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    type Error = BotError;

    /// Retries population on a fresh board until it succeeds. Without a
    /// reset limit the retry is unbounded and a fleet that can never fit
    /// keeps this looping.
    fn place_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        board: &mut Board,
        fleet: &Fleet,
    ) -> Result<(), Self::Error> {
        self.resets = 0;
        while let Err(last) = populate(rng, board, fleet, self.max_attempts) {
            if self.reset_limit.is_some_and(|limit| self.resets >= limit) {
                return Err(BotError::PlacementAbandoned {
                    resets: self.resets,
                    last,
                });
            }
            self.resets += 1;
            log::warn!("{}; resetting the board (reset #{})", last, self.resets);
            *board = Board::new(board.size());
        }
        log::debug!("fleet placed after {} board resets", self.resets);
        Ok(())
    }

    fn shoot<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        opponent: &mut Board,
    ) -> Result<Shot, Self::Error> {
        if opponent.open_cells() == 0 {
            return Err(BotError::BoardExhausted);
        }
        loop {
            let target = Coordinate::random_in_range(rng, opponent.size());
            match opponent.place_shot(target) {
                Ok(outcome) => return Ok(Shot { target, outcome }),
                Err(e) => log::trace!("bot redraws: {}", e),
            }
        }
    }
}
