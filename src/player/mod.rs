//! Player trait and implementations
//!
//! A player owns two strategies: how it fills its own board with the fleet
//! and how it picks targets on the opponent's board.
//! - AiPlayer: randomized placement with bounded retries, random shooting
//! - InteractivePlayer: defers every choice to a [`PlayerInput`] collaborator
//!
//! Rule violations (out of bounds, intersecting ships, repeated shots) are
//! retried inside the strategies and never reach the caller. Only failures of
//! the player's own collaborators, or a bot giving up, are reported through
//! [`Player::Error`].

use rand::Rng;

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::config::Fleet;
use crate::coordinate::Coordinate;

/// A resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub target: Coordinate,
    pub outcome: ShotOutcome,
}

/// Interface implemented by different player types.
pub trait Player {
    /// Failure of a collaborator the player depends on.
    type Error;

    /// Place every ship of `fleet` onto `board`.
    fn place_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        board: &mut Board,
        fleet: &Fleet,
    ) -> Result<(), Self::Error>;

    /// Fire one shot at `opponent`, retrying until it resolves.
    fn shoot<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        opponent: &mut Board,
    ) -> Result<Shot, Self::Error>;
}

pub mod ai;
pub use ai::{populate, AiPlayer, BotError};

pub mod interactive;
pub use interactive::{InteractivePlayer, Notice, PlayerInput};
