use core::num::NonZeroUsize;

use rand::Rng;

use crate::board::Board;
use crate::common::{PlacementError, ShotError};
use crate::config::Fleet;
use crate::coordinate::{Coordinate, Direction};
use crate::ship::Ship;

use super::{Player, Shot};

/// Something worth telling the person at the other end of a [`PlayerInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ShipPlaced(Ship),
    PlacementRejected(PlacementError),
    ShotRejected(ShotError),
    ShotResolved(Shot),
}

/// Source of a human's decisions.
///
/// Implementations keep asking until they have a well-formed answer; they
/// return `Err` only when no answer can ever come (closed input, for
/// example).
pub trait PlayerInput {
    type Error;

    /// Anchor and direction for the next ship of `size` cells.
    fn request_ship_placement(
        &mut self,
        size: NonZeroUsize,
    ) -> Result<(Coordinate, Direction), Self::Error>;

    /// Next cell to shoot at.
    fn request_shot_target(&mut self) -> Result<Coordinate, Self::Error>;

    /// Report progress or a rejected choice back to the user.
    fn notify(&mut self, _notice: Notice) {}
}

/// Player driven entirely by a [`PlayerInput`].
pub struct InteractivePlayer<I> {
    input: I,
}

impl<I: PlayerInput> InteractivePlayer<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn into_inner(self) -> I {
        self.input
    }
}

impl<I: PlayerInput> Player for InteractivePlayer<I> {
    type Error = I::Error;

    fn place_fleet<R: Rng + ?Sized>(
        &mut self,
        _rng: &mut R,
        board: &mut Board,
        fleet: &Fleet,
    ) -> Result<(), Self::Error> {
        for size in fleet.ship_sizes() {
            loop {
                let (anchor, direction) = self.input.request_ship_placement(size)?;
                let ship = Ship::with_size(size, anchor, direction);
                match board.place_ship(&ship) {
                    Ok(()) => {
                        self.input.notify(Notice::ShipPlaced(ship));
                        break;
                    }
                    Err(e) => self.input.notify(Notice::PlacementRejected(e)),
                }
            }
        }
        Ok(())
    }

    fn shoot<R: Rng + ?Sized>(
        &mut self,
        _rng: &mut R,
        opponent: &mut Board,
    ) -> Result<Shot, Self::Error> {
        loop {
            let target = self.input.request_shot_target()?;
            match opponent.place_shot(target) {
                Ok(outcome) => {
                    let shot = Shot { target, outcome };
                    self.input.notify(Notice::ShotResolved(shot));
                    return Ok(shot);
                }
                Err(e) => self.input.notify(Notice::ShotRejected(e)),
            }
        }
    }
}
