//! Turn driver: sets up both boards and alternates shots until one fleet is
//! gone.

use core::fmt;

use rand::Rng;

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::config::GameConfig;
use crate::player::{Player, Shot};

/// Which of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Fleets not placed yet.
    Setup,
    InProgress,
    /// The given side sank every enemy ship.
    Won(Side),
}

/// Shots fired by one side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotTally {
    pub fired: usize,
    pub hits: usize,
}

/// What happened on one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub shooter: Side,
    pub shot: Shot,
    pub status: GameStatus,
}

/// Final result of [`play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSummary {
    pub winner: Side,
    pub board_size: usize,
    pub first: ShotTally,
    pub second: ShotTally,
}

/// A player's collaborator failed during a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError<A, B> {
    First(A),
    Second(B),
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for MatchError<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::First(e) => write!(f, "first player failed: {}", e),
            MatchError::Second(e) => write!(f, "second player failed: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<A, B> std::error::Error for MatchError<A, B>
where
    A: fmt::Debug + fmt::Display,
    B: fmt::Debug + fmt::Display,
{
}

/// Both boards plus per-side shot counts.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    boards: [Board; 2],
    tallies: [ShotTally; 2],
    status: GameStatus,
}

impl Game {
    /// Create a game with two empty boards of the configured size.
    pub fn new(config: GameConfig) -> Self {
        let boards = [Board::new(config.board_size), Board::new(config.board_size)];
        Self {
            config,
            boards,
            tallies: [ShotTally::default(); 2],
            status: GameStatus::Setup,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub fn tally(&self, side: Side) -> ShotTally {
        self.tallies[side.index()]
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Let each side place its fleet, first side first.
    pub fn setup<P, Q, R>(
        &mut self,
        first: &mut P,
        second: &mut Q,
        rng: &mut R,
    ) -> Result<(), MatchError<P::Error, Q::Error>>
    where
        P: Player,
        Q: Player,
        R: Rng + ?Sized,
    {
        first
            .place_fleet(rng, &mut self.boards[0], &self.config.fleet)
            .map_err(MatchError::First)?;
        second
            .place_fleet(rng, &mut self.boards[1], &self.config.fleet)
            .map_err(MatchError::Second)?;
        self.status = GameStatus::InProgress;
        log::info!(
            "fleets placed on {}x{} boards",
            self.config.board_size,
            self.config.board_size
        );
        Ok(())
    }

    /// `side` fires one shot at its opponent's board. The game is won as soon
    /// as that board has no ship left.
    pub fn fire<P, R>(
        &mut self,
        side: Side,
        player: &mut P,
        rng: &mut R,
    ) -> Result<TurnReport, P::Error>
    where
        P: Player,
        R: Rng + ?Sized,
    {
        let target = &mut self.boards[side.opponent().index()];
        let shot = player.shoot(rng, target)?;
        let tally = &mut self.tallies[side.index()];
        tally.fired += 1;
        if shot.outcome == ShotOutcome::Hit {
            tally.hits += 1;
        }
        if self.status == GameStatus::InProgress && !target.has_remaining_ships() {
            self.status = GameStatus::Won(side);
        }
        log::debug!("{:?} fires at {}: {:?}", side, shot.target, shot.outcome);
        Ok(TurnReport {
            shooter: side,
            shot,
            status: self.status,
        })
    }

    fn summary(&self, winner: Side) -> MatchSummary {
        MatchSummary {
            winner,
            board_size: self.config.board_size,
            first: self.tallies[0],
            second: self.tallies[1],
        }
    }
}

/// Play a full match: setup, then alternate shots (first side first) until
/// one board has no ship left. `observer` sees the game after every shot.
pub fn play<P, Q, R, F>(
    config: GameConfig,
    first: &mut P,
    second: &mut Q,
    rng: &mut R,
    mut observer: F,
) -> Result<MatchSummary, MatchError<P::Error, Q::Error>>
where
    P: Player,
    Q: Player,
    R: Rng + ?Sized,
    F: FnMut(&Game, &TurnReport),
{
    let mut game = Game::new(config);
    game.setup(first, second, rng)?;
    loop {
        let report = game.fire(Side::First, first, rng).map_err(MatchError::First)?;
        observer(&game, &report);
        if let GameStatus::Won(winner) = report.status {
            return Ok(game.summary(winner));
        }
        let report = game.fire(Side::Second, second, rng).map_err(MatchError::Second)?;
        observer(&game, &report);
        if let GameStatus::Won(winner) = report.status {
            return Ok(game.summary(winner));
        }
    }
}
