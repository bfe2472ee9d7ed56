//! Combatants and the move-selection strategies they delegate to.

use alloc::boxed::Box;
use alloc::string::String;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{GameError, ShotOutcome};
use crate::coordinate::Coordinate;

/// Interface implemented by the ways a side can pick its next shot.
pub trait Strategy {
    /// Choose the next target on `opponent`.
    fn select_target(&mut self, rng: &mut SmallRng, opponent: &Board)
        -> Result<Coordinate, GameError>;

    /// Inform the strategy that its last choice was refused and another is needed.
    fn handle_rejected(&mut self, _err: &GameError) {}
}

/// A shot that the opponent board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub target: Coordinate,
    pub outcome: ShotOutcome,
}

/// One side of a game: its own fleet and how it chooses moves.
pub struct Combatant {
    name: String,
    board: Board,
    strategy: Box<dyn Strategy>,
}

impl Combatant {
    pub fn new(name: impl Into<String>, board: Board, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            board,
            strategy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// This side's own board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Ask the strategy for targets until `opponent` accepts one.
    ///
    /// Malformed, out-of-bounds and already-fired targets are retried without
    /// limit; any other error ends the turn and is returned.
    pub fn take_turn(&mut self, rng: &mut SmallRng, opponent: &mut Board) -> Result<Shot, GameError> {
        loop {
            let attempt = self
                .strategy
                .select_target(rng, opponent)
                .and_then(|target| opponent.shoot(target).map(|outcome| Shot { target, outcome }));
            match attempt {
                Ok(shot) => return Ok(shot),
                Err(e) if e.is_retryable_move() => {
                    log::debug!("{} move rejected: {}", self.name, e);
                    self.strategy.handle_rejected(&e);
                }
                Err(e) => return Err(e),
            }
        }
    }
}
