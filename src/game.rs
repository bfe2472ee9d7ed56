//! Turn alternation between two combatants.

use alloc::boxed::Box;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::GameError;
use crate::config::FLEET;
use crate::placement::generate_board;
use crate::player::{Combatant, Shot, Strategy};
use crate::player_ai::AiPlayer;
use crate::player_cli::{CliPlayer, InputSource};

/// Identifies one of the two combatants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Moves first.
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Current state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing { active: Side, inactive: Side },
    Finished { winner: Side },
}

/// What happened during one call to [`Game::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Fired { shooter: Side, shot: Shot },
    Finished { winner: Side },
}

/// Two combatants and whose turn it is.
pub struct Game {
    combatants: [Combatant; 2],
    state: GameState,
    shots: [usize; 2],
}

impl Game {
    /// Start a game between two prepared combatants; `first` fires first.
    pub fn new(first: Combatant, second: Combatant) -> Self {
        Self {
            combatants: [first, second],
            state: GameState::Playing {
                active: Side::First,
                inactive: Side::Second,
            },
            shots: [0; 2],
        }
    }

    /// Start a game with freshly generated `size`×`size` boards for both sides.
    pub fn generate(
        rng: &mut SmallRng,
        size: usize,
        first: (&str, Box<dyn Strategy>),
        second: (&str, Box<dyn Strategy>),
    ) -> Self {
        let first_board = generate_board(rng, size, &FLEET);
        let second_board = generate_board(rng, size, &FLEET);
        Game::new(
            Combatant::new(first.0, first_board, first.1),
            Combatant::new(second.0, second_board, second.1),
        )
    }

    /// Standard match: the computer fires first and its board is hidden; the
    /// human side reads moves from `input`.
    pub fn versus_computer<S: InputSource + 'static>(rng: &mut SmallRng, size: usize, input: S) -> Self {
        let mut game = Game::generate(
            rng,
            size,
            ("Computer", Box::new(AiPlayer::new())),
            ("Player", Box::new(CliPlayer::new(input))),
        );
        game.combatant_mut(Side::First).board_mut().set_hidden(true);
        game
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side as usize]
    }

    fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        &mut self.combatants[side as usize]
    }

    /// Board owned by `side`.
    pub fn board(&self, side: Side) -> &Board {
        self.combatant(side).board()
    }

    /// Accepted shots fired by `side` so far.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side as usize]
    }

    /// Advance the game by one move.
    ///
    /// The defending fleet is checked before the active side fires. A miss
    /// hands the turn over; a hit or a kill lets the shooter go again.
    pub fn step(&mut self, rng: &mut SmallRng) -> Result<Turn, GameError> {
        let active = match self.state {
            GameState::Finished { winner } => return Ok(Turn::Finished { winner }),
            GameState::Playing { active, .. } => active,
        };
        if self.board(active.other()).all_destroyed() {
            log::info!("{} wins", self.combatant(active).name());
            self.state = GameState::Finished { winner: active };
            return Ok(Turn::Finished { winner: active });
        }

        let [first, second] = &mut self.combatants;
        let (shooter, defender) = match active {
            Side::First => (first, second),
            Side::Second => (second, first),
        };
        let shot = shooter.take_turn(rng, defender.board_mut())?;
        log::info!("{} fires at {} -> {:?}", shooter.name(), shot.target, shot.outcome);
        self.shots[active as usize] += 1;

        if !shot.outcome.keeps_turn() {
            self.state = GameState::Playing {
                active: active.other(),
                inactive: active,
            };
        }
        Ok(Turn::Fired {
            shooter: active,
            shot,
        })
    }

    /// Play until one fleet is gone and return the winner.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<Side, GameError> {
        loop {
            if let Turn::Finished { winner } = self.step(rng)? {
                return Ok(winner);
            }
        }
    }
}
