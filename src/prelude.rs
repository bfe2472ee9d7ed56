//! Commonly used types and utilities for ease of import.

pub use crate::{
    generate_board, AiPlayer, Board, CliPlayer, Combatant, Coordinate, Game, GameError, GameState,
    Orientation, Ship, ShotOutcome, Side, Strategy, Turn, BOARD_SIZE, FLEET,
};

#[cfg(feature = "std")]
pub use crate::ui::{print_boards, print_shot, ConsoleInput};
