#![cfg(feature = "std")]

//! Console front end: stdin input source and board printing.

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::common::{GameError, ShotOutcome};
use crate::game::{Game, Side};
use crate::player::Shot;
use crate::player_cli::InputSource;

/// Reads moves from standard input, one line per attempt.
pub struct ConsoleInput;

impl InputSource for ConsoleInput {
    fn next_line(&mut self) -> Option<String> {
        print!("Enter coordinates: ");
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }

    fn report(&mut self, err: &GameError) {
        println!("{}", err);
    }
}

/// Print both boards, the second side's (the human's) first.
pub fn print_boards(game: &Game) {
    for side in [Side::Second, Side::First] {
        let combatant = game.combatant(side);
        println!("---------- {} ----------", combatant.name());
        println!("{}", combatant.board());
    }
}

/// Print the line announcing a shot.
pub fn print_shot(shot: &Shot) {
    let verdict = match shot.outcome {
        ShotOutcome::Hit => "Hit",
        ShotOutcome::Destroyed => "Ship destroyed",
        ShotOutcome::Miss => "Miss",
    };
    println!("{} - {}", shot.target, verdict);
}
