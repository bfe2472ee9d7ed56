//! Interactive player: targets come from an external line source.

use alloc::collections::VecDeque;
use alloc::string::String;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::GameError;
use crate::coordinate::Coordinate;
use crate::player::Strategy;

/// Where an interactive player's raw input comes from.
pub trait InputSource {
    /// Next line typed by the player, or `None` once input is exhausted.
    fn next_line(&mut self) -> Option<String>;

    /// Tell the player why the last line was refused.
    fn report(&mut self, _err: &GameError) {}
}

impl InputSource for VecDeque<String> {
    fn next_line(&mut self) -> Option<String> {
        self.pop_front()
    }
}

/// Player whose moves are typed as two 1-based numbers.
pub struct CliPlayer<S> {
    source: S,
}

impl<S: InputSource> CliPlayer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: InputSource> Strategy for CliPlayer<S> {
    fn select_target(&mut self, _rng: &mut SmallRng, opponent: &Board) -> Result<Coordinate, GameError> {
        let line = self.source.next_line().ok_or(GameError::InputClosed)?;
        parse_coordinates(&line, opponent.size())
    }

    fn handle_rejected(&mut self, err: &GameError) {
        self.source.report(err);
    }
}

/// Parse "x y" or "xy" into a zero-based coordinate on a `size`×`size` board.
///
/// A single token is split after its first character, so "34" reads as x=3,
/// y=4. Both numbers must be plain digits within `1..=size`.
pub fn parse_coordinates(input: &str, size: usize) -> Result<Coordinate, GameError> {
    let mut tokens = input.split_whitespace();
    let (x, y) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(x), Some(y), None) => (x, y),
        (Some(joined), None, None) => {
            let split = joined
                .char_indices()
                .nth(1)
                .map(|(i, _)| i)
                .ok_or(GameError::InvalidCoordinates)?;
            joined.split_at(split)
        }
        _ => return Err(GameError::InvalidCoordinates),
    };
    Ok(Coordinate::new(parse_axis(x, size)? - 1, parse_axis(y, size)? - 1))
}

fn parse_axis(token: &str, size: usize) -> Result<usize, GameError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GameError::InvalidCoordinates);
    }
    match token.parse::<usize>() {
        Ok(n) if (1..=size).contains(&n) => Ok(n),
        _ => Err(GameError::InvalidCoordinates),
    }
}
