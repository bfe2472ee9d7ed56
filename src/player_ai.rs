use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::{Board, Cell};
use crate::common::GameError;
use crate::coordinate::Coordinate;
use crate::player::Strategy;

/// Automated player that fires at a uniformly random unfired cell.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, opponent: &Board) -> Result<Coordinate, GameError> {
        let candidates: Vec<Coordinate> = opponent
            .coordinates()
            .filter(|&c| matches!(opponent.cell(c), Some(Cell::Empty | Cell::Ship)))
            .collect();
        if candidates.is_empty() {
            return Err(GameError::NoTargetsLeft);
        }
        Ok(candidates[rng.random_range(0..candidates.len())])
    }
}
