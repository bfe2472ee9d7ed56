//! Random fleet placement with a shared attempt budget.

use rand::Rng;

use crate::board::Board;
use crate::common::GameError;
use crate::config::MAX_PLACEMENT_ATTEMPTS;
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// Try to place every ship in `fleet` on a fresh `size`×`size` board.
///
/// Bows are drawn from `0..=size` on both axes so some candidates overhang the
/// edge; `Board::add_ship` rejects those like any other bad spot. All ships
/// share one budget of [`MAX_PLACEMENT_ATTEMPTS`]; running out discards the
/// board with `BoardGenerationAborted`.
pub fn place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    fleet: &[usize],
) -> Result<Board, GameError> {
    let mut board = Board::new(size);
    let mut attempts = 0;
    for &len in fleet {
        loop {
            if attempts == MAX_PLACEMENT_ATTEMPTS {
                log::debug!("fleet placement aborted after {} attempts", attempts);
                return Err(GameError::BoardGenerationAborted);
            }
            attempts += 1;
            let bow = Coordinate::new(rng.random_range(0..=size), rng.random_range(0..=size));
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            match board.add_ship(Ship::new(len, bow, orientation)) {
                Ok(()) => break,
                Err(GameError::InvalidPlacement) => continue,
                Err(e) => return Err(e),
            }
        }
    }
    board.finish_placement();
    Ok(board)
}

/// Build a fully populated board, restarting from scratch whenever a pass
/// runs out of attempts.
///
/// Never returns if `fleet` cannot fit on a `size`×`size` board with one-cell
/// spacing.
pub fn generate_board<R: Rng + ?Sized>(rng: &mut R, size: usize, fleet: &[usize]) -> Board {
    let mut passes = 1usize;
    loop {
        match place_fleet(rng, size, fleet) {
            Ok(board) => {
                log::debug!("board generated after {} pass(es)", passes);
                return board;
            }
            Err(_) => passes += 1,
        }
    }
}
