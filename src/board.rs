//! Board state: the cell grid and the surviving fleet.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{GameError, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;
use crate::ship::Ship;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Open water, never fired upon.
    Empty,
    /// Spacing buffer around a ship while the fleet is being placed.
    Reserved,
    /// Intact ship segment.
    Ship,
    /// Ship segment that was hit.
    Hit,
    /// Fired-upon water, or the sealed border of a destroyed ship.
    Miss,
}

impl Cell {
    /// Whether a shot at this cell would be accepted.
    pub fn is_unfired(self) -> bool {
        matches!(self, Cell::Empty | Cell::Reserved | Cell::Ship)
    }

    fn symbol(self, hidden: bool) -> char {
        match self {
            Cell::Empty | Cell::Reserved => '-',
            Cell::Ship if hidden => '-',
            Cell::Ship => '■',
            Cell::Hit => 'X',
            Cell::Miss => '•',
        }
    }
}

/// Square grid of cells plus the ships still afloat on it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    hidden: bool,
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
            ships: Vec::new(),
            hidden: false,
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships that have not been destroyed.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Returns `true` once every ship is destroyed.
    pub fn all_destroyed(&self) -> bool {
        self.ships.is_empty()
    }

    /// Whether ship cells are concealed when rendered.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn is_inside(&self, coord: Coordinate) -> bool {
        coord.x() < self.size && coord.y() < self.size
    }

    /// True iff `coord` is on the board and holds open water.
    pub fn is_empty(&self, coord: Coordinate) -> bool {
        self.cell(coord) == Some(Cell::Empty)
    }

    /// Cell state at `coord`, or `None` outside the board.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        if self.is_inside(coord) {
            Some(self.cells[self.index(coord)])
        } else {
            None
        }
    }

    /// Grid rows from top to bottom; row `y` holds cells `(0, y)..(size - 1, y)`.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Coordinates of every cell, row by row.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Coordinate::new(x, y)))
    }

    /// Place a ship. Every cell must be on the board and empty; on success the
    /// ship's surroundings are reserved so later ships keep a one-cell gap.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), GameError> {
        if ship.size() == 0 || !ship.cells().all(|c| self.is_empty(c)) {
            return Err(GameError::InvalidPlacement);
        }
        for c in ship.cells() {
            let idx = self.index(c);
            self.cells[idx] = Cell::Ship;
        }
        self.mark_contour(&ship, Cell::Reserved);
        self.ships.push(ship);
        Ok(())
    }

    /// Release every reserved cell back to open water. Ends the placement phase.
    pub fn finish_placement(&mut self) {
        for cell in self.cells.iter_mut() {
            if *cell == Cell::Reserved {
                *cell = Cell::Empty;
            }
        }
    }

    /// Fire at `coord` and report the outcome.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, GameError> {
        let cell = self.cell(coord).ok_or(GameError::OutOfBounds)?;
        if !cell.is_unfired() {
            return Err(GameError::CellAlreadyShot);
        }
        let idx = self.index(coord);
        let Some(pos) = self.ships.iter().position(|s| s.occupies(coord)) else {
            self.cells[idx] = Cell::Miss;
            return Ok(ShotOutcome::Miss);
        };

        self.cells[idx] = Cell::Hit;
        if !self.ships[pos].register_hit() {
            return Ok(ShotOutcome::Hit);
        }
        let wreck = self.ships.remove(pos);
        self.mark_contour(&wreck, Cell::Miss);
        Ok(ShotOutcome::Destroyed)
    }

    /// Mark the ring of in-bounds cells around `ship` with `mark`. Cells that
    /// already hold a ship segment or a shot result are left alone.
    fn mark_contour(&mut self, ship: &Ship, mark: Cell) {
        for c in ship.cells() {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let Some(n) = c.offset(dx, dy) else { continue };
                    if !self.is_inside(n) || ship.occupies(n) {
                        continue;
                    }
                    let idx = self.index(n);
                    if matches!(self.cells[idx], Cell::Empty | Cell::Reserved) {
                        self.cells[idx] = mark;
                    }
                }
            }
        }
    }

    fn index(&self, coord: Coordinate) -> usize {
        coord.y() * self.size + coord.x()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  |")?;
        for x in 0..self.size {
            write!(f, " {} |", x + 1)?;
        }
        for (y, row) in self.rows().enumerate() {
            write!(f, "\n{} |", y + 1)?;
            for cell in row {
                write!(f, " {} |", cell.symbol(self.hidden))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  hidden: {},\n  ships: {:?}\n}}",
            self.size, self.hidden, self.ships
        )?;
        let reveal = Board {
            hidden: false,
            ..self.clone()
        };
        write!(f, "{}", reveal)
    }
}
