//! Ship geometry and hit-point tracking.

use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells extend along the x axis.
    Horizontal,
    /// Cells extend along the y axis.
    Vertical,
}

/// A ship anchored at its bow, with remaining hit points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    size: usize,
    bow: Coordinate,
    orientation: Orientation,
    hit_points: usize,
}

impl Ship {
    /// Build a ship of `size` segments starting at `bow`.
    pub fn new(size: usize, bow: Coordinate, orientation: Orientation) -> Self {
        Ship {
            size,
            bow,
            orientation,
            hit_points: size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    pub fn is_destroyed(&self) -> bool {
        self.hit_points == 0
    }

    /// Cells covered by the ship, bow first.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (x, y) = (self.bow.x(), self.bow.y());
        (0..self.size).map(move |i| match self.orientation {
            Orientation::Horizontal => Coordinate::new(x + i, y),
            Orientation::Vertical => Coordinate::new(x, y + i),
        })
    }

    /// Whether `coord` is one of the ship's cells.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Take one hit. Returns `true` when this hit destroys the ship.
    pub fn register_hit(&mut self) -> bool {
        self.hit_points = self.hit_points.saturating_sub(1);
        self.hit_points == 0
    }
}
