//! Common types for the game: errors and shot outcomes.

/// Result of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot struck a ship that still floats.
    Hit,
    /// Shot struck the last intact segment of a ship.
    Destroyed,
    /// Shot landed in open water.
    Miss,
}

impl ShotOutcome {
    /// Whether the shooter fires again after this outcome.
    pub fn keeps_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Destroyed)
    }
}

/// Errors returned by board, placement and move operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Ship would leave the board or touch another ship.
    InvalidPlacement,
    /// Shot coordinate lies outside the board.
    OutOfBounds,
    /// Shot targets a cell that was already resolved.
    CellAlreadyShot,
    /// Interactive input was malformed or out of range.
    InvalidCoordinates,
    /// Placement attempt budget ran out while building a board.
    BoardGenerationAborted,
    /// No unfired cell is left on the opponent board.
    NoTargetsLeft,
    /// Interactive input source has no more lines.
    InputClosed,
}

impl GameError {
    /// Errors the move loop answers by asking for another target.
    pub fn is_retryable_move(&self) -> bool {
        matches!(
            self,
            GameError::OutOfBounds | GameError::CellAlreadyShot | GameError::InvalidCoordinates
        )
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidPlacement => write!(f, "Ship cannot be placed there"),
            GameError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            GameError::CellAlreadyShot => write!(f, "Cell was already fired upon"),
            GameError::InvalidCoordinates => write!(f, "Invalid input, expected two numbers within the board"),
            GameError::BoardGenerationAborted => write!(f, "Ran out of attempts while placing the fleet"),
            GameError::NoTargetsLeft => write!(f, "No cells left to fire upon"),
            GameError::InputClosed => write!(f, "Input closed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
