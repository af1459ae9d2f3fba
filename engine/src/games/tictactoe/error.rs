use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    OutOfRange,
    Occupied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Placement rejected; the board is unchanged and the turn must not advance.
    IllegalMove {
        location: usize,
        reason: IllegalMoveReason,
    },
    /// The computer was asked to move on a full board.
    NoMovesAvailable,
    /// A cell was activated after the game had already ended.
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove {
                location,
                reason: IllegalMoveReason::OutOfRange,
            } => write!(f, "Cell {} is outside the board", location),
            GameError::IllegalMove {
                location,
                reason: IllegalMoveReason::Occupied,
            } => write!(f, "Cell {} is already marked", location),
            GameError::NoMovesAvailable => write!(f, "No empty cells left to play"),
            GameError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for GameError {}
