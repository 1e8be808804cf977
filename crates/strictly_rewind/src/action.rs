//! First-class action types.
//!
//! Every user interaction a presentation layer can forward to the engine is
//! an [`Action`]. Actions are plain data, so they can be logged, queued or
//! replayed independently of the state they are applied to.

use serde::{Deserialize, Serialize};

/// An event from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// A cell was clicked.
    Click(usize),
    /// Jump to a step in the move history.
    JumpTo(usize),
    /// Flip the move list between ascending and descending order.
    ToggleOrder,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Click(cell) => write!(f, "click cell {}", cell),
            Action::JumpTo(0) => write!(f, "jump to game start"),
            Action::JumpTo(step) => write!(f, "jump to move #{}", step),
            Action::ToggleOrder => write!(f, "toggle move order"),
        }
    }
}

/// Why an action was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The cell index does not exist on this board.
    #[display("Cell {} is out of bounds (board has {} cells)", cell, cells)]
    CellOutOfBounds {
        /// Requested cell.
        cell: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// The visible board already has a winner or is a draw.
    #[display("Game is already over")]
    GameOver,

    /// The history has no such step.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length.
        len: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
