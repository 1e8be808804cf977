//! Strictly Rewind - tic-tac-toe with move history and time travel
//!
//! The engine keeps every board snapshot a game has passed through, so a
//! presentation layer can jump back to any earlier step and branch off from
//! there.
//!
//! # Architecture
//!
//! - **Types**: `Player`, `Square` and copy-on-write `Board` snapshots
//! - **Rules**: pure win and draw detection over a board
//! - **State**: `GameState` transitions (move, jump, toggle order)
//! - **Contracts**: move preconditions plus invariant postconditions
//! - **View**: presentation-facing projections (status, move list)
//!
//! # Example
//!
//! ```
//! use strictly_rewind::{GameState, Player};
//!
//! let state = GameState::new().apply_move(4).apply_move(0);
//! assert_eq!(state.next_player(), Player::X);
//!
//! let rewound = state.jump_to_step(1).expect("step 1 exists");
//! assert_eq!(rewound.next_player(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod invariants;
mod rules;
mod state;
mod types;
pub mod view;

pub use action::{Action, MoveError};
pub use contracts::{CellInBounds, CellIsEmpty, Contract, GameNotOver, MoveContract};
pub use invariants::{
    AlternatingTurnInvariant, Invariant, InvariantSet, InvariantViolation, RewindInvariants,
    SingleCellDeltaInvariant, StepInRangeInvariant,
};
pub use rules::{WinResult, calculate_winner, is_draw, is_full, win_lines};
pub use state::{GameState, GameStatus, History};
pub use types::{Board, BoardError, CLASSIC_SIDE, Player, Square};
