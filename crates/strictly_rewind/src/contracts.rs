//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::action::MoveError;
use crate::invariants::{InvariantSet, RewindInvariants};
use crate::state::GameState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the visible board has neither a winner nor a full grid.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] on a finished board.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.status().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell exists on the board.
pub struct CellInBounds;

impl CellInBounds {
    /// Fails with [`MoveError::CellOutOfBounds`] for indices past the board.
    #[instrument(skip(state))]
    pub fn check(cell: usize, state: &GameState) -> Result<(), MoveError> {
        let cells = state.current_board().len();
        if cell >= cells {
            Err(MoveError::CellOutOfBounds { cell, cells })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] if someone already played there.
    #[instrument(skip(state))]
    pub fn check(cell: usize, state: &GameState) -> Result<(), MoveError> {
        if state.current_board().is_vacant(cell) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(cell))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions, checked in order:
/// - Game is not over
/// - Cell is on the board
/// - Cell is empty
///
/// Postconditions:
/// - Every history step fills exactly one empty cell
/// - Marks alternate X, O, X, ...
/// - The current step points into a well-formed history
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(state: &GameState, cell: &usize) -> Result<(), MoveError> {
        GameNotOver::check(state)?;
        CellInBounds::check(*cell, state)?;
        CellIsEmpty::check(*cell, state)?;
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.current_step() != before.current_step() + 1 {
            warn!(
                before = before.current_step(),
                after = after.current_step(),
                "Move did not advance exactly one step"
            );
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: step {} followed by step {}",
                before.current_step(),
                after.current_step()
            )));
        }

        RewindInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, Player};

    #[test]
    fn test_precondition_empty_cell() {
        let state = GameState::new();
        assert!(MoveContract::pre(&state, &4).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let state = GameState::new().apply_move(4);
        assert_eq!(
            MoveContract::pre(&state, &4),
            Err(MoveError::CellOccupied(4))
        );
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let state = GameState::new();
        assert_eq!(
            MoveContract::pre(&state, &9),
            Err(MoveError::CellOutOfBounds { cell: 9, cells: 9 })
        );
    }

    #[test]
    fn test_game_over_checked_before_occupancy() {
        let state = [0, 1, 3, 4, 6]
            .iter()
            .fold(GameState::new(), |s, &cell| s.apply_move(cell));
        // Cell 0 is occupied too, but the finished game is reported first.
        assert_eq!(MoveContract::pre(&state, &0), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let after = before.try_apply_move(4).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_two_cells_in_one_step() {
        let before = GameState::new();
        let corrupted = Board::new()
            .with_mark(0, Player::X)
            .and_then(|b| b.with_mark(1, Player::X))
            .unwrap();
        let after = GameState::from_parts(vec![Board::new(), corrupted], 1);
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_skipped_step() {
        let before = GameState::new();
        let after = GameState::new();
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
