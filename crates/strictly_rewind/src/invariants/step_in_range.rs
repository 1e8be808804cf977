//! Step range invariant: the visible step points into a well-formed history.

use super::Invariant;
use crate::state::GameState;

/// Invariant: the history starts at an empty board and `current_step`
/// indexes one of its snapshots.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let starts_empty = history
            .get(0)
            .is_some_and(|board| board.occupied_count() == 0);
        starts_empty && state.current_step() < history.len()
    }

    fn description() -> &'static str {
        "Current step lies within a history that starts from an empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, Player};

    #[test]
    fn test_new_game_holds() {
        assert!(StepInRangeInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_rewound_game_holds() {
        let state = GameState::new()
            .apply_move(0)
            .apply_move(1)
            .jump_to_step(0)
            .unwrap();
        assert!(StepInRangeInvariant::holds(&state));
    }

    #[test]
    fn test_step_past_end_violates() {
        let state = GameState::from_parts(vec![Board::new()], 1);
        assert!(!StepInRangeInvariant::holds(&state));
    }

    #[test]
    fn test_empty_history_violates() {
        let state = GameState::from_parts(Vec::new(), 0);
        assert!(!StepInRangeInvariant::holds(&state));
    }

    #[test]
    fn test_occupied_start_violates() {
        let start = Board::new().with_mark(4, Player::X).unwrap();
        let state = GameState::from_parts(vec![start], 0);
        assert!(!StepInRangeInvariant::holds(&state));
    }
}
