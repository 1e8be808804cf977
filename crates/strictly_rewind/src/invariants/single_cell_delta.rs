//! Single-cell delta invariant: each step fills exactly one empty cell.

use super::Invariant;
use crate::state::GameState;
use crate::types::Board;

/// Invariant: `History[i]` differs from `History[i-1]` in exactly one cell,
/// and that cell was empty in `History[i-1]`.
pub struct SingleCellDeltaInvariant;

impl SingleCellDeltaInvariant {
    fn is_single_fill(before: &Board, after: &Board) -> bool {
        if before.side() != after.side() {
            return false;
        }
        let mut changed = before
            .squares()
            .iter()
            .zip(after.squares())
            .filter(|(b, a)| b != a);
        match (changed.next(), changed.next()) {
            (Some((b, a)), None) => b.is_empty() && !a.is_empty(),
            _ => false,
        }
    }
}

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .boards()
            .windows(2)
            .all(|pair| Self::is_single_fill(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each history step fills exactly one previously empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_new_game_holds() {
        assert!(SingleCellDeltaInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let state = [4, 0, 8, 2, 6]
            .iter()
            .fold(GameState::new(), |s, &cell| s.apply_move(cell));
        assert!(SingleCellDeltaInvariant::holds(&state));
    }

    #[test]
    fn test_unchanged_step_violates() {
        let state = GameState::from_parts(vec![Board::new(), Board::new()], 1);
        assert!(!SingleCellDeltaInvariant::holds(&state));
    }

    #[test]
    fn test_overwrite_violates() {
        let first = Board::new().with_mark(4, Player::X).unwrap();
        let overwritten = Board::new().with_mark(4, Player::O).unwrap();
        let state = GameState::from_parts(vec![Board::new(), first, overwritten], 2);
        assert!(!SingleCellDeltaInvariant::holds(&state));
    }

    #[test]
    fn test_resized_board_violates() {
        let bigger = Board::with_side(4).unwrap().with_mark(0, Player::X).unwrap();
        let state = GameState::from_parts(vec![Board::new(), bigger], 1);
        assert!(!SingleCellDeltaInvariant::holds(&state));
    }
}
