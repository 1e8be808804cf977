//! Alternating turn invariant: marks follow X, O, X, O, ...

use super::Invariant;
use crate::state::GameState;
use crate::types::{Player, Square};

/// Invariant: after `i` moves the board holds `ceil(i/2)` X marks and
/// `floor(i/2)` O marks.
///
/// Combined with the single-cell delta this pins every move to the player
/// the step parity assigns.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .boards()
            .iter()
            .enumerate()
            .all(|(step, board)| {
                let count = |player| {
                    board
                        .squares()
                        .iter()
                        .filter(|s| **s == Square::Occupied(player))
                        .count()
                };
                count(Player::X) == step.div_ceil(2) && count(Player::O) == step / 2
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
