//! Win detection logic.

use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A completed line and the player who owns it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    player: Player,
    line: Vec<usize>,
}

impl WinResult {
    /// Creates a win result.
    pub fn new(player: Player, line: Vec<usize>) -> Self {
        Self { player, line }
    }

    /// The winning player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Cell indices of the winning line, in line order.
    pub fn line(&self) -> &[usize] {
        &self.line
    }
}

/// All win lines for a board of the given side, in priority order.
///
/// Rows top to bottom, columns left to right, then the main diagonal and
/// the anti-diagonal. For side 3 these are the eight classic lines.
pub fn win_lines(side: usize) -> Vec<Vec<usize>> {
    let rows = (0..side).map(|row| (0..side).map(|col| row * side + col).collect::<Vec<_>>());
    let cols = (0..side).map(|col| (0..side).map(|row| row * side + col).collect::<Vec<_>>());
    let main_diagonal: Vec<usize> = (0..side).map(|i| i * side + i).collect();
    let anti_diagonal: Vec<usize> = (0..side).map(|i| i * side + (side - 1 - i)).collect();

    rows.chain(cols)
        .chain([main_diagonal, anti_diagonal])
        .collect()
}

/// Checks if there is a winner on the board.
///
/// Returns the first uniformly occupied line in priority order, so a board
/// with several complete lines still yields a single deterministic result.
#[instrument(skip(board), fields(side = board.side()))]
pub fn calculate_winner(board: &Board) -> Option<WinResult> {
    win_lines(board.side()).into_iter().find_map(|line| {
        let first = board.get(*line.first()?)?;
        let Square::Occupied(player) = first else {
            return None;
        };
        line.iter()
            .all(|&cell| board.get(cell) == Some(first))
            .then(|| WinResult::new(player, line))
    })
}
