//! Game state and its transitions.
//!
//! `GameState` is an immutable value. Every transition takes `&self` and
//! returns a new state, so the presentation layer holds the only mutable
//! reference and simply swaps in whatever the engine hands back.

use crate::action::{Action, MoveError};
use crate::contracts::{Contract, MoveContract};
use crate::rules::{WinResult, calculate_winner, is_full};
use crate::types::{Board, BoardError, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Ordered board snapshots; index `i` is the board after `i` moves.
///
/// Never empty: index 0 is always the starting board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    boards: Vec<Board>,
}

impl History {
    /// Starts a history at the given board.
    pub fn new(start: Board) -> Self {
        Self {
            boards: vec![start],
        }
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// True if there are no snapshots. Histories built by [`GameState`]
    /// always hold the starting board.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Board after `step` moves.
    pub fn get(&self, step: usize) -> Option<&Board> {
        self.boards.get(step)
    }

    /// All snapshots in order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Index of the newest snapshot.
    pub fn last_step(&self) -> usize {
        self.boards.len().saturating_sub(1)
    }

    /// Copy keeping only the first `len` snapshots, then `board` appended.
    fn branched(&self, len: usize, board: Board) -> Self {
        let mut boards: Vec<Board> = self.boards.iter().take(len).cloned().collect();
        boards.push(board);
        Self { boards }
    }
}

/// Status of the board at the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A player completed a line.
    Won(WinResult),
    /// The board is full and nobody won.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete game state: history, visible step and move-list order.
///
/// The player to move is not stored; it is derived from the step parity.
/// States are only built through transitions, never deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: History,
    current_step: usize,
    move_order_ascending: bool,
}

impl GameState {
    /// Creates a new classic 3×3 game.
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Creates a new game on an empty board of the given side length.
    pub fn with_side(side: usize) -> Result<Self, BoardError> {
        Board::with_side(side).map(Self::from_board)
    }

    fn from_board(board: Board) -> Self {
        Self {
            history: History::new(board),
            current_step: 0,
            move_order_ascending: true,
        }
    }

    /// Builds a state from raw parts, bypassing the move contract.
    #[cfg(test)]
    pub(crate) fn from_parts(boards: Vec<Board>, current_step: usize) -> Self {
        Self {
            history: History { boards },
            current_step,
            move_order_ascending: true,
        }
    }

    /// Returns the full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the visible board in the history.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Number of moves on the visible board.
    pub fn moves_played(&self) -> usize {
        self.current_step
    }

    /// True if the move list is shown oldest first.
    pub fn is_move_order_ascending(&self) -> bool {
        self.move_order_ascending
    }

    /// The visible board.
    pub fn current_board(&self) -> &Board {
        // current_step is kept within history bounds by every transition
        &self.history.boards[self.current_step]
    }

    /// The player to move on the visible board.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Winner of the visible board, if any.
    pub fn winner(&self) -> Option<WinResult> {
        calculate_winner(self.current_board())
    }

    /// Status of the visible board.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(win) = calculate_winner(board) {
            GameStatus::Won(win)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Plays `cell` for the player to move.
    ///
    /// Any history beyond the current step is discarded before the new board
    /// is appended. The rejection reason is returned as a [`MoveError`].
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player()))]
    pub fn try_apply_move(&self, cell: usize) -> Result<GameState, MoveError> {
        MoveContract::pre(self, &cell)?;

        let player = self.next_player();
        let board = self.current_board();
        let marked = board
            .with_mark(cell, player)
            .ok_or(MoveError::CellOutOfBounds {
                cell,
                cells: board.len(),
            })?;

        let history = self.history.branched(self.current_step + 1, marked);
        let next = GameState {
            current_step: history.last_step(),
            history,
            move_order_ascending: self.move_order_ascending,
        };

        #[cfg(any(debug_assertions, feature = "strict-invariants"))]
        MoveContract::post(self, &next)?;

        info!(cell, step = next.current_step, "Move applied");
        Ok(next)
    }

    /// Plays `cell`, or returns the state unchanged if the move is rejected.
    ///
    /// Clicking an occupied cell or any cell after the game is over is a
    /// silent no-op.
    pub fn apply_move(&self, cell: usize) -> GameState {
        match self.try_apply_move(cell) {
            Ok(next) => next,
            Err(e) => {
                debug!(cell, error = %e, "Move ignored");
                self.clone()
            }
        }
    }

    /// Makes `step` the visible board without touching the history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to_step(&self, step: usize) -> Result<GameState, MoveError> {
        if step >= self.history.len() {
            return Err(MoveError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        debug!(from = self.current_step, to = step, "Jumping to step");
        Ok(GameState {
            current_step: step,
            ..self.clone()
        })
    }

    /// Flips the move-list order. Game semantics are unaffected.
    pub fn toggle_move_order(&self) -> GameState {
        GameState {
            move_order_ascending: !self.move_order_ascending,
            ..self.clone()
        }
    }

    /// Routes a presentation event to its transition.
    #[instrument(skip(self))]
    pub fn dispatch(&self, action: Action) -> Result<GameState, MoveError> {
        match action {
            Action::Click(cell) => self.try_apply_move(cell),
            Action::JumpTo(step) => self.jump_to_step(step),
            Action::ToggleOrder => Ok(self.toggle_move_order()),
        }
    }

    /// Fresh game on the same board size, keeping the move-list order.
    pub fn restarted(&self) -> GameState {
        GameState {
            move_order_ascending: self.move_order_ascending,
            ..Self::from_board(self.current_board().cleared())
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
