//! Presentation-facing projections of a [`GameState`].
//!
//! Everything here is a pure function of the state. Move-list ordering in
//! particular lives only here: toggling the order never reorders history.

use crate::state::{GameState, GameStatus};
use derive_new::new;
use serde::Serialize;

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct MoveListEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// Button label, e.g. `"Go to move #3"`.
    pub label: String,
    /// True if this step is the visible board.
    pub is_current: bool,
}

/// Label for the move-list entry at `step`.
pub fn move_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// The move list in the order the state asks for.
pub fn move_list(state: &GameState) -> Vec<MoveListEntry> {
    let mut entries: Vec<MoveListEntry> = (0..state.history().len())
        .map(|step| MoveListEntry::new(step, move_label(step), step == state.current_step()))
        .collect();
    if !state.is_move_order_ascending() {
        entries.reverse();
    }
    entries
}

/// One-line status: winner, draw, or whose turn it is.
pub fn status_line(state: &GameState) -> String {
    match state.status() {
        GameStatus::Won(win) => format!("Winner: {}", win.player()),
        GameStatus::Draw => "Draw".to_string(),
        GameStatus::InProgress => format!("Current player: {}", state.next_player()),
    }
}

/// Cells to highlight: the winning line, or nothing.
pub fn highlighted_cells(state: &GameState) -> Vec<usize> {
    state
        .winner()
        .map(|win| win.line().to_vec())
        .unwrap_or_default()
}

/// Caption for the sort toggle, naming the current order.
pub fn order_toggle_label(state: &GameState) -> &'static str {
    if state.is_move_order_ascending() {
        "Ascending"
    } else {
        "Descending"
    }
}
