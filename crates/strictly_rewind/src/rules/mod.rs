//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules know nothing about
//! history or turn order, so they can be evaluated on any step of a game.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinResult, calculate_winner, win_lines};
