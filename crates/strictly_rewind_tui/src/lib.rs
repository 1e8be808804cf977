//! Terminal client for Strictly Rewind.
//!
//! The client owns the single mutable [`strictly_rewind::GameState`] and
//! turns key presses into engine actions. Rendering goes through `ratatui`;
//! logs go to a file so they never tear the screen.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, MAX_BOARD_SIDE, TuiConfig};
pub use input::move_cursor;
pub use terminal::{init_tracing, run};
pub use ui::draw;
