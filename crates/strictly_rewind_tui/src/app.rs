//! Application state and key handling.

use crate::config::TuiConfig;
use crate::input::move_cursor;
use crossterm::event::KeyCode;
use strictly_rewind::view::{MoveListEntry, move_list};
use strictly_rewind::{Action, BoardError, GameState, MoveError};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Holds the only mutable reference to the game; every engine call returns a
/// new `GameState` that replaces the old one.
pub struct App {
    state: GameState,
    cursor: usize,
    selected: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates an application with a fresh game sized by the config.
    pub fn new(config: &TuiConfig) -> Result<Self, BoardError> {
        let mut state = GameState::with_side(*config.board_side())?;
        if !*config.move_order_ascending() {
            state = state.toggle_move_order();
        }
        let mut app = Self {
            state,
            cursor: 0,
            selected: 0,
            message: None,
            should_quit: false,
        };
        app.sync_selection();
        Ok(app)
    }

    /// The current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Board cell under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the highlighted row in the displayed move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The move list as currently displayed.
    pub fn moves(&self) -> Vec<MoveListEntry> {
        move_list(&self.state)
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let side = self.state.current_board().side();

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key, side);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.apply(Action::Click(self.cursor)),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let digit = c.to_digit(10).unwrap_or(0) as usize;
                if digit >= 1 && digit <= self.state.current_board().len() {
                    self.cursor = digit - 1;
                    self.apply(Action::Click(self.cursor));
                }
            }
            KeyCode::Tab | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::BackTab | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Char('g') => {
                if let Some(entry) = self.moves().get(self.selected) {
                    self.apply(Action::JumpTo(entry.step));
                }
            }
            KeyCode::Char('s') => self.apply(Action::ToggleOrder),
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    /// Sends an action to the engine and records the outcome.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        let player = self.state.next_player();
        match self.state.dispatch(action) {
            Ok(next) => {
                self.state = next;
                self.message = match action {
                    Action::Click(cell) => Some(format!("{} played cell {}", player, cell + 1)),
                    Action::JumpTo(_) | Action::ToggleOrder => None,
                };
                self.sync_selection();
            }
            Err(e) => {
                debug!(error = %e, "Action rejected");
                self.message = Some(rejection_message(&e));
            }
        }
    }

    /// Starts over on the same board size.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.state = self.state.restarted();
        self.cursor = 0;
        self.message = Some("Game restarted".to_string());
        self.sync_selection();
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.state.history().len();
        self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
    }

    /// Points the move-list selection at the visible step.
    fn sync_selection(&mut self) {
        self.selected = self
            .moves()
            .iter()
            .position(|entry| entry.is_current)
            .unwrap_or(0);
    }
}

/// Describes a rejection with cells numbered from 1, as the keys are.
fn rejection_message(error: &MoveError) -> String {
    match error {
        MoveError::CellOccupied(cell) => format!("Cell {} is already occupied", cell + 1),
        MoveError::CellOutOfBounds { cell, cells } => {
            format!("Cell {} is not on the board (1-{})", cell + 1, cells)
        }
        other => other.to_string(),
    }
}
