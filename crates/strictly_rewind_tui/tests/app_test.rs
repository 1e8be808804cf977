//! Tests for key handling in the terminal client.

use crossterm::event::KeyCode;
use strictly_rewind::{GameStatus, Player, Square};
use strictly_rewind_tui::{App, TuiConfig};

fn app() -> App {
    App::new(&TuiConfig::default()).unwrap()
}

fn press(app: &mut App, keys: &[KeyCode]) {
    for key in keys {
        app.handle_key(*key);
    }
}

#[test]
fn test_digit_keys_play_cells() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('1')]);

    let board = app.state().current_board();
    assert_eq!(board.get(4), Some(Square::Occupied(Player::X)));
    assert_eq!(board.get(0), Some(Square::Occupied(Player::O)));
    assert_eq!(app.cursor(), 0);
    assert_eq!(app.message(), Some("O played cell 1"));
}

#[test]
fn test_cursor_and_enter() {
    let mut app = app();
    press(&mut app, &[KeyCode::Right, KeyCode::Down, KeyCode::Enter]);
    assert_eq!(app.cursor(), 4);
    assert_eq!(
        app.state().current_board().get(4),
        Some(Square::Occupied(Player::X))
    );
}

#[test]
fn test_occupied_cell_shows_message_and_keeps_state() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('5')]);
    assert_eq!(app.message(), Some("X played cell 5"));
    let before = app.state().clone();

    press(&mut app, &[KeyCode::Char('5')]);
    assert_eq!(app.state(), &before);
    assert_eq!(app.message(), Some("Cell 5 is already occupied"));
}

#[test]
fn test_win_then_further_clicks_rejected() {
    let mut app = app();
    for c in ['1', '2', '4', '5', '7'] {
        app.handle_key(KeyCode::Char(c));
    }
    assert!(matches!(app.state().status(), GameStatus::Won(_)));

    app.handle_key(KeyCode::Char('9'));
    assert_eq!(app.state().history().len(), 6);
    assert_eq!(app.message(), Some("Game is already over"));
}

#[test]
fn test_select_and_jump() {
    let mut app = app();
    press(
        &mut app,
        &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('3')],
    );
    // Selection follows the visible step: last row in ascending order.
    assert_eq!(app.selected(), 3);

    press(&mut app, &[KeyCode::Char('k'), KeyCode::Char('k'), KeyCode::Char('g')]);
    assert_eq!(app.state().current_step(), 1);
    assert_eq!(app.state().next_player(), Player::O);
    assert_eq!(app.state().history().len(), 4);

    // Playing from the past drops the old future.
    press(&mut app, &[KeyCode::Char('9')]);
    assert_eq!(app.state().history().len(), 3);
    assert_eq!(app.state().current_board().get(2), Some(Square::Empty));
}

#[test]
fn test_sort_toggle_reverses_list_and_keeps_selection_on_current() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2')]);
    press(&mut app, &[KeyCode::Char('s')]);

    assert!(!app.state().is_move_order_ascending());
    let steps: Vec<usize> = app.moves().iter().map(|e| e.step).collect();
    assert_eq!(steps, vec![2, 1, 0]);
    assert_eq!(app.selected(), 0);
}

#[test]
fn test_restart_and_quit() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('r')]);
    assert_eq!(app.state().history().len(), 1);
    assert_eq!(app.message(), Some("Game restarted"));
    assert!(!app.should_quit());

    press(&mut app, &[KeyCode::Char('q')]);
    assert!(app.should_quit());
}

#[test]
fn test_digit_keys_reach_first_nine_cells_on_larger_boards() {
    let config: TuiConfig = toml::from_str("board_side = 4").unwrap();
    let mut app = App::new(&config).unwrap();
    press(&mut app, &[KeyCode::Char('9')]);
    assert_eq!(
        app.state().current_board().get(8),
        Some(Square::Occupied(Player::X))
    );

    // Cells past nine are reached with the cursor.
    press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
    assert_eq!(app.cursor(), 12);
    assert_eq!(
        app.state().current_board().get(12),
        Some(Square::Occupied(Player::O))
    );
}
