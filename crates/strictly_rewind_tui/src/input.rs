//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the board cursor with the arrow keys.
///
/// The cursor is a row-major cell index on a `side`×`side` board and stops
/// at the edges. Any other key leaves it where it is.
pub fn move_cursor(cursor: usize, key: KeyCode, side: usize) -> usize {
    let row = cursor / side;
    let col = cursor % side;

    match key {
        KeyCode::Right if col + 1 < side => cursor + 1,
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Down if row + 1 < side => cursor + side,
        KeyCode::Up if row > 0 => cursor - side,
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_board() {
        assert_eq!(move_cursor(4, KeyCode::Right, 3), 5);
        assert_eq!(move_cursor(4, KeyCode::Left, 3), 3);
        assert_eq!(move_cursor(4, KeyCode::Up, 3), 1);
        assert_eq!(move_cursor(4, KeyCode::Down, 3), 7);
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(2, KeyCode::Right, 3), 2);
        assert_eq!(move_cursor(3, KeyCode::Left, 3), 3);
        assert_eq!(move_cursor(1, KeyCode::Up, 3), 1);
        assert_eq!(move_cursor(7, KeyCode::Down, 3), 7);
    }

    #[test]
    fn test_larger_board() {
        assert_eq!(move_cursor(3, KeyCode::Down, 4), 7);
        assert_eq!(move_cursor(3, KeyCode::Right, 4), 3);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(4, KeyCode::Char('x'), 3), 4);
    }
}
