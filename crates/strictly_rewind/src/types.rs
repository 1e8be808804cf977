//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the classic board.
pub const CLASSIC_SIDE: usize = 3;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Player whose turn it is after `step` moves have been played.
    ///
    /// X moves on even steps, O on odd ones.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// True if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// Error building a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The square count is zero or not a perfect square.
    #[display("{} squares cannot form a square board", _0)]
    NotSquare(usize),

    /// The side is zero, or its board would not fit in memory.
    #[display("Cannot build a board with side {}", _0)]
    InvalidSide(usize),
}

impl std::error::Error for BoardError {}

/// Immutable N×N board snapshot.
///
/// Squares are stored in row-major order. A move never mutates a board;
/// [`Board::with_mark`] returns a fresh copy instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    side: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty 3×3 board.
    pub fn new() -> Self {
        Self {
            side: CLASSIC_SIDE,
            squares: vec![Square::Empty; CLASSIC_SIDE * CLASSIC_SIDE],
        }
    }

    /// Creates an empty board with the given side length.
    ///
    /// Fails with [`BoardError::InvalidSide`] for a zero side, when `side²`
    /// overflows, or when the squares cannot be allocated.
    #[instrument]
    pub fn with_side(side: usize) -> Result<Self, BoardError> {
        let cells = side
            .checked_mul(side)
            .filter(|&cells| cells > 0)
            .ok_or(BoardError::InvalidSide(side))?;

        let mut squares = Vec::new();
        squares
            .try_reserve_exact(cells)
            .map_err(|_| BoardError::InvalidSide(side))?;
        squares.resize(cells, Square::Empty);
        Ok(Self { side, squares })
    }

    /// An empty board of the same size.
    pub fn cleared(&self) -> Self {
        Self {
            side: self.side,
            squares: vec![Square::Empty; self.squares.len()],
        }
    }

    /// Builds a board from squares in row-major order.
    ///
    /// The side length is derived from the square count, which must be a
    /// non-zero perfect square.
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_squares(squares: Vec<Square>) -> Result<Self, BoardError> {
        let len = squares.len();
        let side = integer_sqrt(len);
        if len == 0 || side * side != len {
            return Err(BoardError::NotSquare(len));
        }
        Ok(Self { side, squares })
    }

    /// Side length N.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of cells (N²).
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// True if the board has no cells, which no constructor produces.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Gets the square at the given cell index.
    pub fn get(&self, cell: usize) -> Option<Square> {
        self.squares.get(cell).copied()
    }

    /// Checks if a cell exists and is empty.
    pub fn is_vacant(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Indices of all empty cells, ascending.
    pub fn vacant_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| square.is_empty())
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Returns a copy of this board with `cell` marked for `player`.
    ///
    /// Returns `None` if the cell is out of bounds. Occupancy is not checked
    /// here; callers go through the move contract.
    pub fn with_mark(&self, cell: usize, player: Player) -> Option<Self> {
        if cell >= self.squares.len() {
            return None;
        }
        let mut next = self.clone();
        next.squares[cell] = Square::Occupied(player);
        Some(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root * root > n {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}
