//! Gobblet Gobblers game-state engine.
//!
//! Two players, Red and Yellow, each own six pieces (two of each size) and take turns either
//! placing a piece from their supply or sliding one of their visible pieces to another cell.
//! A larger piece may cover ("gobble") a strictly smaller one; only the top piece of each cell
//! counts toward three in a row.
//!
//! # Board Layout
//!
//! ```text
//! Cell indices (row-major order):
//!   (0,0)=0  (0,1)=1  (0,2)=2
//!   (1,0)=3  (1,1)=4  (1,2)=5
//!   (2,0)=6  (2,1)=7  (2,2)=8
//! ```
//!
//! # Ownership
//!
//! Each cell owns its top piece, and each piece owns the piece it gobbled, so a stack is a
//! chain of boxes hanging off the visible piece. Players own their unplaced pieces and keep
//! the ids of the ones they have on the board. Every piece carries a [`PieceId`] that never
//! changes, so lookups go by identity rather than by size and color.

pub mod board;
pub mod game;
pub mod piece;
pub mod player;
pub mod view;

#[cfg(feature = "wasm")]
pub mod wasm;

use serde::{Deserialize, Serialize};

pub use board::Board;
pub use game::{Game, GameState, Move};
pub use piece::{Piece, PieceId};
pub use player::Player;
pub use view::GameView;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;
/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;
/// Pieces of each size a player starts with.
pub const PIECES_PER_SIZE: usize = 2;
/// Pieces a player starts with.
pub const PIECES_PER_PLAYER: usize = PIECES_PER_SIZE * 3;

/// Owner color of a piece, and the identity of a player.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
}

impl Color {
    /// Get the opponent color.
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Yellow,
            Color::Yellow => Color::Red,
        }
    }

    /// Seat index of this color (Red moves first).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Yellow => 1,
        }
    }

    /// Convert from a seat index (0 or 1) to Color.
    #[inline]
    pub fn from_index(idx: usize) -> Option<Color> {
        match idx {
            0 => Some(Color::Red),
            1 => Some(Color::Yellow),
            _ => None,
        }
    }

    /// Both colors in seat order.
    pub fn all() -> impl Iterator<Item = Color> {
        [Color::Red, Color::Yellow].into_iter()
    }

    /// Lowercase name, as used in serialized views.
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece size.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Size {
    Small = 0,
    Medium = 1,
    Large = 2,
}

impl Size {
    /// Check if this size can gobble (cover) another size.
    #[inline]
    pub fn can_gobble(self, other: Size) -> bool {
        self > other
    }

    /// Convert from index (0, 1, 2) to Size.
    #[inline]
    pub fn from_index(idx: usize) -> Option<Size> {
        match idx {
            0 => Some(Size::Small),
            1 => Some(Size::Medium),
            2 => Some(Size::Large),
            _ => None,
        }
    }

    /// Get all sizes as an iterator, smallest first.
    pub fn all() -> impl DoubleEndedIterator<Item = Size> {
        [Size::Small, Size::Medium, Size::Large].into_iter()
    }
}

/// Position on the 3x3 board (0-8).
///
/// Layout:
/// ```text
///   0 1 2
///   3 4 5
///   6 7 8
/// ```
///
/// A `Pos` is always in range; untrusted coordinates go through [`Pos::new`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pos(u8);

impl Pos {
    /// Create a position from row and column, or `None` if either is off the board.
    #[inline]
    pub fn new(row: usize, col: usize) -> Option<Pos> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Pos((row * BOARD_SIZE + col) as u8))
        } else {
            None
        }
    }

    /// Create a position from row and column (0-2 each).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 3 or more. Use [`Pos::new`] for input that is not a literal.
    #[inline]
    pub const fn from_row_col(row: u8, col: u8) -> Pos {
        assert!(row < 3 && col < 3, "position off the board");
        Pos(row * 3 + col)
    }

    /// Create a position from a cell index (0-8).
    #[inline]
    pub fn from_index(idx: usize) -> Option<Pos> {
        if idx < CELL_COUNT {
            Some(Pos(idx as u8))
        } else {
            None
        }
    }

    /// Get the cell index (0-8).
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the row (0-2).
    #[inline]
    pub fn row(self) -> u8 {
        self.0 / 3
    }

    /// Get the column (0-2).
    #[inline]
    pub fn col(self) -> u8 {
        self.0 % 3
    }

    /// Iterate over all 9 positions.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..CELL_COUNT as u8).map(Pos)
    }
}

impl TryFrom<u8> for Pos {
    type Error = String;

    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        Pos::from_index(idx as usize).ok_or_else(|| format!("cell index {idx} is off the board"))
    }
}

impl From<Pos> for u8 {
    fn from(pos: Pos) -> u8 {
        pos.0
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row(), self.col())
    }
}
