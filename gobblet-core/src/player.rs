//! A player's supply of unplaced pieces.

use serde::{Deserialize, Serialize};

use crate::piece::{Piece, PieceId};
use crate::{Color, Size, PIECES_PER_PLAYER, PIECES_PER_SIZE};

/// One side of the game.
///
/// Every one of the player's six pieces is either in `pieces` (the supply, whose order is the
/// index space for placement) or listed by id in `board_pieces`, never both.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Player {
    color: Color,
    pieces: Vec<Piece>,
    board_pieces: Vec<PieceId>,
}

impl Player {
    /// Create a player with a full supply, largest pieces first.
    ///
    /// Red's pieces get ids 0-5 and Yellow's 6-11.
    pub fn new(color: Color) -> Player {
        let base = color.index() * PIECES_PER_PLAYER;
        let pieces = Size::all()
            .rev()
            .flat_map(|size| std::iter::repeat(size).take(PIECES_PER_SIZE))
            .enumerate()
            .map(|(i, size)| Piece::new(PieceId((base + i) as u8), size, color))
            .collect();

        Player {
            color,
            pieces,
            board_pieces: Vec::with_capacity(PIECES_PER_PLAYER),
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Unplaced pieces in stable index order.
    #[inline]
    pub fn available_pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Ids of this player's pieces that are on the board, visible or covered.
    #[inline]
    pub fn board_pieces(&self) -> &[PieceId] {
        &self.board_pieces
    }

    /// Take the piece at `index` out of the supply and record it as on the board.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn place_piece(&mut self, index: usize) -> Option<Piece> {
        if index >= self.pieces.len() {
            return None;
        }
        let piece = self.pieces.remove(index);
        self.board_pieces.push(piece.id());
        Some(piece)
    }

    /// Put a piece back at the end of the supply, dropping its on-board record if present.
    pub fn return_piece(&mut self, piece: Piece) {
        self.board_pieces.retain(|&id| id != piece.id());
        self.pieces.push(piece);
    }

    /// Reserve counts by size: [small, medium, large].
    pub fn reserves(&self) -> [u8; 3] {
        let mut counts = [0u8; 3];
        for piece in &self.pieces {
            counts[piece.size() as usize] += 1;
        }
        counts
    }
}
