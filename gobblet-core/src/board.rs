//! The 3x3 grid of piece stacks.

use serde::{Deserialize, Serialize};

use crate::piece::{Piece, PieceId};
use crate::{Color, Pos, CELL_COUNT};

/// The game board.
///
/// Each cell holds at most one piece, the visible top of its stack. Covered pieces hang off
/// the top piece's gobble slot and are never stored in the grid directly.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Piece>; CELL_COUNT],
}

impl Board {
    /// The 8 winning lines in scan order: 3 rows, 3 columns, 2 diagonals.
    pub const WIN_LINES: [[Pos; 3]; 8] = [
        [Pos::from_row_col(0, 0), Pos::from_row_col(0, 1), Pos::from_row_col(0, 2)], // Row 0
        [Pos::from_row_col(1, 0), Pos::from_row_col(1, 1), Pos::from_row_col(1, 2)], // Row 1
        [Pos::from_row_col(2, 0), Pos::from_row_col(2, 1), Pos::from_row_col(2, 2)], // Row 2
        [Pos::from_row_col(0, 0), Pos::from_row_col(1, 0), Pos::from_row_col(2, 0)], // Col 0
        [Pos::from_row_col(0, 1), Pos::from_row_col(1, 1), Pos::from_row_col(2, 1)], // Col 1
        [Pos::from_row_col(0, 2), Pos::from_row_col(1, 2), Pos::from_row_col(2, 2)], // Col 2
        [Pos::from_row_col(0, 0), Pos::from_row_col(1, 1), Pos::from_row_col(2, 2)], // Main diagonal
        [Pos::from_row_col(0, 2), Pos::from_row_col(1, 1), Pos::from_row_col(2, 0)], // Anti-diagonal
    ];

    /// Create an empty board.
    pub fn new() -> Board {
        Board::default()
    }

    /// Get the top (visible) piece at a position.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<&Piece> {
        self.cells[pos.index()].as_ref()
    }

    /// Check if a cell is empty.
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cells[pos.index()].is_none()
    }

    /// Color of the top piece at a position.
    #[inline]
    pub fn top_color(&self, pos: Pos) -> Option<Color> {
        self.get(pos).map(Piece::color)
    }

    /// Check if `piece` may be placed at `pos`.
    ///
    /// The cell must be empty or hold a strictly smaller top piece. A piece that already covers
    /// something can only go on an empty cell, since its slot is taken.
    pub fn can_place(&self, piece: &Piece, pos: Pos) -> bool {
        match self.get(pos) {
            None => true,
            Some(top) => piece.gobbled().is_none() && piece.can_gobble(Some(top)),
        }
    }

    /// Place a piece at `pos`, gobbling the current occupant (and everything under it).
    ///
    /// On rejection the board is untouched and the piece is handed back.
    pub fn place_piece(&mut self, mut piece: Piece, pos: Pos) -> Result<(), Piece> {
        if !self.can_place(&piece, pos) {
            return Err(piece);
        }
        if let Some(occupant) = self.cells[pos.index()].take() {
            let displaced = piece.gobble(occupant);
            debug_assert!(displaced.is_none());
        }
        self.cells[pos.index()] = Some(piece);
        Ok(())
    }

    /// Move the top piece at `from` onto `to`.
    ///
    /// Whatever the moving piece covered becomes the new top at `from`. Fails without touching
    /// the board if `from == to`, `from` is empty, or the destination top is not strictly smaller.
    pub fn move_piece(&mut self, from: Pos, to: Pos) -> bool {
        if from == to {
            return false;
        }
        let Some(moving) = self.get(from) else {
            return false;
        };
        if !moving.can_gobble(self.get(to)) {
            return false;
        }

        let Some(mut piece) = self.cells[from.index()].take() else {
            return false;
        };
        self.cells[from.index()] = piece.reveal();
        if let Some(occupant) = self.cells[to.index()].take() {
            let displaced = piece.gobble(occupant);
            debug_assert!(displaced.is_none());
        }
        self.cells[to.index()] = Some(piece);
        true
    }

    fn line_owner(&self, line: &[Pos; 3]) -> Option<Color> {
        let first = self.top_color(line[0])?;
        line[1..]
            .iter()
            .all(|&pos| self.top_color(pos) == Some(first))
            .then_some(first)
    }

    /// Color of the first complete line in scan order (rows, columns, diagonals).
    pub fn check_winner(&self) -> Option<Color> {
        Self::WIN_LINES.iter().find_map(|line| self.line_owner(line))
    }

    /// Check if the given color has three in a row visible on top.
    pub fn has_won(&self, color: Color) -> bool {
        self.winning_line(color).is_some()
    }

    /// Get the first winning line for a color, if any.
    pub fn winning_line(&self, color: Color) -> Option<[Pos; 3]> {
        Self::WIN_LINES
            .iter()
            .find(|line| self.line_owner(line) == Some(color))
            .copied()
    }

    /// Find the cell whose top piece has the given id.
    pub fn find(&self, id: PieceId) -> Option<Pos> {
        Pos::all().find(|&pos| self.get(pos).is_some_and(|p| p.id() == id))
    }

    /// Every piece on the board, covered ones included, cell by cell from the top down.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().flatten().flat_map(|p| p.stack())
    }

    /// The stack at a position from the bottom up, as a renderer draws it.
    pub fn stack_bottom_up(&self, pos: Pos) -> Vec<&Piece> {
        let mut stack: Vec<&Piece> = self.get(pos).into_iter().flat_map(|p| p.stack()).collect();
        stack.reverse();
        stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Size;

    fn piece(id: u8, size: Size, color: Color) -> Piece {
        Piece::new(PieceId(id), size, color)
    }

    fn at(row: u8, col: u8) -> Pos {
        Pos::from_row_col(row, col)
    }

    #[test]
    fn test_board_new_is_empty() {
        let board = Board::new();
        for pos in Pos::all() {
            assert!(board.is_empty(pos));
            assert_eq!(board.get(pos), None);
        }
        assert_eq!(board.pieces().count(), 0);
    }

    #[test]
    fn test_place_on_empty() {
        let mut board = Board::new();
        assert!(board.place_piece(piece(0, Size::Large, Color::Red), at(0, 0)).is_ok());
        assert_eq!(board.get(at(0, 0)).map(Piece::id), Some(PieceId(0)));
    }

    #[test]
    fn test_place_smaller_rejected() {
        let mut board = Board::new();
        board.place_piece(piece(0, Size::Large, Color::Red), at(0, 0)).unwrap();
        let before = board.clone();

        let rejected = board.place_piece(piece(10, Size::Small, Color::Yellow), at(0, 0));
        assert_eq!(rejected.map_err(|p| p.id()), Err(PieceId(10)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_same_size_rejected() {
        let mut board = Board::new();
        board.place_piece(piece(2, Size::Medium, Color::Red), at(1, 1)).unwrap();
        assert!(board.place_piece(piece(8, Size::Medium, Color::Yellow), at(1, 1)).is_err());
    }

    #[test]
    fn test_place_gobbles_whole_stack() {
        let mut board = Board::new();
        board.place_piece(piece(4, Size::Small, Color::Red), at(0, 0)).unwrap();
        board.place_piece(piece(8, Size::Medium, Color::Yellow), at(0, 0)).unwrap();
        board.place_piece(piece(0, Size::Large, Color::Red), at(0, 0)).unwrap();

        let ids: Vec<_> = board.get(at(0, 0)).unwrap().stack().map(Piece::id).collect();
        assert_eq!(ids, vec![PieceId(0), PieceId(8), PieceId(4)]);

        let bottom_up: Vec<_> = board.stack_bottom_up(at(0, 0)).iter().map(|p| p.id()).collect();
        assert_eq!(bottom_up, vec![PieceId(4), PieceId(8), PieceId(0)]);
    }

    #[test]
    fn test_place_covering_piece_only_on_empty() {
        let mut board = Board::new();
        board.place_piece(piece(10, Size::Small, Color::Yellow), at(0, 0)).unwrap();

        let mut large = piece(0, Size::Large, Color::Red);
        large.gobble(piece(4, Size::Small, Color::Red));
        let large = board.place_piece(large, at(0, 0)).unwrap_err();
        assert!(board.place_piece(large, at(2, 2)).is_ok());
        assert_eq!(board.get(at(2, 2)).unwrap().depth(), 2);
    }

    #[test]
    fn test_move_to_empty() {
        let mut board = Board::new();
        board.place_piece(piece(2, Size::Medium, Color::Red), at(0, 0)).unwrap();

        assert!(board.move_piece(at(0, 0), at(1, 1)));
        assert!(board.is_empty(at(0, 0)));
        assert_eq!(board.get(at(1, 1)).map(Piece::id), Some(PieceId(2)));

        // Empty source and same cell both fail.
        assert!(!board.move_piece(at(0, 0), at(2, 2)));
        assert!(!board.move_piece(at(1, 1), at(1, 1)));
    }

    #[test]
    fn test_move_reveals_covered_piece() {
        let mut board = Board::new();
        board.place_piece(piece(10, Size::Small, Color::Yellow), at(0, 0)).unwrap();
        board.place_piece(piece(0, Size::Large, Color::Red), at(0, 0)).unwrap();

        assert!(board.move_piece(at(0, 0), at(1, 1)));
        assert_eq!(board.get(at(0, 0)).map(Piece::id), Some(PieceId(10)));
        let moved = board.get(at(1, 1)).unwrap();
        assert_eq!(moved.id(), PieceId(0));
        assert_eq!(moved.gobbled(), None);
    }

    #[test]
    fn test_move_gobbles_destination() {
        let mut board = Board::new();
        board.place_piece(piece(4, Size::Small, Color::Red), at(0, 0)).unwrap();
        board.place_piece(piece(8, Size::Medium, Color::Yellow), at(1, 1)).unwrap();

        assert!(board.move_piece(at(1, 1), at(0, 0)));
        let top = board.get(at(0, 0)).unwrap();
        assert_eq!(top.id(), PieceId(8));
        assert_eq!(top.gobbled().map(Piece::id), Some(PieceId(4)));
        assert!(board.is_empty(at(1, 1)));

        // Moving away again reveals the small piece.
        assert!(board.move_piece(at(0, 0), at(2, 2)));
        assert_eq!(board.get(at(0, 0)).map(Piece::id), Some(PieceId(4)));
        assert_eq!(board.get(at(2, 2)).unwrap().gobbled(), None);
    }

    #[test]
    fn test_illegal_move_leaves_board_untouched() {
        let mut board = Board::new();
        board.place_piece(piece(4, Size::Small, Color::Red), at(0, 0)).unwrap();
        board.place_piece(piece(2, Size::Medium, Color::Red), at(0, 0)).unwrap();
        board.place_piece(piece(6, Size::Large, Color::Yellow), at(2, 2)).unwrap();
        let before = board.clone();

        // Medium onto large: the medium would reveal the small first, but nothing may change.
        assert!(!board.move_piece(at(0, 0), at(2, 2)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(board.check_winner(), None);
        assert!(!board.has_won(Color::Red));
        assert!(!board.has_won(Color::Yellow));
    }

    #[test]
    fn test_row_win_mixed_sizes() {
        let mut board = Board::new();
        board.place_piece(piece(0, Size::Large, Color::Red), at(0, 0)).unwrap();
        board.place_piece(piece(1, Size::Large, Color::Red), at(0, 1)).unwrap();
        board.place_piece(piece(2, Size::Medium, Color::Red), at(0, 2)).unwrap();

        assert_eq!(board.check_winner(), Some(Color::Red));
        assert_eq!(board.winning_line(Color::Red), Some(Board::WIN_LINES[0]));
    }

    #[test]
    fn test_all_winning_lines() {
        for line in &Board::WIN_LINES {
            let mut board = Board::new();
            for (i, &pos) in line.iter().enumerate() {
                board.place_piece(piece(6 + i as u8, Size::Small, Color::Yellow), pos).unwrap();
            }
            assert_eq!(board.check_winner(), Some(Color::Yellow), "line {:?}", line);
            assert_eq!(board.winning_line(Color::Yellow), Some(*line));
        }
    }

    #[test]
    fn test_hidden_piece_doesnt_count() {
        let mut board = Board::new();
        board.place_piece(piece(4, Size::Small, Color::Red), at(0, 0)).unwrap();
        board.place_piece(piece(5, Size::Small, Color::Red), at(0, 1)).unwrap();
        board.place_piece(piece(2, Size::Medium, Color::Red), at(0, 2)).unwrap();
        board.place_piece(piece(6, Size::Large, Color::Yellow), at(0, 2)).unwrap();

        assert_eq!(board.check_winner(), None);
    }

    #[test]
    fn test_mixed_colors_no_win() {
        let mut board = Board::new();
        board.place_piece(piece(0, Size::Large, Color::Red), at(1, 0)).unwrap();
        board.place_piece(piece(6, Size::Large, Color::Yellow), at(1, 1)).unwrap();
        board.place_piece(piece(1, Size::Large, Color::Red), at(1, 2)).unwrap();
        assert_eq!(board.check_winner(), None);
    }

    #[test]
    fn test_scan_order_rows_first() {
        // Both colors complete a row; the upper row is found first.
        let mut board = Board::new();
        for col in 0..3u8 {
            board.place_piece(piece(6 + col, Size::Small, Color::Yellow), at(1, col)).unwrap();
            board.place_piece(piece(col, Size::Small, Color::Red), at(2, col)).unwrap();
        }
        assert!(board.has_won(Color::Red));
        assert!(board.has_won(Color::Yellow));
        assert_eq!(board.check_winner(), Some(Color::Yellow));
    }

    #[test]
    fn test_find_by_identity() {
        let mut board = Board::new();
        board.place_piece(piece(4, Size::Small, Color::Red), at(2, 1)).unwrap();
        board.place_piece(piece(5, Size::Small, Color::Red), at(0, 1)).unwrap();
        board.place_piece(piece(6, Size::Large, Color::Yellow), at(0, 1)).unwrap();

        assert_eq!(board.find(PieceId(4)), Some(at(2, 1)));
        assert_eq!(board.find(PieceId(6)), Some(at(0, 1)));
        // Covered pieces are not visible.
        assert_eq!(board.find(PieceId(5)), None);
        assert_eq!(board.pieces().count(), 3);
    }
}
