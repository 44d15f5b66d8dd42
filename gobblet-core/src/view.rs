//! Read-only projection of a game for renderers.
//!
//! Front ends draw from a [`GameView`] instead of reaching into the engine, so nothing on that
//! side can mutate game state.

use serde::Serialize;

use crate::game::Game;
use crate::piece::{Piece, PieceId};
use crate::player::Player;
use crate::{Color, Pos, Size, BOARD_SIZE};

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct PieceView {
    pub id: PieceId,
    pub color: Color,
    pub size: Size,
}

impl From<&Piece> for PieceView {
    fn from(piece: &Piece) -> Self {
        PieceView {
            id: piece.id(),
            color: piece.color(),
            size: piece.size(),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct CellView {
    /// Bottom to top; the last entry is the visible piece.
    pub stack: Vec<PieceView>,
}

impl CellView {
    /// The visible piece, if any.
    pub fn top(&self) -> Option<&PieceView> {
        self.stack.last()
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ReservesView {
    pub small: u8,
    pub medium: u8,
    pub large: u8,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct PlayerView {
    pub color: Color,
    /// Supply in placement index order.
    pub available: Vec<PieceView>,
    pub reserves: ReservesView,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        let [small, medium, large] = player.reserves();
        PlayerView {
            color: player.color(),
            available: player.available_pieces().iter().map(PieceView::from).collect(),
            reserves: ReservesView {
                small,
                medium,
                large,
            },
        }
    }
}

/// Snapshot of everything a renderer needs.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct GameView {
    /// Rows of cells, top row first.
    pub board: Vec<Vec<CellView>>,
    pub players: Vec<PlayerView>,
    pub current_player: Color,
    pub game_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Color>,
    /// The winner's line as (row, col) pairs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winning_line: Option<Vec<(u8, u8)>>,
    pub can_rewind: bool,
}

impl From<&Game> for GameView {
    fn from(game: &Game) -> Self {
        let board = game.board();
        let rows = (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .filter_map(|col| Pos::new(row, col))
                    .map(|pos| CellView {
                        stack: board
                            .stack_bottom_up(pos)
                            .into_iter()
                            .map(PieceView::from)
                            .collect(),
                    })
                    .collect()
            })
            .collect();

        let winning_line = game
            .winner()
            .and_then(|winner| board.winning_line(winner))
            .map(|line| line.iter().map(|pos| (pos.row(), pos.col())).collect());

        GameView {
            board: rows,
            players: game.players().iter().map(PlayerView::from).collect(),
            current_player: game.current_color(),
            game_over: game.is_game_over(),
            winner: game.winner(),
            winning_line,
            can_rewind: game.can_rewind(),
        }
    }
}
