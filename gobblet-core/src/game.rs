//! Turn order, move application and rewind.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::player::Player;
use crate::{Color, Pos, PLAYER_COUNT};

/// A move request.
///
/// Exactly one shape per request: a placement from the current player's supply, or a slide of
/// one of their visible pieces.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Move {
    /// Place the supply piece at `index` (see [`Player::available_pieces`]).
    Place { index: usize, to: Pos },
    /// Move the top piece at `from` to `to`.
    Slide { from: Pos, to: Pos },
}

impl Move {
    /// Get the destination position of the move.
    #[inline]
    pub fn to(&self) -> Pos {
        match self {
            Move::Place { to, .. } => *to,
            Move::Slide { to, .. } => *to,
        }
    }

    /// Build a move from the loose arguments an input layer collects.
    ///
    /// Returns `None` unless exactly one of `piece_index` and `from` is given, `to` is given, and
    /// all coordinates are on the board.
    pub fn from_parts(
        piece_index: Option<usize>,
        from: Option<(usize, usize)>,
        to: Option<(usize, usize)>,
    ) -> Option<Move> {
        let (to_row, to_col) = to?;
        let to = Pos::new(to_row, to_col)?;
        match (piece_index, from) {
            (Some(index), None) => Some(Move::Place { index, to }),
            (None, Some((row, col))) => Some(Move::Slide {
                from: Pos::new(row, col)?,
                to,
            }),
            _ => None,
        }
    }
}

/// Whether the game still accepts moves.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameState {
    InProgress,
    /// Terminal. `winner` may be `None`; that is still distinct from `InProgress`.
    GameOver { winner: Option<Color> },
}

/// Everything a rewind restores.
#[derive(Clone, PartialEq, Eq, Debug)]
struct Snapshot {
    board: Board,
    players: [Player; PLAYER_COUNT],
    current: usize,
    state: GameState,
}

/// A two-player game session.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Game {
    board: Board,
    players: [Player; PLAYER_COUNT],
    current: usize,
    state: GameState,
    history: Vec<Snapshot>,
}

impl Game {
    /// Start a game on an empty board with full supplies. Red moves first.
    pub fn new() -> Game {
        Game {
            board: Board::new(),
            players: [Player::new(Color::Red), Player::new(Color::Yellow)],
            current: 0,
            state: GameState::InProgress,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players in seat order (Red, Yellow).
    #[inline]
    pub fn players(&self) -> &[Player; PLAYER_COUNT] {
        &self.players
    }

    #[inline]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    /// The player whose turn it is.
    #[inline]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[inline]
    pub fn current_player_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn current_color(&self) -> Color {
        self.current_player().color()
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        matches!(self.state, GameState::GameOver { .. })
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        match self.state {
            GameState::GameOver { winner } => winner,
            GameState::InProgress => None,
        }
    }

    /// Number of moves that can be rewound.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn can_rewind(&self) -> bool {
        !self.history.is_empty()
    }

    /// Validate and apply a move for the current player.
    ///
    /// Returns `true` iff the move was applied. A rejected move changes nothing.
    ///
    /// A slide that uncovers a line for the opponent ends the game in the opponent's favor, even
    /// if the mover completes a line of their own at the same time. That move keeps the turn
    /// where it is and is not recorded for rewind.
    #[instrument(skip(self), fields(player = %self.current_color()))]
    pub fn make_move(&mut self, mov: Move) -> bool {
        if self.is_game_over() {
            debug!(reason = "game over", "move rejected");
            return false;
        }

        let snapshot = self.snapshot();
        match mov {
            Move::Place { index, to } => self.place_from_supply(index, to, snapshot),
            Move::Slide { from, to } => self.slide(from, to, snapshot),
        }
    }

    /// Undo the most recent recorded move.
    ///
    /// Returns `false` if there is nothing to rewind.
    #[instrument(skip(self))]
    pub fn rewind(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            debug!("nothing to rewind");
            return false;
        };
        self.restore(snapshot);
        info!(remaining = self.history.len(), "rewound one move");
        true
    }

    fn place_from_supply(&mut self, index: usize, to: Pos, snapshot: Snapshot) -> bool {
        let Some(piece) = self.players[self.current].available_pieces().get(index) else {
            debug!(index, reason = "no such supply piece", "move rejected");
            return false;
        };
        // Check against the piece that would be placed before it leaves the supply.
        if !self.board.can_place(piece, to) {
            debug!(index, %to, reason = "cell not gobblable", "move rejected");
            return false;
        }

        let Some(piece) = self.players[self.current].place_piece(index) else {
            return false;
        };
        if self.board.place_piece(piece, to).is_err() {
            self.restore(snapshot);
            return false;
        }

        self.history.push(snapshot);
        self.update_game_over();
        self.switch_player();
        true
    }

    fn slide(&mut self, from: Pos, to: Pos, snapshot: Snapshot) -> bool {
        let mover = self.current_color();
        if self.board.top_color(from) != Some(mover) {
            debug!(%from, reason = "no own piece at source", "move rejected");
            return false;
        }
        if !self.board.move_piece(from, to) {
            debug!(%from, %to, reason = "illegal slide", "move rejected");
            return false;
        }

        let opponent = mover.opponent();
        if self.board.has_won(opponent) {
            info!(winner = %opponent, "slide uncovered the opponent's line");
            self.state = GameState::GameOver {
                winner: Some(opponent),
            };
            return true;
        }

        self.history.push(snapshot);
        self.update_game_over();
        self.switch_player();
        true
    }

    fn update_game_over(&mut self) {
        if let Some(winner) = self.board.check_winner() {
            info!(%winner, "game over");
            self.state = GameState::GameOver {
                winner: Some(winner),
            };
        }
    }

    fn switch_player(&mut self) {
        self.current = (self.current + 1) % PLAYER_COUNT;
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            players: self.players.clone(),
            current: self.current,
            state: self.state,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.board = snapshot.board;
        self.players = snapshot.players;
        self.current = snapshot.current;
        self.state = snapshot.state;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
