//! WASM bindings for gobblet-core
//!
//! Provides a JavaScript-friendly API over a game session: the browser translates drags into
//! `makeMove` calls and redraws from `state()`.

use wasm_bindgen::prelude::*;

use crate::{Color, Game, GameView, Move, Pos};

fn color_code(color: Option<Color>) -> u8 {
    match color {
        None => 0,
        Some(Color::Red) => 1,
        Some(Color::Yellow) => 2,
    }
}

/// WASM-friendly wrapper around Game
#[wasm_bindgen]
pub struct WasmGame {
    inner: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Start a new game
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame { inner: Game::new() }
    }

    /// Current player (1 = red, 2 = yellow)
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        color_code(Some(self.inner.current_color()))
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    /// Winner: 0 (none), 1 (red) or 2 (yellow)
    pub fn winner(&self) -> u8 {
        color_code(self.inner.winner())
    }

    /// Apply a move. Returns true if it was applied.
    /// For placement: makeMove(pieceIndex, null, null, toRow, toCol)
    /// For slide: makeMove(null, fromRow, fromCol, toRow, toCol)
    #[wasm_bindgen(js_name = makeMove)]
    pub fn make_move(
        &mut self,
        piece_index: Option<u32>,
        from_row: Option<u32>,
        from_col: Option<u32>,
        to_row: u32,
        to_col: u32,
    ) -> bool {
        let from = match (from_row, from_col) {
            (Some(row), Some(col)) => Some((row as usize, col as usize)),
            (None, None) => None,
            _ => return false,
        };
        let to = Some((to_row as usize, to_col as usize));
        match Move::from_parts(piece_index.map(|i| i as usize), from, to) {
            Some(mov) => self.inner.make_move(mov),
            None => false,
        }
    }

    /// Undo the last move. Returns false if there is nothing to undo.
    pub fn rewind(&mut self) -> bool {
        self.inner.rewind()
    }

    /// Full game view as a plain JS object
    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&GameView::from(&self.inner))?)
    }

    /// Get cell stack at position as array of [color, size, color, size, ...]
    /// Bottom to top order; colors 1-2, sizes 1=S, 2=M, 3=L
    #[wasm_bindgen(js_name = cellStack)]
    pub fn cell_stack(&self, row: u32, col: u32) -> Vec<u8> {
        let Some(pos) = Pos::new(row as usize, col as usize) else {
            return vec![];
        };
        self.inner
            .board()
            .stack_bottom_up(pos)
            .into_iter()
            .flat_map(|piece| [color_code(Some(piece.color())), piece.size() as u8 + 1])
            .collect()
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
