//! Text rendering of a game view.

use std::fmt::Write;

use gobblet_core::view::{CellView, PieceView, PlayerView};
use gobblet_core::{Color, GameView, Size};

fn color_char(color: Color) -> char {
    match color {
        Color::Red => 'R',
        Color::Yellow => 'Y',
    }
}

fn size_char(size: Size) -> char {
    match size {
        Size::Small => 'S',
        Size::Medium => 'M',
        Size::Large => 'L',
    }
}

/// Two-letter label such as `RL` (red large) or `YS` (yellow small).
pub fn piece_label(piece: &PieceView) -> String {
    format!("{}{}", color_char(piece.color), size_char(piece.size))
}

/// Cell text: the top piece plus the stack height when something is covered, e.g. `RL3`.
fn cell_label(cell: &CellView) -> String {
    match cell.top() {
        None => " . ".to_string(),
        Some(top) if cell.stack.len() > 1 => format!("{}{}", piece_label(top), cell.stack.len()),
        Some(top) => format!("{} ", piece_label(top)),
    }
}

fn supply_line(player: &PlayerView, to_move: bool) -> String {
    let marker = if to_move { '>' } else { ' ' };
    let pieces: Vec<String> = player
        .available
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}:{}", i, size_char(p.size)))
        .collect();
    format!("{} {:<6} [{}]", marker, player.color.name(), pieces.join(" "))
}

fn status_line(view: &GameView) -> String {
    match (view.game_over, view.winner) {
        (true, Some(winner)) => format!("Game over: {} wins", winner),
        (true, None) => "Game over: no winner".to_string(),
        (false, _) => format!("{} to move", view.current_player),
    }
}

/// Render the board, both supplies and the game status.
pub fn render(view: &GameView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "     0     1     2");
    for (row, cells) in view.board.iter().enumerate() {
        let labels: Vec<String> = cells.iter().map(cell_label).collect();
        let _ = writeln!(out, "{}  [{}]", row, labels.join("] ["));
    }
    out.push('\n');
    for player in &view.players {
        let to_move = !view.game_over && player.color == view.current_player;
        let _ = writeln!(out, "{}", supply_line(player, to_move));
    }
    out.push('\n');
    let _ = write!(out, "{}", status_line(view));
    if let Some(line) = &view.winning_line {
        let cells: Vec<String> = line.iter().map(|(r, c)| format!("({},{})", r, c)).collect();
        let _ = write!(out, " along {}", cells.join(" "));
    }
    out.push('\n');
    out
}
