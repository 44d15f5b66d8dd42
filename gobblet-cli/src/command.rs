//! Parsing of typed commands and move notation.
//!
//! Notation:
//! - `P<index>(r,c)`: place the supply piece at `index` on row `r`, column `c`
//! - `(r,c)->(r,c)`: slide a piece already on the board

use derive_more::{Display, Error};
use gobblet_core::{Move, Pos};

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Undo,
    Show,
    Json,
    Help,
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    #[display("empty input")]
    Empty,
    #[display("unrecognized command {input:?} (type \"help\")")]
    Unknown { input: String },
    #[display("bad coordinates {input:?}: expected (row,col) with row and col in 0-2")]
    BadCoords { input: String },
    #[display("bad piece index {input:?}")]
    BadIndex { input: String },
}

pub const HELP: &str = "\
Commands:
  P<i>(r,c)      place supply piece i at row r, column c   e.g. P0(1,1)
  (r,c)->(r,c)   slide one of your pieces                  e.g. (0,0)->(2,2)
  undo           take back the last move
  show           redraw the board
  json           print the game state as JSON
  help           show this text
  quit           leave";

/// Parse one line of input.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => Err(CommandError::Empty),
        "undo" | "u" | "rewind" => Ok(Command::Undo),
        "show" | "s" => Ok(Command::Show),
        "json" => Ok(Command::Json),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => parse_move(line).map(Command::Move),
    }
}

/// Parse a single move in notation.
pub fn parse_move(s: &str) -> Result<Move, CommandError> {
    let s = s.trim();

    if let Some(rest) = s.strip_prefix(['P', 'p']) {
        let open = rest.find('(').ok_or_else(|| CommandError::BadCoords {
            input: s.to_string(),
        })?;
        let (index, coords) = rest.split_at(open);
        let index: usize = index.trim().parse().map_err(|_| CommandError::BadIndex {
            input: index.to_string(),
        })?;
        let to = parse_coords(coords)?;
        return Ok(Move::Place { index, to });
    }

    if let Some((from, to)) = s.split_once("->") {
        return Ok(Move::Slide {
            from: parse_coords(from)?,
            to: parse_coords(to)?,
        });
    }

    Err(CommandError::Unknown {
        input: s.to_string(),
    })
}

/// Parse a whitespace-separated sequence of moves.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, CommandError> {
    s.split_whitespace().map(parse_move).collect()
}

/// Parse "(r,c)" into a position.
fn parse_coords(s: &str) -> Result<Pos, CommandError> {
    let bad = || CommandError::BadCoords {
        input: s.trim().to_string(),
    };
    let inner = s
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(bad)?;
    let (row, col) = inner.split_once(',').ok_or_else(bad)?;
    let row: usize = row.trim().parse().map_err(|_| bad())?;
    let col: usize = col.trim().parse().map_err(|_| bad())?;
    Pos::new(row, col).ok_or_else(bad)
}
