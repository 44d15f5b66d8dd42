//! Command-line interface for the gobblet binary.

use clap::Parser;

/// Gobblet Gobblers - local two-player game in the terminal
#[derive(Parser, Debug)]
#[command(name = "gobblet")]
#[command(about = "Play Gobblet Gobblers against a friend in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Moves to replay before play starts, e.g. "P0(0,0) P0(1,1) (0,0)->(2,2)"
    #[arg(long)]
    pub moves: Option<String>,

    /// Print the resulting state and exit instead of reading commands
    #[arg(long, requires = "moves")]
    pub batch: bool,

    /// Print state as JSON instead of the text board
    #[arg(long)]
    pub json: bool,

    /// Log filter, e.g. "gobblet_core=debug" (falls back to RUST_LOG, then "warn")
    #[arg(long, env = "GOBBLET_LOG")]
    pub log: Option<String>,
}
