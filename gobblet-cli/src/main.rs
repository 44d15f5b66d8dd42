//! Gobblet Gobblers in the terminal.
//!
//! Two people share one keyboard and take turns typing moves.

mod cli;
mod command;
mod render;

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::Cli;
use command::Command;
use gobblet_core::{Game, GameView};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());

    let mut game = Game::new();
    if let Some(moves) = &cli.moves {
        replay(&mut game, moves)?;
    }

    if cli.batch {
        print_state(&game, cli.json)?;
        return Ok(());
    }

    run_interactive(&mut game, cli.json)
}

/// Logs go to stderr so they never mix with the board or JSON on stdout.
fn init_tracing(filter: Option<&str>) {
    let filter = filter
        .and_then(|f| EnvFilter::try_new(f).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Apply a whitespace-separated move list, stopping at the first rejected move.
fn replay(game: &mut Game, moves: &str) -> Result<()> {
    let moves = command::parse_moves(moves).context("invalid --moves")?;
    info!(count = moves.len(), "Replaying moves");

    for (i, mov) in moves.into_iter().enumerate() {
        if !game.make_move(mov) {
            bail!("move {} ({:?}) is not legal in this position", i + 1, mov);
        }
    }
    Ok(())
}

fn print_state(game: &Game, json: bool) -> Result<()> {
    let view = GameView::from(game);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render::render(&view));
    }
    Ok(())
}

fn run_interactive(game: &mut Game, json: bool) -> Result<()> {
    println!("{}\n", command::HELP);
    print_state(game, json)?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}> ", game.current_color());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            debug!("stdin closed");
            break;
        };
        let line = line.context("failed to read input")?;

        match command::parse(&line) {
            Ok(Command::Move(mov)) => {
                if game.make_move(mov) {
                    print_state(game, json)?;
                } else {
                    debug!(?mov, "rejected move");
                    println!("Illegal move.");
                }
            }
            Ok(Command::Undo) => {
                if game.rewind() {
                    print_state(game, json)?;
                } else {
                    println!("Nothing to undo.");
                }
            }
            Ok(Command::Show) => print_state(game, json)?,
            Ok(Command::Json) => print_state(game, true)?,
            Ok(Command::Help) => println!("{}", command::HELP),
            Ok(Command::Quit) => break,
            Err(command::CommandError::Empty) => {}
            Err(e) => println!("{}", e),
        }
    }
    Ok(())
}
