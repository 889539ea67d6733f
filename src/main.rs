//! Strictly Grid - terminal front end
//!
//! Thin presentation layer over the engine: renders snapshots and forwards
//! typed moves as commands.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, SetupArgs};
use std::io::{BufRead, Write};
use strictly_grid::console::{self, Input};
use strictly_grid::{GameConfig, GameEngine, Placement};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { setup } => run_play(&setup),
        Command::Replay { setup, moves, json } => run_replay(&setup, &moves, json),
    }
}

/// Builds the game configuration from a file and command-line overrides.
#[instrument(skip(setup))]
fn resolve_config(setup: &SetupArgs) -> Result<GameConfig> {
    let mut config = match &setup.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => {
            debug!("No config file given, using defaults");
            GameConfig::default()
        }
    };

    if let Some(size) = setup.size {
        info!(size, "Overriding grid size");
        config = config.with_size(size);
    }

    if let Some(roster) = &setup.players {
        let players = cli::parse_players(roster)?;
        info!(player_count = players.len(), "Overriding players");
        config = config.with_players(players);
    }

    Ok(config)
}

/// Interactive loop: one command per line until "quit" or end of input.
#[instrument(skip(setup))]
fn run_play(setup: &SetupArgs) -> Result<()> {
    let config = resolve_config(setup)?;
    let mut engine = GameEngine::from_config(&config).context("Invalid game configuration")?;
    info!("Starting interactive game");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", console::render(&engine.snapshot()))?;
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;

        match console::parse_input(&line) {
            Ok(Input::Quit) => break,
            Ok(Input::Command(command)) => {
                match engine.apply(command) {
                    Ok(applied) => {
                        if *applied.placement() == Some(Placement::Ignored) {
                            writeln!(stdout, "That cell cannot be taken.")?;
                        }
                        let snapshot = applied.snapshot();
                        write!(stdout, "{}", console::render(snapshot))?;
                        if snapshot.status().is_over() {
                            writeln!(stdout, "Type \"new\" to play again or \"quit\" to leave.")?;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Command rejected");
                        writeln!(stdout, "{}", e)?;
                    }
                }
            }
            Err(e) => writeln!(stdout, "{}", e)?,
        }

        prompt(&mut stdout)?;
    }

    info!("Leaving game");
    Ok(())
}

fn prompt(stdout: &mut impl Write) -> Result<()> {
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}

/// Applies every move in order and prints the final state.
#[instrument(skip(setup))]
fn run_replay(setup: &SetupArgs, moves: &str, json: bool) -> Result<()> {
    let config = resolve_config(setup)?;
    let mut engine = GameEngine::from_config(&config).context("Invalid game configuration")?;

    for token in moves.split_whitespace() {
        let (row, column) = console::parse_coordinates(token)?;
        let placement = engine
            .place(row, column)
            .with_context(|| format!("Move {:?} rejected", token))?;
        if placement == Placement::Ignored {
            warn!(row, column, "Move ignored");
        }
    }

    let snapshot = engine.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", console::render(&snapshot));
    }

    Ok(())
}
