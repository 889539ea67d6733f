//! Command-line interface for strictly_grid.

use clap::{Args, Parser, Subcommand};
use strictly_grid::Player;

/// Colors handed out to players given only as markers.
const PALETTE: [&str; 6] = ["red", "blue", "green", "yellow", "magenta", "cyan"];

/// Strictly Grid - turn-based grid games in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_grid")]
#[command(about = "Turn-based grid game engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        #[command(flatten)]
        setup: SetupArgs,
    },

    /// Apply a list of moves and print the final state
    Replay {
        #[command(flatten)]
        setup: SetupArgs,

        /// Moves as "row,column" pairs separated by spaces, e.g. "0,0 1,1 0,1"
        #[arg(short, long)]
        moves: String,

        /// Print the final snapshot as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}

/// Options shared by every game mode
#[derive(Args, Debug, Clone, Default)]
pub struct SetupArgs {
    /// Path to a TOML game configuration
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Grid size, overriding the configuration
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Players as comma-separated markers, optionally with colors: "X:red,O:blue"
    #[arg(short, long)]
    pub players: Option<String>,
}

/// Roster that cannot be turned into players.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum RosterError {
    /// An entry has no marker, e.g. `"X,,O"` or `":red"`.
    #[display("player {} has an empty marker", position)]
    EmptyMarker {
        /// One-based position of the entry in the roster.
        position: usize,
    },
}

/// Parses a roster such as `"X,O"` or `"X:red,O:blue,#"`.
///
/// Players without a color get one from a fixed palette by position.
pub fn parse_players(roster: &str) -> Result<Vec<Player>, RosterError> {
    roster.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(index, entry)| {
            let (marker, color) = match entry.split_once(':') {
                Some((marker, color)) => (marker.trim(), color.trim()),
                None => (entry, PALETTE[index % PALETTE.len()]),
            };
            if marker.is_empty() {
                Err(RosterError::EmptyMarker {
                    position: index + 1,
                })
            } else {
                Ok(Player::new(marker, color))
            }
        })
        .collect()
}
