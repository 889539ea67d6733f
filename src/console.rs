//! Plain-text presentation for the grid engine.
//!
//! Reads snapshots and turns typed lines into commands. Holds no game state.

use crate::games::grid::{Command, GameSnapshot, GameStatus};
use derive_more::{Display, Error};
use tracing::instrument;

/// Marker drawn in empty cells.
const EMPTY_CELL: &str = ".";

/// One parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Forward to the engine.
    Command(Command),
    /// Leave the game loop.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Nothing was typed.
    #[display("Enter a move as \"row column\", \"new\" or \"quit\"")]
    Empty,
    /// Coordinates were not two non-negative integers.
    #[display("Could not read a move from {:?}", input)]
    Malformed {
        /// The offending text.
        input: String,
    },
}

/// Draws the grid with column and row headers, followed by a status line.
#[instrument(skip(snapshot), fields(size = snapshot.size()))]
pub fn render(snapshot: &GameSnapshot) -> String {
    let size = *snapshot.size();
    let width = (0..size)
        .flat_map(|row| (0..size).map(move |column| (row, column)))
        .filter_map(|(row, column)| snapshot.cell(row, column))
        .map(|player| player.marker().chars().count())
        .chain([EMPTY_CELL.len(), size.saturating_sub(1).to_string().len()])
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    out.push_str(&" ".repeat(width + 1));
    for column in 0..size {
        out.push_str(&format!(" {:>width$}", column));
    }
    out.push('\n');

    for row in 0..size {
        out.push_str(&format!("{:>width$} ", row));
        for column in 0..size {
            let marker = snapshot
                .cell(row, column)
                .map(|player| player.marker().as_str())
                .unwrap_or(EMPTY_CELL);
            out.push_str(&format!(" {:>width$}", marker));
        }
        out.push('\n');
    }

    out.push_str(&status_line(snapshot));
    out.push('\n');
    out
}

/// Winner text, tie text, or whose turn it is.
pub fn status_line(snapshot: &GameSnapshot) -> String {
    match snapshot.status() {
        GameStatus::InProgress => match snapshot.current_player() {
            Some(player) => format!("{} to move", player.marker()),
            None => "In progress".to_string(),
        },
        status => status.to_string(),
    }
}

/// Parses `"row column"` (or `"row,column"`), `"new"`, or `"quit"`.
#[instrument]
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => Err(InputError::Empty),
        "new" | "reset" | "n" => Ok(Input::Command(Command::Reset)),
        "quit" | "exit" | "q" => Ok(Input::Quit),
        _ => {
            let (row, column) = parse_coordinates(trimmed)?;
            Ok(Input::Command(Command::Place { row, column }))
        }
    }
}

/// Parses a coordinate pair separated by whitespace or a comma.
#[instrument]
pub fn parse_coordinates(text: &str) -> Result<(usize, usize), InputError> {
    let malformed = || InputError::Malformed {
        input: text.to_string(),
    };

    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [row, column] => {
            let row = row.parse().map_err(|_| malformed())?;
            let column = column.parse().map_err(|_| malformed())?;
            Ok((row, column))
        }
        _ => Err(malformed()),
    }
}
