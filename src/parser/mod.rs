//! Board parser
//!
//! Turns the flat text format into a typed [`Board`].
//! Malformed input is a parse error, never a silently-invalid board.

pub mod board;
pub mod cell;

use std::fmt;
use std::path::Path;

use anyhow::Context;

pub use board::{Board, Line};
pub use cell::Cell;

/// Reasons a board text cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No non-empty lines in the input
    Empty,
    /// Fewer than 3 rows, so there is no interior to validate
    TooSmall { rows: usize },
    /// A row's width differs from the row count (1-based row number)
    NotSquare {
        row: usize,
        width: usize,
        expected: usize,
    },
    /// A character outside the marker set for its position (1-based)
    InvalidCell { row: usize, col: usize, ch: char },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "board file is empty"),
            ParseError::TooSmall { rows } => {
                write!(f, "board has {rows} rows, need at least 3")
            }
            ParseError::NotSquare {
                row,
                width,
                expected,
            } => write!(
                f,
                "row {row} is {width} cells wide, expected {expected} (board must be square)"
            ),
            ParseError::InvalidCell { row, col, ch } => {
                write!(f, "invalid character '{ch}' at row {row}, column {col}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a board from text
///
/// One row per line, trailing whitespace stripped, trailing blank lines
/// ignored. Border cells must be '1'-'9' or '*'; interior cells '1'-'9',
/// '?' or '*'.
pub fn parse_board(text: &str) -> Result<Board, ParseError> {
    let mut rows: Vec<&str> = text.lines().map(str::trim_end).collect();
    while rows.last().is_some_and(|line| line.is_empty()) {
        rows.pop();
    }

    if rows.is_empty() {
        return Err(ParseError::Empty);
    }

    let size = rows.len();
    if size < 3 {
        return Err(ParseError::TooSmall { rows: size });
    }

    let mut cells = Vec::with_capacity(size);
    for (row_idx, row) in rows.iter().enumerate() {
        let width = row.chars().count();
        if width != size {
            return Err(ParseError::NotSquare {
                row: row_idx + 1,
                width,
                expected: size,
            });
        }

        let mut parsed_row = Vec::with_capacity(size);
        for (col_idx, ch) in row.chars().enumerate() {
            let is_border = row_idx == 0
                || row_idx == size - 1
                || col_idx == 0
                || col_idx == size - 1;

            let cell = if is_border {
                Cell::from_border_char(ch)
            } else {
                Cell::from_interior_char(ch)
            };

            match cell {
                Some(cell) => parsed_row.push(cell),
                None => {
                    return Err(ParseError::InvalidCell {
                        row: row_idx + 1,
                        col: col_idx + 1,
                        ch,
                    });
                }
            }
        }
        cells.push(parsed_row);
    }

    Ok(Board::new(cells))
}

/// Read and parse a board file
///
/// I/O failures propagate to the caller; the file handle is released on
/// every path.
pub fn parse_board_file(path: impl AsRef<Path>) -> anyhow::Result<Board> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read board file {}", path.display()))?;
    let board = parse_board(&text)
        .with_context(|| format!("failed to parse board file {}", path.display()))?;
    Ok(board)
}
