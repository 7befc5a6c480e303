//! Board and line types
//!
//! Minimal value types for a parsed board.
//! No validation logic here - pure data representation.

use crate::parser::cell::Cell;

/// A parsed square board, borders included
///
/// Rows and columns 0 and N-1 are hint borders; the interior is
/// (N-2) x (N-2). Construction goes through [`crate::parser::parse_board`],
/// which guarantees the shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<Cell>>,
}

/// One full row or column, border cell + interior + border cell
///
/// The unit of visibility checking. Column lines preserve row order, so
/// the front of a column line is its top hint cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    cells: Vec<Cell>,
}

impl Board {
    pub(crate) fn new(cells: Vec<Vec<Cell>>) -> Self {
        debug_assert!(cells.len() >= 3);
        debug_assert!(cells.iter().all(|row| row.len() == cells.len()));
        Self { cells }
    }

    /// Side length, borders included
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Index range of the interior rows/columns
    pub fn interior_range(&self) -> std::ops::Range<usize> {
        1..self.size() - 1
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Iterate over all interior cells, row by row
    pub fn interior_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.interior_range().flat_map(move |row| {
            self.interior_range().map(move |col| self.cells[row][col])
        })
    }

    /// The full row at `row`, hint borders included
    pub fn row_line(&self, row: usize) -> Line {
        Line {
            cells: self.cells[row].clone(),
        }
    }

    /// The full column at `col`, hint borders included, top to bottom
    pub fn column_line(&self, col: usize) -> Line {
        Line {
            cells: self.cells.iter().map(|row| row[col]).collect(),
        }
    }
}

impl Line {
    /// Border cell at the start of the line (left or top)
    pub fn front(&self) -> Cell {
        self.cells[0]
    }

    /// Border cell at the end of the line (right or bottom)
    pub fn back(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Interior cells, border hints excluded
    pub fn interior(&self) -> &[Cell] {
        &self.cells[1..self.cells.len() - 1]
    }

    /// Interior cells as heights, or None if any is not a height
    pub fn interior_heights(&self) -> Option<Vec<u8>> {
        self.interior().iter().map(|c| c.height()).collect()
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: Vec<Cell>) -> Self {
        assert!(cells.len() >= 3);
        Self { cells }
    }
}
