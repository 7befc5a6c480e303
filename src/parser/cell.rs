//! Board cells
//!
//! Tagged representation of a single board character.
//! Classification depends on position: border cells carry hints,
//! interior cells carry building heights.

use std::fmt;

/// A single cell of the board, already classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Border digit: number of buildings visible from this side
    Hint(u8),
    /// Border or interior '*': no constraint
    Filler,
    /// Interior digit: building height
    Height(u8),
    /// Interior '?': height not yet assigned
    Unknown,
}

impl Cell {
    /// Classify a border character ('1'-'9' or '*')
    pub fn from_border_char(ch: char) -> Option<Self> {
        match ch {
            '*' => Some(Cell::Filler),
            '1'..='9' => Some(Cell::Hint(ch as u8 - b'0')),
            _ => None,
        }
    }

    /// Classify an interior character ('1'-'9', '?' or '*')
    ///
    /// Filler is legal inside the grid: uniqueness checks simply skip it.
    pub fn from_interior_char(ch: char) -> Option<Self> {
        match ch {
            '*' => Some(Cell::Filler),
            '?' => Some(Cell::Unknown),
            '1'..='9' => Some(Cell::Height(ch as u8 - b'0')),
            _ => None,
        }
    }

    /// The building height, if this cell holds one
    pub fn height(&self) -> Option<u8> {
        match self {
            Cell::Height(h) => Some(*h),
            _ => None,
        }
    }

    /// The visibility hint, if this cell holds one
    pub fn hint(&self) -> Option<u8> {
        match self {
            Cell::Hint(h) => Some(*h),
            _ => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Cell::Unknown)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Hint(h) => write!(f, "{h}"),
            Cell::Filler => write!(f, "*"),
            Cell::Height(h) => write!(f, "{h}"),
            Cell::Unknown => write!(f, "?"),
        }
    }
}
