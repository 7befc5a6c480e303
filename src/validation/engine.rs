//! Validation engine
//!
//! The board checks, separated from parsing concerns. Every function is
//! pure over its input; failures are reported as `false`, never as errors.

use std::collections::HashSet;
use std::path::Path;

use crate::parser::{Board, Line, parse_board_file};

/// True iff no interior cell is the unknown marker
pub fn is_complete(board: &Board) -> bool {
    !board.interior_cells().any(|cell| cell.is_unknown())
}

/// True iff every interior row holds pairwise-distinct heights
///
/// Filler and unknown cells are skipped; only assigned heights count.
pub fn rows_unique(board: &Board) -> bool {
    for row in board.interior_range() {
        let mut heights = HashSet::new();
        for col in board.interior_range() {
            if let Some(height) = board.cell(row, col).height()
                && !heights.insert(height)
            {
                log::debug!("duplicate height {height} in row {row}");
                return false;
            }
        }
    }
    true
}

/// True iff every interior column holds pairwise-distinct heights
pub fn columns_unique(board: &Board) -> bool {
    for col in board.interior_range() {
        let mut heights = HashSet::new();
        for row in board.interior_range() {
            if let Some(height) = board.cell(row, col).height()
                && !heights.insert(height)
            {
                log::debug!("duplicate height {height} in column {col}");
                return false;
            }
        }
    }
    true
}

/// Number of buildings visible scanning the heights front to back
///
/// A building is visible when it is strictly taller than every building
/// before it, i.e. each new running maximum adds one.
fn visible_count(heights: impl Iterator<Item = u8>) -> usize {
    let mut count = 0;
    let mut tallest = 0u8;
    for height in heights {
        if height > tallest {
            count += 1;
            tallest = height;
        }
    }
    count
}

/// Check both visibility hints of one line
///
/// Each end with a hint digit is checked independently; filler ends are
/// unconstrained. A hinted line whose interior is not fully assigned
/// heights cannot satisfy the hint.
pub fn line_visibility(line: &Line) -> bool {
    let front_hint = line.front().hint();
    let back_hint = line.back().hint();

    if front_hint.is_none() && back_hint.is_none() {
        return true;
    }

    let Some(heights) = line.interior_heights() else {
        return false;
    };

    if let Some(hint) = front_hint
        && visible_count(heights.iter().copied()) != hint as usize
    {
        return false;
    }

    if let Some(hint) = back_hint
        && visible_count(heights.iter().rev().copied()) != hint as usize
    {
        return false;
    }

    true
}

/// Apply [`line_visibility`] to every interior row
pub fn horizontal_visibility(board: &Board) -> bool {
    board.interior_range().all(|row| {
        let valid = line_visibility(&board.row_line(row));
        if !valid {
            log::debug!("visibility hint violated in row {row}");
        }
        valid
    })
}

/// Apply [`line_visibility`] to every interior column
pub fn vertical_visibility(board: &Board) -> bool {
    board.interior_range().all(|col| {
        let valid = line_visibility(&board.column_line(col));
        if !valid {
            log::debug!("visibility hint violated in column {col}");
        }
        valid
    })
}

/// Full board check
///
/// Completeness and uniqueness come first: an unfinished board cannot be
/// visibility-checked meaningfully.
pub fn validate_board(board: &Board) -> bool {
    if !is_complete(board) {
        log::debug!("board is not complete");
        return false;
    }
    if !(rows_unique(board) && columns_unique(board)) {
        return false;
    }

    horizontal_visibility(board) && vertical_visibility(board)
}

/// Load the board at `path` and validate it
///
/// Unreadable or malformed files are errors; an invalid board is `Ok(false)`.
pub fn validate_file(path: impl AsRef<Path>) -> anyhow::Result<bool> {
    let board = parse_board_file(path)?;
    Ok(validate_board(&board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Cell, parse_board};

    fn board(rows: &[&str]) -> Board {
        parse_board(&rows.join("\n")).expect("test board parses")
    }

    /// Build a standalone line: first/last chars are border, rest interior
    fn line(text: &str) -> Line {
        let chars: Vec<char> = text.chars().collect();
        let last = chars.len() - 1;
        let cells = chars
            .iter()
            .enumerate()
            .map(|(idx, &ch)| {
                if idx == 0 || idx == last {
                    Cell::from_border_char(ch).expect("border char")
                } else {
                    Cell::from_interior_char(ch).expect("interior char")
                }
            })
            .collect();
        Line::from_cells(cells)
    }

    const VALID: [&str; 7] = [
        "***21**", "412453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
    ];

    #[test]
    fn test_complete_board() {
        assert!(is_complete(&board(&VALID)));
    }

    #[test]
    fn test_incomplete_board() {
        let unfinished = board(&[
            "***21**", "4?????*", "4?????*", "*?????5", "*?????*", "*?????*", "*2*1***",
        ]);
        assert!(!is_complete(&unfinished));

        let one_hole = board(&[
            "***21**", "412453*", "423145*", "*5?3215", "*35214*", "*41532*", "*2*1***",
        ]);
        assert!(!is_complete(&one_hole));
    }

    #[test]
    fn test_rows_unique() {
        assert!(rows_unique(&board(&VALID)));

        // duplicate digit on the hint border does not count
        let border_dup = board(&[
            "***22**", "412453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
        ]);
        assert!(rows_unique(&border_dup));

        let dup_in_row = board(&[
            "***21**", "452453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
        ]);
        assert!(!rows_unique(&dup_in_row));

        let dup_next_to_hint = board(&[
            "***21**", "412453*", "423145*", "*553215", "*35214*", "*41532*", "*2*1***",
        ]);
        assert!(!rows_unique(&dup_next_to_hint));
    }

    #[test]
    fn test_columns_unique() {
        assert!(columns_unique(&board(&VALID)));

        // duplicates on the right hint border are fine
        let border_dup = board(&[
            "***21**", "412453*", "4231452", "*543215", "*352142", "*41532*", "*2*1***",
        ]);
        assert!(columns_unique(&border_dup));

        let dup_in_col = board(&[
            "***21**", "412453*", "423145*", "*543215", "*35214*", "*41534*", "*2*1***",
        ]);
        assert!(!columns_unique(&dup_in_col));

        let dup_top_of_col = board(&[
            "***21**", "432453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
        ]);
        assert!(!columns_unique(&dup_top_of_col));
    }

    #[test]
    fn test_rows_unique_skips_interior_filler() {
        assert!(rows_unique(&board(&["*21**", "13*2*", "2*31*", "*213*", "**1**"])));
    }

    #[test]
    fn test_line_visibility() {
        assert!(line_visibility(&line("412354*")));
        assert!(line_visibility(&line("4123542")));
        assert!(!line_visibility(&line("312354*")));
        assert!(!line_visibility(&line("3123545")));
        assert!(line_visibility(&line("*12354*")));
        assert!(line_visibility(&line("*125342")));
    }

    #[test]
    fn test_line_visibility_unfilled_interior() {
        // a hint can never be satisfied by unassigned heights
        assert!(!line_visibility(&line("41?354*")));
        // with no hints there is nothing to violate
        assert!(line_visibility(&line("*1?354*")));
    }

    #[test]
    fn test_visible_count_strictly_increasing() {
        // every building is a new running maximum
        for k in 1..=9u8 {
            assert_eq!(visible_count(1..=k), k as usize);
        }
        // and from the other side only the tallest shows
        assert_eq!(visible_count((1..=5u8).rev()), 1);
    }

    #[test]
    fn test_visible_count_equal_heights_occlude() {
        assert_eq!(visible_count([3, 3, 3].into_iter()), 1);
        assert_eq!(visible_count([2, 5, 5, 1, 6].into_iter()), 3);
        assert_eq!(visible_count(std::iter::empty()), 0);
    }

    #[test]
    fn test_horizontal_visibility() {
        assert!(horizontal_visibility(&board(&VALID)));

        let broken_row = board(&[
            "***21**", "452413*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
        ]);
        assert!(!horizontal_visibility(&broken_row));
    }

    #[test]
    fn test_vertical_visibility() {
        assert!(vertical_visibility(&board(&VALID)));

        let broken_col = board(&[
            "***21**", "452413*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
        ]);
        assert!(!vertical_visibility(&broken_col));
    }

    #[test]
    fn test_validate_board_sample() {
        assert!(validate_board(&board(&VALID)));
    }

    #[test]
    fn test_validate_board_uniqueness_short_circuits() {
        let dup = board(&[
            "***21**", "452453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
        ]);
        assert!(!validate_board(&dup));
    }

    #[test]
    fn test_validate_board_incomplete() {
        let unfinished = board(&[
            "***21**", "412?53*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
        ]);
        assert!(!validate_board(&unfinished));
    }

    #[test]
    fn test_validate_file_missing_path() {
        let err = validate_file("definitely/not/a/board.txt").unwrap_err();
        assert!(err.to_string().contains("board.txt"));
    }
}
