//! Board validation
//!
//! See [`engine`] for the individual checks.

pub mod engine;

pub use engine::{
    columns_unique, horizontal_visibility, is_complete, line_visibility, rows_unique,
    validate_board, validate_file, vertical_visibility,
};
