//! Skyscrapers Board Validator
//!
//! Checks a bordered skyscrapers puzzle board for validity.
//!
//! This library provides:
//! - Board parsing from text or a file path
//! - Completeness and row/column uniqueness checks
//! - Edge-visibility hint checking
//! - Configuration for the command-line frontend

pub mod config;
pub mod parser;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use parser::{Board, Cell, Line, ParseError, parse_board, parse_board_file};
pub use validation::{validate_board, validate_file};
