// error.rs - Errors for grid construction and coordinate access

use thiserror::Error;

/// Errors raised by grid construction and coordinate accessors.
///
/// The transition engine itself never fails; every variant here is a
/// precondition violation by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A coordinate fell outside `[0, height) x [0, width)`.
    #[error("cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: isize,
        col: isize,
        height: usize,
        width: usize,
    },

    /// Height or width was zero.
    #[error("grid dimensions must be positive, got {height}x{width}")]
    EmptyDimensions { height: usize, width: usize },

    /// Rows passed to `Grid::from_rows` had different lengths.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A pattern does not fit the grid at the requested origin.
    #[error("pattern {pattern:?} ({pattern_height}x{pattern_width}) does not fit a {height}x{width} grid")]
    PatternTooLarge {
        pattern: &'static str,
        pattern_height: usize,
        pattern_width: usize,
        height: usize,
        width: usize,
    },
}
