// patterns.rs - Well-known starting configurations

use crate::error::GridError;
use crate::grid::Grid;

/// A named set of live cells, given as `(row, col)` offsets from the
/// pattern's top-left corner.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        height: 2,
        width: 2,
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Glider",
        height: 3,
        width: 3,
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        height: 1,
        width: 3,
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        height: 2,
        width: 4,
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        height: 4,
        width: 4,
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        height: 13,
        width: 13,
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        height: 3,
        width: 3,
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        height: 9,
        width: 36,
        cells: &[
            (0, 24), (1, 22), (1, 24), (2, 12), (2, 13), (2, 20), (2, 21),
            (2, 34), (2, 35), (3, 11), (3, 15), (3, 20), (3, 21), (3, 34),
            (3, 35), (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
            (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22),
            (5, 24), (6, 10), (6, 16), (6, 24), (7, 11), (7, 15), (8, 12),
            (8, 13),
        ],
    },
];

/// Looks up a built-in pattern by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Stamps `pattern` onto `grid` with its top-left corner at `origin`.
///
/// Cells already alive stay alive. Nothing is written unless the whole
/// pattern fits.
pub fn place(grid: &mut Grid, pattern: &Pattern, origin: (usize, usize)) -> Result<(), GridError> {
    let (height, width) = grid.dimensions();
    if pattern.height > height || pattern.width > width {
        return Err(too_large(grid, pattern));
    }
    let (row0, col0) = origin;
    if row0 + pattern.height > height || col0 + pattern.width > width {
        return Err(GridError::OutOfBounds {
            row: isize::try_from(row0 + pattern.height - 1).unwrap_or(isize::MAX),
            col: isize::try_from(col0 + pattern.width - 1).unwrap_or(isize::MAX),
            height,
            width,
        });
    }
    for &(row, col) in pattern.cells {
        grid.set(row0 + row, col0 + col, true)?;
    }
    Ok(())
}

/// Stamps `pattern` in the middle of `grid`.
pub fn place_centered(grid: &mut Grid, pattern: &Pattern) -> Result<(), GridError> {
    let (height, width) = grid.dimensions();
    if pattern.height > height || pattern.width > width {
        return Err(too_large(grid, pattern));
    }
    let origin = ((height - pattern.height) / 2, (width - pattern.width) / 2);
    place(grid, pattern, origin)
}

fn too_large(grid: &Grid, pattern: &Pattern) -> GridError {
    GridError::PatternTooLarge {
        pattern: pattern.name,
        pattern_height: pattern.height,
        pattern_width: pattern.width,
        height: grid.height(),
        width: grid.width(),
    }
}
