// engine.rs - Generation transition for a bounded grid

use tracing::trace;

use crate::error::GridError;
use crate::grid::{Grid, Row};

/// Offsets of the eight surrounding cells.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Conway's rule as a total function of the current state and the number of
/// live neighbors.
#[rustfmt::skip]
pub fn rule(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3)            => true, // Birth
        _                     => false, // Death or stays dead
    }
}

/// Number of live cells around `(row, col)`. Positions off the edge of the
/// grid are skipped, so corners have three candidates and edges five.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> Result<u8, GridError> {
    grid.check(row, col)?;
    Ok(count_neighbors(grid, row, col))
}

/// Next-generation values for a single row of `grid`.
pub fn next_row(grid: &Grid, row: usize) -> Result<Row, GridError> {
    grid.check(row, 0)?;
    Ok(compute_row(grid, row))
}

/// Computes generation N+1 from generation N.
///
/// The input is only read; every cell of the result is derived from the
/// untouched previous generation.
pub fn next(grid: &Grid) -> Grid {
    let (height, width) = grid.dimensions();
    let cells = (0..height).map(|row| compute_row(grid, row)).collect();
    let next = Grid::from_parts(height, width, cells);
    trace!(live = next.live_count(), "computed generation");
    next
}

/// Grid after `generations` steps.
pub fn advance(grid: &Grid, generations: usize) -> Grid {
    let mut current = grid.clone();
    for _ in 0..generations {
        current = next(&current);
    }
    current
}

/// Endless iterator over successive generations, starting with the seed.
/// Each generation is computed only when it is asked for.
#[derive(Debug, Clone)]
pub struct Generations {
    current: Grid,
    started: bool,
}

impl Generations {
    pub fn new(seed: Grid) -> Self {
        Self {
            current: seed,
            started: false,
        }
    }
}

impl Iterator for Generations {
    type Item = Grid;

    fn next(&mut self) -> Option<Grid> {
        if self.started {
            self.current = next(&self.current);
        }
        self.started = true;
        Some(self.current.clone())
    }
}

// Callers below have already checked `row` (and `col`) against the grid.

fn count_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (height, width) = grid.dimensions();
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let nr = row.checked_add_signed(dr).filter(|&r| r < height)?;
            let nc = col.checked_add_signed(dc).filter(|&c| c < width)?;
            Some(grid.alive_at(nr, nc))
        })
        .filter(|&alive| alive)
        .count() as u8
}

fn compute_row(grid: &Grid, row: usize) -> Row {
    (0..grid.width())
        .map(|col| rule(grid.alive_at(row, col), count_neighbors(grid, row, col)))
        .collect()
}
