// grid.rs - Grid state for Conway's Game of Life

use std::fmt;

use rand::Rng;

use crate::error::GridError;

/// One row of cells, `true` is alive.
pub type Row = Vec<bool>;

/// A fixed-size, non-wrapping rectangle of binary cells.
///
/// Cells are stored row-major; `(0, 0)` is the top-left corner. A `Grid` is a
/// plain value: the engine never mutates one, it builds the next generation
/// alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Row>,
}

impl Grid {
    /// All-dead grid.
    pub fn empty(height: usize, width: usize) -> Result<Self, GridError> {
        check_dimensions(height, width)?;
        Ok(Self {
            height,
            width,
            cells: vec![vec![false; width]; height],
        })
    }

    /// Random grid from the thread-local generator.
    pub fn random(height: usize, width: usize) -> Result<Self, GridError> {
        Self::random_with(&mut rand::rng(), height, width)
    }

    /// Random grid drawn from `rng`, see [`Grid::randomize_with`].
    pub fn random_with<R: Rng>(
        rng: &mut R,
        height: usize,
        width: usize,
    ) -> Result<Self, GridError> {
        let mut grid = Self::empty(height, width)?;
        grid.randomize_with(rng);
        Ok(grid)
    }

    /// Builds a grid from explicit rows. Every row must have the length of the first.
    pub fn from_rows(rows: Vec<Row>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dimensions(height, width)?;
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found: r.len(),
            });
        }
        Ok(Self {
            height,
            width,
            cells: rows,
        })
    }

    /// Dead grid with the listed `(row, col)` cells set alive.
    pub fn with_live_cells(
        height: usize,
        width: usize,
        live: &[(usize, usize)],
    ) -> Result<Self, GridError> {
        let mut grid = Self::empty(height, width)?;
        for &(row, col) in live {
            grid.set(row, col, true)?;
        }
        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn rows(&self) -> &[Row] {
        &self.cells
    }

    /// Checks signed coordinates (e.g. derived from a pointer position)
    /// against the grid and returns them as indices.
    pub fn position(&self, row: isize, col: isize) -> Result<(usize, usize), GridError> {
        let in_range = |v: isize, limit: usize| usize::try_from(v).is_ok_and(|v| v < limit);
        if in_range(row, self.height) && in_range(col, self.width) {
            Ok((row as usize, col as usize))
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            })
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.check(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        self.check(row, col)?;
        self.cells[row][col] = alive;
        Ok(())
    }

    /// Flips the cell at `(row, col)` in place.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.check(row, col)?;
        self.cells[row][col] = !self.cells[row][col];
        Ok(())
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|row| row.fill(false));
    }

    /// Redraws every cell: alive iff a uniform `[0, 1)` draw is at least 0.5.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut().flatten() {
            *cell = rng.random::<f64>() >= 0.5;
        }
    }

    /// Copy of this grid with the cell at `(row, col)` flipped.
    pub fn toggled(&self, row: usize, col: usize) -> Result<Self, GridError> {
        let mut grid = self.clone();
        grid.toggle(row, col)?;
        Ok(grid)
    }

    pub fn live_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&alive| alive).count())
            .sum()
    }

    /// True when no cell is alive.
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&alive| !alive))
    }

    /// `(row, col, alive)` for every cell, row-major.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &alive)| (row, col, alive))
        })
    }

    /// Cell value for indices already known to be in range.
    pub(crate) fn alive_at(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    pub(crate) fn from_parts(height: usize, width: usize, cells: Vec<Row>) -> Self {
        debug_assert_eq!(cells.len(), height);
        Self { height, width, cells }
    }

    pub(crate) fn check(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row < self.height && col < self.width {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                row: isize::try_from(row).unwrap_or(isize::MAX),
                col: isize::try_from(col).unwrap_or(isize::MAX),
                height: self.height,
                width: self.width,
            })
        }
    }
}

fn check_dimensions(height: usize, width: usize) -> Result<(), GridError> {
    if height == 0 || width == 0 {
        return Err(GridError::EmptyDimensions { height, width });
    }
    Ok(())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
