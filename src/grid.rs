use rand::Rng;

use crate::error::{LifeError, Result};

/// Grid structure for storing cell states
/// Cells are stored row-major: `true` = alive, `false` = dead
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub rows: i32,
    pub cols: i32,
    pub cells: Vec<bool>,
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Grid {
            rows,
            cols,
            cells: vec![false; (rows * cols) as usize],
        }
    }

    /// Create a grid where each cell is independently alive with `alive_probability`
    pub fn random<R: Rng>(rows: i32, cols: i32, alive_probability: f64, rng: &mut R) -> Self {
        let mut grid = Self::new(rows, cols);
        let p = alive_probability.clamp(0.0, 1.0);
        for cell in grid.cells.iter_mut() {
            *cell = rng.gen_bool(p);
        }
        grid
    }

    /// Create a grid with specific live cells given as (row, col)
    pub fn with_live(rows: i32, cols: i32, live: &[(i32, i32)]) -> Result<Self> {
        let mut grid = Self::new(rows, cols);
        for &(row, col) in live {
            grid.set_cell(row, col, true)?;
        }
        Ok(grid)
    }

    /// Parse a grid from text rows: '#' or 'O' is alive, '.' is dead.
    /// Lines are trimmed and blank lines skipped; every row must have the same width.
    pub fn from_text(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let cols = lines.first().map(|l| l.chars().count()).unwrap_or(0) as i32;
        let mut grid = Self::new(lines.len() as i32, cols);

        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() as i32 != cols {
                return Err(LifeError::InvalidConfig(format!(
                    "row {} has width {}, expected {}",
                    row,
                    line.chars().count(),
                    cols
                )));
            }
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    '#' | 'O' => grid.set_cell(row as i32, col as i32, true)?,
                    '.' => {}
                    other => {
                        return Err(LifeError::InvalidConfig(format!(
                            "unexpected character {:?} at ({}, {})",
                            other, row, col
                        )))
                    }
                }
            }
        }

        Ok(grid)
    }

    /// Render the grid as text rows of '#' (alive) and '.' (dead)
    pub fn to_text(&self) -> String {
        let mut result = String::with_capacity(((self.cols + 1) * self.rows) as usize);
        for row in 0..self.rows {
            for col in 0..self.cols {
                result.push(if self.cells[self.index(row, col)] { '#' } else { '.' });
            }
            result.push('\n');
        }
        result
    }

    /// Check whether (row, col) lies inside the grid
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }

    fn index(&self, row: i32, col: i32) -> usize {
        (row * self.cols + col) as usize
    }

    fn check(&self, row: i32, col: i32) -> Result<usize> {
        if self.in_bounds(row, col) {
            Ok(self.index(row, col))
        } else {
            Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Cell state at (row, col); out of bounds reads as dead
    pub fn is_alive(&self, row: i32, col: i32) -> bool {
        self.in_bounds(row, col) && self.cells[self.index(row, col)]
    }

    /// Set cell state at (row, col)
    pub fn set_cell(&mut self, row: i32, col: i32, alive: bool) -> Result<()> {
        let id = self.check(row, col)?;
        self.cells[id] = alive;
        Ok(())
    }

    /// Flip the cell at (row, col)
    pub fn toggle(&mut self, row: i32, col: i32) -> Result<()> {
        let id = self.check(row, col)?;
        self.cells[id] = !self.cells[id];
        Ok(())
    }

    /// Copy of this grid with the cell at (row, col) flipped
    pub fn toggled(&self, row: i32, col: i32) -> Result<Grid> {
        let mut next = self.clone();
        next.toggle(row, col)?;
        Ok(next)
    }

    /// Number of live cells in the Moore neighborhood of (row, col).
    /// Neighbors outside the grid count as dead; there is no wraparound.
    pub fn count_live_neighbors(&self, row: i32, col: i32) -> Result<u8> {
        self.check(row, col)?;
        Ok(self.neighbors_unchecked(row, col))
    }

    pub(crate) fn neighbors_unchecked(&self, row: i32, col: i32) -> u8 {
        let mut count = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if self.is_alive(row + dr, col + dc) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Total number of live cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of all live cells in row-major order
    pub fn live_cells(&self) -> Vec<(i32, i32)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(id, _)| (id as i32 / self.cols, id as i32 % self.cols))
            .collect()
    }
}
