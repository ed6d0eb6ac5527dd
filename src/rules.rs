use crate::Grid;

/// B3/S23: survival on 2 or 3 neighbors, birth on exactly 3
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Compute the next generation.
///
/// The input is only read; every neighbor count comes from `grid` and the
/// result is written into a separate buffer that is returned whole.
pub fn advance(grid: &Grid) -> Grid {
    let mut next = Grid::new(grid.rows, grid.cols);

    for row in 0..grid.rows {
        for col in 0..grid.cols {
            let id = (row * grid.cols + col) as usize;
            next.cells[id] = next_state(grid.cells[id], grid.neighbors_unchecked(row, col));
        }
    }

    next
}

/// Advance `generations` times
pub fn advance_n(grid: &Grid, generations: usize) -> Grid {
    let mut current = grid.clone();
    for _ in 0..generations {
        current = advance(&current);
    }
    current
}
