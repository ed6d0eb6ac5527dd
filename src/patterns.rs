use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{LifeError, Result};
use crate::Grid;

/// Offsets (row, col) of the name glyph from its top-left anchor: a stylized "A"
#[rustfmt::skip]
pub const NAME_GLYPH: [(i32, i32); 14] = [
    (0, 1), (0, 2),
    (1, 0), (1, 3),
    (2, 0), (2, 3),
    (3, 0), (3, 3),
    (3, 1), (3, 2),
    (4, 0), (4, 3),
    (5, 0), (5, 3),
];

const GLIDER: [(i32, i32); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
const BLINKER: [(i32, i32); 3] = [(0, 0), (0, 1), (0, 2)];
const BLOCK: [(i32, i32); 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];
const BEACON: [(i32, i32); 8] = [(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)];
const TOAD: [(i32, i32); 6] = [(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)];
const R_PENTOMINO: [(i32, i32); 5] = [(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)];

/// Preset patterns that can be seeded onto the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    NameGlyph,
    Glider,
    Blinker,
    Block,
    Beacon,
    Toad,
    RPentomino,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::NameGlyph,
        Preset::Glider,
        Preset::Blinker,
        Preset::Block,
        Preset::Beacon,
        Preset::Toad,
        Preset::RPentomino,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::NameGlyph => "Name",
            Preset::Glider => "Glider",
            Preset::Blinker => "Blinker",
            Preset::Block => "Block",
            Preset::Beacon => "Beacon",
            Preset::Toad => "Toad",
            Preset::RPentomino => "R-pentomino",
        }
    }

    /// Anchor-relative offsets
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Preset::NameGlyph => &NAME_GLYPH,
            Preset::Glider => &GLIDER,
            Preset::Blinker => &BLINKER,
            Preset::Block => &BLOCK,
            Preset::Beacon => &BEACON,
            Preset::Toad => &TOAD,
            Preset::RPentomino => &R_PENTOMINO,
        }
    }

    /// Next preset in cycle order
    pub fn next(self) -> Preset {
        let i = Preset::ALL.iter().position(|&p| p == self).unwrap_or(0);
        Preset::ALL[(i + 1) % Preset::ALL.len()]
    }

    /// Top-left anchor that centers this preset on a rows x cols grid.
    /// The name glyph keeps its fixed (rows/2 - 3, cols/2 - 2) anchor.
    pub fn anchor(self, rows: i32, cols: i32) -> (i32, i32) {
        match self {
            Preset::NameGlyph => (rows / 2 - 3, cols / 2 - 2),
            _ => {
                let (height, width) = extent(self.offsets());
                (rows / 2 - height / 2, cols / 2 - width / 2)
            }
        }
    }

    /// Absolute live coordinates for a rows x cols grid.
    /// Fails with `OutOfBounds` if any point falls outside the grid.
    pub fn cells(self, rows: i32, cols: i32) -> Result<Vec<(i32, i32)>> {
        let (anchor_row, anchor_col) = self.anchor(rows, cols);
        self.offsets()
            .iter()
            .map(|&(dr, dc)| {
                let (row, col) = (anchor_row + dr, anchor_col + dc);
                if row >= 0 && row < rows && col >= 0 && col < cols {
                    Ok((row, col))
                } else {
                    Err(LifeError::OutOfBounds { row, col, rows, cols })
                }
            })
            .collect()
    }
}

/// (height, width) of the bounding box of a set of offsets
fn extent(offsets: &[(i32, i32)]) -> (i32, i32) {
    let height = offsets.iter().map(|&(r, _)| r).max().unwrap_or(-1) + 1;
    let width = offsets.iter().map(|&(_, c)| c).max().unwrap_or(-1) + 1;
    (height, width)
}

/// Live coordinates of a random grid
pub fn random_fill<R: Rng>(rows: i32, cols: i32, alive_probability: f64, rng: &mut R) -> Vec<(i32, i32)> {
    Grid::random(rows, cols, alive_probability, rng).live_cells()
}

/// The 14-point name glyph anchored at (rows/2 - 3, cols/2 - 2)
pub fn named_glyph(rows: i32, cols: i32) -> Result<Vec<(i32, i32)>> {
    Preset::NameGlyph.cells(rows, cols)
}

/// Overlay `points` as alive onto a copy of `grid`.
/// The input grid is untouched when any point is out of bounds.
pub fn seed(grid: &Grid, points: &[(i32, i32)]) -> Result<Grid> {
    let mut next = grid.clone();
    for &(row, col) in points {
        next.set_cell(row, col, true)?;
    }
    Ok(next)
}
