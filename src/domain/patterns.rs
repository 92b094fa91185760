use super::{Cell, Grid};

/// A named set of relative (row, col) coordinates of live cells,
/// used to seed a grid before starting a simulation.
#[derive(Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Stamp the pattern onto `grid` with its origin at (row, col).
    /// Cells that would land outside the grid are ignored.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) {
        for &(dr, dc) in self.cells {
            grid.set(row + dr, col + dc, Cell::Alive);
        }
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::Pattern;

    /// 2x2 block, the smallest still life
    pub const BLOCK: Pattern = Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    };

    /// Three cells in a row, oscillates with period 2
    pub const BLINKER: Pattern = Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    };

    /// Simplest spaceship, moves diagonally with period 4
    pub const GLIDER: Pattern = Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    };
}
