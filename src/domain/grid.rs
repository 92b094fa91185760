use super::Cell;
use crate::error::ConfigError;
use rand::Rng;
use rayon::prelude::*;

/// The 8 Moore-neighborhood offsets as (row, col) deltas.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An immutable snapshot of the board: `rows x cols` cells in row-major
/// order. Dimensions are fixed at construction; every producing
/// operation (`step`, `random`, `cleared`) returns a fresh snapshot and
/// leaves its input untouched.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of the given dimensions with every cell dead.
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    /// Identical in effect to [`Grid::new`]; the name callers reach for
    /// when resetting an existing simulation.
    pub fn cleared(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        Self::new(rows, cols)
    }

    /// Randomized grid using the global random source. Each cell is
    /// drawn independently and is alive with `alive_probability`.
    pub fn random(rows: usize, cols: usize, alive_probability: f64) -> Result<Self, ConfigError> {
        Self::random_with(rows, cols, alive_probability, &mut rand::rng())
    }

    /// Randomized grid from a caller-supplied source, so tests can seed
    /// it. A cell is alive iff a uniform draw over [0, 1) exceeds
    /// `1 - alive_probability`.
    pub fn random_with(
        rows: usize,
        cols: usize,
        alive_probability: f64,
        rng: &mut impl Rng,
    ) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&alive_probability) {
            return Err(ConfigError::InvalidProbability(alive_probability));
        }
        let mut grid = Self::new(rows, cols)?;
        let threshold = 1.0 - alive_probability;
        for cell in &mut grid.cells {
            if rng.random::<f64>() > threshold {
                *cell = Cell::Alive;
            }
        }
        Ok(grid)
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to the row-major index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.index(row, col)])
    }

    /// Set a cell while laying out an initial configuration. Positions
    /// outside the grid are ignored. Once a simulation holds the grid
    /// it is only ever replaced wholesale, never edited.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors with bounded edges: offsets that land
    /// outside the grid contribute nothing, so border cells see fewer
    /// than 8 candidates. No wrap-around.
    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = usize::try_from(row as isize + dr).ok()?;
                let c = usize::try_from(col as isize + dc).ok()?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Compute the next generation. Pure and deterministic: every
    /// neighbor lookup reads this (pre-step) snapshot, never the grid
    /// under construction, so there is no read/write ordering hazard.
    pub fn step(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                let current = self.cells[self.index(row, col)];
                current.next_state(self.live_neighbors(row, col))
            })
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Same transition as [`Grid::step`], rows computed in parallel.
    /// Worth it for large boards; agrees bit-for-bit with `step`.
    pub fn step_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.rows)
            .into_par_iter()
            .flat_map_iter(|row| {
                (0..self.cols).map(move |col| {
                    let current = self.cells[self.index(row, col)];
                    current.next_state(self.live_neighbors(row, col))
                })
            })
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| (row, col, self.cells[self.index(row, col)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid_with_live(rows: usize, cols: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        for &(row, col) in live {
            grid.set(row, col, Cell::Alive);
        }
        grid
    }

    #[test]
    fn test_new_grid_is_all_dead_with_exact_dimensions() {
        let grid = Grid::new(4, 7).unwrap();
        assert_eq!(grid.dimensions(), (4, 7));
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.iter_cells().count(), 28);
        assert!(grid.iter_cells().all(|(_, _, cell)| !cell.is_alive()));
    }

    #[test]
    fn test_cleared_matches_new() {
        assert_eq!(Grid::cleared(3, 5).unwrap(), Grid::new(3, 5).unwrap());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5),
            Err(ConfigError::InvalidDimensions { rows: 0, cols: 5 })
        );
        assert_eq!(
            Grid::new(5, 0),
            Err(ConfigError::InvalidDimensions { rows: 5, cols: 0 })
        );
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.get(2, 2), Some(Cell::Dead));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn test_random_probability_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        let all_dead = Grid::random_with(6, 6, 0.0, &mut rng).unwrap();
        assert_eq!(all_dead.population(), 0);

        let all_alive = Grid::random_with(6, 6, 1.0, &mut rng).unwrap();
        assert_eq!(all_alive.population(), 36);
    }

    #[test]
    fn test_random_probability_out_of_range_rejected() {
        assert_eq!(
            Grid::random(5, 5, -0.01),
            Err(ConfigError::InvalidProbability(-0.01))
        );
        assert_eq!(
            Grid::random(5, 5, 1.01),
            Err(ConfigError::InvalidProbability(1.01))
        );
    }

    #[test]
    fn test_random_is_reproducible_with_a_seed() {
        let a = Grid::random_with(10, 10, 0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Grid::random_with(10, 10, 0.3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_step_is_deterministic() {
        let grid = Grid::random_with(8, 8, 0.4, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(grid.step(), grid.step());
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let grid = grid_with_live(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let before = grid.clone();
        let _ = grid.step();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_block_is_a_still_life() {
        let mut grid = Grid::new(5, 5).unwrap();
        presets::BLOCK.place_on(&mut grid, 1, 1);
        assert_eq!(grid.step(), grid);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let horizontal = grid_with_live(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = grid_with_live(5, 5, &[(1, 2), (2, 2), (3, 2)]);

        assert_eq!(horizontal.step(), vertical);
        assert_eq!(vertical.step(), horizontal);
    }

    #[test]
    fn test_lone_cell_dies_of_isolation() {
        let grid = grid_with_live(3, 3, &[(1, 1)]);
        assert_eq!(grid.step().population(), 0);
    }

    #[test]
    fn test_birth_with_exactly_three_neighbors() {
        // (1, 1) is dead with 3 live neighbors and must come alive
        let grid = grid_with_live(4, 4, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(grid.step().get(1, 1), Some(Cell::Alive));

        // with only 2 neighbors it stays dead
        let grid = grid_with_live(4, 4, &[(0, 0), (0, 2)]);
        assert_eq!(grid.step().get(1, 1), Some(Cell::Dead));

        // with 4 neighbors it stays dead
        let grid = grid_with_live(4, 4, &[(0, 0), (0, 1), (0, 2), (1, 0)]);
        assert_eq!(grid.step().get(1, 1), Some(Cell::Dead));
    }

    #[test]
    fn test_corner_cell_neighbor_count_is_truncated() {
        let grid = grid_with_live(4, 4, &[(0, 1), (1, 0), (1, 1)]);
        assert_eq!(grid.live_neighbors(0, 0), 3);
        // the corner comes alive from exactly those 3 neighbors
        assert_eq!(grid.step().get(0, 0), Some(Cell::Alive));
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // A full rightmost column must not feed neighbor counts in the
        // leftmost column.
        let grid = grid_with_live(3, 5, &[(0, 4), (1, 4), (2, 4)]);
        assert_eq!(grid.live_neighbors(1, 0), 0);
        let next = grid.step();
        assert_eq!(next.get(1, 0), Some(Cell::Dead));
        // while the column itself behaves like a blinker against the edge
        assert_eq!(next.get(1, 3), Some(Cell::Alive));
    }

    #[test]
    fn test_step_parallel_agrees_with_step() {
        let grid = Grid::random_with(32, 48, 0.35, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(grid.step_parallel(), grid.step());
    }
}
