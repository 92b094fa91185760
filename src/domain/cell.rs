/// A single cell on the board: either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Fixed birth/death rule, as a pure function of the cell's current
    /// state and its live-neighbor count:
    /// - fewer than 2 or more than 3 live neighbors: the cell dies
    /// - exactly 3 live neighbors: the cell is alive (birth or survival)
    /// - exactly 2 live neighbors: the cell keeps its current state
    pub const fn next_state(self, live_neighbors: u8) -> Self {
        match live_neighbors {
            3 => Cell::Alive,
            2 => self,
            _ => Cell::Dead,
        }
    }
}
