/// Cell is the state of one grid position.
/// Exactly two states exist; there is no numeric encoding to get wrong.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Check if the cell is currently dead
    pub const fn is_dead(self) -> bool {
        matches!(self, Cell::Dead)
    }

    /// Next state under the classic Life rule (B3/S23):
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    /// Single character used by the text rendering of a board
    pub const fn glyph(self) -> char {
        match self {
            Cell::Alive => '#',
            Cell::Dead => '.',
        }
    }
}
