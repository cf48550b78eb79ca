use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

use super::{Cell, Torus};
use crate::config::{Config, ConfigError, LiveProbability};

/// The 8 neighbor offsets: row above, same row, row below.
/// The center `(0, 0)` is never part of the count.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 1), (0, 1), (1, 1),
    (-1, 0),         (1, 0),
    (-1, -1), (0, -1), (1, -1),
];

#[derive(Debug, Error, PartialEq)]
pub enum BoardError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("expected {expected} cells for the grid, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("row {row} has {len} cells, expected {width}")]
    RaggedRow { row: usize, len: usize, width: usize },

    #[error("unrecognized cell glyph '{0}'")]
    UnknownGlyph(char),
}

/// Board holds one generation of the toroidal grid.
/// Transitions never mutate a board; `turn` builds the next one.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    torus: Torus,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with every cell dead
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        let torus = Torus::new(width, height);
        Self {
            torus,
            cells: vec![Cell::Dead; torus.area()],
        }
    }

    /// Create an all-dead board sized by a validated config
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.width, config.height))
    }

    /// Wrap an existing row-major buffer
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyGrid { width, height });
        }
        let expected = width.saturating_mul(height);
        if cells.len() != expected {
            return Err(BoardError::LengthMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self {
            torus: Torus::new(width, height),
            cells,
        })
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.torus.width(), self.torus.height())
    }

    /// Seed every cell independently: alive with the given probability, dead otherwise.
    pub fn populate<R: Rng>(&mut self, rng: &mut R, probability: LiveProbability) {
        let p = probability.get();
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(p) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
    }

    /// Set every cell dead
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Cell at a coordinate, wrapping one step past any edge
    pub fn cell_at(&self, x: isize, y: isize) -> Cell {
        self.cells[self.torus.index(x, y)]
    }

    pub fn set(&mut self, x: isize, y: isize, cell: Cell) {
        let idx = self.torus.index(x, y);
        self.cells[idx] = cell;
    }

    /// Count live cells among the 8 wrapped neighbors of `(x, y)`
    pub fn living_neighbors(&self, x: isize, y: isize) -> u8 {
        let (x, y) = self.torus.wrap(x, y);
        let (x, y) = (x as isize, y as isize);

        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| self.cell_at(x + dx, y + dy))
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Apply the Life rule to every cell, returning the next generation.
    /// Reads only `self`, so traversal order cannot affect the result.
    pub fn turn(&self) -> Self {
        let (width, height) = self.dimensions();
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x as isize, y as isize)))
            .map(|(x, y)| self.cell_at(x, y).evolve(self.living_neighbors(x, y)))
            .collect();

        Self {
            torus: self.torus,
            cells,
        }
    }

    pub fn any_alive(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_alive())
    }

    pub fn any_dead(&self) -> bool {
        self.cells.iter().any(|cell| cell.is_dead())
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| {
                let (x, y) = self.torus.coords(i);
                (x, y, cell)
            })
    }
}

/// One line per row, `#` for alive and `.` for dead
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, _) = self.dimensions();
        for (i, row) in self.cells.chunks(width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let width = rows.first().map_or(0, |row| row.chars().count());
        let height = rows.len();

        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != width {
                return Err(BoardError::RaggedRow { row, len, width });
            }
            for ch in line.chars() {
                cells.push(match ch {
                    '#' | 'O' | 'o' => Cell::Alive,
                    '.' | '_' => Cell::Dead,
                    other => return Err(BoardError::UnknownGlyph(other)),
                });
            }
        }

        Self::from_cells(width, height, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_new_board_is_dead() {
        let b = Board::new(7, 5);
        assert_eq!(b.dimensions(), (7, 5));
        assert_eq!(b.iter_cells().count(), 35);
        assert!(!b.any_alive());
        assert!(b.any_dead());
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        assert_eq!(
            Board::from_cells(3, 3, vec![Cell::Dead; 8]),
            Err(BoardError::LengthMismatch { expected: 9, actual: 8 })
        );
        assert_eq!(
            Board::from_cells(0, 3, Vec::new()),
            Err(BoardError::EmptyGrid { width: 0, height: 3 })
        );
    }

    #[test]
    fn test_from_config_validates() {
        assert!(Board::from_config(&Config::new(0, 3)).is_err());
        assert_eq!(Board::from_config(&Config::new(4, 2)).unwrap().dimensions(), (4, 2));
    }

    #[test]
    fn test_parse_and_display() {
        let text = "#..\n.#.\n..#";
        let b = board(text);
        assert_eq!(b.dimensions(), (3, 3));
        assert_eq!(b.population(), 3);
        assert_eq!(b.to_string(), text);

        assert_eq!(
            "##\n#".parse::<Board>(),
            Err(BoardError::RaggedRow { row: 1, len: 1, width: 2 })
        );
        assert_eq!("#x".parse::<Board>(), Err(BoardError::UnknownGlyph('x')));
        assert!("".parse::<Board>().is_err());
    }

    #[test]
    fn test_corner_wraps_to_opposite_edges() {
        // Only (3,3), (3,0) and (0,3) are alive: all three touch (0,0)
        let b = board(
            "...#
             ....
             ....
             #..#",
        );
        assert_eq!(b.living_neighbors(0, 0), 3);
        assert_eq!(b.cell_at(-1, -1), Cell::Alive);
        assert_eq!(b.cell_at(4, 4), Cell::Dead);
    }

    #[test]
    fn test_center_is_not_counted() {
        let b = board(
            "...
             .#.
             ...",
        );
        assert_eq!(b.living_neighbors(1, 1), 0);
        assert_eq!(b.living_neighbors(0, 0), 1);
    }

    #[test]
    fn test_full_neighborhood() {
        let b = board(
            "###.
             ###.
             ###.
             ....",
        );
        assert_eq!(b.living_neighbors(1, 1), 8);
    }

    #[test]
    fn test_turn_does_not_mutate_input() {
        let mut b = Board::new(16, 12);
        b.populate(&mut StdRng::seed_from_u64(7), LiveProbability::default());
        let before = b.clone();
        let next = b.turn();
        assert_eq!(b, before);
        assert_eq!(next.dimensions(), b.dimensions());
    }

    #[test]
    fn test_block_is_still_life() {
        let mut b = Board::new(6, 6);
        for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
            b.set(x, y, Cell::Alive);
        }
        let mut next = b.clone();
        for _ in 0..5 {
            next = next.turn();
            assert_eq!(next, b);
        }
    }

    #[test]
    fn test_blinker_period_two() {
        let horizontal = board(
            ".....
             .....
             .###.
             .....
             .....",
        );
        let vertical = board(
            ".....
             ..#..
             ..#..
             ..#..
             .....",
        );
        let once = horizontal.turn();
        assert_eq!(once, vertical);
        assert_ne!(once, horizontal);
        assert_eq!(once.turn(), horizontal);
    }

    #[test]
    fn test_empty_board_stays_empty() {
        let mut b = Board::new(9, 4);
        for _ in 0..4 {
            b = b.turn();
            assert!(!b.any_alive());
        }
    }

    #[test]
    fn test_full_board_dies() {
        let mut b = Board::new(5, 5);
        b.populate(&mut StdRng::seed_from_u64(1), LiveProbability::ALWAYS);
        assert!(!b.any_dead());
        // every cell has 8 live neighbors
        assert!(!b.turn().any_alive());
    }

    #[test]
    fn test_populate_extremes() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut b = Board::new(20, 10);

        b.populate(&mut rng, LiveProbability::ALWAYS);
        assert_eq!(b.population(), 200);

        b.populate(&mut rng, LiveProbability::NEVER);
        assert_eq!(b.population(), 0);
    }

    #[test]
    fn test_populate_default_ratio() {
        let mut b = Board::new(100, 100);
        b.populate(&mut StdRng::seed_from_u64(3), LiveProbability::default());
        let alive = b.population() as f64 / 10_000.0;
        assert!((0.30..0.37).contains(&alive), "alive fraction {alive}");
    }

    #[test]
    fn test_populate_is_reproducible() {
        let mut a = Board::new(12, 12);
        let mut b = Board::new(12, 12);
        a.populate(&mut StdRng::seed_from_u64(99), LiveProbability::default());
        b.populate(&mut StdRng::seed_from_u64(99), LiveProbability::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_iter_cells_positions() {
        let b = board(
            "..
             .#
             ..",
        );
        let alive: Vec<_> = b
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(alive, vec![(1, 1)]);
    }

    #[test]
    fn test_clear() {
        let mut b = Board::new(3, 3);
        b.populate(&mut StdRng::seed_from_u64(0), LiveProbability::ALWAYS);
        b.clear();
        assert_eq!(b, Board::new(3, 3));
    }
}
