use super::{Board, Cell};

/// A named arrangement of live cells that can be stamped onto a board
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,  // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Set the pattern's cells alive with its top-left corner at `(x, y)`.
    /// Cells running past an edge continue on the opposite side.
    pub fn place_on(&self, board: &mut Board, x: usize, y: usize) {
        let (width, height) = board.dimensions();
        for &(dx, dy) in &self.cells {
            let px = (x + dx) % width;
            let py = (y + dy) % height;
            board.set(px as isize, py as isize, Cell::Alive);
        }
    }

    /// Place the pattern in the middle of the board
    pub fn place_centered(&self, board: &mut Board) {
        let (width, height) = board.dimensions();
        let x = width.saturating_sub(self.width) / 2;
        let y = height.saturating_sub(self.height) / 2;
        self.place_on(board, x, y);
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    /// Beehive - six-cell still life
    pub fn beehive() -> Pattern {
        Pattern::new(
            "Beehive",
            "Still life",
            vec![
                (1, 0), (2, 0),
                (0, 1), (3, 1),
                (1, 2), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ]
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// R-pentomino - classic methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ]
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            beehive(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            r_pentomino(),
        ]
    }

    /// Look up a preset by name, ignoring case
    pub fn find(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// One `name: description` line per preset
    pub fn listing() -> String {
        all_patterns()
            .iter()
            .map(|p| format!("{}: {}", p.name, p.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
