mod cell;
mod torus;
mod board;
mod patterns;

pub use cell::Cell;
pub use torus::Torus;
pub use board::{Board, BoardError};
pub use patterns::{Pattern, presets};
