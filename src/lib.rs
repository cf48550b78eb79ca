// Domain layer - board, coordinate mapping and the Life rule
pub mod domain;

// Simulation settings
pub mod config;

// Application layer - stepping and pacing
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Board, BoardError, Cell, Pattern, Torus, presets};
pub use config::{Config, ConfigError, LiveProbability};
pub use application::Simulation;
