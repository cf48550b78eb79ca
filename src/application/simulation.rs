use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::config::{Config, ConfigError, LiveProbability};
use crate::domain::Board;

/// Simulation drives a board from one generation to the next.
///
/// `step` advances exactly one generation and can be called at any cadence.
/// `tick` layers frame pacing on top for a host with a render loop.
pub struct Simulation {
    pub board: Board,
    rng: StdRng,
    live_probability: LiveProbability,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub generations_per_second: f32,
    pub last_turn_time_ms: f32,
}

impl Simulation {
    /// Build a seeded board from `config`
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let mut board = Board::from_config(config)?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        board.populate(&mut rng, config.live_probability);

        info!(
            width = config.width,
            height = config.height,
            live_probability = config.live_probability.get(),
            seed = ?config.seed,
            population = board.population(),
            "simulation created"
        );

        Ok(Self {
            board,
            rng,
            live_probability: config.live_probability,
            is_running: true,
            generation: 0,
            update_timer: 0.0,
            generations_per_second: config.generations_per_second,
            last_turn_time_ms: 0.0,
        })
    }

    /// Advance one generation, replacing the board
    pub fn step(mut self) -> Self {
        let start = std::time::Instant::now();
        let was_alive = self.board.any_alive();
        let was_dead = self.board.any_dead();

        self.board = self.board.turn();
        self.generation += 1;
        self.last_turn_time_ms = start.elapsed().as_secs_f32() * 1000.0;

        trace!(
            generation = self.generation,
            population = self.board.population(),
            elapsed_ms = self.last_turn_time_ms,
            "turn"
        );
        if was_alive && self.is_extinct() {
            debug!(generation = self.generation, "board died out");
        }
        if was_dead && self.is_saturated() {
            debug!(generation = self.generation, "board is completely alive");
        }

        self
    }

    /// Update simulation by one frame, stepping once the interval has elapsed
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.generations_per_second;

        // Carry the overshoot so the rate does not drift with the frame rate
        if self.update_timer >= update_interval {
            self.update_timer -= update_interval;
            self = self.step();
        }

        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        debug!(running = self.is_running, "toggled");
        self
    }

    /// Draw a fresh random board and reset the generation counter
    pub fn reseed(mut self) -> Self {
        self.board.populate(&mut self.rng, self.live_probability);
        self.generation = 0;
        self.update_timer = 0.0;
        info!(population = self.board.population(), "board reseeded");
        self
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(mut self) -> Self {
        self.board.clear();
        self.generation = 0;
        self.update_timer = 0.0;
        info!("board cleared");
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.generations_per_second = (self.generations_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// No cell is alive; the board will never change again
    pub fn is_extinct(&self) -> bool {
        !self.board.any_alive()
    }

    /// Every cell is alive
    pub fn is_saturated(&self) -> bool {
        !self.board.any_dead()
    }
}
