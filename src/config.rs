use thiserror::Error;

/// Window the host opens by default
pub const WINDOW_WIDTH: usize = 1024;
pub const WINDOW_HEIGHT: usize = 768;
/// Cells are square, this many pixels on a side
pub const PIXEL_SIZE: usize = 5;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid {width}x{height} is too large")]
    GridTooLarge { width: usize, height: usize },

    #[error("pixel size must be non-zero")]
    ZeroPixelSize,

    #[error("live probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("generations per second must be positive and finite, got {0}")]
    InvalidRate(f32),
}

/// Chance that the initializer makes a cell alive.
///
/// Always within `[0, 1]`, so sampling with it can never fail.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LiveProbability(f64);

impl LiveProbability {
    /// Every cell starts dead
    pub const NEVER: Self = Self(0.0);
    /// Every cell starts alive
    pub const ALWAYS: Self = Self(1.0);

    pub fn new(p: f64) -> Result<Self, ConfigError> {
        if (0.0..=1.0).contains(&p) {
            Ok(Self(p))
        } else {
            Err(ConfigError::InvalidProbability(p))
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for LiveProbability {
    /// One alive outcome against two dead ones
    fn default() -> Self {
        Self(1.0 / 3.0)
    }
}

/// Immutable simulation settings handed to the board and the driver.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub live_probability: LiveProbability,
    /// Fixed seed for reproducible runs; `None` draws one from the OS
    pub seed: Option<u64>,
    pub generations_per_second: f32,
}

impl Config {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Grid that exactly covers a window of square pixels
    pub fn for_window(
        window_width: usize,
        window_height: usize,
        pixel_size: usize,
    ) -> Result<Self, ConfigError> {
        if pixel_size == 0 {
            return Err(ConfigError::ZeroPixelSize);
        }
        let config = Self::new(window_width / pixel_size, window_height / pixel_size);
        config.validate()?;
        Ok(config)
    }

    pub fn with_live_probability(mut self, live_probability: LiveProbability) -> Self {
        self.live_probability = live_probability;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_generations_per_second(mut self, rate: f32) -> Self {
        self.generations_per_second = rate;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        if !width
            .checked_mul(height)
            .is_some_and(|area| area <= isize::MAX as usize)
        {
            return Err(ConfigError::GridTooLarge { width, height });
        }
        if !(self.generations_per_second.is_finite() && self.generations_per_second > 0.0) {
            return Err(ConfigError::InvalidRate(self.generations_per_second));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH / PIXEL_SIZE,
            height: WINDOW_HEIGHT / PIXEL_SIZE,
            live_probability: LiveProbability::default(),
            seed: None,
            generations_per_second: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_window() {
        let config = Config::default();
        assert_eq!((config.width, config.height), (204, 153));
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(
            Config::for_window(WINDOW_WIDTH, WINDOW_HEIGHT, PIXEL_SIZE),
            Ok(config)
        );
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert_eq!(
            Config::new(0, 10).validate(),
            Err(ConfigError::EmptyGrid { width: 0, height: 10 })
        );
        assert_eq!(
            Config::for_window(4, 100, 5),
            Err(ConfigError::EmptyGrid { width: 0, height: 20 })
        );
        assert_eq!(Config::for_window(100, 100, 0), Err(ConfigError::ZeroPixelSize));
    }

    #[test]
    fn test_rate_rejected() {
        let config = Config::new(10, 10).with_generations_per_second(0.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidRate(0.0)));
    }

    #[test]
    fn test_probability_bounds() {
        assert!(LiveProbability::new(0.0).is_ok());
        assert!(LiveProbability::new(1.0).is_ok());
        assert_eq!(LiveProbability::new(1.5), Err(ConfigError::InvalidProbability(1.5)));
        assert!(LiveProbability::new(f64::NAN).is_err());
        assert_eq!(LiveProbability::default().get(), 1.0 / 3.0);
    }
}
