use std::io;
use std::path::Path;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::DEFAULT_TWO_PROBABILITY;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("spawn_two_probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
}

/// Game settings, loadable from TOML. Every field is optional in the file.
///
/// ```toml
/// seed = 42
/// spawn_two_probability = 0.9
/// origin_x = 1
/// origin_y = 1
/// show_key_guide = true
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// RNG seed. Drawn at random when absent.
    pub seed: Option<u64>,
    /// Chance that a spawned tile is a 2 (otherwise 4).
    pub spawn_two_probability: f64,
    /// One-based terminal column of the board's top-left corner.
    pub origin_x: u16,
    /// One-based terminal row of the board's top-left corner.
    pub origin_y: u16,
    /// Show the key guide before the first board.
    pub show_key_guide: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            seed: None,
            spawn_two_probability: DEFAULT_TWO_PROBABILITY,
            origin_x: 1,
            origin_y: 1,
            show_key_guide: true,
        }
    }
}

impl GameConfig {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.spawn_two_probability) {
            return Err(ConfigError::InvalidProbability(self.spawn_two_probability));
        }
        Ok(())
    }

    /// Zero-based (column, row) for the renderer. Zero is read as one.
    pub fn origin(&self) -> (u16, u16) {
        (self.origin_x.max(1) - 1, self.origin_y.max(1) - 1)
    }

    /// Seeded RNG for the spawner. Logs the seed so a game can be replayed.
    pub fn rng(&self) -> StdRng {
        let seed = self.seed.unwrap_or_else(rand::random);
        info!("using seed {seed}");
        StdRng::seed_from_u64(seed)
    }
}
