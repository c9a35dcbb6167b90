//! Configuration loading and typed config structures for Lifegrid.
//!
//! The canonical configuration lives in `lifegrid-config.yaml`. This module
//! defines strongly-typed structs that mirror the YAML structure, and
//! provides a loader that reads and validates the file. Every field has a
//! default, so an empty file (or no file) yields a runnable configuration.

use std::path::Path;

use lifegrid_board::{DenseSeed, MAX_CELLS, MAX_DIMENSION};
use lifegrid_types::BoardKind;
use serde::Deserialize;

/// Environment variable overriding `logging.level`.
pub const LOG_LEVEL_ENV: &str = "LIFEGRID_LOG_LEVEL";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but describes an impossible board.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level Lifegrid configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LifegridConfig {
    /// Board strategy, size, and seed.
    #[serde(default)]
    pub board: BoardConfig,

    /// Generation runner bounds and pacing.
    #[serde(default)]
    pub runner: RunnerConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LifegridConfig {
    /// Load and validate configuration from a YAML file.
    ///
    /// `LIFEGRID_LOG_LEVEL` overrides `logging.level` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to `()`, not to a struct.
        let mut config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yml::from_str(yaml)?
        };
        config.logging.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Check the values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a dense board with a zero or
    /// oversized side or too many cells, or a random seed density outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let board = &self.board;
        if board.kind == BoardKind::Dense {
            if board.width == 0 || board.height == 0 {
                return Err(ConfigError::Invalid {
                    reason: format!(
                        "board.width and board.height must be at least 1 (got {}x{})",
                        board.width, board.height
                    ),
                });
            }
            if board.width > MAX_DIMENSION || board.height > MAX_DIMENSION {
                return Err(ConfigError::Invalid {
                    reason: format!("board sides must not exceed {MAX_DIMENSION}"),
                });
            }
            let cells = u64::from(board.width).saturating_mul(u64::from(board.height));
            if usize::try_from(cells).ok().is_none_or(|cells| cells > MAX_CELLS) {
                return Err(ConfigError::Invalid {
                    reason: format!(
                        "board must not exceed {MAX_CELLS} cells (got {}x{})",
                        board.width, board.height
                    ),
                });
            }
            if board.seed == SeedMode::Random && !(0.0..=1.0).contains(&board.density) {
                return Err(ConfigError::Invalid {
                    reason: format!("board.density must be within [0, 1] (got {})", board.density),
                });
            }
        }
        Ok(())
    }
}

/// How a dense board is populated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedMode {
    /// Every cell alive.
    AllAlive,
    /// Every cell dead.
    Empty,
    /// Each cell alive with probability `board.density`.
    Random,
}

/// Board configuration.
///
/// `width`, `height`, `seed`, `density`, and `rng_seed` apply to dense
/// boards only; a sparse board always starts from its fixed seed pattern.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoardConfig {
    /// Storage strategy.
    #[serde(default = "default_board_kind")]
    pub kind: BoardKind,

    /// Grid width in cells.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Grid height in cells.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Initial population.
    #[serde(default = "default_seed_mode")]
    pub seed: SeedMode,

    /// Probability a cell starts alive under [`SeedMode::Random`].
    #[serde(default = "default_density")]
    pub density: f64,

    /// Seed for the pseudo-random generator under [`SeedMode::Random`].
    #[serde(default = "default_rng_seed")]
    pub rng_seed: u64,
}

impl BoardConfig {
    /// The dense seed this configuration describes.
    pub const fn dense_seed(&self) -> DenseSeed {
        match self.seed {
            SeedMode::AllAlive => DenseSeed::AllAlive,
            SeedMode::Empty => DenseSeed::Empty,
            SeedMode::Random => DenseSeed::Random {
                density: self.density,
                rng_seed: self.rng_seed,
            },
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            kind: default_board_kind(),
            width: default_width(),
            height: default_height(),
            seed: default_seed_mode(),
            density: default_density(),
            rng_seed: default_rng_seed(),
        }
    }
}

/// Generation runner configuration.
///
/// A value of 0 for `max_generations` means unlimited; a value of 0 for
/// `stagnation_window` disables stagnation detection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunnerConfig {
    /// Stop after this many ticks (0 = unlimited).
    #[serde(default = "default_max_generations")]
    pub max_generations: u64,

    /// Real-time milliseconds to wait between ticks.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Stop as soon as no cell is alive.
    #[serde(default = "default_true")]
    pub stop_on_extinction: bool,

    /// Number of past generations compared against the current one.
    #[serde(default = "default_stagnation_window")]
    pub stagnation_window: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_generations: default_max_generations(),
            tick_interval_ms: default_tick_interval_ms(),
            stop_on_extinction: true,
            stagnation_window: default_stagnation_window(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    /// Override the level with `LIFEGRID_LOG_LEVEL` when set.
    pub fn apply_env_overrides(&mut self) {
        self.override_level(std::env::var(LOG_LEVEL_ENV).ok());
    }

    /// Replace the level with a non-blank `level`.
    fn override_level(&mut self, level: Option<String>) {
        if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
            self.level = level;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_board_kind() -> BoardKind {
    BoardKind::Dense
}

const fn default_width() -> u32 {
    64
}

const fn default_height() -> u32 {
    48
}

const fn default_seed_mode() -> SeedMode {
    SeedMode::Random
}

const fn default_density() -> f64 {
    0.35
}

const fn default_rng_seed() -> u64 {
    42
}

const fn default_max_generations() -> u64 {
    500
}

const fn default_tick_interval_ms() -> u64 {
    100
}

const fn default_stagnation_window() -> usize {
    10
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_true() -> bool {
    true
}
