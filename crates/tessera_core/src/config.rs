//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration mapping onto `config.toml`. Command-line
//! flags override whatever the file (or the defaults) provide.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! rows = 128
//! cols = 128
//! tiles_per_side = 4
//! density = 0.3
//! seed = 14
//!
//! [rules]
//! survive_lower = 1
//! survive_upper = 4
//! birth = 3
//!
//! [run]
//! iterations = 500
//! plot = false
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tessera_data::RuleSet;

use crate::error::Result as EngineResult;
use crate::tiling::Tiling;

/// Board shape, decomposition and initial population.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub rows: usize,
    pub cols: usize,
    pub tiles_per_side: usize,
    /// Probability that a generated cell starts alive.
    pub density: f64,
    pub seed: u64,
    /// Board file to load instead of generating one.
    pub board: Option<PathBuf>,
    /// Where generated boards are cached.
    pub board_dir: PathBuf,
    /// Stop reading a board at its first malformed record instead of failing.
    pub lenient_boards: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            rows: 64,
            cols: 64,
            tiles_per_side: 1,
            density: 0.3,
            seed: 14,
            board: None,
            board_dir: PathBuf::from("setup"),
            lenient_boards: false,
        }
    }
}

impl WorldConfig {
    /// Tile decomposition of the generated board. Unused when `board` names
    /// a file.
    pub fn tiling(&self) -> EngineResult<Tiling> {
        Tiling::new(self.rows, self.cols, self.tiles_per_side)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RunConfig {
    pub iterations: u64,
    /// Draw every generation in the terminal.
    pub plot: bool,
    pub delay_ms: u64,
    /// Audit neighbor counts every N generations; 0 disables it.
    pub verify_every: u64,
    /// Diagnostic limit on each boundary receive.
    pub exchange_timeout_ms: Option<u64>,
    pub log_interval: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: 150,
            plot: true,
            delay_ms: 30,
            verify_every: 0,
            exchange_timeout_ms: None,
            log_interval: 50,
        }
    }
}

impl RunConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn exchange_timeout(&self) -> Option<Duration> {
        self.exchange_timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub rules: RuleSet,
    pub run: RunConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a
    /// description of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.world.tiles_per_side > 0,
            "Tiles per side must be positive"
        );
        // A board file brings its own size; `World::load` checks that one.
        if self.world.board.is_none() {
            self.world
                .tiling()
                .context("Generated board does not split into tiles")?;
        }
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.world.density),
            "Density must be in [0.0, 1.0]"
        );

        anyhow::ensure!(
            self.rules.survive_lower <= 8 && self.rules.survive_upper <= 9,
            "Survival thresholds must lie within the 8-cell neighborhood"
        );
        anyhow::ensure!(
            self.rules.survive_lower < self.rules.survive_upper,
            "Lower survival threshold must be below the upper one"
        );
        anyhow::ensure!(self.rules.birth <= 8, "Birth count must be at most 8");

        anyhow::ensure!(self.run.log_interval > 0, "Log interval must be positive");
        if let Some(timeout) = self.run.exchange_timeout_ms {
            anyhow::ensure!(timeout > 0, "Exchange timeout must be positive");
        }
        Ok(())
    }

    /// Parses and validates TOML content.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` when it exists, otherwise falls back to defaults. A file
    /// that exists but does not parse or validate is an error.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| e.context(format!("invalid config file {}", path.display())))
    }
}
