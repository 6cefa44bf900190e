use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tessera_core::{AppConfig, BoardSpec, StepMetrics, World};
use tessera_io::{ensure_random_board, read_board, write_json_file, ParseMode};

/// What a finished run reports.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub iterations: u64,
    /// Wall-clock time of the whole run, drawing and delays included.
    pub elapsed: Duration,
    /// Mean time spent inside `World::step`.
    pub average_ms: f64,
    pub population: usize,
    pub fingerprint: String,
}

pub struct App {
    pub running: bool,
    pub world: World,
    pub config: AppConfig,
    pub metrics: StepMetrics,
    /// Final board is written here as JSON when set.
    pub snapshot: Option<PathBuf>,
}

impl App {
    /// Reads the configured board file, or the cached random board for the
    /// configured size, density and seed.
    pub fn load_board(config: &AppConfig) -> Result<BoardSpec> {
        let mode = if config.world.lenient_boards {
            ParseMode::Lenient
        } else {
            ParseMode::Strict
        };
        let path = match &config.world.board {
            Some(path) => path.clone(),
            None => ensure_random_board(
                &config.world.board_dir,
                config.world.rows,
                config.world.cols,
                config.world.density,
                config.world.seed,
            )?,
        };
        let board = read_board(&path, mode)?;
        Ok(board)
    }

    pub fn new(config: AppConfig, snapshot: Option<PathBuf>) -> Result<Self> {
        config.validate()?;
        let board = Self::load_board(&config)?;
        let world = World::load(&board, config.world.tiles_per_side, config.rules)
            .context("board does not fit the requested tiling")?
            .with_exchange_timeout(config.run.exchange_timeout());

        Ok(Self {
            running: true,
            world,
            metrics: StepMetrics::new(config.run.log_interval),
            config,
            snapshot,
        })
    }

    /// Generations still to run.
    pub fn remaining(&self) -> u64 {
        self.config
            .run
            .iterations
            .saturating_sub(self.world.generation())
    }

    /// Advances one generation, timing it and auditing the neighbor counts
    /// when `verify_every` says so.
    pub fn step(&mut self) -> Result<()> {
        let started = Instant::now();
        self.world.step()?;
        let elapsed = started.elapsed();
        self.metrics.record_step(elapsed, self.world.population());

        let every = self.config.run.verify_every;
        if every > 0 && self.world.generation() % every == 0 {
            self.world.verify_invariant()?;
            tracing::debug!(generation = self.world.generation(), "Neighbor counts verified");
        }
        Ok(())
    }

    pub(crate) fn finish(&self, elapsed: Duration) -> Result<RunSummary> {
        if let Some(path) = &self.snapshot {
            write_json_file(&self.world.to_board_spec(), path)
                .with_context(|| format!("writing snapshot {}", path.display()))?;
            tracing::info!(path = %path.display(), "Snapshot written");
        }
        Ok(RunSummary {
            iterations: self.world.generation(),
            elapsed,
            average_ms: self.metrics.average_ms(),
            population: self.world.population(),
            fingerprint: self.world.fingerprint(),
        })
    }
}
