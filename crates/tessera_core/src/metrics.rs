//! Performance metrics collection for the simulation.
//!
//! Provides structured logging and step timing for monitoring simulation
//! performance.

use std::time::Duration;

use tracing_subscriber::EnvFilter;

/// Per-run step statistics.
#[derive(Debug, Clone)]
pub struct StepMetrics {
    generations: u64,
    total: Duration,
    last: Duration,
    population: usize,
    log_interval: u64,
}

impl Default for StepMetrics {
    fn default() -> Self {
        Self::new(50)
    }
}

impl StepMetrics {
    /// Creates a collector that logs every `log_interval` generations.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            generations: 0,
            total: Duration::ZERO,
            last: Duration::ZERO,
            population: 0,
            log_interval: log_interval.max(1),
        }
    }

    /// Records a completed generation with its wall-clock duration.
    pub fn record_step(&mut self, duration: Duration, population: usize) {
        self.generations += 1;
        self.total += duration;
        self.last = duration;
        self.population = population;

        if self.generations % self.log_interval == 0 {
            tracing::info!(
                generation = self.generations,
                population = population,
                step_us = duration.as_micros() as u64,
                avg_ms = self.average_ms(),
                "Simulation step"
            );
        }
    }

    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Time spent inside `step` only, excluding rendering and delays.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.total
    }

    #[must_use]
    pub fn last(&self) -> Duration {
        self.last
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.population
    }

    /// Mean step duration in milliseconds, 0 before the first step.
    #[must_use]
    pub fn average_ms(&self) -> f64 {
        if self.generations == 0 {
            return 0.0;
        }
        self.total.as_secs_f64() * 1000.0 / self.generations as f64
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` always wins. Otherwise `default_level` is used, and `None`
/// leaves logging off entirely (the terminal renderer owns the screen).
pub fn init_logging(default_level: Option<tracing::Level>) {
    let filter = match (std::env::var("RUST_LOG"), default_level) {
        (Ok(spec), _) => EnvFilter::new(spec),
        (Err(_), Some(level)) => EnvFilter::new(level.as_str()),
        (Err(_), None) => return,
    };
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
