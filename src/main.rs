use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use tessera_core::{init_logging, AppConfig};
use tessera_lib::app::{App, RunSummary};
use tessera_tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Board file to load instead of a generated one
    #[arg(short, long)]
    board: Option<PathBuf>,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    cols: Option<usize>,

    /// Tiles per side; the board is split into sqrt-p x sqrt-p tiles
    #[arg(short = 'p', long)]
    sqrt_p: Option<usize>,

    /// Generations to run
    #[arg(short = 'n', long)]
    iterations: Option<u64>,

    /// Run without drawing the board
    #[arg(long)]
    no_plot: bool,

    /// Milliseconds to wait between drawn generations
    #[arg(long)]
    delay: Option<u64>,

    /// Initial live-cell probability for generated boards
    #[arg(long)]
    density: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Stop reading a board file at its first malformed record
    #[arg(long)]
    lenient: bool,

    /// Audit neighbor counts every N generations
    #[arg(long)]
    verify_every: Option<u64>,

    /// Write the final board as JSON
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Fail a generation when a boundary message takes longer than this
    #[arg(long)]
    exchange_timeout_ms: Option<u64>,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(board) = &self.board {
            config.world.board = Some(board.clone());
        }
        if let Some(rows) = self.rows {
            config.world.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.world.cols = cols;
        }
        if let Some(p) = self.sqrt_p {
            config.world.tiles_per_side = p;
        }
        if let Some(density) = self.density {
            config.world.density = density;
        }
        if let Some(seed) = self.seed {
            config.world.seed = seed;
        }
        if self.lenient {
            config.world.lenient_boards = true;
        }
        if let Some(iterations) = self.iterations {
            config.run.iterations = iterations;
        }
        if self.no_plot {
            config.run.plot = false;
        }
        if let Some(delay) = self.delay {
            config.run.delay_ms = delay;
        }
        if let Some(every) = self.verify_every {
            config.run.verify_every = every;
        }
        if let Some(timeout) = self.exchange_timeout_ms {
            config.run.exchange_timeout_ms = Some(timeout);
        }
    }
}

fn report(summary: &RunSummary) {
    println!(
        "Finished {} iterations in {:?}",
        summary.iterations, summary.elapsed
    );
    println!("Average is {:0.3} ms / It", summary.average_ms);
    println!(
        "Population {} | fingerprint {}",
        summary.population, summary.fingerprint
    );
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = AppConfig::load_or_default(&args.config)?;
    args.apply(&mut config);

    // The board owns the screen while plotting; logs only appear via RUST_LOG.
    init_logging((!config.run.plot).then_some(tracing::Level::INFO));

    let mut app = App::new(config, args.snapshot.clone())?;

    let summary = if app.config.run.plot {
        let mut tui = Tui::new()?;
        tui.init()?;
        let res = app.run(&mut tui);
        tui.exit()?;
        res?
    } else {
        app.run_headless()?
    };

    report(&summary);
    Ok(())
}
