pub mod input;
pub mod render;
pub mod state;

pub use state::{App, RunSummary};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};

use tessera_tui::Tui;

impl App {
    /// Runs the remaining generations without touching the terminal.
    pub fn run_headless(&mut self) -> Result<RunSummary> {
        let started = Instant::now();
        while self.running && self.remaining() > 0 {
            self.step()?;
        }
        self.finish(started.elapsed())
    }

    /// Runs the remaining generations, redrawing after each one and waiting
    /// `delay_ms` in between. Esc, `q` or Ctrl-C stop early.
    pub fn run(&mut self, tui: &mut Tui) -> Result<RunSummary> {
        let started = Instant::now();
        let delay = self.config.run.delay();

        tui.terminal.draw(|f| self.draw(f))?;
        while self.running && self.remaining() > 0 {
            self.step()?;
            tui.terminal.draw(|f| self.draw(f))?;
            self.wait(delay)?;
        }
        self.finish(started.elapsed())
    }

    /// Sleeps for `delay` while still reacting to key presses.
    fn wait(&mut self, delay: Duration) -> Result<()> {
        let deadline = Instant::now() + delay;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if !event::poll(left)? {
                return Ok(());
            }
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
            if !self.running || left.is_zero() {
                return Ok(());
            }
        }
    }
}
