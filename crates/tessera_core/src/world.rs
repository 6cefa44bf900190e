//! The orchestrator: authoritative grid, tile array, generation barrier.
//!
//! A generation has two phases that never overlap:
//!
//! - **compute**: the grid is borrowed shared by every worker (each reads its
//!   own block only) while each tile is borrowed exclusively by its worker;
//! - **commit**: once all P² workers have reported, the grid is borrowed
//!   exclusively and every tile block is copied back.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use sha2::{Digest, Sha256};
use tessera_data::{BoardSpec, Cell, RuleSet};

use crate::boundary;
use crate::error::{EngineError, Result};
use crate::grid::Grid;
use crate::tile::{Tile, TileBlock};
use crate::tiling::Tiling;

pub struct World {
    grid: Grid,
    tiles: Vec<Tile>,
    tiling: Tiling,
    rules: RuleSet,
    generation: u64,
    exchange_timeout: Option<Duration>,
    poisoned: bool,
}

impl World {
    /// Builds a world from a board description.
    ///
    /// The tiling and every coordinate are validated before anything is
    /// allocated. Live cells listed more than once are only counted once.
    pub fn load(board: &BoardSpec, tiles_per_side: usize, rules: RuleSet) -> Result<Self> {
        let tiling = Tiling::new(board.rows, board.cols, tiles_per_side)?;
        if let Some(&(row, col)) = board
            .alive
            .iter()
            .find(|&&(row, col)| row >= board.rows || col >= board.cols)
        {
            return Err(EngineError::OutOfBounds {
                row,
                col,
                rows: board.rows,
                cols: board.cols,
            });
        }

        let mut grid = Grid::new(board.rows, board.cols);
        for &(row, col) in &board.alive {
            grid.cell_mut(row, col).set_state(true);
        }
        grid.bootstrap_neighbors();

        let tiles: Vec<Tile> = boundary::wire(&tiling)
            .into_iter()
            .enumerate()
            .map(|(id, ports)| Tile::new(id, &tiling, &grid, ports))
            .collect();

        tracing::info!(
            rows = board.rows,
            cols = board.cols,
            tiles = tiling.tile_count(),
            tile_height = tiling.tile_height(),
            tile_width = tiling.tile_width(),
            population = grid.population(),
            "World loaded"
        );

        Ok(Self {
            grid,
            tiles,
            tiling,
            rules,
            generation: 0,
            exchange_timeout: None,
            poisoned: false,
        })
    }

    /// Makes every boundary receive give up after `timeout`. Without it a
    /// protocol violation hangs the generation.
    #[must_use]
    pub fn with_exchange_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.exchange_timeout = timeout;
        self
    }

    /// Advances the whole board by one generation.
    ///
    /// A failed generation leaves the tiles half-updated, so the world is
    /// poisoned and refuses further steps. The authoritative grid still holds
    /// the last committed generation.
    pub fn step(&mut self) -> Result<()> {
        if self.poisoned {
            return Err(EngineError::Poisoned {
                generation: self.generation + 1,
            });
        }
        if let Err(err) = self.compute_phase() {
            self.poisoned = true;
            tracing::warn!(generation = self.generation + 1, error = %err, "Generation failed");
            return Err(err);
        }
        self.commit_phase();
        self.generation += 1;
        tracing::debug!(generation = self.generation, "Generation committed");
        Ok(())
    }

    /// Launches one worker per tile and waits for exactly P² completions.
    fn compute_phase(&mut self) -> Result<()> {
        let expected = self.tiles.len();
        let grid = &self.grid;
        let rules = self.rules;
        let timeout = self.exchange_timeout;
        let (done_tx, done_rx) = mpsc::channel::<(usize, Result<()>)>();

        thread::scope(|scope| {
            for tile in self.tiles.iter_mut() {
                let done = done_tx.clone();
                let start = grid.view(tile.origin(), tile.height(), tile.width());
                scope.spawn(move || {
                    let outcome = tile.advance(&start, &rules, timeout);
                    let _ = done.send((tile.id(), outcome));
                });
            }
            drop(done_tx);

            let mut failure = None;
            for received in 0..expected {
                let Ok((id, outcome)) = done_rx.recv() else {
                    return Err(EngineError::WorkerLost { received, expected });
                };
                tracing::trace!(tile = id, "Tile done");
                if let Err(err) = outcome {
                    failure.get_or_insert(err);
                }
            }
            failure.map_or(Ok(()), Err)
        })
    }

    fn commit_phase(&mut self) {
        let blocks: Vec<&TileBlock> = self.tiles.iter().map(Tile::block).collect();
        self.grid.commit(&blocks, self.tiling.tiles_per_side());
    }

    /// Whether `(row, col)` is alive. Panics when out of range.
    pub fn query(&self, row: usize, col: usize) -> bool {
        self.grid.cell(row, col).alive
    }

    /// `(height, width)` of the whole board.
    pub fn dimensions(&self) -> (usize, usize) {
        (
            self.tiling.tile_height() * self.tiling.tiles_per_side(),
            self.tiling.tile_width() * self.tiling.tiles_per_side(),
        )
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        *self.grid.cell(row, col)
    }

    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        self.grid.cell(row, col).neighbors
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Number of committed generations since load.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tiles_per_side(&self) -> usize {
        self.tiling.tiles_per_side()
    }

    pub fn tile(&self, id: usize) -> Option<&Tile> {
        self.tiles.get(id)
    }

    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// Current board in exchange form, live cells in row-major order.
    pub fn to_board_spec(&self) -> BoardSpec {
        BoardSpec::new(self.grid.rows(), self.grid.cols()).with_alive(self.grid.alive_cells())
    }

    /// Neighbor counts recomputed from scratch, row-major.
    pub fn census(&self) -> Vec<u8> {
        self.grid.census()
    }

    /// Checks every incremental neighbor count against a fresh census.
    pub fn verify_invariant(&self) -> Result<()> {
        let cols = self.grid.cols();
        for (idx, expected) in self.census().into_iter().enumerate() {
            let (row, col) = (idx / cols, idx % cols);
            let found = self.grid.cell(row, col).neighbors;
            if found != expected {
                return Err(EngineError::InvariantViolation {
                    row,
                    col,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }

    /// SHA-256 over the dimensions and live-cell bitmap, hex encoded.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.grid.rows() as u64).to_le_bytes());
        hasher.update((self.grid.cols() as u64).to_le_bytes());
        for row in 0..self.grid.rows() {
            let bits: Vec<u8> = self
                .grid
                .row(row)
                .chunks(8)
                .map(|chunk| {
                    chunk
                        .iter()
                        .enumerate()
                        .fold(0u8, |acc, (i, cell)| acc | (u8::from(cell.alive) << i))
                })
                .collect();
            hasher.update(&bits);
        }
        hex::encode(hasher.finalize())
    }
}
