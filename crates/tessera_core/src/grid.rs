//! The authoritative board.
//!
//! Only the orchestrator writes here, and only between generations. Tile
//! workers get a read-only [`GridView`] of their own block for the duration
//! of a generation.

use rayon::prelude::*;
use tessera_data::Cell;

use crate::direction::{wrap, Direction};
use crate::tile::TileBlock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        let idx = self.index(row, col);
        &mut self.cells[idx]
    }

    /// One row of cells.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.cols]
    }

    /// The single full neighbor pass, run once at load time: every live cell
    /// adds one to each of its 8 toroidal neighbors.
    pub fn bootstrap_neighbors(&mut self) {
        for cell in &mut self.cells {
            cell.neighbors = 0;
        }
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.cell(row, col).alive {
                    self.add_to_neighbors(row, col, 1);
                }
            }
        }
    }

    fn add_to_neighbors(&mut self, row: usize, col: usize, delta: i8) {
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset();
            let nr = wrap(row, dr, self.rows);
            let nc = wrap(col, dc, self.cols);
            self.cell_mut(nr, nc).apply_neighbor_delta(delta);
        }
    }

    /// Counts live neighbors of every cell from scratch, row-parallel.
    ///
    /// This never feeds back into the simulation; it exists to audit the
    /// incremental counts.
    pub fn census(&self) -> Vec<u8> {
        let mut counts = vec![0u8; self.cells.len()];
        counts
            .par_chunks_mut(self.cols)
            .enumerate()
            .for_each(|(row, out)| {
                for (col, slot) in out.iter_mut().enumerate() {
                    *slot = Direction::ALL
                        .iter()
                        .filter(|dir| {
                            let (dr, dc) = dir.offset();
                            self.cell(wrap(row, dr, self.rows), wrap(col, dc, self.cols))
                                .alive
                        })
                        .count() as u8;
                }
            });
        counts
    }

    pub fn population(&self) -> usize {
        self.cells.par_iter().filter(|cell| cell.alive).count()
    }

    /// Coordinates of live cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.alive)
            .map(|(idx, _)| (idx / self.cols, idx % self.cols))
    }

    /// Read-only window over a `height` x `width` block at `origin`.
    pub fn view(&self, origin: (usize, usize), height: usize, width: usize) -> GridView<'_> {
        GridView {
            grid: self,
            origin_row: origin.0,
            origin_col: origin.1,
            height,
            width,
        }
    }

    /// Copies every tile block back into place. `blocks` is indexed by tile
    /// id and must hold all `tiles_per_side`² tiles of equal shape.
    pub fn commit(&mut self, blocks: &[&TileBlock], tiles_per_side: usize) {
        let Some(first) = blocks.first() else {
            return;
        };
        let (height, width) = (first.height(), first.width());
        self.cells
            .par_chunks_mut(self.cols)
            .enumerate()
            .for_each(|(row, out)| {
                let tile_row = row / height;
                let local_row = row % height;
                for (tile_col, chunk) in out.chunks_mut(width).enumerate() {
                    let block = blocks[tile_row * tiles_per_side + tile_col];
                    chunk.copy_from_slice(block.row(local_row));
                }
            });
    }
}

/// Generation-start state of one tile's block.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    grid: &'a Grid,
    origin_row: usize,
    origin_col: usize,
    height: usize,
    width: usize,
}

impl<'a> GridView<'a> {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell at block-local coordinates.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &'a Cell {
        debug_assert!(row < self.height && col < self.width);
        self.grid.cell(self.origin_row + row, self.origin_col + col)
    }
}
