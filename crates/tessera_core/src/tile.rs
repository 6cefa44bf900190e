//! One tile of the decomposition and its per-generation protocol.
//!
//! A generation runs in a fixed order inside every tile:
//!
//! 1. `compute_boundaries`: apply the rules to the one-cell-deep ring and
//!    collect the deltas that leave the tile.
//! 2. `send`: hand the 8 outgoing messages to the neighbor tiles.
//! 3. `compute_internal`: apply the rules to the interior. Every neighbor of
//!    an interior cell is local, so no traffic is produced.
//! 4. `receive_boundaries`: wait for the 8 incoming messages and apply them.
//!
//! Rules are always evaluated against the generation-start state held in the
//! authoritative grid, never against the working copy being updated.

use std::time::Duration;

use tessera_data::{Cell, RuleSet};

use crate::boundary::{Boundary, BoundaryMessage, Ports};
use crate::direction::Direction;
use crate::error::{EngineError, Result};
use crate::grid::{Grid, GridView};
use crate::rules::{RuleLogic, Transition};
use crate::tiling::Tiling;

/// The working copy of a tile's cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileBlock {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl TileBlock {
    /// Copies the `height` x `width` block at `origin` out of `grid`.
    pub fn copy_from(grid: &Grid, origin: (usize, usize), height: usize, width: usize) -> Self {
        let mut cells = Vec::with_capacity(height * width);
        for row in origin.0..origin.0 + height {
            cells.extend_from_slice(&grid.row(row)[origin.1..origin.1 + width]);
        }
        Self {
            height,
            width,
            cells,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.index(row, col)]
    }

    #[inline]
    fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        let idx = self.index(row, col);
        &mut self.cells[idx]
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        let start = self.index(row, 0);
        &self.cells[start..start + self.width]
    }
}

pub struct Tile {
    id: usize,
    position: (usize, usize),
    origin: (usize, usize),
    block: TileBlock,
    ports: Ports,
}

impl Tile {
    pub fn new(id: usize, tiling: &Tiling, grid: &Grid, ports: Ports) -> Self {
        let origin = tiling.origin(id);
        Self {
            id,
            position: tiling.position(id),
            origin,
            block: TileBlock::copy_from(grid, origin, tiling.tile_height(), tiling.tile_width()),
            ports,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// `(row, col)` in the tile array.
    pub fn position(&self) -> (usize, usize) {
        self.position
    }

    /// Board coordinates of the top-left cell.
    pub fn origin(&self) -> (usize, usize) {
        self.origin
    }

    pub fn height(&self) -> usize {
        self.block.height
    }

    pub fn width(&self) -> usize {
        self.block.width
    }

    /// Cell at tile-local coordinates.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.block.cell(row, col)
    }

    pub fn block(&self) -> &TileBlock {
        &self.block
    }

    /// Runs one full generation for this tile. `start` must be this tile's
    /// block of the authoritative grid.
    pub fn advance(
        &mut self,
        start: &GridView<'_>,
        rules: &RuleSet,
        timeout: Option<Duration>,
    ) -> Result<()> {
        let boundary = self.compute_boundaries(start, rules);
        self.send(boundary)?;
        tracing::trace!(tile = self.id, "boundary sent");
        self.compute_internal(start, rules);
        self.receive_boundaries(timeout)?;
        tracing::trace!(tile = self.id, "boundary received");
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn replace_ports(&mut self, ports: Ports) -> Ports {
        std::mem::replace(&mut self.ports, ports)
    }

    fn compute_boundaries(&mut self, start: &GridView<'_>, rules: &RuleSet) -> Boundary {
        let (height, width) = (self.block.height, self.block.width);
        let mut boundary = Boundary::new(height, width);
        for (row, col) in ring_cells(height, width) {
            let transition = rules.transition(start.cell(row, col));
            if transition.is_flip() {
                self.block
                    .cell_mut(row, col)
                    .set_state(transition == Transition::Born);
                self.spread_from_ring(row, col, transition.delta(), &mut boundary);
            }
        }
        boundary
    }

    /// Updates local neighbors in place and routes the rest into `boundary`.
    fn spread_from_ring(&mut self, row: usize, col: usize, delta: i8, boundary: &mut Boundary) {
        let (height, width) = (self.block.height, self.block.width);
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset();
            let nr = row as isize + dr;
            let nc = col as isize + dc;
            match Direction::from_offset(side(nr, height), side(nc, width)) {
                None => self
                    .block
                    .cell_mut(nr as usize, nc as usize)
                    .apply_neighbor_delta(delta),
                Some(out @ (Direction::North | Direction::South)) => {
                    boundary.add(out, nc as usize, delta)
                }
                Some(out @ (Direction::East | Direction::West)) => {
                    boundary.add(out, nr as usize, delta)
                }
                Some(corner) => boundary.add(corner, 0, delta),
            }
        }
    }

    fn send(&self, boundary: Boundary) -> Result<()> {
        self.ports.send_all(self.id, boundary.into_messages())
    }

    fn compute_internal(&mut self, start: &GridView<'_>, rules: &RuleSet) {
        let (height, width) = (self.block.height, self.block.width);
        for row in 1..height.saturating_sub(1) {
            for col in 1..width.saturating_sub(1) {
                let transition = rules.transition(start.cell(row, col));
                if !transition.is_flip() {
                    continue;
                }
                self.block
                    .cell_mut(row, col)
                    .set_state(transition == Transition::Born);
                let delta = transition.delta();
                for dir in Direction::ALL {
                    let (dr, dc) = dir.offset();
                    self.block
                        .cell_mut(
                            (row as isize + dr) as usize,
                            (col as isize + dc) as usize,
                        )
                        .apply_neighbor_delta(delta);
                }
            }
        }
    }

    fn receive_boundaries(&mut self, timeout: Option<Duration>) -> Result<()> {
        for dir in Direction::ALL {
            let message = self.ports.receive(self.id, dir, timeout)?;
            self.apply_incoming(dir, message)?;
        }
        Ok(())
    }

    fn apply_incoming(&mut self, dir: Direction, message: BoundaryMessage) -> Result<()> {
        let (height, width) = (self.block.height, self.block.width);
        let malformed = EngineError::Protocol {
            tile: self.id,
            direction: dir,
        };
        match message {
            BoundaryMessage::Edge(deltas) if !dir.is_corner() => {
                let expected = match dir {
                    Direction::North | Direction::South => width,
                    _ => height,
                };
                if deltas.len() != expected {
                    return Err(malformed);
                }
                for (position, delta) in deltas.into_iter().enumerate() {
                    if delta != 0 {
                        let (row, col) = landing_cell(dir, position, height, width);
                        self.block.cell_mut(row, col).apply_neighbor_delta(delta);
                    }
                }
            }
            BoundaryMessage::Corner(delta) if dir.is_corner() => {
                if delta != 0 {
                    let (row, col) = landing_cell(dir, 0, height, width);
                    self.block.cell_mut(row, col).apply_neighbor_delta(delta);
                }
            }
            _ => return Err(malformed),
        }
        Ok(())
    }
}

/// Ring cells in a fixed order, each exactly once. Degenerate tiles with a
/// single row or column are entirely ring.
fn ring_cells(height: usize, width: usize) -> impl Iterator<Item = (usize, usize)> {
    let top = (0..width).map(|col| (0, col));
    let bottom = (0..width)
        .filter(move |_| height > 1)
        .map(move |col| (height - 1, col));
    let sides = (1..height.saturating_sub(1)).flat_map(move |row| {
        std::iter::once((row, 0)).chain((width > 1).then_some((row, width - 1)))
    });
    top.chain(bottom).chain(sides)
}

/// -1 before the tile, 1 past it, 0 inside.
#[inline]
fn side(index: isize, len: usize) -> isize {
    if index < 0 {
        -1
    } else if index >= len as isize {
        1
    } else {
        0
    }
}

/// Local cell that absorbs a delta arriving from the neighbor in `dir`.
#[inline]
fn landing_cell(dir: Direction, position: usize, height: usize, width: usize) -> (usize, usize) {
    match dir {
        Direction::North => (0, position),
        Direction::South => (height - 1, position),
        Direction::West => (position, 0),
        Direction::East => (position, width - 1),
        Direction::NorthWest => (0, 0),
        Direction::NorthEast => (0, width - 1),
        Direction::SouthWest => (height - 1, 0),
        Direction::SouthEast => (height - 1, width - 1),
    }
}
