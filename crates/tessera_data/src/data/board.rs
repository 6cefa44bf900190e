use serde::{Deserialize, Serialize};

/// Dimensions plus the coordinates of every initially alive cell.
///
/// This is the exchange format between board sources (files, random
/// generators, snapshots) and the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSpec {
    pub rows: usize,
    pub cols: usize,
    pub alive: Vec<(usize, usize)>,
}

impl BoardSpec {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            alive: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_alive<I>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        self.alive.extend(cells);
        self
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }
}
