use serde::{Deserialize, Serialize};

/// A single automaton cell.
///
/// `neighbors` is the running tally of live cells among the 8 toroidal
/// neighbor positions. It is only ever moved by signed deltas once the
/// board has been bootstrapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub alive: bool,
    pub neighbors: u8,
}

impl Cell {
    #[must_use]
    pub fn new(alive: bool) -> Self {
        Self {
            alive,
            neighbors: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn set_state(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// Adds a signed delta to the neighbor tally. No clamping is applied.
    #[inline]
    pub fn apply_neighbor_delta(&mut self, delta: i8) {
        self.neighbors = self.neighbors.wrapping_add_signed(delta);
        debug_assert!(self.neighbors <= 8, "neighbor count out of range");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_neighbor_delta() {
        let mut cell = Cell::default();
        cell.apply_neighbor_delta(3);
        assert_eq!(cell.neighbors, 3);
        cell.apply_neighbor_delta(-2);
        assert_eq!(cell.neighbors, 1);
        assert!(!cell.state());
    }

    #[test]
    fn test_set_state_keeps_neighbors() {
        let mut cell = Cell::new(false);
        cell.apply_neighbor_delta(2);
        cell.set_state(true);
        assert!(cell.alive);
        assert_eq!(cell.neighbors, 2);
    }
}
