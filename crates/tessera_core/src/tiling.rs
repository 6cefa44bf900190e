//! Square tile decomposition of a toroidal board.
//!
//! Tiles are numbered row-major, `id = row * P + col`, and the tile array
//! wraps around exactly like the cells do.

use crate::direction::{wrap, Direction};
use crate::error::{EngineError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tiling {
    rows: usize,
    cols: usize,
    tiles_per_side: usize,
}

impl Tiling {
    /// Validates the decomposition. Nothing is allocated here, so a bad
    /// configuration is rejected before any tile exists.
    pub fn new(rows: usize, cols: usize, tiles_per_side: usize) -> Result<Self> {
        if tiles_per_side == 0 {
            return Err(EngineError::config("tiles per side must be positive"));
        }
        if rows == 0 || cols == 0 {
            return Err(EngineError::config(format!(
                "board must have at least one row and column, got {rows}x{cols}"
            )));
        }
        if rows % tiles_per_side != 0 || cols % tiles_per_side != 0 {
            return Err(EngineError::config(format!(
                "a {rows}x{cols} board cannot be split into {tiles_per_side}x{tiles_per_side} tiles"
            )));
        }
        Ok(Self {
            rows,
            cols,
            tiles_per_side,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tiles_per_side(&self) -> usize {
        self.tiles_per_side
    }

    pub fn tile_count(&self) -> usize {
        self.tiles_per_side * self.tiles_per_side
    }

    pub fn tile_height(&self) -> usize {
        self.rows / self.tiles_per_side
    }

    pub fn tile_width(&self) -> usize {
        self.cols / self.tiles_per_side
    }

    /// `(row, col)` of a tile in the tile array.
    pub fn position(&self, id: usize) -> (usize, usize) {
        (id / self.tiles_per_side, id % self.tiles_per_side)
    }

    /// Board coordinates of a tile's top-left cell.
    pub fn origin(&self, id: usize) -> (usize, usize) {
        let (row, col) = self.position(id);
        (row * self.tile_height(), col * self.tile_width())
    }

    /// Tile adjacent to `id` in `dir` on the tile torus.
    pub fn neighbor(&self, id: usize, dir: Direction) -> usize {
        let p = self.tiles_per_side;
        let (row, col) = self.position(id);
        let (dr, dc) = dir.offset();
        wrap(row, dr, p) * p + wrap(col, dc, p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_divisible_dimensions() {
        assert!(Tiling::new(10, 12, 3).is_err());
        assert!(Tiling::new(12, 10, 3).is_err());
        assert!(Tiling::new(12, 12, 3).is_ok());
    }

    #[test]
    fn test_rejects_zero_tiles_and_empty_board() {
        assert!(matches!(
            Tiling::new(4, 4, 0),
            Err(EngineError::Config(_))
        ));
        assert!(Tiling::new(0, 4, 1).is_err());
    }

    #[test]
    fn test_neighbor_wraps_around_the_tile_torus() {
        let tiling = Tiling::new(9, 9, 3).unwrap();
        // Tile 0 sits in the top-left corner.
        assert_eq!(tiling.neighbor(0, Direction::North), 6);
        assert_eq!(tiling.neighbor(0, Direction::West), 2);
        assert_eq!(tiling.neighbor(0, Direction::NorthWest), 8);
        assert_eq!(tiling.neighbor(0, Direction::SouthEast), 4);
        assert_eq!(tiling.neighbor(8, Direction::SouthEast), 0);
        assert_eq!(tiling.neighbor(5, Direction::East), 3);
    }

    #[test]
    fn test_single_tile_is_its_own_neighbor() {
        let tiling = Tiling::new(4, 6, 1).unwrap();
        for dir in Direction::ALL {
            assert_eq!(tiling.neighbor(0, dir), 0);
        }
    }

    #[test]
    fn test_neighbor_of_neighbor_in_opposite_direction_is_self() {
        let tiling = Tiling::new(8, 8, 4).unwrap();
        for id in 0..tiling.tile_count() {
            for dir in Direction::ALL {
                assert_eq!(tiling.neighbor(tiling.neighbor(id, dir), dir.opposite()), id);
            }
        }
    }

    #[test]
    fn test_origin_and_tile_shape() {
        let tiling = Tiling::new(6, 8, 2).unwrap();
        assert_eq!(tiling.tile_height(), 3);
        assert_eq!(tiling.tile_width(), 4);
        assert_eq!(tiling.origin(3), (3, 4));
        assert_eq!(tiling.origin(1), (0, 4));
    }
}
