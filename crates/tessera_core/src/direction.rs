//! Compass directions shared by the cell neighborhood and the tile torus.

/// One of the 8 neighbor directions. Rows grow southwards, columns eastwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// `(dr, dc)` step for this direction.
    #[inline]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Inverse of `offset` for any non-zero pair with components in `-1..=1`.
    #[inline]
    pub const fn from_offset(dr: isize, dc: isize) -> Option<Direction> {
        match (dr, dc) {
            (-1, 0) => Some(Direction::North),
            (-1, 1) => Some(Direction::NorthEast),
            (0, 1) => Some(Direction::East),
            (1, 1) => Some(Direction::SouthEast),
            (1, 0) => Some(Direction::South),
            (1, -1) => Some(Direction::SouthWest),
            (0, -1) => Some(Direction::West),
            (-1, -1) => Some(Direction::NorthWest),
            _ => None,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }

    #[inline]
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Direction::NorthEast | Direction::SouthEast | Direction::SouthWest | Direction::NorthWest
        )
    }

    /// Position in `ALL`, used to index per-direction arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Wraps `base + delta` onto `0..len`.
#[inline]
pub fn wrap(base: usize, delta: isize, len: usize) -> usize {
    (base as isize + delta).rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_round_trip() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset();
            assert_eq!(Direction::from_offset(dr, dc), Some(dir));
            assert_eq!(Direction::ALL[dir.index()], dir);
        }
        assert_eq!(Direction::from_offset(0, 0), None);
    }

    #[test]
    fn test_opposite_negates_offset() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset();
            assert_eq!(dir.opposite().offset(), (-dr, -dc));
            assert_eq!(dir.opposite().is_corner(), dir.is_corner());
        }
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(0, -1, 4), 3);
        assert_eq!(wrap(3, 1, 4), 0);
        assert_eq!(wrap(0, -1, 1), 0);
        assert_eq!(wrap(2, 0, 5), 2);
    }
}
