#![allow(dead_code)]

pub mod macros;

use proptest::prelude::*;
use tessera_core::{BoardSpec, RuleSet, World};

pub fn board(rows: usize, cols: usize, alive: &[(usize, usize)]) -> BoardSpec {
    BoardSpec::new(rows, cols).with_alive(alive.iter().copied())
}

pub fn load(spec: &BoardSpec, tiles_per_side: usize) -> World {
    World::load(spec, tiles_per_side, RuleSet::default()).expect("board should load")
}

/// Live cells of a world, row-major.
pub fn snapshot(world: &World) -> Vec<bool> {
    let (rows, cols) = world.dimensions();
    (0..rows)
        .flat_map(|r| (0..cols).map(move |c| (r, c)))
        .map(|(r, c)| world.query(r, c))
        .collect()
}

/// One generation computed directly from the live-cell bitmap, counting
/// every wrapped neighbor position separately.
pub fn reference_step(alive: &[bool], rows: usize, cols: usize, rules: &RuleSet) -> Vec<bool> {
    let mut next = vec![false; alive.len()];
    for r in 0..rows {
        for c in 0..cols {
            let mut n = 0u8;
            for dr in -1isize..=1 {
                for dc in -1isize..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let nr = (r as isize + dr).rem_euclid(rows as isize) as usize;
                    let nc = (c as isize + dc).rem_euclid(cols as isize) as usize;
                    n += u8::from(alive[nr * cols + nc]);
                }
            }
            let here = alive[r * cols + c];
            next[r * cols + c] = if here {
                n > rules.survive_lower && n < rules.survive_upper
            } else {
                n == rules.birth
            };
        }
    }
    next
}

prop_compose! {
    /// A board that splits evenly into `tiles_per_side` tiles per side.
    pub fn arb_tiled_board()
        (tiles_per_side in 1usize..=4, tile_h in 1usize..=5, tile_w in 1usize..=5)
        (
            cells in proptest::collection::vec(
                any::<bool>(),
                tiles_per_side * tile_h * tiles_per_side * tile_w,
            ),
            tiles_per_side in Just(tiles_per_side),
            rows in Just(tiles_per_side * tile_h),
            cols in Just(tiles_per_side * tile_w),
        ) -> (BoardSpec, usize)
    {
        let alive = cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(idx, _)| (idx / cols, idx % cols));
        (BoardSpec::new(rows, cols).with_alive(alive), tiles_per_side)
    }
}
