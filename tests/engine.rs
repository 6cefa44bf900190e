mod common;

use common::{board, load, reference_step, snapshot};
use std::time::Duration;
use tessera_core::{BoardSpec, EngineError, RuleSet, World};

#[test]
fn test_bootstrap_counts_single_cell() {
    let world = load(&board(3, 3, &[(1, 1)]), 1);
    for r in 0..3 {
        for c in 0..3 {
            let expected = if (r, c) == (1, 1) { 0 } else { 1 };
            assert_eq!(world.neighbor_count(r, c), expected, "cell ({r}, {c})");
        }
    }
    assert_counts_exact!(world);
}

#[test]
fn test_bootstrap_wraps_across_edges() {
    let world = load(&board(5, 5, &[(0, 0)]), 1);
    for (r, c) in [(4, 4), (4, 0), (4, 1), (0, 4), (0, 1), (1, 4), (1, 0), (1, 1)] {
        assert_eq!(world.neighbor_count(r, c), 1, "cell ({r}, {c})");
    }
    assert_eq!(world.neighbor_count(2, 2), 0);
}

#[test]
fn test_lonely_cell_dies_in_one_step() {
    let mut world = load(&board(3, 3, &[(1, 1)]), 1);
    world.step().unwrap();
    assert_eq!(world.population(), 0);
    assert_eq!(world.generation(), 1);
    for r in 0..3 {
        for c in 0..3 {
            assert!(!world.query(r, c));
            assert_eq!(world.neighbor_count(r, c), 0);
        }
    }
}

#[test]
fn test_dead_board_is_a_fixed_point() {
    let mut world = load(&board(6, 6, &[]), 3);
    for _ in 0..10 {
        world.step().unwrap();
    }
    assert_eq!(world.population(), 0);
    assert!(world.census().iter().all(|&n| n == 0));
}

#[test]
fn test_blinker_oscillates_across_tile_edges() {
    // The vertical bar straddles the horizontal seam between tiles.
    let mut world = load(&board(6, 6, &[(2, 2), (3, 2), (4, 2)]), 2);
    world.step().unwrap();
    assert_eq!(
        world.to_board_spec().alive,
        vec![(3, 1), (3, 2), (3, 3)]
    );
    world.step().unwrap();
    assert_eq!(
        world.to_board_spec().alive,
        vec![(2, 2), (3, 2), (4, 2)]
    );
    assert_counts_exact!(world);
}

#[test]
fn test_corner_routing_reaches_diagonal_tile() {
    // 8x8 board, 4x4 tiles. (3, 3) is tile 0's bottom-right corner and is
    // born this step; its diagonal neighbor (4, 4) is tile 3's top-left.
    let mut world = load(&board(8, 8, &[(2, 2), (2, 3), (3, 2)]), 2);
    assert_eq!(world.neighbor_count(4, 4), 0);

    world.step().unwrap();

    assert!(world.query(3, 3));
    let diagonal = world.tile(3).unwrap();
    assert_eq!(diagonal.origin(), (4, 4));
    assert_eq!(diagonal.cell(0, 0).neighbors, 1);
    assert_eq!(world.neighbor_count(4, 4), 1);
    assert_counts_exact!(world);
}

#[test]
fn test_corner_routing_wraps_around_the_torus() {
    // (7, 7) is the last cell of the last tile; its SE neighbor is (0, 0).
    let mut world = load(&board(8, 8, &[(6, 6), (6, 7), (7, 6)]), 2);
    world.step().unwrap();
    assert!(world.query(7, 7));
    assert_eq!(world.tile(0).unwrap().cell(0, 0).neighbors, 1);
    assert_counts_exact!(world);
}

#[test]
fn test_glider_matches_reference_for_every_tiling() {
    let spec = board(12, 12, &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
    let rules = RuleSet::default();
    let mut expected = snapshot(&load(&spec, 1));

    let mut worlds: Vec<World> = [1, 2, 3, 4, 6, 12].iter().map(|&p| load(&spec, p)).collect();
    for _ in 0..48 {
        expected = reference_step(&expected, 12, 12, &rules);
        for world in &mut worlds {
            world.step().unwrap();
            assert_eq!(snapshot(world), expected, "P={}", world.tiles_per_side());
            assert_counts_exact!(world);
        }
    }
    // A glider returns to its shape every 4 generations and covers the
    // 12x12 torus in 48.
    assert_eq!(worlds[0].to_board_spec(), spec);
}

#[test]
fn test_rectangular_tiles() {
    let spec = board(6, 15, &[(0, 0), (0, 1), (1, 0), (2, 14), (3, 14), (4, 14), (5, 7)]);
    let mut single = load(&spec, 1);
    let mut split = load(&spec, 3);
    for _ in 0..20 {
        single.step().unwrap();
        split.step().unwrap();
        assert_same_board!(single, split);
        assert_counts_exact!(split);
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let spec = board(
        16,
        16,
        &[(1, 1), (1, 2), (2, 1), (5, 5), (5, 6), (5, 7), (9, 3), (10, 4), (11, 2), (11, 3), (11, 4)],
    );
    let fingerprints: Vec<String> = (0..4)
        .map(|_| {
            let mut world = load(&spec, 4);
            for _ in 0..30 {
                world.step().unwrap();
            }
            world.fingerprint()
        })
        .collect();
    assert!(fingerprints.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_custom_rules_flow_through_tiles() {
    // Birth on a single live neighbor.
    let rules = RuleSet::new(0, 9, 1);
    let spec = board(6, 6, &[(0, 0)]);
    let mut world = World::load(&spec, 2, rules).unwrap();
    world.step().unwrap();

    assert!(!world.query(0, 0));
    assert_eq!(world.population(), 8);
    for (r, c) in [(5, 5), (5, 0), (5, 1), (0, 5), (0, 1), (1, 5), (1, 0), (1, 1)] {
        assert!(world.query(r, c), "cell ({r}, {c})");
    }
    assert_counts_exact!(world);
}

#[test]
fn test_exchange_timeout_does_not_disturb_healthy_steps() {
    let spec = board(8, 8, &[(1, 1), (1, 2), (1, 3)]);
    let mut world = load(&spec, 4).with_exchange_timeout(Some(Duration::from_secs(5)));
    for _ in 0..5 {
        world.step().unwrap();
    }
    assert!(!world.is_poisoned());
    assert_eq!(world.generation(), 5);
}

#[test]
fn test_load_errors_are_reported_before_stepping() {
    let err = World::load(&BoardSpec::new(9, 9), 2, RuleSet::default()).err();
    assert!(matches!(err, Some(EngineError::Config(_))));
    let err = World::load(&board(4, 4, &[(0, 7)]), 1, RuleSet::default()).err();
    assert!(matches!(err, Some(EngineError::OutOfBounds { col: 7, .. })));
}
