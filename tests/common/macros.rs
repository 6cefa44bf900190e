/// Asserts that every incremental neighbor count matches a fresh census.
#[macro_export]
macro_rules! assert_counts_exact {
    ($world:expr) => {
        if let Err(err) = $world.verify_invariant() {
            panic!(
                "neighbor counts drifted at generation {}: {}",
                $world.generation(),
                err
            );
        }
    };
}

/// Asserts that two worlds hold the same live cells.
#[macro_export]
macro_rules! assert_same_board {
    ($left:expr, $right:expr) => {
        assert_eq!($left.dimensions(), $right.dimensions(), "dimension mismatch");
        assert_eq!(
            $left.fingerprint(),
            $right.fingerprint(),
            "boards differ at generation {}",
            $left.generation()
        );
    };
}
