//! Seeded random boards and their on-disk cache.

use std::path::{Path, PathBuf};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessera_data::BoardSpec;

use crate::board::write_board;
use crate::error::{IoError, Result};

/// Each cell is alive with probability `density`, drawn row-major from a
/// `ChaCha8Rng` seeded with `seed`. The same inputs always give the same
/// board.
pub fn generate_random_board(rows: usize, cols: usize, density: f64, seed: u64) -> BoardSpec {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut board = BoardSpec::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            if rng.gen::<f64>() < density {
                board.alive.push((row, col));
            }
        }
    }
    board
}

/// Cache file name for a generated board. Density is recorded as a whole
/// percentage.
pub fn random_board_path(dir: &Path, rows: usize, cols: usize, density: f64, seed: u64) -> PathBuf {
    let percent = (density * 100.0) as u32;
    dir.join(format!("World_{rows}_{cols}_{percent}_{seed}.txt"))
}

/// Returns the cached board file for these parameters, generating and
/// writing it first when it does not exist yet.
pub fn ensure_random_board(
    dir: &Path,
    rows: usize,
    cols: usize,
    density: f64,
    seed: u64,
) -> Result<PathBuf> {
    if !(0.0..=1.0).contains(&density) {
        return Err(IoError::validation(format!(
            "density {density} is outside [0, 1]"
        )));
    }
    let path = random_board_path(dir, rows, cols, density, seed);
    if path.exists() {
        tracing::debug!(path = %path.display(), "Reusing cached board");
        return Ok(path);
    }
    let board = generate_random_board(rows, cols, density, seed);
    write_board(&path, &board)?;
    tracing::info!(
        path = %path.display(),
        alive = board.alive.len(),
        "Generated random board"
    );
    Ok(path)
}
