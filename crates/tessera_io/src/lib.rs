//! # Tessera IO
//!
//! Board sources and sinks for the Tessera engine.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - The plain-text board format (strict and lenient parsing)
//! - Seeded random boards with an on-disk cache
//! - JSON snapshots of boards

/// Plain-text board files
pub mod board;
/// Error types and result aliases for I/O operations
pub mod error;
/// Seeded random board generation
pub mod generator;
/// JSON snapshot helpers
pub mod serialization;

pub use board::{format_board, parse_board, read_board, write_board, ParseMode};
pub use error::{IoError, Result};
pub use generator::{ensure_random_board, generate_random_board, random_board_path};
pub use serialization::{from_json, read_json_file, to_json_pretty, write_json_file};
