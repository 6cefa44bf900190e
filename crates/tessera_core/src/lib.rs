//! # Tessera Core
//!
//! Parallel stepping engine for a toroidal two-threshold cellular automaton.
//!
//! The board is split into a P×P array of tiles. Each generation every tile
//! runs on its own thread, computes its ring first, ships the neighbor-count
//! deltas that cross its edges and corners to the 8 adjacent tiles, computes
//! its interior while those messages are in flight, then folds in what its
//! neighbors sent. Neighbor counts are only ever moved by deltas, so the
//! result is identical to a single-tile run.
//!
//! ## Example
//!
//! ```
//! use tessera_core::{BoardSpec, RuleSet, World};
//!
//! let board = BoardSpec::new(8, 8).with_alive([(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
//! let mut world = World::load(&board, 2, RuleSet::default()).unwrap();
//! world.step().unwrap();
//! assert_eq!(world.dimensions(), (8, 8));
//! assert!(world.verify_invariant().is_ok());
//! ```

/// Halo messages and the single-slot tile mailboxes
pub mod boundary;
/// Configuration management for simulation parameters
pub mod config;
/// Compass directions and toroidal wrapping
pub mod direction;
/// Engine error types
pub mod error;
/// Authoritative board storage
pub mod grid;
/// Step timing and logging setup
pub mod metrics;
/// Rule evaluation
pub mod rules;
/// Per-tile generation protocol
pub mod tile;
/// Tile decomposition and tile-torus topology
pub mod tiling;
/// Orchestrator driving whole generations
pub mod world;

pub use config::AppConfig;
pub use direction::Direction;
pub use error::{EngineError, Result};
pub use metrics::{init_logging, StepMetrics};
pub use rules::{RuleLogic, Transition};
pub use tessera_data::{BoardSpec, Cell, RuleSet};
pub use tiling::Tiling;
pub use world::World;
