//! Core data structures for the Tessera automaton.

pub mod board;
pub mod cell;
pub mod rules;
