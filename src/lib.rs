//! Terminal front end and run loop for the Tessera engine.

pub mod app;
