//! Testing infrastructure for tasktrack integration tests.
//!
//! - `TestWorld`: isolated data directory plus a handle for running the binary
//! - `assertions`: store- and JSON-level assertions
//! - `fixtures`: sample task texts and key sequences

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
