//! Arena host application.
//!
//! Wires the simulation crates to a headless host: a fixed-rate game loop
//! thread fed with JSON-line commands on stdin, streaming JSON-line
//! snapshots to stdout.

pub mod cli;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod state;

pub use arena_core as core;
