//! Steering for the arena simulation.
//!
//! Enemy chase, rocket homing and smash blast falloff. Pure functions over
//! plain vectors; no ECS dependency.

pub mod chase;
pub mod explosion;
pub mod homing;

pub use arena_core as core;

#[cfg(test)]
mod tests;
