//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! Per-entity state lives in components; scene-wide state is passed in by the engine.

pub mod cleanup;
pub mod contacts;
pub mod enemy_ai;
pub mod indicator;
pub mod physics;
pub mod player_control;
pub mod powerup_spawner;
pub mod powerups;
pub mod rockets;
pub mod smash;
pub mod snapshot;
pub mod wave_spawner;
