//! Components that hold entity handles, so they live here rather than in core.

use hecs::Entity;

use arena_core::enums::SmashPhase;

/// A homing rocket in flight.
#[derive(Debug, Clone, Copy)]
pub struct Rocket {
    /// Enemy the rocket was fired at. Stays set after the enemy dies;
    /// liveness is checked against the world each tick.
    pub target: Option<Entity>,
    /// Seconds until self-destruct.
    pub remaining_secs: f32,
}

/// Smash move state on the player.
#[derive(Debug, Clone, Default)]
pub struct SmashSequence {
    pub phase: SmashPhase,
    /// Height the player took off from; the slam ends at or below it.
    pub floor_y: f32,
    /// Enemies alive at take-off. Only these are hit by the landing blast.
    pub targets: Vec<Entity>,
}
