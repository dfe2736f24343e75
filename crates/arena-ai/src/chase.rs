//! Enemy chase steering.

use glam::Vec3;

use arena_core::types::flatten;

/// Velocity change for one tick of an enemy rolling toward the player.
///
/// The pull is horizontal only and has a constant magnitude of
/// `speed * dt` regardless of distance. Returns zero when the enemy sits
/// directly above or below the player.
pub fn chase_velocity_change(enemy: Vec3, player: Vec3, speed: f32, dt: f32) -> Vec3 {
    flatten(player - enemy).normalize_or_zero() * speed * dt
}
