//! Enemy AI: every enemy rolls toward the player.

use glam::Vec3;
use hecs::World;

use arena_ai::chase::chase_velocity_change;
use arena_core::components::{Enemy, Player, RigidBody, Transform};
use arena_core::enums::ForceMode;

use super::physics::apply_force;

/// Apply one tick of chase steering to every enemy. Does nothing without a player.
pub fn run(world: &mut World, dt: f32) {
    let Some(player_pos) = player_position(world) else {
        return;
    };

    for (_entity, (enemy, transform, body)) in
        world.query_mut::<(&Enemy, &Transform, &mut RigidBody)>()
    {
        let dv = chase_velocity_change(transform.position, player_pos, enemy.speed, dt);
        apply_force(body, dv, ForceMode::VelocityChange, dt);
    }
}

/// Current player position, if the player exists.
pub fn player_position(world: &World) -> Option<Vec3> {
    world
        .query::<(&Player, &Transform)>()
        .iter()
        .next()
        .map(|(_, (_, transform))| transform.position)
}
