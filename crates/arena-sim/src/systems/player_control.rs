//! Player movement: the camera pivot turns, the ball is pushed along its forward axis.

use hecs::World;

use arena_core::components::{FocalPoint, Player, PlayerInput, RigidBody};
use arena_core::config::PlayerTuning;
use arena_core::enums::ForceMode;
use arena_core::types::forward_from_yaw;

use super::physics::apply_force;

/// Turn the focal point and push the player from the latest input.
pub fn run(world: &mut World, focal_point: &mut FocalPoint, tuning: &PlayerTuning, dt: f32) {
    for (_entity, (_player, input, body)) in
        world.query_mut::<(&Player, &PlayerInput, &mut RigidBody)>()
    {
        focal_point.yaw_degrees =
            (focal_point.yaw_degrees + input.turn * tuning.rotation_speed * dt).rem_euclid(360.0);

        let forward = forward_from_yaw(focal_point.yaw_degrees);
        apply_force(body, forward * input.forward * tuning.speed, ForceMode::Force, dt);
    }
}
