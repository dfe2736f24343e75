//! Entity spawn factories for setting up the arena world.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arena_core::components::*;
use arena_core::config::{ArenaTuning, EnemyProfile, RocketTuning};
use arena_core::constants::*;
use arena_core::enums::PowerupKind;

use crate::abilities::{Rocket, SmashSequence};

/// Set up a fresh scene: just the player at the island centre.
pub fn setup_scene(world: &mut World, tuning: &ArenaTuning) -> Entity {
    world.clear();
    spawn_player(world, tuning)
}

/// Spawn the player ball at rest on the island centre.
pub fn spawn_player(world: &mut World, tuning: &ArenaTuning) -> Entity {
    let player = &tuning.player;
    let body = RigidBody {
        velocity: Vec3::ZERO,
        angular_velocity: Vec3::ZERO,
        mass: player.mass,
        radius: player.radius,
        drag: player.drag,
    };

    world.spawn((
        Player,
        Transform {
            position: Vec3::new(PLAYER_SPAWN.x, player.radius, PLAYER_SPAWN.z),
            forward: Vec3::Z,
        },
        body,
        PowerupHolder::default(),
        PlayerInput::default(),
        SmashSequence::default(),
    ))
}

/// Random point inside the square spawn area, at the given height.
pub fn random_spawn_position(rng: &mut ChaCha8Rng, spawn_range: f32, height: f32) -> Vec3 {
    let x = rng.gen_range(-spawn_range..=spawn_range);
    let z = rng.gen_range(-spawn_range..=spawn_range);
    Vec3::new(x, height, z)
}

/// Spawn one enemy of the given profile somewhere in the spawn area.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    profile: &EnemyProfile,
    drag: f32,
    spawn_range: f32,
) -> Entity {
    let position = random_spawn_position(rng, spawn_range, profile.radius);
    world.spawn((
        Enemy {
            archetype: profile.archetype,
            speed: profile.speed,
        },
        Transform {
            position,
            forward: Vec3::Z,
        },
        RigidBody {
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            mass: profile.mass,
            radius: profile.radius,
            drag,
        },
    ))
}

/// Spawn a powerup pickup somewhere in the spawn area.
pub fn spawn_pickup(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: PowerupKind,
    spawn_range: f32,
) -> Entity {
    let position = random_spawn_position(rng, spawn_range, PICKUP_RADIUS);
    world.spawn((
        PowerupPickup { kind },
        Transform {
            position,
            forward: Vec3::Z,
        },
        TriggerVolume {
            radius: PICKUP_RADIUS,
        },
    ))
}

/// Spawn a rocket at `origin` homing on `target`.
pub fn spawn_rocket(
    world: &mut World,
    origin: Vec3,
    target: Entity,
    tuning: &RocketTuning,
) -> Entity {
    world.spawn((
        Rocket {
            target: Some(target),
            remaining_secs: tuning.lifetime,
        },
        Transform {
            position: origin,
            forward: Vec3::Z,
        },
        KinematicCollider {
            radius: tuning.radius,
        },
    ))
}
