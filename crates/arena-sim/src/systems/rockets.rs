//! Homing rockets: launch, guidance and self-destruct.

use glam::Vec3;
use hecs::{Entity, World};

use arena_ai::homing;
use arena_core::components::{Enemy, Transform};
use arena_core::config::RocketTuning;
use arena_core::constants::ROCKET_LAUNCH_HEIGHT;
use arena_core::enums::PowerupKind;
use arena_core::events::GameEvent;

use crate::abilities::Rocket;
use crate::audio::AudioDirector;
use crate::world_setup;

/// Fire one rocket at every live enemy from just above the player.
pub fn launch(
    world: &mut World,
    player_pos: Vec3,
    tuning: &RocketTuning,
    audio: &mut AudioDirector,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let targets: Vec<Entity> = world
        .query::<&Enemy>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    let origin = player_pos + Vec3::Y * ROCKET_LAUNCH_HEIGHT;
    for &target in &targets {
        world_setup::spawn_rocket(world, origin, target, tuning);
    }

    let count = targets.len() as u32;
    audio.play_powerup_use(PowerupKind::Rockets);
    events.push(GameEvent::RocketsFired { count });
    count
}

/// Steer every rocket and queue expired ones for despawn.
pub fn run(world: &mut World, tuning: &RocketTuning, dt: f32, despawn_buffer: &mut Vec<Entity>) {
    let mut steering: Vec<(Entity, Option<Vec3>)> = Vec::new();
    {
        let mut query = world.query::<&Rocket>();
        for (entity, rocket) in query.iter() {
            let target_pos = rocket
                .target
                .and_then(|t| world.get::<&Transform>(t).ok().map(|tr| tr.position));
            steering.push((entity, target_pos));
        }
    }

    for (entity, target_pos) in steering {
        let Ok((rocket, transform)) = world.query_one_mut::<(&mut Rocket, &mut Transform)>(entity)
        else {
            continue;
        };

        rocket.remaining_secs -= dt;
        if rocket.remaining_secs <= 0.0 {
            despawn_buffer.push(entity);
            continue;
        }

        let next = homing::step(transform.position, transform.forward, target_pos, tuning.speed, dt);
        transform.position = next.position;
        transform.forward = next.forward;
    }
}

/// Whether a rocket's target is still in the world.
pub fn is_homing(world: &World, rocket: &Rocket) -> bool {
    rocket.target.is_some_and(|t| world.contains(t))
}
