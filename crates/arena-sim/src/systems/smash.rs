//! Smash move: climb, slam down, then blast every enemy that was around at take-off.

use glam::Vec3;
use hecs::{Entity, World};

use arena_ai::explosion::blast_impulse;
use arena_core::components::{Enemy, RigidBody, Transform};
use arena_core::config::SmashTuning;
use arena_core::enums::{ForceMode, PowerupKind, SmashPhase};
use arena_core::events::GameEvent;

use crate::abilities::SmashSequence;
use crate::audio::AudioDirector;

use super::physics::apply_force_to;

/// Start a smash for the player unless one is already under way.
/// Returns true when a new smash began.
pub fn begin(world: &mut World, player: Entity, tuning: &SmashTuning) -> bool {
    let targets: Vec<Entity> = world
        .query::<&Enemy>()
        .iter()
        .map(|(entity, _)| entity)
        .collect();

    let Ok((transform, smash)) = world.query_one_mut::<(&Transform, &mut SmashSequence)>(player)
    else {
        return false;
    };
    if smash.phase != SmashPhase::Idle {
        return false;
    }

    smash.floor_y = transform.position.y;
    smash.targets = targets;
    smash.phase = SmashPhase::Rising {
        remaining_secs: tuning.hang_time,
    };
    true
}

/// Drive the smash sequence. Runs before integration so the forced vertical
/// velocity takes effect this tick.
pub fn run(
    world: &mut World,
    player: Entity,
    tuning: &SmashTuning,
    audio: &mut AudioDirector,
    events: &mut Vec<GameEvent>,
    dt: f32,
) {
    let landed_at = {
        let Ok((transform, body, smash)) =
            world.query_one_mut::<(&Transform, &mut RigidBody, &mut SmashSequence)>(player)
        else {
            return;
        };

        if let SmashPhase::Rising { remaining_secs } = smash.phase {
            if remaining_secs > 0.0 {
                body.velocity.y = tuning.speed;
                smash.phase = SmashPhase::Rising {
                    remaining_secs: remaining_secs - dt,
                };
                return;
            }
            smash.phase = SmashPhase::Falling;
        }

        if smash.phase != SmashPhase::Falling {
            return;
        }
        if transform.position.y > smash.floor_y {
            body.velocity.y = -tuning.speed * 2.0;
            return;
        }

        smash.phase = SmashPhase::Idle;
        (transform.position, std::mem::take(&mut smash.targets))
    };

    let (origin, targets) = landed_at;
    audio.play_powerup_use(PowerupKind::Smash);
    let enemies_hit = blast(world, origin, &targets, tuning);
    events.push(GameEvent::SmashLanded { enemies_hit });
}

/// Apply the landing blast to the surviving take-off enemies. Returns how many were pushed.
fn blast(world: &World, origin: Vec3, targets: &[Entity], tuning: &SmashTuning) -> u32 {
    let mut hit = 0;
    for &enemy in targets {
        let Some(position) = world.get::<&Transform>(enemy).ok().map(|t| t.position) else {
            continue;
        };
        let impulse = blast_impulse(origin, position, tuning.explosion_force, tuning.explosion_radius);
        if impulse != Vec3::ZERO {
            apply_force_to(world, enemy, impulse, ForceMode::Impulse, 0.0);
            hit += 1;
        }
    }
    hit
}

/// Whether the player is mid-smash.
pub fn is_smashing(world: &World, player: Entity) -> bool {
    world
        .get::<&SmashSequence>(player)
        .map(|smash| smash.phase != SmashPhase::Idle)
        .unwrap_or(false)
}
