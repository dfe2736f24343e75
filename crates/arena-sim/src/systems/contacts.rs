//! Gameplay reactions to new physics contacts.
//!
//! Physics reports who started touching whom; this system decides what that
//! means: pickups, bumps, pushback hits, rocket strikes and collision sounds.

use glam::Vec3;
use hecs::{Entity, World};
use log::debug;

use arena_ai::explosion::pushback_impulse;
use arena_ai::homing::strike_impulse;
use arena_core::components::*;
use arena_core::config::ArenaTuning;
use arena_core::enums::{ForceMode, PowerupKind};
use arena_core::events::GameEvent;

use crate::abilities::Rocket;
use crate::audio::AudioDirector;

use super::physics::{apply_force_to, Contact};
use super::powerups;

/// What an entity is, as far as contacts are concerned.
#[derive(Debug, Clone, Copy)]
enum Role {
    Player,
    Enemy,
    Pickup(PowerupKind),
    Rocket(Option<Entity>),
    Other,
}

fn role_of(world: &World, entity: Entity) -> Role {
    if world.get::<&Player>(entity).is_ok() {
        Role::Player
    } else if world.get::<&Enemy>(entity).is_ok() {
        Role::Enemy
    } else if let Ok(pickup) = world.get::<&PowerupPickup>(entity) {
        Role::Pickup(pickup.kind)
    } else if let Ok(rocket) = world.get::<&Rocket>(entity) {
        Role::Rocket(rocket.target)
    } else {
        Role::Other
    }
}

fn position_of(world: &World, entity: Entity) -> Option<Vec3> {
    world.get::<&Transform>(entity).ok().map(|t| t.position)
}

/// Dispatch every contact that began this tick.
///
/// Entities queued in `despawn_buffer` are treated as already gone, so a
/// pickup is collected once and a rocket strikes once even when several
/// contacts begin on the same tick.
pub fn run(
    world: &World,
    contacts: &[Contact],
    tuning: &ArenaTuning,
    indicator: &mut PowerupIndicator,
    audio: &mut AudioDirector,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    for contact in contacts {
        if despawn_buffer.contains(&contact.a) || despawn_buffer.contains(&contact.b) {
            continue;
        }

        let first = (contact.a, role_of(world, contact.a));
        let second = (contact.b, role_of(world, contact.b));

        match (first.1, second.1) {
            (Role::Player, Role::Pickup(kind)) => {
                collect(world, first.0, second.0, kind, tuning, indicator, audio, events, despawn_buffer)
            }
            (Role::Pickup(kind), Role::Player) => {
                collect(world, second.0, first.0, kind, tuning, indicator, audio, events, despawn_buffer)
            }
            (Role::Player, Role::Enemy) => bump(world, first.0, second.0, tuning, audio, events),
            (Role::Enemy, Role::Player) => bump(world, second.0, first.0, tuning, audio, events),
            (Role::Enemy, Role::Enemy) => audio.play_enemy_enemy_collision(),
            (Role::Rocket(target), _) => {
                rocket_contact(world, first.0, target, second, tuning, events, despawn_buffer)
            }
            (_, Role::Rocket(target)) => {
                rocket_contact(world, second.0, target, first, tuning, events, despawn_buffer)
            }
            _ => {}
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn collect(
    world: &World,
    player: Entity,
    pickup: Entity,
    kind: PowerupKind,
    tuning: &ArenaTuning,
    indicator: &mut PowerupIndicator,
    audio: &mut AudioDirector,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    powerups::grant(
        world,
        player,
        kind,
        tuning.player.powerup_duration,
        indicator,
        audio,
        events,
    );
    despawn_buffer.push(pickup);
}

/// Player touched an enemy: knock it away under Pushback, and always make a thud.
fn bump(
    world: &World,
    player: Entity,
    enemy: Entity,
    tuning: &ArenaTuning,
    audio: &mut AudioDirector,
    events: &mut Vec<GameEvent>,
) {
    if powerups::held_kind(world, player) == PowerupKind::Pushback {
        if let (Some(player_pos), Some(enemy_pos)) =
            (position_of(world, player), position_of(world, enemy))
        {
            let impulse = pushback_impulse(player_pos, enemy_pos, tuning.player.pushback_strength);
            apply_force_to(world, enemy, impulse, ForceMode::Impulse, 0.0);
            debug!("Player collided with {enemy:?} with powerup set to Pushback");
            audio.play_powerup_use(PowerupKind::Pushback);
            events.push(GameEvent::PushbackHit);
        }
    }

    audio.play_player_enemy_collision();
}

/// A rocket touched something. With a live target it only reacts to enemies;
/// once its target is gone any contact destroys it.
fn rocket_contact(
    world: &World,
    rocket: Entity,
    target: Option<Entity>,
    (other, other_role): (Entity, Role),
    tuning: &ArenaTuning,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let target_alive = target
        .is_some_and(|t| world.contains(t) && !despawn_buffer.contains(&t));

    if !target_alive {
        despawn_buffer.push(rocket);
        return;
    }

    if !matches!(other_role, Role::Enemy) {
        return;
    }

    if let (Some(rocket_pos), Some(other_pos)) = (position_of(world, rocket), position_of(world, other)) {
        let impulse = strike_impulse(rocket_pos, other_pos, tuning.rocket.strength);
        apply_force_to(world, other, impulse, ForceMode::Impulse, 0.0);
    }
    events.push(GameEvent::RocketHit);
    despawn_buffer.push(rocket);
}
