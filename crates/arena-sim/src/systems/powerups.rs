//! Powerup collection and countdown on the player.

use hecs::{Entity, World};

use arena_core::components::{PowerupHolder, PowerupIndicator};
use arena_core::enums::PowerupKind;
use arena_core::events::GameEvent;

use crate::audio::AudioDirector;

/// Give the player a powerup, replacing any current one and restarting the countdown.
pub fn grant(
    world: &World,
    player: Entity,
    kind: PowerupKind,
    duration_secs: f32,
    indicator: &mut PowerupIndicator,
    audio: &mut AudioDirector,
    events: &mut Vec<GameEvent>,
) {
    let Ok(mut holder) = world.get::<&mut PowerupHolder>(player) else {
        return;
    };
    holder.kind = kind;
    holder.remaining_secs = Some(duration_secs);

    indicator.visible = true;
    audio.play_powerup_pickup(kind);
    events.push(GameEvent::PowerupCollected { kind });
}

/// Count down the active powerup; clear it and hide the indicator when it runs out.
pub fn run(
    world: &mut World,
    indicator: &mut PowerupIndicator,
    events: &mut Vec<GameEvent>,
    dt: f32,
) {
    for (_entity, holder) in world.query_mut::<&mut PowerupHolder>() {
        let Some(remaining) = holder.remaining_secs else {
            continue;
        };

        let remaining = remaining - dt;
        if remaining > 0.0 {
            holder.remaining_secs = Some(remaining);
            continue;
        }

        events.push(GameEvent::PowerupExpired { kind: holder.kind });
        holder.kind = PowerupKind::None;
        holder.remaining_secs = None;
        indicator.visible = false;
    }
}

/// The powerup the given player currently holds.
pub fn held_kind(world: &World, player: Entity) -> PowerupKind {
    world
        .get::<&PowerupHolder>(player)
        .map(|holder| holder.kind)
        .unwrap_or_default()
}
