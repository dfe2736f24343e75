//! Powerup spawning. After an initial delay, periodically tops the island up
//! to a fixed number of pickups.

use hecs::{Entity, World};
use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arena_core::config::SpawnerTuning;
use arena_core::events::GameEvent;

use crate::world_setup;

#[derive(Debug, Clone, Default)]
pub struct PowerupSpawner {
    /// Routine running (between game start and game over).
    pub active: bool,
    /// Seconds until the next check.
    pub next_check_secs: f32,
    /// Pickups this spawner placed, oldest first. May hold collected (despawned) entries.
    pub placed: Vec<Entity>,
}

/// Arm the routine; the first check happens after the spawn delay.
pub fn start(spawner: &mut PowerupSpawner, tuning: &SpawnerTuning) {
    spawner.active = true;
    spawner.next_check_secs = tuning.powerup_spawn_delay;
    spawner.placed.clear();
}

pub fn stop(spawner: &mut PowerupSpawner) {
    spawner.active = false;
}

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    spawner: &mut PowerupSpawner,
    tuning: &SpawnerTuning,
    events: &mut Vec<GameEvent>,
    dt: f32,
) {
    if !spawner.active {
        return;
    }

    spawner.next_check_secs -= dt;
    if spawner.next_check_secs > 0.0 {
        return;
    }
    spawner.next_check_secs += tuning.powerup_check_interval;

    spawner.placed.retain(|&entity| world.contains(entity));

    if spawner.placed.len() >= tuning.max_powerups || tuning.powerup_kinds.is_empty() {
        return;
    }

    let kind = tuning.powerup_kinds[rng.gen_range(0..tuning.powerup_kinds.len())];
    let pickup = world_setup::spawn_pickup(world, rng, kind, tuning.spawn_range);
    spawner.placed.push(pickup);
    debug!("Spawned {kind:?} powerup");
    events.push(GameEvent::PowerupSpawned { kind });

    if spawner.placed.len() > tuning.max_powerups {
        let oldest = spawner.placed.remove(0);
        let _ = world.despawn(oldest);
    }
}
