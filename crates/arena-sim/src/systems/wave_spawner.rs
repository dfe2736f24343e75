//! Wave spawning: a new wave arrives whenever the island is clear.

use hecs::World;
use log::info;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arena_core::components::Enemy;
use arena_core::config::{EnemyTuning, SpawnerTuning};
use arena_core::events::GameEvent;
use arena_core::state::{level_label, HudState};

use crate::world_setup;

/// Wave progression.
#[derive(Debug, Clone, Default)]
pub struct WaveState {
    /// Current wave (level) number. Zero before the game starts.
    pub wave_number: u32,
    /// Spawning enabled (between game start and game over).
    pub active: bool,
}

/// Enable spawning and send in the first wave.
pub fn start(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    waves: &mut WaveState,
    spawner: &SpawnerTuning,
    enemies: &EnemyTuning,
    events: &mut Vec<GameEvent>,
) {
    waves.active = true;
    waves.wave_number = spawner.first_wave;
    let count = spawner.first_wave.min(spawner.max_enemies);
    spawn_wave(world, rng, waves.wave_number, count, spawner, enemies, events);
}

/// Disable spawning (game over).
pub fn stop(waves: &mut WaveState) {
    waves.active = false;
}

/// When no enemies remain, advance the wave and spawn the next one.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    waves: &mut WaveState,
    spawner: &SpawnerTuning,
    enemies: &EnemyTuning,
    hud: &mut HudState,
    events: &mut Vec<GameEvent>,
) {
    if !waves.active {
        return;
    }

    let enemy_count = world.query::<&Enemy>().iter().count();
    if enemy_count > 0 {
        return;
    }

    waves.wave_number += 1;
    let count = waves.wave_number.min(spawner.max_enemies);
    spawn_wave(world, rng, waves.wave_number, count, spawner, enemies, events);
    hud.level_text = level_label(waves.wave_number);
}

fn spawn_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: u32,
    count: u32,
    spawner: &SpawnerTuning,
    enemies: &EnemyTuning,
    events: &mut Vec<GameEvent>,
) {
    info!("Spawning {count} enemies for wave {wave}");

    for _ in 0..count {
        let profile = &enemies.profiles[rng.gen_range(0..enemies.profiles.len())];
        world_setup::spawn_enemy(world, rng, profile, enemies.drag, spawner.spawn_range);
    }

    events.push(GameEvent::WaveStarted {
        wave,
        enemies: count,
    });
}
