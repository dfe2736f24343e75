//! Cleanup system: removes spent entities, and enemies that fell off the island during a game.

use hecs::{Entity, World};

use arena_core::components::{Enemy, Transform};
use arena_core::constants::FALL_LIMIT_Y;
use arena_core::events::GameEvent;

/// Queue fallen enemies (only while a game is running), then despawn
/// everything queued this tick. The buffer is drained; duplicates are harmless.
pub fn run(
    world: &mut World,
    remove_fallen: bool,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    if remove_fallen {
        for (entity, (_enemy, transform)) in world.query_mut::<(&Enemy, &Transform)>() {
            if transform.position.y < FALL_LIMIT_Y {
                despawn_buffer.push(entity);
                events.push(GameEvent::EnemyFell);
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
