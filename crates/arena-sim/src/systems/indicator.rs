//! Powerup indicator ring: follows the player, spins, and flashes colours.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arena_core::components::PowerupIndicator;
use arena_core::constants::*;
use arena_core::types::Rgba;

/// A hidden indicator in its start-up state.
pub fn new_indicator() -> PowerupIndicator {
    PowerupIndicator {
        visible: false,
        position: PLAYER_SPAWN + INDICATOR_OFFSET,
        spin_degrees: 0.0,
        scale: INDICATOR_SCALE,
        color: INDICATOR_START_COLOR,
        color_timer: INDICATOR_COLOR_INTERVAL,
    }
}

/// Track the player and cycle colours every tick; spin only while visible.
pub fn run(
    indicator: &mut PowerupIndicator,
    player_pos: Option<Vec3>,
    rng: &mut ChaCha8Rng,
    dt: f32,
) {
    if let Some(pos) = player_pos {
        indicator.position = pos + INDICATOR_OFFSET;
    }

    indicator.color_timer -= dt;
    if indicator.color_timer <= 0.0 {
        indicator.color = Rgba::new(rng.gen(), rng.gen(), rng.gen(), 1.0);
        indicator.color_timer += INDICATOR_COLOR_INTERVAL;
    }

    if indicator.visible {
        indicator.spin_degrees =
            (indicator.spin_degrees + INDICATOR_SPIN_SPEED * dt).rem_euclid(360.0);
    }
}
