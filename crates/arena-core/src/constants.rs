//! Simulation constants and tuning defaults.
//!
//! Fixed values live here directly. Values that a tuning file may override
//! are the defaults for the matching fields in [`crate::config`].

use glam::Vec3;

use crate::types::Rgba;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- World ---

/// Gravitational acceleration (m/s², applied along -y).
pub const GRAVITY: f32 = 9.81;

/// Radius of the island disc. Its top surface is the plane y = 0.
/// Large enough that every spawn point inside the square spawn range lands on it.
pub const PLATFORM_RADIUS: f32 = 16.0;

/// Anything below this height has fallen off the island for good.
pub const FALL_LIMIT_Y: f32 = -5.0;

/// Restitution used for sphere-sphere contacts.
pub const BOUNCINESS: f32 = 0.6;

// --- Player ---

/// Player spawn point (resting on the island centre).
pub const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, PLAYER_RADIUS, 0.0);

/// Forward force applied per unit of input.
pub const PLAYER_SPEED: f32 = 5.0;

pub const PLAYER_MASS: f32 = 1.0;

pub const PLAYER_RADIUS: f32 = 0.5;

/// Linear drag shared by player and enemies.
pub const BODY_DRAG: f32 = 0.1;

/// Focal point (camera pivot) turn rate in degrees per second at full input.
pub const FOCAL_ROTATION_SPEED: f32 = 50.0;

// --- Powerups ---

/// Impulse multiplier applied to enemies hit while Pushback is active.
pub const PUSHBACK_STRENGTH: f32 = 15.0;

/// Seconds a collected powerup stays active.
pub const POWERUP_DURATION: f32 = 7.0;

/// Trigger radius of a powerup pickup.
pub const PICKUP_RADIUS: f32 = 0.6;

/// Indicator ring offset from the player centre.
pub const INDICATOR_OFFSET: Vec3 = Vec3::new(0.0, -0.5, 0.0);

/// Indicator spin in degrees per second.
pub const INDICATOR_SPIN_SPEED: f32 = 100.0;

/// Seconds between indicator colour changes.
pub const INDICATOR_COLOR_INTERVAL: f32 = 1.0;

/// Uniform scale of the indicator ring.
pub const INDICATOR_SCALE: f32 = 5.7;

/// Tint the indicator starts with before the first random colour.
pub const INDICATOR_START_COLOR: Rgba = Rgba::new(0.15, 1.20, 50.3, 10.4);

// --- Enemies ---

pub const ENEMY_SPEED: f32 = 3.0;
pub const ENEMY_MASS: f32 = 1.0;
pub const ENEMY_RADIUS: f32 = 0.5;

pub const HEAVY_ENEMY_SPEED: f32 = 5.0;
pub const HEAVY_ENEMY_MASS: f32 = 2.5;
pub const HEAVY_ENEMY_RADIUS: f32 = 0.75;

// --- Rockets ---

pub const ROCKET_SPEED: f32 = 15.0;

/// Impulse applied to an enemy struck by a rocket.
pub const ROCKET_STRENGTH: f32 = 15.0;

/// Seconds before an unspent rocket self-destructs.
pub const ROCKET_LIFETIME: f32 = 5.0;

pub const ROCKET_RADIUS: f32 = 0.15;

/// Rockets launch this far above the player centre.
pub const ROCKET_LAUNCH_HEIGHT: f32 = 1.0;

// --- Smash ---

/// Seconds spent rising before the slam.
pub const SMASH_HANG_TIME: f32 = 0.5;

/// Rising speed; the slam descends at twice this.
pub const SMASH_SPEED: f32 = 10.0;

pub const SMASH_EXPLOSION_FORCE: f32 = 20.0;

pub const SMASH_EXPLOSION_RADIUS: f32 = 15.0;

// --- Spawning ---

/// Half-width of the square spawn area on x and z.
pub const SPAWN_RANGE: f32 = 11.0;

/// Enemies in the opening wave.
pub const FIRST_WAVE: u32 = 1;

/// Upper bound on enemies spawned per wave.
pub const MAX_ENEMIES: u32 = 10;

/// Seconds after game start before the first powerup check.
pub const POWERUP_SPAWN_DELAY: f32 = 5.0;

/// Seconds between powerup checks.
pub const POWERUP_CHECK_INTERVAL: f32 = 2.0;

/// Maximum pickups lying on the island at once.
pub const MAX_POWERUPS: usize = 3;

// --- Audio ---

/// Music fade-in / fade-out duration (seconds, unscaled time).
pub const MUSIC_FADE_DURATION: f32 = 1.5;

pub const SFX_VOLUME: f32 = 1.0;

pub const SFX_MIN_PITCH: f32 = 0.9;

pub const SFX_MAX_PITCH: f32 = 1.1;

/// Allowed range for the randomised SFX pitch bounds.
pub const SFX_PITCH_LIMITS: (f32, f32) = (0.8, 1.2);
