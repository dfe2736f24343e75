//! Tunable gameplay parameters.
//!
//! Every field defaults to the matching value in [`crate::constants`], so a
//! tuning file only needs to list what it changes. Files may be JSON or TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{EnemyArchetype, PowerupKind, SoundClip};

/// Tuning errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value that parses but cannot drive the simulation
    #[error("Invalid tuning: {0}")]
    Invalid(String),
}

/// All tunable parameters, grouped by the system that reads them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaTuning {
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub rocket: RocketTuning,
    pub smash: SmashTuning,
    pub spawner: SpawnerTuning,
    pub audio: AudioTuning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub speed: f32,
    pub mass: f32,
    pub radius: f32,
    pub drag: f32,
    pub rotation_speed: f32,
    pub pushback_strength: f32,
    pub powerup_duration: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            mass: PLAYER_MASS,
            radius: PLAYER_RADIUS,
            drag: BODY_DRAG,
            rotation_speed: FOCAL_ROTATION_SPEED,
            pushback_strength: PUSHBACK_STRENGTH,
            powerup_duration: POWERUP_DURATION,
        }
    }
}

/// Physical parameters of one enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyProfile {
    pub archetype: EnemyArchetype,
    pub speed: f32,
    pub mass: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub drag: f32,
    /// Archetypes a wave picks from, uniformly.
    pub profiles: Vec<EnemyProfile>,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            drag: BODY_DRAG,
            profiles: vec![
                EnemyProfile {
                    archetype: EnemyArchetype::Standard,
                    speed: ENEMY_SPEED,
                    mass: ENEMY_MASS,
                    radius: ENEMY_RADIUS,
                },
                EnemyProfile {
                    archetype: EnemyArchetype::Heavy,
                    speed: HEAVY_ENEMY_SPEED,
                    mass: HEAVY_ENEMY_MASS,
                    radius: HEAVY_ENEMY_RADIUS,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RocketTuning {
    pub speed: f32,
    pub strength: f32,
    pub lifetime: f32,
    pub radius: f32,
}

impl Default for RocketTuning {
    fn default() -> Self {
        Self {
            speed: ROCKET_SPEED,
            strength: ROCKET_STRENGTH,
            lifetime: ROCKET_LIFETIME,
            radius: ROCKET_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmashTuning {
    pub hang_time: f32,
    pub speed: f32,
    pub explosion_force: f32,
    pub explosion_radius: f32,
}

impl Default for SmashTuning {
    fn default() -> Self {
        Self {
            hang_time: SMASH_HANG_TIME,
            speed: SMASH_SPEED,
            explosion_force: SMASH_EXPLOSION_FORCE,
            explosion_radius: SMASH_EXPLOSION_RADIUS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerTuning {
    pub spawn_range: f32,
    pub first_wave: u32,
    pub max_enemies: u32,
    pub powerup_spawn_delay: f32,
    pub powerup_check_interval: f32,
    pub max_powerups: usize,
    /// Pickup kinds the powerup routine picks from. May be empty.
    pub powerup_kinds: Vec<PowerupKind>,
}

impl Default for SpawnerTuning {
    fn default() -> Self {
        Self {
            spawn_range: SPAWN_RANGE,
            first_wave: FIRST_WAVE,
            max_enemies: MAX_ENEMIES,
            powerup_spawn_delay: POWERUP_SPAWN_DELAY,
            powerup_check_interval: POWERUP_CHECK_INTERVAL,
            max_powerups: MAX_POWERUPS,
            powerup_kinds: PowerupKind::COLLECTIBLE.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioTuning {
    pub fade_duration: f32,
    pub sfx_volume: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
    pub clips: ClipBank,
}

impl Default for AudioTuning {
    fn default() -> Self {
        Self {
            fade_duration: MUSIC_FADE_DURATION,
            sfx_volume: SFX_VOLUME,
            min_pitch: SFX_MIN_PITCH,
            max_pitch: SFX_MAX_PITCH,
            clips: ClipBank::default(),
        }
    }
}

/// Asset assigned to each clip slot. An unassigned slot plays nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipBank {
    pub background_music: Option<String>,
    pub player_enemy_collision: Option<String>,
    pub enemy_enemy_collision: Option<String>,
    pub pushback_pickup: Option<String>,
    pub rockets_pickup: Option<String>,
    pub smash_pickup: Option<String>,
    pub generic_pickup: Option<String>,
    pub pushback_use: Option<String>,
    pub rockets_use: Option<String>,
    pub smash_use: Option<String>,
}

impl Default for ClipBank {
    fn default() -> Self {
        let asset = |name: &str| Some(format!("audio/{name}.ogg"));
        Self {
            background_music: asset("background_music"),
            player_enemy_collision: asset("player_enemy_collision"),
            enemy_enemy_collision: asset("enemy_enemy_collision"),
            pushback_pickup: asset("pushback_pickup"),
            rockets_pickup: asset("rockets_pickup"),
            smash_pickup: asset("smash_pickup"),
            generic_pickup: asset("generic_pickup"),
            pushback_use: asset("pushback_use"),
            rockets_use: asset("rockets_use"),
            smash_use: asset("smash_use"),
        }
    }
}

impl ClipBank {
    /// A bank with every slot empty.
    pub fn silent() -> Self {
        Self {
            background_music: None,
            player_enemy_collision: None,
            enemy_enemy_collision: None,
            pushback_pickup: None,
            rockets_pickup: None,
            smash_pickup: None,
            generic_pickup: None,
            pushback_use: None,
            rockets_use: None,
            smash_use: None,
        }
    }

    /// Asset assigned to a clip slot, if any.
    pub fn asset(&self, clip: SoundClip) -> Option<&str> {
        let slot = match clip {
            SoundClip::BackgroundMusic => &self.background_music,
            SoundClip::PlayerEnemyCollision => &self.player_enemy_collision,
            SoundClip::EnemyEnemyCollision => &self.enemy_enemy_collision,
            SoundClip::PushbackPickup => &self.pushback_pickup,
            SoundClip::RocketsPickup => &self.rockets_pickup,
            SoundClip::SmashPickup => &self.smash_pickup,
            SoundClip::GenericPickup => &self.generic_pickup,
            SoundClip::PushbackUse => &self.pushback_use,
            SoundClip::RocketsUse => &self.rockets_use,
            SoundClip::SmashUse => &self.smash_use,
        };
        slot.as_deref()
    }
}

impl ArenaTuning {
    /// Load tuning from a `.json` or `.toml` file and validate it.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&contents),
            Some("toml") => Self::from_toml_str(&contents),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let tuning: Self =
            serde_json::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let tuning: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the systems cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("player.mass", self.player.mass),
            ("player.radius", self.player.radius),
            ("player.powerup_duration", self.player.powerup_duration),
            ("rocket.lifetime", self.rocket.lifetime),
            ("rocket.radius", self.rocket.radius),
            ("smash.explosion_radius", self.smash.explosion_radius),
            ("spawner.powerup_check_interval", self.spawner.powerup_check_interval),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("audio.fade_duration", self.audio.fade_duration),
            ("spawner.powerup_spawn_delay", self.spawner.powerup_spawn_delay),
            ("spawner.spawn_range", self.spawner.spawn_range),
            ("smash.hang_time", self.smash.hang_time),
            ("player.drag", self.player.drag),
            ("enemy.drag", self.enemy.drag),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must not be negative, got {value}")));
            }
        }

        if self.spawner.max_enemies == 0 {
            return Err(ConfigError::Invalid("spawner.max_enemies must be at least 1".into()));
        }

        if self.enemy.profiles.is_empty() {
            return Err(ConfigError::Invalid("enemy.profiles must not be empty".into()));
        }
        if let Some(bad) = self
            .enemy
            .profiles
            .iter()
            .find(|p| !(p.mass > 0.0 && p.radius > 0.0))
        {
            return Err(ConfigError::Invalid(format!(
                "enemy profile {:?} needs positive mass and radius",
                bad.archetype
            )));
        }
        if self.spawner.powerup_kinds.contains(&PowerupKind::None) {
            return Err(ConfigError::Invalid("spawner.powerup_kinds cannot contain None".into()));
        }

        let (low, high) = SFX_PITCH_LIMITS;
        let audio = &self.audio;
        if audio.min_pitch > audio.max_pitch
            || audio.min_pitch < low
            || audio.max_pitch > high
        {
            return Err(ConfigError::Invalid(format!(
                "pitch range {}..{} must be ordered and within {low}..{high}",
                audio.min_pitch, audio.max_pitch
            )));
        }

        Ok(())
    }
}
