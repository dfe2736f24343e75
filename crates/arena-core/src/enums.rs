//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start menu showing; nothing spawns.
    #[default]
    Title,
    /// Waves running.
    Playing,
    /// Gameplay frozen, audio still fading.
    Paused,
    /// Player fell off; waiting for a restart.
    GameOver,
}

/// Powerup carried by the player or lying on the island.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerupKind {
    #[default]
    None,
    /// Enemies touched by the player are knocked away.
    Pushback,
    /// Fire one homing rocket per enemy.
    Rockets,
    /// Leap up and slam down with a radial blast.
    Smash,
}

impl PowerupKind {
    /// Kinds that can actually appear as pickups.
    pub const COLLECTIBLE: [PowerupKind; 3] = [
        PowerupKind::Pushback,
        PowerupKind::Rockets,
        PowerupKind::Smash,
    ];
}

/// Enemy variety.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    #[default]
    Standard,
    /// Bigger, heavier and faster.
    Heavy,
}

/// How a force is applied to a rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceMode {
    /// Continuous force: divided by mass, scaled by dt.
    Force,
    /// Instant impulse: divided by mass.
    Impulse,
    /// Instant velocity change, mass ignored.
    VelocityChange,
}

/// Every sound the game can ask the host to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundClip {
    BackgroundMusic,
    PlayerEnemyCollision,
    EnemyEnemyCollision,
    PushbackPickup,
    RocketsPickup,
    SmashPickup,
    GenericPickup,
    PushbackUse,
    RocketsUse,
    SmashUse,
}

/// Smash move progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum SmashPhase {
    #[default]
    Idle,
    /// Climbing; seconds of climb left.
    Rising { remaining_secs: f32 },
    /// Slamming down toward the recorded floor height.
    Falling,
}
