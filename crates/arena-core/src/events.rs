//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// A one-shot sound effect the host should play this tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundCue {
    pub clip: SoundClip,
    /// Asset the clip bank maps the clip to.
    pub asset: String,
    pub pitch: f32,
    pub volume: f32,
}

/// Gameplay milestones, mostly for logging and HUD flourishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    GameStarted,
    WaveStarted { wave: u32, enemies: u32 },
    PowerupSpawned { kind: PowerupKind },
    PowerupCollected { kind: PowerupKind },
    PowerupExpired { kind: PowerupKind },
    PushbackHit,
    RocketsFired { count: u32 },
    RocketHit,
    SmashLanded { enemies_hit: u32 },
    EnemyFell,
    Paused,
    Resumed,
    GameOver { wave: u32 },
}
