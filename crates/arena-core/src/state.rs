//! Game state snapshot: the complete visible state sent to the host each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{GameEvent, SoundCue};
use crate::types::{Rgba, SimTime};

/// Complete game state broadcast to the host after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: u32,
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub pickups: Vec<PickupView>,
    pub rockets: Vec<RocketView>,
    pub indicator: IndicatorView,
    pub hud: HudState,
    pub music: MusicView,
    pub sound_cues: Vec<SoundCue>,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub velocity: Vec3,
    pub powerup: PowerupKind,
    pub powerup_remaining_secs: Option<f32>,
    pub smashing: bool,
    /// Camera pivot yaw in degrees.
    pub camera_yaw: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub archetype: EnemyArchetype,
    pub position: Vec3,
    pub velocity: Vec3,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub kind: PowerupKind,
    pub position: Vec3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocketView {
    pub position: Vec3,
    pub forward: Vec3,
    pub homing: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IndicatorView {
    pub visible: bool,
    pub position: Vec3,
    pub spin_degrees: f32,
    pub scale: f32,
    pub color: Rgba,
}

/// Which screen widgets are shown, and the level label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudState {
    pub start_menu_visible: bool,
    pub start_button_visible: bool,
    pub game_over_visible: bool,
    pub restart_button_visible: bool,
    pub pause_visible: bool,
    pub return_to_title_visible: bool,
    pub level_text_visible: bool,
    pub level_text: String,
}

impl Default for HudState {
    /// Title screen layout.
    fn default() -> Self {
        Self {
            start_menu_visible: true,
            start_button_visible: true,
            game_over_visible: false,
            restart_button_visible: false,
            pause_visible: false,
            return_to_title_visible: false,
            level_text_visible: false,
            level_text: level_label(1),
        }
    }
}

/// Label shown for a level number.
pub fn level_label(level: u32) -> String {
    format!("Level: {level}")
}

/// Background music channel state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MusicView {
    pub asset: Option<String>,
    pub playing: bool,
    pub looping: bool,
    pub volume: f32,
    pub fading: bool,
}
