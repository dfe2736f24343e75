//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Menus ---
    /// Start button on the title screen.
    StartGame,
    /// Escape key: pause or resume.
    TogglePause,
    /// Restart button on the game-over screen.
    Restart,
    /// Return-to-title button on the pause screen.
    ReturnToTitle,

    // --- Movement ---
    /// Latest analogue input. `forward` pushes along the camera's forward axis,
    /// `turn` rotates the camera pivot. Both are clamped to -1..=1.
    SetInput { forward: f32, turn: f32 },

    // --- Abilities ---
    /// F key: launch rockets (Rockets powerup only).
    FireRockets,
    /// Space: start a smash (Smash powerup only).
    Smash,
}
