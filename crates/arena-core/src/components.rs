//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components. Components that hold
//! entity handles live in the simulation crate.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Rgba;

/// World placement. `forward` is the facing direction (unit length).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub forward: Vec3,
}

/// Dynamic sphere integrated by the physics system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    pub velocity: Vec3,
    /// Rolling spin, derived from velocity. Only cleared on pause.
    pub angular_velocity: Vec3,
    pub mass: f32,
    pub radius: f32,
    /// Linear drag coefficient (per second).
    pub drag: f32,
}

/// Overlap-only volume (no contact response). Used by pickups.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TriggerVolume {
    pub radius: f32,
}

/// Kinematic sphere that reports contacts but is never pushed. Used by rockets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KinematicCollider {
    pub radius: f32,
}

/// Marks the player ball.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an enemy ball.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub archetype: EnemyArchetype,
    /// Chase acceleration (velocity change per second).
    pub speed: f32,
}

/// A powerup lying on the island.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerupPickup {
    pub kind: PowerupKind,
}

/// Active powerup on the player. At most one at a time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PowerupHolder {
    pub kind: PowerupKind,
    /// Seconds until the powerup wears off; `None` when nothing is held.
    pub remaining_secs: Option<f32>,
}

/// Latest movement input for the player.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerInput {
    pub forward: f32,
    pub turn: f32,
}

/// Camera pivot the player's forward force is aligned with.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FocalPoint {
    pub yaw_degrees: f32,
}

/// Ring drawn under the player while a powerup is active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerupIndicator {
    pub visible: bool,
    pub position: Vec3,
    pub spin_degrees: f32,
    pub scale: f32,
    pub color: Rgba,
    /// Seconds until the next colour change.
    pub color_timer: f32,
}
