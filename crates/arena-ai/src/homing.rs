//! Homing rocket guidance.
//!
//! Rockets are kinematic: they are moved directly rather than pushed by forces.

use glam::Vec3;

/// Result of one guidance step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomingStep {
    pub position: Vec3,
    pub forward: Vec3,
}

/// Advance a rocket one tick.
///
/// With a live target the rocket flies straight at it and turns to face it.
/// Without one it keeps flying along its current facing.
pub fn step(position: Vec3, forward: Vec3, target: Option<Vec3>, speed: f32, dt: f32) -> HomingStep {
    match target {
        Some(target) => {
            let to_target = (target - position).normalize_or_zero();
            let position = position + to_target * speed * dt;
            let facing = (target - position).normalize_or_zero();
            HomingStep {
                position,
                forward: if facing == Vec3::ZERO { forward } else { facing },
            }
        }
        None => HomingStep {
            position: position + forward * speed * dt,
            forward,
        },
    }
}

/// Impulse a rocket imparts on the body it strikes: away from the rocket,
/// along the contact normal.
pub fn strike_impulse(rocket: Vec3, struck: Vec3, strength: f32) -> Vec3 {
    (struck - rocket).normalize_or_zero() * strength
}
