//! Radial blast falloff used by the smash landing.

use glam::Vec3;

/// Impulse a blast at `origin` applies to a body at `target`.
///
/// Magnitude falls off linearly from `force` at the origin to zero at
/// `radius`; bodies at or beyond the radius are untouched. The direction is
/// from the origin to the body (no upward bias).
pub fn blast_impulse(origin: Vec3, target: Vec3, force: f32, radius: f32) -> Vec3 {
    let offset = target - origin;
    let distance = offset.length();
    if radius <= 0.0 || distance >= radius {
        return Vec3::ZERO;
    }
    let falloff = 1.0 - distance / radius;
    offset.normalize_or_zero() * force * falloff
}

/// Impulse a pushback bump applies: proportional to the separation, not normalised.
pub fn pushback_impulse(player: Vec3, enemy: Vec3, strength: f32) -> Vec3 {
    (enemy - player) * strength
}
