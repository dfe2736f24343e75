#[cfg(test)]
mod tests {
    use glam::Vec3;

    use arena_core::constants::*;

    use crate::chase::chase_velocity_change;
    use crate::explosion::{blast_impulse, pushback_impulse};
    use crate::homing::{step, strike_impulse};

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    // ---- Chase ----

    #[test]
    fn test_chase_points_at_player_horizontally() {
        let dv = chase_velocity_change(
            Vec3::new(0.0, 0.5, -4.0),
            Vec3::new(0.0, 3.0, 0.0),
            ENEMY_SPEED,
            DT,
        );
        assert_eq!(dv.y, 0.0, "Chase must not lift the enemy");
        assert!(dv.z > 0.0);
        assert!((dv.length() - ENEMY_SPEED * DT).abs() < 1e-6);
    }

    #[test]
    fn test_chase_magnitude_ignores_distance() {
        let near = chase_velocity_change(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 3.0, DT);
        let far = chase_velocity_change(Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0), 3.0, DT);
        assert!(approx(near, far));
    }

    #[test]
    fn test_chase_directly_below_is_zero() {
        let dv = chase_velocity_change(Vec3::new(2.0, -3.0, 2.0), Vec3::new(2.0, 1.0, 2.0), 3.0, DT);
        assert_eq!(dv, Vec3::ZERO);
    }

    // ---- Homing ----

    #[test]
    fn test_homing_moves_toward_target() {
        let start = Vec3::new(0.0, 1.0, 0.0);
        let target = Vec3::new(10.0, 1.0, 0.0);
        let result = step(start, Vec3::Z, Some(target), ROCKET_SPEED, DT);
        assert!(approx(result.position, start + Vec3::X * ROCKET_SPEED * DT));
        assert!(approx(result.forward, Vec3::X));
    }

    #[test]
    fn test_homing_without_target_flies_straight() {
        let start = Vec3::new(1.0, 1.0, 1.0);
        let result = step(start, Vec3::Z, None, ROCKET_SPEED, 1.0);
        assert!(approx(result.position, start + Vec3::Z * ROCKET_SPEED));
        assert_eq!(result.forward, Vec3::Z);
    }

    #[test]
    fn test_homing_reaches_target_eventually() {
        let target = Vec3::new(-6.0, 0.5, 8.0);
        let mut position = Vec3::new(0.0, 1.5, 0.0);
        let mut forward = Vec3::Z;
        for _ in 0..60 {
            let next = step(position, forward, Some(target), ROCKET_SPEED, DT);
            position = next.position;
            forward = next.forward;
        }
        assert!((position - target).length() < ROCKET_SPEED * DT * 2.0);
    }

    #[test]
    fn test_strike_pushes_away_from_rocket() {
        let impulse = strike_impulse(Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0), ROCKET_STRENGTH);
        assert!(approx(impulse, Vec3::new(0.0, 0.0, ROCKET_STRENGTH)));
    }

    // ---- Blasts ----

    #[test]
    fn test_blast_falls_off_linearly() {
        let origin = Vec3::ZERO;
        let half = blast_impulse(origin, Vec3::new(7.5, 0.0, 0.0), 20.0, 15.0);
        assert!(approx(half, Vec3::new(10.0, 0.0, 0.0)));

        let edge = blast_impulse(origin, Vec3::new(15.0, 0.0, 0.0), 20.0, 15.0);
        assert_eq!(edge, Vec3::ZERO);

        let beyond = blast_impulse(origin, Vec3::new(0.0, 0.0, 40.0), 20.0, 15.0);
        assert_eq!(beyond, Vec3::ZERO);
    }

    #[test]
    fn test_blast_at_origin_has_no_direction() {
        assert_eq!(blast_impulse(Vec3::ONE, Vec3::ONE, 20.0, 15.0), Vec3::ZERO);
    }

    #[test]
    fn test_pushback_scales_with_separation() {
        let impulse = pushback_impulse(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), PUSHBACK_STRENGTH);
        assert!(approx(impulse, Vec3::new(PUSHBACK_STRENGTH, 0.0, 0.0)));
        let wide = pushback_impulse(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), PUSHBACK_STRENGTH);
        assert!(approx(wide, Vec3::new(2.0 * PUSHBACK_STRENGTH, 0.0, 0.0)));
    }
}
