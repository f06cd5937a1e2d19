//! Parametric orbit kinematics.
//!
//! Bodies move on circles in the ecliptic (XZ) plane. The same functions
//! are used by the renderer to place bodies and by the camera's focus
//! tracking to aim at them, so the camera never lags or leads what is
//! drawn.

use glam::{Vec2, Vec3};

use crate::catalog::{BodyCatalog, BodyId, CelestialBody};

/// Global scale applied to every body's angular speed.
pub const ORBIT_TIME_SCALE: f32 = 0.2;

/// Orbit angle in radians for `body` at `elapsed` seconds.
#[inline]
#[must_use]
pub fn orbit_angle(body: &CelestialBody, elapsed: f32, speed: f32) -> f32 {
    elapsed * body.angular_speed * speed * ORBIT_TIME_SCALE
}

/// Position of `body` in the ecliptic plane as `(x, z)`.
///
/// A body with distance 0 always resolves to the origin.
#[inline]
#[must_use]
pub fn orbit_position(body: &CelestialBody, elapsed: f32, speed: f32) -> Vec2 {
    if body.is_central() {
        return Vec2::ZERO;
    }
    let angle = orbit_angle(body, elapsed, speed);
    Vec2::new(angle.cos() * body.distance, angle.sin() * body.distance)
}

/// [`orbit_position`] lifted into world space (y = 0).
#[inline]
#[must_use]
pub fn world_position(body: &CelestialBody, elapsed: f32, speed: f32) -> Vec3 {
    let p = orbit_position(body, elapsed, speed);
    Vec3::new(p.x, 0.0, p.y)
}

/// World positions of every body in catalog order.
#[must_use]
pub fn catalog_positions(
    catalog: &BodyCatalog,
    elapsed: f32,
    speed: f32,
) -> Vec<(BodyId, Vec3)> {
    catalog
        .iter()
        .map(|body| (body.id, world_position(body, elapsed, speed)))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    fn body(id: BodyId) -> CelestialBody {
        BodyCatalog::solar_system().get(id).unwrap().clone()
    }

    #[test]
    fn central_body_stays_at_origin() {
        let sun = body(BodyId::Sun);
        for t in [0.0, 1.0, 123.4, 1e6] {
            for speed in [0.0, 1.0, 10.0] {
                assert_eq!(orbit_position(&sun, t, speed), Vec2::ZERO);
            }
        }
    }

    #[test]
    fn starts_on_positive_x_axis() {
        let earth = body(BodyId::Earth);
        let p = orbit_position(&earth, 0.0, 1.0);
        assert_eq!(p, Vec2::new(earth.distance, 0.0));
    }

    #[test]
    fn identical_inputs_give_identical_positions() {
        let mars = body(BodyId::Mars);
        let a = orbit_position(&mars, 17.25, 2.5);
        let b = orbit_position(&mars, 17.25, 2.5);
        assert_eq!(a, b);
    }

    #[test]
    fn stays_on_orbit_circle() {
        let jupiter = body(BodyId::Jupiter);
        for i in 0..50 {
            let p = orbit_position(&jupiter, i as f32 * 3.7, 1.0);
            assert!((p.length() - jupiter.distance).abs() < 1e-3);
        }
    }

    #[test]
    fn quarter_turn_lands_on_z_axis() {
        let earth = body(BodyId::Earth);
        // angle = t * 1.0 * 1.0 * 0.2 = PI / 2
        let t = PI / 2.0 / ORBIT_TIME_SCALE;
        let p = world_position(&earth, t, 1.0);
        assert!(p.x.abs() < 1e-3);
        assert!((p.z - earth.distance).abs() < 1e-3);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn speed_multiplier_scales_time() {
        let venus = body(BodyId::Venus);
        let fast = orbit_position(&venus, 5.0, 2.0);
        let slow = orbit_position(&venus, 10.0, 1.0);
        assert!((fast - slow).length() < 1e-3);
    }

    #[test]
    fn catalog_positions_follow_catalog_order() {
        let catalog = BodyCatalog::solar_system();
        let positions = catalog_positions(&catalog, 0.0, 1.0);
        assert_eq!(positions.len(), catalog.len());
        assert_eq!(positions[0], (BodyId::Sun, Vec3::ZERO));
    }
}
