use glam::Vec3;

use crate::components::body::Body;

/// Advance one body by a single sub-step of `dt` seconds.
///
/// Semi-implicit Euler: velocity first (accumulated force, then gravity),
/// then position and rotation from the new velocity. The force accumulator
/// is cleared and the geometry cache invalidated. Static bodies are skipped.
pub fn integrate(body: &mut Body, gravity: Vec3, dt: f32) {
    body.advance(gravity, dt);
}

/// Length of one sub-step when `time` is split into `iterations` pieces.
pub fn sub_step(time: f32, iterations: u32) -> f32 {
    time / iterations.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::PhysicsConfig;
    use crate::components::body::{create_box_body, create_circle_body, CacheState};
    use crate::core::transform::Translate;

    #[test]
    fn free_fall_one_second() {
        let cfg = PhysicsConfig::default();
        let mut ball = create_circle_body(0.5, Vec3::new(0.0, 100.0, 0.0), 1.0, false, 0.5, &cfg).unwrap();
        integrate(&mut ball, Vec3::new(0.0, -10.0, 0.0), 1.0);
        // v = -10, p = 100 + (-10) * 1 (velocity updated before position)
        assert!((ball.linear_velocity().y + 10.0).abs() < 1e-5);
        assert!((ball.position().y - 90.0).abs() < 1e-4);
    }

    #[test]
    fn sub_steps_split_time() {
        assert!((sub_step(1.0, 4) - 0.25).abs() < 1e-7);
        assert!((sub_step(0.5, 0) - 0.5).abs() < 1e-7);
    }

    #[test]
    fn rotation_follows_rotational_velocity() {
        let cfg = PhysicsConfig::default();
        let mut ball = create_circle_body(0.5, Vec3::ZERO, 1.0, false, 0.5, &cfg).unwrap();
        ball.set_rotational_velocity(2.0);
        for _ in 0..4 {
            integrate(&mut ball, Vec3::ZERO, 0.25);
        }
        assert!((ball.rotation() - 2.0).abs() < 1e-5, "rotation was {}", ball.rotation());
    }

    #[test]
    fn integration_invalidates_cache() {
        let cfg = PhysicsConfig::default();
        let mut cube = create_box_body(1.0, 1.0, 1.0, Vec3::ZERO, 1.0, false, 0.5, &cfg).unwrap();
        cube.update_vertices(&Translate);
        assert_eq!(cube.geometry().vertices_state(), CacheState::Clean);
        integrate(&mut cube, Vec3::new(0.0, -9.81, 0.0), 1.0 / 60.0);
        assert_eq!(cube.geometry().vertices_state(), CacheState::Dirty);
    }

    #[test]
    fn static_body_is_skipped() {
        let cfg = PhysicsConfig::default();
        let mut floor = create_box_body(10.0, 1.0, 10.0, Vec3::ZERO, 1.0, true, 0.5, &cfg).unwrap();
        floor.update_vertices(&Translate);
        integrate(&mut floor, Vec3::new(0.0, -9.81, 0.0), 1.0);
        assert_eq!(floor.position(), Vec3::ZERO);
        assert_eq!(floor.linear_velocity(), Vec3::ZERO);
        assert_eq!(floor.geometry().vertices_state(), CacheState::Clean);
    }
}
