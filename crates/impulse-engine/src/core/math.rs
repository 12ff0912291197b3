//! Vector helpers over `glam::Vec3`.
//!
//! glam already supplies the operators; these wrap the handful of
//! operations where the engine needs checked behaviour instead of
//! silently producing NaN.

use std::fmt::Debug;

use glam::Vec3;

use crate::error::PhysicsError;

/// Euclidean norm.
pub fn length(v: Vec3) -> f32 {
    v.length()
}

/// Unit vector in the direction of `v`.
///
/// Fails with [`PhysicsError::DegenerateGeometry`] for a zero-length (or
/// non-finite) input rather than returning a zero or NaN normal.
pub fn normalize(v: Vec3) -> Result<Vec3, PhysicsError> {
    v.try_normalize().ok_or(PhysicsError::DegenerateGeometry)
}

pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.dot(b)
}

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Euclidean distance between two points.
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

/// Clamp `value` into `[min, max]`.
///
/// `min == max` returns `min`; `min > max` is a caller error.
pub fn clamp<T: PartialOrd + Copy + Debug>(value: T, min: T, max: T) -> Result<T, PhysicsError> {
    if min > max {
        return Err(PhysicsError::InvalidRange {
            min: format!("{min:?}"),
            max: format!("{max:?}"),
        });
    }
    if min == max || value < min {
        return Ok(min);
    }
    if value > max {
        return Ok(max);
    }
    Ok(value)
}

/// Arithmetic mean of a point set. Returns the origin for an empty set.
pub fn arithmetic_mean(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }
    points.iter().copied().sum::<Vec3>() / points.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_of_pythagorean_triple() {
        assert!((length(Vec3::new(3.0, 4.0, 12.0)) - 13.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_yields_unit_length() {
        for v in [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(-3.0, 4.0, 0.5),
            Vec3::new(1e-3, -2e-3, 5e-4),
            Vec3::new(250.0, 100.0, -75.0),
        ] {
            let n = normalize(v).unwrap();
            assert!((length(n) - 1.0).abs() < 1e-5, "|{:?}| = {}", n, length(n));
        }
    }

    #[test]
    fn normalize_zero_is_degenerate() {
        assert!(matches!(
            normalize(Vec3::ZERO),
            Err(PhysicsError::DegenerateGeometry)
        ));
    }

    #[test]
    fn normalize_non_finite_is_degenerate() {
        for v in [
            Vec3::new(f32::NAN, 1.0, 0.0),
            Vec3::new(f32::INFINITY, 0.0, 0.0),
        ] {
            assert!(
                matches!(normalize(v), Err(PhysicsError::DegenerateGeometry)),
                "{:?} should be rejected",
                v
            );
        }
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_eq!(cross(Vec3::X, Vec3::Y), Vec3::Z);
        assert_eq!(cross(Vec3::Y, Vec3::X), -Vec3::Z);
        assert_eq!(dot(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, -5.0, 6.0)), 12.0);
    }

    #[test]
    fn distance_uses_all_three_axes() {
        let d = distance(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 6.0, 15.0));
        assert!((d - 13.0).abs() < 1e-5, "distance was {}", d);
    }

    #[test]
    fn clamp_behaviour() {
        assert_eq!(clamp(5.0, 0.0, 1.0).unwrap(), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0).unwrap(), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0).unwrap(), 0.25);
        assert_eq!(clamp(200, 1, 128).unwrap(), 128);
        assert_eq!(clamp(9, 3, 3).unwrap(), 3);
        assert!(matches!(
            clamp(1, 10, 2),
            Err(PhysicsError::InvalidRange { .. })
        ));
    }

    #[test]
    fn mean_of_cube_corners_is_center() {
        let pts = [
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(3.0, 1.0, 1.0),
            Vec3::new(3.0, 5.0, 1.0),
            Vec3::new(1.0, 5.0, 1.0),
        ];
        assert_eq!(arithmetic_mean(&pts), Vec3::new(2.0, 3.0, 1.0));
    }
}
