use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;

/// Bounds and world parameters, passed explicitly to body factories and the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Smallest accepted sphere area / cuboid volume (default: 0.01²).
    pub min_body_size: f32,
    /// Largest accepted sphere area / cuboid volume (default: 64²).
    pub max_body_size: f32,
    /// Lowest accepted density in g/cm³ (default: 0.5).
    pub min_density: f32,
    /// Highest accepted density in g/cm³ (default: 21.4).
    pub max_density: f32,
    /// Sub-step count is clamped into `[min_iterations, max_iterations]`.
    pub min_iterations: u32,
    pub max_iterations: u32,
    /// World gravity (default: `(0, -9.81, 0)`).
    pub gravity: Vec3,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            min_body_size: 0.01 * 0.01,
            max_body_size: 64.0 * 64.0,
            min_density: 0.5,
            max_density: 21.4,
            min_iterations: 1,
            max_iterations: 128,
            gravity: Vec3::new(0.0, -9.81, 0.0),
        }
    }
}

impl PhysicsConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PhysicsError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every `[min, max]` pair is ordered.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        fn ordered<T: PartialOrd + std::fmt::Debug>(min: T, max: T) -> Result<(), PhysicsError> {
            if min > max {
                return Err(PhysicsError::InvalidRange {
                    min: format!("{min:?}"),
                    max: format!("{max:?}"),
                });
            }
            Ok(())
        }
        ordered(self.min_body_size, self.max_body_size)?;
        ordered(self.min_density, self.max_density)?;
        ordered(self.min_iterations, self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_bounds() {
        let cfg = PhysicsConfig::default();
        assert!((cfg.min_body_size - 0.0001).abs() < 1e-9);
        assert!((cfg.max_body_size - 4096.0).abs() < 1e-3);
        assert!((cfg.min_density - 0.5).abs() < 1e-6);
        assert!((cfg.max_density - 21.4).abs() < 1e-6);
        assert_eq!((cfg.min_iterations, cfg.max_iterations), (1, 128));
        assert_eq!(cfg.gravity, Vec3::new(0.0, -9.81, 0.0));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_partial_config() {
        let json = r#"{
            "max_iterations": 16,
            "gravity": [0.0, -1.62, 0.0]
        }"#;
        let cfg = PhysicsConfig::from_json(json).unwrap();
        assert_eq!(cfg.max_iterations, 16);
        assert_eq!(cfg.gravity, Vec3::new(0.0, -1.62, 0.0));
        assert!((cfg.max_density - 21.4).abs() < 1e-6);
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let json = r#"{ "min_density": 5.0, "max_density": 1.0 }"#;
        assert!(matches!(
            PhysicsConfig::from_json(json),
            Err(PhysicsError::InvalidRange { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        assert!(matches!(
            PhysicsConfig::from_json("{ not json"),
            Err(PhysicsError::Config(_))
        ));
    }
}
