use std::f32::consts::PI;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Collision shape of a body, centered on the body's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Sphere { radius: f32 },
    Cuboid { width: f32, height: f32, depth: f32 },
}

/// Triangle index list for a cuboid's 8 local vertices, outward winding.
/// Only hosts that draw bodies need this; the solver never reads it.
pub const CUBOID_TRIANGLES: [u32; 36] = [
    // back (-z)
    0, 1, 2, 0, 2, 3,
    // front (+z)
    4, 7, 6, 4, 6, 5,
    // top (+y)
    0, 4, 5, 0, 5, 1,
    // bottom (-y)
    3, 2, 6, 3, 6, 7,
    // left (-x)
    0, 3, 7, 0, 7, 4,
    // right (+x)
    1, 5, 6, 1, 6, 2,
];

impl Shape {
    /// Size checked against the configured body-size bounds: cross-section
    /// area for a sphere, volume for a cuboid.
    pub fn size(&self) -> f32 {
        match *self {
            Shape::Sphere { radius } => radius * radius * PI,
            Shape::Cuboid { width, height, depth } => width * height * depth,
        }
    }

    /// Shape-local vertices. Spheres have none.
    ///
    /// Cuboid order: back face (z = -d/2) left-top, right-top, right-bottom,
    /// left-bottom, then the front face (z = +d/2) in the same order.
    pub fn local_vertices(&self) -> Vec<Vec3> {
        match *self {
            Shape::Sphere { .. } => Vec::new(),
            Shape::Cuboid { width, height, depth } => {
                let left = -width / 2.0;
                let right = width / 2.0;
                let bottom = -height / 2.0;
                let top = height / 2.0;
                let back = -depth / 2.0;
                let front = depth / 2.0;
                vec![
                    Vec3::new(left, top, back),
                    Vec3::new(right, top, back),
                    Vec3::new(right, bottom, back),
                    Vec3::new(left, bottom, back),
                    Vec3::new(left, top, front),
                    Vec3::new(right, top, front),
                    Vec3::new(right, bottom, front),
                    Vec3::new(left, bottom, front),
                ]
            }
        }
    }

    /// Render triangles, `None` for spheres.
    pub fn triangles(&self) -> Option<&'static [u32]> {
        match self {
            Shape::Sphere { .. } => None,
            Shape::Cuboid { .. } => Some(&CUBOID_TRIANGLES),
        }
    }

    pub fn is_sphere(&self) -> bool {
        matches!(self, Shape::Sphere { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{arithmetic_mean, cross, dot};

    #[test]
    fn sizes() {
        let sphere = Shape::Sphere { radius: 2.0 };
        assert!((sphere.size() - 4.0 * PI).abs() < 1e-5);
        let cuboid = Shape::Cuboid { width: 2.0, height: 3.0, depth: 4.0 };
        assert!((cuboid.size() - 24.0).abs() < 1e-6);
    }

    #[test]
    fn cuboid_vertices_are_centered() {
        let verts = Shape::Cuboid { width: 2.0, height: 4.0, depth: 6.0 }.local_vertices();
        assert_eq!(verts.len(), 8);
        assert_eq!(arithmetic_mean(&verts), Vec3::ZERO);
        assert_eq!(verts[0], Vec3::new(-1.0, 2.0, -3.0));
        assert_eq!(verts[6], Vec3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn sphere_has_no_vertices_or_triangles() {
        let sphere = Shape::Sphere { radius: 1.0 };
        assert!(sphere.local_vertices().is_empty());
        assert!(sphere.triangles().is_none());
        assert!(sphere.is_sphere());
    }

    #[test]
    fn triangles_wind_outward() {
        let shape = Shape::Cuboid { width: 2.0, height: 2.0, depth: 2.0 };
        let verts = shape.local_vertices();
        let tris = shape.triangles().unwrap();
        assert_eq!(tris.len(), 36);
        for tri in tris.chunks(3) {
            let (a, b, c) = (
                verts[tri[0] as usize],
                verts[tri[1] as usize],
                verts[tri[2] as usize],
            );
            let normal = cross(b - a, c - a);
            let face_center = (a + b + c) / 3.0;
            assert!(
                dot(normal, face_center) > 0.0,
                "triangle {:?} winds inward",
                tri
            );
        }
    }

    #[test]
    fn shape_serializes_with_kind_tag() {
        let json = serde_json::to_string(&Shape::Sphere { radius: 0.5 }).unwrap();
        assert_eq!(json, r#"{"kind":"sphere","radius":0.5}"#);
        let back: Shape = serde_json::from_str(r#"{"kind":"cuboid","width":1.0,"height":2.0,"depth":3.0}"#).unwrap();
        assert_eq!(back, Shape::Cuboid { width: 1.0, height: 2.0, depth: 3.0 });
    }
}
