// core/transform.rs
//
// Local-to-world vertex mapping. The host decides how a body's position and
// rotation compose with shape-local vertices; the engine only calls
// `world_vertex` when a body's cached vertices are stale.

use glam::Vec3;

/// Maps a shape-local vertex into world space for a body pose.
pub trait VertexTransform {
    fn world_vertex(&self, local: Vec3, position: Vec3, rotation: f32) -> Vec3;
}

/// Translation only. Rotation is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translate;

impl VertexTransform for Translate {
    fn world_vertex(&self, local: Vec3, position: Vec3, _rotation: f32) -> Vec3 {
        local + position
    }
}

/// Rotate about +z by `rotation` radians, then translate.
///
/// The SAT edge axes live in the xy plane, so this is the one rotation the
/// narrow phase handles consistently.
#[derive(Debug, Clone, Copy, Default)]
pub struct RotateZ;

impl VertexTransform for RotateZ {
    fn world_vertex(&self, local: Vec3, position: Vec3, rotation: f32) -> Vec3 {
        let (sin_r, cos_r) = rotation.sin_cos();
        let rotated = Vec3::new(
            local.x * cos_r - local.y * sin_r,
            local.x * sin_r + local.y * cos_r,
            local.z,
        );
        rotated + position
    }
}

impl<F> VertexTransform for F
where
    F: Fn(Vec3, Vec3, f32) -> Vec3,
{
    fn world_vertex(&self, local: Vec3, position: Vec3, rotation: f32) -> Vec3 {
        self(local, position, rotation)
    }
}
