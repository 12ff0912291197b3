use glam::Vec3;

/// Handle to a body inside a [`crate::PhysicsWorld`]. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

/// A contact that was resolved during a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionPair {
    pub body_a: BodyId,
    pub body_b: BodyId,
    /// Unit normal pointing from `body_a` toward `body_b`.
    pub normal: Vec3,
    /// Penetration depth before positional correction.
    pub depth: f32,
}
