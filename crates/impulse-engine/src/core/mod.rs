pub mod aabb;
pub mod math;
pub mod transform;
pub mod world;
