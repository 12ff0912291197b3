//! A small real-time 3D rigid-body engine.
//!
//! Spheres and cuboids are integrated with semi-implicit Euler, tested
//! pairwise with the separating-axis theorem and resolved with positional
//! correction plus a restitution impulse. Everything is driven through
//! [`PhysicsWorld::step`].

pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::config::PhysicsConfig;
pub use api::types::{BodyId, CollisionPair};
pub use components::body::{create_box_body, create_circle_body, Body, BodyDesc, CacheState, GeometryCache};
pub use components::shape::Shape;
pub use core::aabb::Aabb;
pub use core::transform::{RotateZ, Translate, VertexTransform};
pub use core::world::{collide, PhysicsWorld};
pub use error::{PhysicsError, ValidationError};
pub use systems::narrow_phase::Contact;
