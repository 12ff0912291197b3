use glam::Vec3;

use crate::api::config::PhysicsConfig;
use crate::api::types::{BodyId, CollisionPair};
use crate::components::body::{self, Body};
use crate::components::shape::Shape;
use crate::core::aabb::Aabb;
use crate::core::math;
use crate::core::transform::{RotateZ, VertexTransform};
use crate::error::{PhysicsError, ValidationError};
use crate::systems::integrator::{integrate, sub_step};
use crate::systems::narrow_phase::{self, Contact};
use crate::systems::resolver::{resolve_collision, separate_bodies};

/// Narrow-phase dispatch on the shape pair. The contact normal points from
/// `a` toward `b` for every combination.
///
/// Refreshes both bodies' cached world vertices first.
pub fn collide(
    a: &mut Body,
    b: &mut Body,
    transform: &impl VertexTransform,
) -> Result<Option<Contact>, PhysicsError> {
    a.update_vertices(transform);
    b.update_vertices(transform);

    match (*a.shape(), *b.shape()) {
        (Shape::Cuboid { .. }, Shape::Cuboid { .. }) => {
            narrow_phase::intersect_polygons(a.cached_vertices(), b.cached_vertices())
        }
        (Shape::Cuboid { .. }, Shape::Sphere { radius }) => {
            // The circle test reports circle -> polygon, i.e. B -> A here.
            let contact = narrow_phase::intersect_circle_polygon(b.position(), radius, a.cached_vertices())?;
            Ok(contact.map(|c| Contact {
                normal: -c.normal,
                depth: c.depth,
            }))
        }
        (Shape::Sphere { radius }, Shape::Cuboid { .. }) => {
            narrow_phase::intersect_circle_polygon(a.position(), radius, b.cached_vertices())
        }
        (Shape::Sphere { radius: radius_a }, Shape::Sphere { radius: radius_b }) => {
            narrow_phase::intersect_circles(a.position(), radius_a, b.position(), radius_b)
        }
    }
}

/// Brute-force rigid-body world: every pair is tested every sub-step.
///
/// Bodies are kept in insertion order, which is also the pair order.
pub struct PhysicsWorld<T: VertexTransform = RotateZ> {
    config: PhysicsConfig,
    gravity: Vec3,
    transform: T,
    bodies: Vec<(BodyId, Body)>,
    next_id: u32,
}

impl PhysicsWorld<RotateZ> {
    /// Create a world whose bodies rotate about +z.
    pub fn new(config: PhysicsConfig) -> Result<Self, PhysicsError> {
        Self::with_transform(config, RotateZ)
    }
}

impl Default for PhysicsWorld<RotateZ> {
    /// Default bounds are ordered, so validation is skipped.
    fn default() -> Self {
        Self::from_parts(PhysicsConfig::default(), RotateZ)
    }
}

impl<T: VertexTransform> PhysicsWorld<T> {
    /// Create a world with a host-supplied vertex transform.
    pub fn with_transform(config: PhysicsConfig, transform: T) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self::from_parts(config, transform))
    }

    fn from_parts(config: PhysicsConfig, transform: T) -> Self {
        Self {
            gravity: config.gravity,
            config,
            transform,
            bodies: Vec::with_capacity(64),
            next_id: 1,
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    pub fn set_gravity(&mut self, gravity: Vec3) {
        self.gravity = gravity;
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    /// Insert a body and return its handle.
    pub fn add_body(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        log::debug!(
            "add body {:?}: {:?} at {:?}{}",
            id,
            body.shape(),
            body.position(),
            if body.is_static() { " (static)" } else { "" }
        );
        self.bodies.push((id, body));
        id
    }

    /// Validate and insert a sphere using this world's bounds.
    pub fn create_circle_body(
        &mut self,
        radius: f32,
        position: Vec3,
        density: f32,
        is_static: bool,
        restitution: f32,
    ) -> Result<BodyId, ValidationError> {
        let body = body::create_circle_body(radius, position, density, is_static, restitution, &self.config)?;
        Ok(self.add_body(body))
    }

    /// Validate and insert a cuboid using this world's bounds.
    #[allow(clippy::too_many_arguments)]
    pub fn create_box_body(
        &mut self,
        width: f32,
        height: f32,
        depth: f32,
        position: Vec3,
        density: f32,
        is_static: bool,
        restitution: f32,
    ) -> Result<BodyId, ValidationError> {
        let body = body::create_box_body(
            width, height, depth, position, density, is_static, restitution, &self.config,
        )?;
        Ok(self.add_body(body))
    }

    /// Remove a body. Returns it if found; the order of the rest is preserved.
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        let idx = self.bodies.iter().position(|(bid, _)| *bid == id)?;
        log::debug!("remove body {:?}", id);
        Some(self.bodies.remove(idx).1)
    }

    /// Body at insertion-order `index`.
    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index).map(|(_, b)| b)
    }

    /// Handle of the body at `index`.
    pub fn body_id(&self, index: usize) -> Option<BodyId> {
        self.bodies.get(index).map(|(id, _)| *id)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|(bid, _)| *bid == id).map(|(_, b)| b)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|(bid, _)| *bid == id).map(|(_, b)| b)
    }

    /// World-space bounds of a body, from its cache when still valid.
    pub fn body_aabb(&mut self, id: BodyId) -> Option<Aabb> {
        let transform = &self.transform;
        self.bodies
            .iter_mut()
            .find(|(bid, _)| *bid == id)
            .map(|(_, b)| b.aabb(transform))
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter().map(|(id, b)| (*id, b))
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Advance the world by `time` seconds split into `iterations` sub-steps.
    pub fn step(&mut self, time: f32, iterations: u32) -> Result<(), PhysicsError> {
        self.run_steps(time, iterations, None)
    }

    /// Like [`PhysicsWorld::step`], also recording every resolved contact.
    pub fn step_into(
        &mut self,
        time: f32,
        iterations: u32,
        collision_events: &mut Vec<CollisionPair>,
    ) -> Result<(), PhysicsError> {
        self.run_steps(time, iterations, Some(collision_events))
    }

    fn run_steps(
        &mut self,
        time: f32,
        iterations: u32,
        mut events: Option<&mut Vec<CollisionPair>>,
    ) -> Result<(), PhysicsError> {
        let clamped = math::clamp(iterations, self.config.min_iterations, self.config.max_iterations)?;
        if clamped != iterations {
            log::warn!("iterations {} clamped to {}", iterations, clamped);
        }
        let dt = sub_step(time, clamped);
        let mut contacts = 0usize;

        for _ in 0..clamped {
            for (_, body) in self.bodies.iter_mut() {
                integrate(body, self.gravity, dt);
            }

            for j in 1..self.bodies.len() {
                let (head, tail) = self.bodies.split_at_mut(j);
                let (id_b, body_b) = &mut tail[0];
                for (id_a, body_a) in head.iter_mut() {
                    if body_a.is_static() && body_b.is_static() {
                        continue;
                    }
                    let contact = collide(body_a, body_b, &self.transform).inspect_err(|err| {
                        log::warn!("step aborted on pair {:?}/{:?}: {}", id_a, id_b, err);
                    })?;
                    let Some(contact) = contact else { continue };

                    separate_bodies(body_a, body_b, &contact);
                    let impulse = resolve_collision(body_a, body_b, contact.normal);
                    log::trace!(
                        "contact {:?}/{:?}: depth {:.4}, normal {:?}, impulse {:.4}",
                        id_a,
                        id_b,
                        contact.depth,
                        contact.normal,
                        impulse
                    );
                    contacts += 1;
                    if let Some(events) = events.as_mut() {
                        events.push(CollisionPair {
                            body_a: *id_a,
                            body_b: *id_b,
                            normal: contact.normal,
                            depth: contact.depth,
                        });
                    }
                }
            }
        }

        log::debug!(
            "step {:.4}s: {} sub-steps, {} bodies, {} contacts",
            time,
            clamped,
            self.bodies.len(),
            contacts
        );
        Ok(())
    }
}
