use glam::Vec3;

use crate::api::config::PhysicsConfig;
use crate::components::shape::Shape;
use crate::core::aabb::Aabb;
use crate::core::transform::VertexTransform;
use crate::error::ValidationError;

/// Freshness of one cached quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Clean,
    Dirty,
}

/// World-space geometry derived from a body's pose, recomputed lazily.
///
/// Vertices and AABB are tracked separately: both go `Dirty` on any pose
/// change and each goes `Clean` the first time it is read afterwards.
#[derive(Debug, Clone)]
pub struct GeometryCache {
    local_vertices: Vec<Vec3>,
    world_vertices: Vec<Vec3>,
    vertices_state: CacheState,
    aabb: Aabb,
    aabb_state: CacheState,
}

impl GeometryCache {
    fn new(shape: &Shape) -> Self {
        let local_vertices = shape.local_vertices();
        let world_vertices = local_vertices.clone();
        Self {
            local_vertices,
            world_vertices,
            vertices_state: CacheState::Dirty,
            aabb: Aabb::new(Vec3::ZERO, Vec3::ZERO),
            aabb_state: CacheState::Dirty,
        }
    }

    fn invalidate(&mut self) {
        self.vertices_state = CacheState::Dirty;
        self.aabb_state = CacheState::Dirty;
    }

    pub fn vertices_state(&self) -> CacheState {
        self.vertices_state
    }

    pub fn aabb_state(&self) -> CacheState {
        self.aabb_state
    }
}

/// A rigid body: pose, linear state, material and shape.
///
/// Rotation and rotational velocity are integrated and feed the vertex
/// transform, but no torque or angular impulse is ever applied.
#[derive(Debug, Clone)]
pub struct Body {
    position: Vec3,
    rotation: f32,
    linear_velocity: Vec3,
    rotational_velocity: f32,
    force: Vec3,
    density: f32,
    mass: f32,
    inv_mass: f32,
    restitution: f32,
    is_static: bool,
    shape: Shape,
    geometry: GeometryCache,
}

impl Body {
    fn from_desc(desc: &BodyDesc, mass: f32, restitution: f32) -> Self {
        let inv_mass = if desc.is_static { 0.0 } else { 1.0 / mass };
        Self {
            position: desc.position,
            rotation: desc.rotation,
            linear_velocity: if desc.is_static { Vec3::ZERO } else { desc.velocity },
            rotational_velocity: if desc.is_static { 0.0 } else { desc.rotational_velocity },
            force: Vec3::ZERO,
            density: desc.density,
            mass,
            inv_mass,
            restitution,
            is_static: desc.is_static,
            shape: desc.shape,
            geometry: GeometryCache::new(&desc.shape),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn linear_velocity(&self) -> Vec3 {
        self.linear_velocity
    }

    /// Static bodies keep a zero velocity.
    pub fn set_linear_velocity(&mut self, velocity: Vec3) {
        if !self.is_static {
            self.linear_velocity = velocity;
        }
    }

    pub fn rotational_velocity(&self) -> f32 {
        self.rotational_velocity
    }

    pub fn set_rotational_velocity(&mut self, velocity: f32) {
        if !self.is_static {
            self.rotational_velocity = velocity;
        }
    }

    /// Force accumulated since the last sub-step.
    pub fn force(&self) -> Vec3 {
        self.force
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn inv_mass(&self) -> f32 {
        self.inv_mass
    }

    pub fn restitution(&self) -> f32 {
        self.restitution
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn geometry(&self) -> &GeometryCache {
        &self.geometry
    }

    /// Translate by `amount`.
    pub fn move_by(&mut self, amount: Vec3) {
        self.position += amount;
        self.geometry.invalidate();
    }

    pub fn move_to(&mut self, position: Vec3) {
        self.position = position;
        self.geometry.invalidate();
    }

    /// Add `amount` radians about +z.
    pub fn rotate(&mut self, amount: f32) {
        self.rotation += amount;
        self.geometry.invalidate();
    }

    /// Accumulate a force, applied and cleared on the next sub-step.
    pub fn add_force(&mut self, force: Vec3) {
        self.force += force;
    }

    /// Advance the linear and rotational state by `dt`. Static bodies are untouched.
    pub(crate) fn advance(&mut self, gravity: Vec3, dt: f32) {
        if self.is_static {
            return;
        }
        self.linear_velocity += self.force * self.inv_mass * dt;
        self.linear_velocity += gravity * dt;
        self.position += self.linear_velocity * dt;
        self.rotation += self.rotational_velocity * dt;
        self.force = Vec3::ZERO;
        self.geometry.invalidate();
    }

    pub(crate) fn apply_velocity_change(&mut self, delta: Vec3) {
        self.linear_velocity += delta;
    }

    /// Refresh the cached world vertices if stale.
    pub fn update_vertices(&mut self, transform: &impl VertexTransform) {
        if self.geometry.vertices_state == CacheState::Clean {
            return;
        }
        let cache = &mut self.geometry;
        for (world, &local) in cache.world_vertices.iter_mut().zip(&cache.local_vertices) {
            *world = transform.world_vertex(local, self.position, self.rotation);
        }
        cache.vertices_state = CacheState::Clean;
    }

    /// World vertices as of the last refresh. Call [`Body::update_vertices`]
    /// (or [`Body::transformed_vertices`]) first after a pose change.
    pub fn cached_vertices(&self) -> &[Vec3] {
        &self.geometry.world_vertices
    }

    /// World-space vertices, recomputed only if the pose changed since the last read.
    pub fn transformed_vertices(&mut self, transform: &impl VertexTransform) -> &[Vec3] {
        self.update_vertices(transform);
        &self.geometry.world_vertices
    }

    /// World-space bounding box, recomputed only if the pose changed since the last read.
    pub fn aabb(&mut self, transform: &impl VertexTransform) -> Aabb {
        if self.geometry.aabb_state == CacheState::Dirty {
            let aabb = match self.shape {
                Shape::Sphere { radius } => Aabb::around_sphere(self.position, radius),
                Shape::Cuboid { .. } => Aabb::from_points(self.transformed_vertices(transform)),
            };
            self.geometry.aabb = aabb;
            self.geometry.aabb_state = CacheState::Clean;
        }
        self.geometry.aabb
    }
}

/// Builder for describing a body before validation.
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub shape: Shape,
    pub is_static: bool,
    pub position: Vec3,
    pub rotation: f32,
    pub velocity: Vec3,
    pub rotational_velocity: f32,
    pub density: f32,
    pub restitution: f32,
}

impl BodyDesc {
    /// Dynamic body with density 1 and restitution 0.5.
    pub fn dynamic(shape: Shape) -> Self {
        Self {
            shape,
            is_static: false,
            position: Vec3::ZERO,
            rotation: 0.0,
            velocity: Vec3::ZERO,
            rotational_velocity: 0.0,
            density: 1.0,
            restitution: 0.5,
        }
    }

    /// Static (immovable) body.
    pub fn fixed(shape: Shape) -> Self {
        Self {
            is_static: true,
            ..Self::dynamic(shape)
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_rotational_velocity(mut self, velocity: f32) -> Self {
        self.rotational_velocity = velocity;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    /// Out-of-range values are clamped into [0, 1] by [`BodyDesc::build`].
    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }

    /// Validate against `config` and create the body.
    pub fn build(&self, config: &PhysicsConfig) -> Result<Body, ValidationError> {
        let dims_finite = match self.shape {
            Shape::Sphere { radius } => radius.is_finite(),
            Shape::Cuboid { width, height, depth } => {
                width.is_finite() && height.is_finite() && depth.is_finite()
            }
        };
        if !dims_finite {
            return Err(ValidationError::NonFinite("shape dimension"));
        }
        if !self.density.is_finite() {
            return Err(ValidationError::NonFinite("density"));
        }
        // Negative dimensions would produce a positive volume from an even
        // number of sign flips; treat them as too small.
        let has_negative = match self.shape {
            Shape::Sphere { radius } => radius <= 0.0,
            Shape::Cuboid { width, height, depth } => width <= 0.0 || height <= 0.0 || depth <= 0.0,
        };

        let size = self.shape.size();
        if has_negative || size < config.min_body_size {
            return Err(ValidationError::ShapeTooSmall { size, min: config.min_body_size });
        }
        if size > config.max_body_size {
            return Err(ValidationError::ShapeTooLarge { size, max: config.max_body_size });
        }
        if self.density < config.min_density {
            return Err(ValidationError::DensityTooLow { density: self.density, min: config.min_density });
        }
        if self.density > config.max_density {
            return Err(ValidationError::DensityTooHigh { density: self.density, max: config.max_density });
        }

        let restitution = if self.restitution.is_nan() {
            0.0
        } else {
            self.restitution.clamp(0.0, 1.0)
        };
        let mass = size * self.density;
        Ok(Body::from_desc(self, mass, restitution))
    }
}

/// Validated sphere body. Mass is `π r² · density`.
pub fn create_circle_body(
    radius: f32,
    position: Vec3,
    density: f32,
    is_static: bool,
    restitution: f32,
    config: &PhysicsConfig,
) -> Result<Body, ValidationError> {
    let shape = Shape::Sphere { radius };
    let desc = if is_static { BodyDesc::fixed(shape) } else { BodyDesc::dynamic(shape) };
    desc.with_position(position)
        .with_density(density)
        .with_restitution(restitution)
        .build(config)
}

/// Validated cuboid body. Mass is `w · h · d · density`.
#[allow(clippy::too_many_arguments)]
pub fn create_box_body(
    width: f32,
    height: f32,
    depth: f32,
    position: Vec3,
    density: f32,
    is_static: bool,
    restitution: f32,
    config: &PhysicsConfig,
) -> Result<Body, ValidationError> {
    let shape = Shape::Cuboid { width, height, depth };
    let desc = if is_static { BodyDesc::fixed(shape) } else { BodyDesc::dynamic(shape) };
    desc.with_position(position)
        .with_density(density)
        .with_restitution(restitution)
        .build(config)
}
