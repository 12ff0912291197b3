//! Narrow-phase overlap tests.
//!
//! Every test returns `Ok(None)` when the shapes are apart and
//! `Ok(Some(contact))` with a minimum translation vector when they overlap.
//! Polygons are vertex lists walked as a closed loop; the candidate axes
//! are the edge perpendiculars `(-edge.y, edge.x, edge.z)`.
//!
//! Boundary convention: projections that only touch (`min_a == max_b`)
//! count as separated, so resting shapes exactly in contact do not collide.

use glam::Vec3;

use crate::core::math::{arithmetic_mean, distance, dot, normalize};
use crate::error::PhysicsError;

/// Minimum translation vector between two overlapping shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from the first shape toward the second.
    pub normal: Vec3,
    /// Penetration depth along `normal`, always positive.
    pub depth: f32,
}

/// Running minimum-overlap search over candidate axes.
struct AxisSearch {
    normal: Vec3,
    depth: f32,
}

impl AxisSearch {
    fn new() -> Self {
        Self {
            normal: Vec3::ZERO,
            depth: f32::MAX,
        }
    }

    /// Record the overlap of two projections on `axis`. Returns `false` if
    /// the axis separates them.
    fn test(&mut self, axis: Vec3, (min_a, max_a): (f32, f32), (min_b, max_b): (f32, f32)) -> bool {
        if min_a >= max_b || min_b >= max_a {
            return false;
        }
        let overlap = (max_b - min_a).min(max_a - min_b);
        if overlap < self.depth {
            self.depth = overlap;
            self.normal = axis;
        }
        true
    }

    /// Orient the normal along `direction` and finish.
    fn finish(self, direction: Vec3) -> Contact {
        let normal = if dot(direction, self.normal) < 0.0 {
            -self.normal
        } else {
            self.normal
        };
        Contact {
            normal,
            depth: self.depth,
        }
    }
}

fn edge_axis(vertices: &[Vec3], i: usize) -> Result<Vec3, PhysicsError> {
    let va = vertices[i];
    let vb = vertices[(i + 1) % vertices.len()];
    let edge = vb - va;
    normalize(Vec3::new(-edge.y, edge.x, edge.z))
}

fn project_vertices(vertices: &[Vec3], axis: Vec3) -> (f32, f32) {
    vertices.iter().fold((f32::MAX, f32::MIN), |(min, max), &v| {
        let proj = dot(v, axis);
        (min.min(proj), max.max(proj))
    })
}

fn project_circle(center: Vec3, radius: f32, axis: Vec3) -> Result<(f32, f32), PhysicsError> {
    let offset = normalize(axis)? * radius;
    let a = dot(center + offset, axis);
    let b = dot(center - offset, axis);
    Ok(if a > b { (b, a) } else { (a, b) })
}

/// Index of the first vertex nearest to `point`.
fn closest_vertex(point: Vec3, vertices: &[Vec3]) -> Option<usize> {
    let mut result = None;
    let mut min_distance = f32::MAX;
    for (i, &v) in vertices.iter().enumerate() {
        let d = distance(v, point);
        if d < min_distance {
            min_distance = d;
            result = Some(i);
        }
    }
    result
}

/// SAT test between two convex vertex polygons. The normal points from A toward B.
pub fn intersect_polygons(a: &[Vec3], b: &[Vec3]) -> Result<Option<Contact>, PhysicsError> {
    if a.is_empty() || b.is_empty() {
        return Ok(None);
    }
    let mut search = AxisSearch::new();

    for polygon in [a, b] {
        for i in 0..polygon.len() {
            let axis = edge_axis(polygon, i)?;
            if !search.test(axis, project_vertices(a, axis), project_vertices(b, axis)) {
                return Ok(None);
            }
        }
    }

    let direction = arithmetic_mean(b) - arithmetic_mean(a);
    Ok(Some(search.finish(direction)))
}

/// SAT test between a circle/sphere and a convex vertex polygon. The normal
/// points from the circle toward the polygon.
///
/// Edge perpendiculars alone miss a circle approaching a corner, so the
/// direction from the centre to the nearest vertex is tested as well.
pub fn intersect_circle_polygon(
    center: Vec3,
    radius: f32,
    vertices: &[Vec3],
) -> Result<Option<Contact>, PhysicsError> {
    let Some(closest) = closest_vertex(center, vertices) else {
        return Ok(None);
    };
    let mut search = AxisSearch::new();

    for i in 0..vertices.len() {
        let axis = edge_axis(vertices, i)?;
        let polygon = project_vertices(vertices, axis);
        let circle = project_circle(center, radius, axis)?;
        if !search.test(axis, polygon, circle) {
            return Ok(None);
        }
    }

    let axis = normalize(vertices[closest] - center)?;
    let polygon = project_vertices(vertices, axis);
    let circle = project_circle(center, radius, axis)?;
    if !search.test(axis, polygon, circle) {
        return Ok(None);
    }

    let direction = arithmetic_mean(vertices) - center;
    Ok(Some(search.finish(direction)))
}

/// Distance test between two circles/spheres. The normal points from A toward B.
pub fn intersect_circles(
    center_a: Vec3,
    radius_a: f32,
    center_b: Vec3,
    radius_b: f32,
) -> Result<Option<Contact>, PhysicsError> {
    let dist = distance(center_a, center_b);
    let radii = radius_a + radius_b;
    if dist >= radii {
        return Ok(None);
    }
    Ok(Some(Contact {
        normal: normalize(center_b - center_a)?,
        depth: radii - dist,
    }))
}
