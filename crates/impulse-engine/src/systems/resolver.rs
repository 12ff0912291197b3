use glam::Vec3;

use crate::components::body::Body;
use crate::core::math::dot;
use crate::systems::narrow_phase::Contact;

/// Push two overlapping bodies apart along the contact normal.
///
/// A static body never moves; a dynamic body facing a static one takes the
/// whole depth; two dynamic bodies split it evenly.
pub fn separate_bodies(a: &mut Body, b: &mut Body, contact: &Contact) {
    let push = contact.normal * contact.depth;
    match (a.is_static(), b.is_static()) {
        (true, true) => {}
        (true, false) => b.move_by(push),
        (false, true) => a.move_by(-push),
        (false, false) => {
            a.move_by(-push / 2.0);
            b.move_by(push / 2.0);
        }
    }
}

/// Apply a restitution impulse along `normal` (pointing from A to B).
///
/// Bodies already separating or resting (`dot(vB - vA, n) >= 0`) are left
/// alone. Returns the impulse magnitude applied, zero when skipped.
pub fn resolve_collision(a: &mut Body, b: &mut Body, normal: Vec3) -> f32 {
    let relative_velocity = b.linear_velocity() - a.linear_velocity();
    let approach = dot(relative_velocity, normal);
    if approach >= 0.0 {
        return 0.0;
    }

    let inv_mass_sum = a.inv_mass() + b.inv_mass();
    if inv_mass_sum == 0.0 {
        return 0.0;
    }

    let e = a.restitution().min(b.restitution());
    let j = -(1.0 + e) * approach / inv_mass_sum;
    let impulse = normal * j;

    a.apply_velocity_change(-impulse * a.inv_mass());
    b.apply_velocity_change(impulse * b.inv_mass());
    j
}
