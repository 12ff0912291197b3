pub mod integrator;
pub mod narrow_phase;
pub mod resolver;
