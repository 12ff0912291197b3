/// Reasons a body description is rejected at construction time.
///
/// These are recoverable: the caller gets the error back and no body exists.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Area (sphere) or volume (cuboid) below the configured minimum.
    #[error("Body size {size} is too small (min {min})")]
    ShapeTooSmall { size: f32, min: f32 },

    /// Area (sphere) or volume (cuboid) above the configured maximum.
    #[error("Body size {size} is too large (max {max})")]
    ShapeTooLarge { size: f32, max: f32 },

    #[error("Density {density} is too low (min {min})")]
    DensityTooLow { density: f32, min: f32 },

    #[error("Density {density} is too high (max {max})")]
    DensityTooHigh { density: f32, max: f32 },

    /// A dimension or the density was NaN or infinite.
    #[error("Non-finite {0}")]
    NonFinite(&'static str),
}

/// Errors raised by the math helpers, the world and config loading.
#[derive(Debug, thiserror::Error)]
pub enum PhysicsError {
    /// A `[min, max]` range with `min > max`.
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: String, max: String },

    /// Normalising a zero-length (or non-finite) vector. Only malformed
    /// input gets here, e.g. coincident polygon vertices or sphere centres.
    #[error("Degenerate geometry: cannot normalize a zero-length vector")]
    DegenerateGeometry,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}
