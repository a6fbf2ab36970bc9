use thiserror::Error;

/// Rejected configuration. Raised before any generator or integrator call.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown shape `{0}`")]
    UnknownShape(String),
    #[error("particle count must be positive, got {0}")]
    InvalidParticleCount(usize),
    #[error("invalid color `{0}`, expected #rrggbb or #rgb")]
    InvalidColor(String),
    #[error("{field} out of range: {value}")]
    InvalidRange { field: &'static str, value: f32 },
    #[error("malformed config document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Precondition violation detected before a step touches any particle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepError {
    #[error("target set has {targets} points but particle set has {particles}")]
    LengthMismatch { particles: usize, targets: usize },
    #[error("output buffers hold {buffers} slots but particle set has {particles}")]
    BufferMismatch { particles: usize, buffers: usize },
}
