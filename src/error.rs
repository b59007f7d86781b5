use thiserror::Error;

/// Top-level error type for shed generation.
#[derive(Debug, Error)]
pub enum ShedError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while constructing primitive geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("triangle requires {expected} vertex components, got {found}")]
    VertexCount { expected: usize, found: usize },
}

/// Errors related to caller-supplied parameters.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("wall number {0} is out of range [1, 4]")]
    InvalidWall(i64),
}

/// Errors reported by a scene sink.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("shape not found in scene")]
    ShapeNotFound,

    #[error("scene rejected shape: {0}")]
    Rejected(String),
}

/// Errors related to loading parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("shed parameters JSON error")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`ShedError`].
pub type Result<T> = std::result::Result<T, ShedError>;
