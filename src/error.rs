use thiserror::Error;

/// Top-level error type for the geomesh crate.
#[derive(Debug, Error)]
pub enum GeomeshError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Errors related to the geometry store and surface construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("surface not found: {0}")]
    SurfaceNotFound(String),

    #[error("surface '{name}' is the parent of solid '{solid}'")]
    SurfaceInUse { name: String, solid: String },

    #[error("parameter {parameter} = {value} must be positive")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to dictionary values.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("invalid value '{value}' for key '{key}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Errors related to the mesh model collections.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate {kind} name: {name}")]
    DuplicateName { kind: &'static str, name: String },
}

/// Convenience type alias for results using [`GeomeshError`].
pub type Result<T> = std::result::Result<T, GeomeshError>;
