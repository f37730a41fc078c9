use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjError {
    #[error("Invalid UTM zone: {0} (expected 1..=60)")]
    InvalidZone(u8),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Input outside projection domain: {0}")]
    OutOfDomain(String),

    #[error("Unknown CRS: {0}")]
    UnknownCrs(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Projection error: {0}")]
    Projection(#[from] ProjError),

    #[error("Round-trip error {distance_m:.4} m exceeds tolerance {tolerance_m} m")]
    ToleranceExceeded { distance_m: f64, tolerance_m: f64 },
}

#[derive(Error, Debug)]
pub enum CollaboratorError {
    #[error("Collaborator failed: {0}")]
    Failed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Projection error in config: {0}")]
    Projection(#[from] ProjError),

    #[error("Thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
