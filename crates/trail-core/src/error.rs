use thiserror::Error;

/// Invalid [`TrailConfig`](crate::TrailConfig) values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("spawn_per_move must be at least 1")]
    ZeroSpawnCount,
    #[error("max_age must be at least 1 frame")]
    ZeroMaxAge,
    #[error("{name} range {min}..{max} is empty or negative")]
    InvalidRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("max_live cap must be at least 1 when set")]
    ZeroCap,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrailError {
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("failed to register {event} listener: {reason}")]
    ListenerRegistration { event: &'static str, reason: String },
    #[error("failed to request animation frame: {0}")]
    FrameRequest(String),
    #[error("animation loop is not running")]
    NotRunning,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type TrailResult<T> = Result<T, TrailError>;
