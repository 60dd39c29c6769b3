//! Top-level error type for the terminal binary.

use canvas::raster::RasterError;
use game::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("canvas backend failed: {0}")]
    Raster(#[from] RasterError),
    #[error("json encode failed: {0}")]
    Json(#[from] serde_json::Error),
}
