//! Error types for raybrush

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RayBrushError {
    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, RayBrushError>;
