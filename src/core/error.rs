use thiserror::Error;

#[derive(Error, Debug)]
pub enum AstroError {
    #[error("Invalid density: {0}")]
    InvalidDensity(String),

    #[error("Invalid generation type: {0}")]
    InvalidGenerationType(String),

    #[error("Invalid sector dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AstroError>;
