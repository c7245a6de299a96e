use thiserror::Error;

#[derive(Error, Debug)]
pub enum LightboxError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load {location}: {reason}")]
    FetchFailure { location: String, reason: String },

    #[error("Malformed index: {0}")]
    MalformedIndex(String),

    #[error("No items: {0}")]
    EmptyResult(String),

    #[error("Unknown job: {0}")]
    UnknownJob(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, LightboxError>;
