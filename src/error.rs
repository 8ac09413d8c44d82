use thiserror::Error;

/// Library error type for meme-canvas operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A canvas or image dimension is non-positive or non-finite.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// The configuration parsed but fails validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No usable font could be resolved for caption rendering.
    #[error("font error: {0}")]
    Font(String),

    /// The placement resize step failed.
    #[error("resize failed: {0}")]
    Resize(String),

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),

    /// Decode/encode error from the image crate.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
