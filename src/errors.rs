use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReliefError {
    /// Normal estimation needs a one pixel border on every side.
    #[error("height field must be at least 3x3, got {width}x{height}")]
    FieldTooSmall { width: usize, height: usize },

    #[error("expected {expected} elevation samples for the field, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ReliefError>;
