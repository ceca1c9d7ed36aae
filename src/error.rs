use thiserror::Error;

/// Errors that can occur during canvas operations
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("Invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("No file path remembered; use save_image_as first")]
    NoFilePath,

    #[error("Failed to read or write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode or encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to serialize settings: {0}")]
    Settings(#[from] serde_json::Error),
}

/// Result type for canvas operations
pub type PaintResult<T> = Result<T, PaintError>;
