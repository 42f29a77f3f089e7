use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    #[error("Failed to load reference data: {0}")]
    ReferenceLoad(String),

    #[error("Unsupported image type")]
    UnsupportedImageType,

    #[error("No food detected")]
    NoFoodDetected { image_file: String },

    #[error("Not found")]
    NotFound,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}
