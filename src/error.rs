use crate::detector::DetectionRelayError;
use recipe_match_common::CatalogLoadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeMatchError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported image format: {0}")]
    UnsupportedImage(String),

    #[error("File too large: {size} bytes (limit {limit} bytes). Please upload an image smaller than {limit_mb}MB", limit_mb = .limit / (1024 * 1024))]
    ImageTooLarge { size: u64, limit: u64 },

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),

    #[error(transparent)]
    Detection(#[from] DetectionRelayError),

    #[error(transparent)]
    Common(#[from] recipe_match_common::Error),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecipeMatchError>;
