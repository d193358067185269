use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read listing source: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid listing JSON: {0}")]
    Json(#[from] serde_json::Error),
}
