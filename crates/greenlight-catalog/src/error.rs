use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog data error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("catalog is inconsistent: {0}")]
    Inconsistent(String),
}
