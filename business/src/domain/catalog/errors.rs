#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.not_found")]
    NotFound,
    #[error("catalog.unavailable")]
    Unavailable,
    #[error("catalog.invalid_response")]
    InvalidResponse,
}
