/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The storage backend refused a read or a write.
    #[error("repository.persistence")]
    Persistence,
    /// A stored payload exists but could not be decoded.
    #[error("repository.corrupted")]
    Corrupted,
}
