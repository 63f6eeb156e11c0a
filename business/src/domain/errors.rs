/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// No live record exists for the requested id.
    #[error("repository.not_found")]
    NotFound,
    /// A stored document could not be mapped back into the domain model.
    #[error("repository.persistence")]
    Persistence,
    /// The backing store failed or was unreachable.
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    pub fn persistence() -> Self {
        RepositoryError::Persistence
    }
    pub fn database_error() -> Self {
        RepositoryError::DatabaseError
    }
}
