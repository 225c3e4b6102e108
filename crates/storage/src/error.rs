/// Faults a `StudentService` implementation can raise from its read paths.
///
/// Mutating operations report their outcome as a [`StatusCode`](crate::StatusCode)
/// instead; these errors are reserved for the unexpected.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backend cannot serve requests right now.
    #[error("student store unavailable: {0}")]
    Unavailable(String),

    /// Seed data could not be decoded.
    #[error("invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),

    /// A backend-specific storage error (connection, serialization, etc.).
    #[error("storage backend error: {0}")]
    Backend(String),
}
