use thiserror::Error;

/// Failure raised by a storage collaborator.
///
/// The underlying cause travels with the error instead of being flattened
/// into a diagnostic string, so callers can match on it or log the full
/// chain at the edge.
#[derive(Debug, Error)]
#[error("storage request failed: {source}")]
pub struct RepositoryError {
    #[from]
    source: anyhow::Error,
}

impl RepositoryError {
    pub fn new(source: impl Into<anyhow::Error>) -> Self {
        Self { source: source.into() }
    }
}
