use thiserror::Error;

use crate::validation::ValidationErrors;

/// Crate-wide error taxonomy. Nothing here is fatal: validation failures
/// block a single commit, a stale id is logged and ignored by callers, and a
/// failed write-through leaves the in-memory collection authoritative for the
/// rest of the session.
#[derive(Debug, Error)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invoice {0} not found")]
    NotFound(String),

    #[error("persistence: {0}")]
    Persistence(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
