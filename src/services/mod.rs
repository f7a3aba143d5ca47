use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod customer;
pub mod grid;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request itself is malformed; surfaced to the caller as a client
    /// error, never retried.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("not found")]
    NotFound,

    /// The persistence layer failed; propagated unchanged.
    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
