use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<DieselError> for RepositoryError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::NotFound => RepositoryError::NotFound,

            DieselError::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                match kind {
                    DatabaseErrorKind::UniqueViolation
                    | DatabaseErrorKind::ForeignKeyViolation
                    | DatabaseErrorKind::NotNullViolation
                    | DatabaseErrorKind::CheckViolation => {
                        RepositoryError::ConstraintViolation(message)
                    }
                    _ => RepositoryError::DatabaseError(message),
                }
            }

            DieselError::QueryBuilderError(e) => {
                RepositoryError::DatabaseError(format!("Query builder error: {e}"))
            }

            _ => RepositoryError::Unexpected(format!("Unexpected diesel error: {err}")),
        }
    }
}

impl From<PoolError> for RepositoryError {
    fn from(err: PoolError) -> Self {
        RepositoryError::ConnectionError(format!("Connection error: {err}"))
    }
}
