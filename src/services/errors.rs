use thiserror::Error;

use crate::forms::FieldError;
use crate::repository::errors::RepositoryError;

/// Failures surfaced by the service layer, shaped for the response path:
/// validation errors re-render the submitted form, a missing record
/// redirects with a notice, and repository errors stay behind a generic
/// message.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("employee not found")]
    NotFound,

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
