use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::{CompanyId, EmployeeId};
use crate::patch::PatchError;
use crate::repository::errors::RepositoryError;

/// Coarse category of a [`ServiceError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Persistence,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("The company with id: {0} doesn't exist in the database.")]
    CompanyNotFound(CompanyId),

    #[error("The employee with id: {0} doesn't exist in the database.")]
    EmployeeNotFound(EmployeeId),

    /// Input that parsed but breaks a field constraint.
    #[error("{0}")]
    Validation(String),

    /// Input that cannot be acted on at all.
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CompanyNotFound(_) | Self::EmployeeNotFound(_) => ErrorKind::NotFound,
            Self::Validation(_) | Self::BadRequest(_) => ErrorKind::Validation,
            Self::Repository(_) => ErrorKind::Persistence,
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::Validation(errors.to_string())
    }
}

impl From<PatchError> for ServiceError {
    fn from(err: PatchError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
