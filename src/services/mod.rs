//! Application services.
//!
//! Each operation is a free function generic over the repository traits it
//! needs, so routes pass a [`crate::repository::DieselRepository`] and tests
//! pass a mock.

use crate::domain::company::Company;
use crate::domain::types::CompanyId;
use crate::repository::CompanyReader;

pub mod company;
pub mod employee;
pub mod errors;

pub use errors::{ErrorKind, ServiceError, ServiceResult};

/// Loads the company every company-scoped operation works under.
///
/// Fails with [`ServiceError::CompanyNotFound`] when it does not exist.
/// `track_changes` is handed to the repository untouched.
pub fn require_company<R>(
    repo: &R,
    company_id: CompanyId,
    track_changes: bool,
) -> ServiceResult<Company>
where
    R: CompanyReader + ?Sized,
{
    repo.get_company_by_id(company_id, track_changes)
        .map_err(|err| {
            log::error!("Failed to load company {company_id}: {err}");
            err
        })?
        .ok_or(ServiceError::CompanyNotFound(company_id))
}
