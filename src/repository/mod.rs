use crate::db::{DbConnection, DbPool};
use crate::domain::{
    company::{Company, NewCompany, UpdateCompany},
    employee::{Employee, NewEmployee},
    types::{CompanyId, EmployeeId},
};
use crate::repository::errors::RepositoryResult;

pub mod company;
pub mod employee;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

/// Diesel-backed implementation of every repository trait.
///
/// Cheap to clone; each clone shares the same connection pool. SQLite has no
/// row-level locking, so the `track_changes` hint accepted by the readers is
/// unused by this backend.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

pub trait CompanyReader {
    fn get_company_by_id(
        &self,
        id: CompanyId,
        track_changes: bool,
    ) -> RepositoryResult<Option<Company>>;
    /// All companies ordered by name.
    fn list_companies(&self, track_changes: bool) -> RepositoryResult<Vec<Company>>;
    /// Companies whose id is in `ids`. Missing ids are silently absent.
    fn list_companies_by_ids(
        &self,
        ids: &[CompanyId],
        track_changes: bool,
    ) -> RepositoryResult<Vec<Company>>;
}

pub trait CompanyWriter {
    /// Inserts the companies and their nested employees in one transaction.
    fn create_companies(&self, new_companies: &[NewCompany]) -> RepositoryResult<Vec<Company>>;
    fn update_company(&self, id: CompanyId, updates: &UpdateCompany)
    -> RepositoryResult<Company>;
    fn delete_company(&self, id: CompanyId) -> RepositoryResult<()>;
}

pub trait EmployeeReader {
    /// Every employee of the company, unfiltered and unordered.
    fn list_employees(
        &self,
        company_id: CompanyId,
        track_changes: bool,
    ) -> RepositoryResult<Vec<Employee>>;
    fn get_employee(
        &self,
        company_id: CompanyId,
        id: EmployeeId,
        track_changes: bool,
    ) -> RepositoryResult<Option<Employee>>;
}

pub trait EmployeeWriter {
    fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee>;
    fn update_employee(&self, employee: &Employee) -> RepositoryResult<Employee>;
    fn delete_employee(&self, employee: &Employee) -> RepositoryResult<()>;
}
