//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::company::{Company, NewCompany, UpdateCompany};
use crate::domain::employee::{Employee, NewEmployee};
use crate::domain::types::{CompanyId, EmployeeId};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CompanyReader, CompanyWriter, EmployeeReader, EmployeeWriter};

mock! {
    pub Repository {}

    impl CompanyReader for Repository {
        fn get_company_by_id(
            &self,
            id: CompanyId,
            track_changes: bool,
        ) -> RepositoryResult<Option<Company>>;
        fn list_companies(&self, track_changes: bool) -> RepositoryResult<Vec<Company>>;
        fn list_companies_by_ids(
            &self,
            ids: &[CompanyId],
            track_changes: bool,
        ) -> RepositoryResult<Vec<Company>>;
    }

    impl CompanyWriter for Repository {
        fn create_companies(&self, new_companies: &[NewCompany]) -> RepositoryResult<Vec<Company>>;
        fn update_company(
            &self,
            id: CompanyId,
            updates: &UpdateCompany,
        ) -> RepositoryResult<Company>;
        fn delete_company(&self, id: CompanyId) -> RepositoryResult<()>;
    }

    impl EmployeeReader for Repository {
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

    impl EmployeeWriter for Repository {
        fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee>;
        fn update_employee(&self, employee: &Employee) -> RepositoryResult<Employee>;
        fn delete_employee(&self, employee: &Employee) -> RepositoryResult<()>;
    }
}
