//! Services for employees, always addressed through their company.

use validator::Validate;

use crate::domain::employee::{Employee, UpdateEmployee};
use crate::domain::types::{CompanyId, EmployeeId};
use crate::dto::employee::{EmployeeDto, EmployeeForCreationDto, EmployeeForUpdateDto};
use crate::pagination::PagedList;
use crate::patch::{PatchDocument, PatchError};
use crate::query::EmployeeQueryParameters;
use crate::repository::{CompanyReader, EmployeeReader, EmployeeWriter};
use crate::services::{ServiceError, ServiceResult, require_company};

fn find_employee<R>(
    repo: &R,
    company_id: CompanyId,
    employee_id: EmployeeId,
    track_changes: bool,
) -> ServiceResult<Employee>
where
    R: EmployeeReader + ?Sized,
{
    repo.get_employee(company_id, employee_id, track_changes)
        .map_err(|err| {
            log::error!("Failed to load employee {employee_id}: {err}");
            err
        })?
        .ok_or(ServiceError::EmployeeNotFound(employee_id))
}

/// Filtered, ordered and paged employees of a company.
///
/// Counts are taken after filtering, so the page metadata describes the
/// matching employees rather than the whole company.
pub fn list_employees<R>(
    repo: &R,
    company_id: CompanyId,
    params: &EmployeeQueryParameters,
    track_changes: bool,
) -> ServiceResult<PagedList<EmployeeDto>>
where
    R: CompanyReader + EmployeeReader + ?Sized,
{
    if !params.has_valid_age_range() {
        return Err(ServiceError::BadRequest(
            "Max age can't be less than min age.".to_string(),
        ));
    }

    require_company(repo, company_id, track_changes)?;

    let employees = repo
        .list_employees(company_id, track_changes)
        .map_err(|err| {
            log::error!("Failed to list employees of company {company_id}: {err}");
            err
        })?;
    let loaded = employees.len();

    let predicate = params.predicate();
    let mut matching: Vec<Employee> = employees
        .into_iter()
        .filter(|employee| predicate.matches(employee))
        .collect();

    params.ordering().sort(&mut matching);

    log::debug!(
        "Company {company_id}: {} of {loaded} employees match the query",
        matching.len()
    );

    Ok(PagedList::paginate(matching, params.page_number, params.page_size).map(EmployeeDto::from))
}

pub fn get_employee<R>(
    repo: &R,
    company_id: CompanyId,
    employee_id: EmployeeId,
    track_changes: bool,
) -> ServiceResult<EmployeeDto>
where
    R: CompanyReader + EmployeeReader + ?Sized,
{
    require_company(repo, company_id, track_changes)?;

    find_employee(repo, company_id, employee_id, track_changes).map(EmployeeDto::from)
}

pub fn create_employee<R>(
    repo: &R,
    company_id: CompanyId,
    dto: EmployeeForCreationDto,
    track_changes: bool,
) -> ServiceResult<EmployeeDto>
where
    R: CompanyReader + EmployeeWriter + ?Sized,
{
    dto.validate()?;
    let new_employee = dto.into_domain(company_id)?;

    require_company(repo, company_id, track_changes)?;

    let employee = repo.create_employee(&new_employee).map_err(|err| {
        log::error!("Failed to create employee for company {company_id}: {err}");
        err
    })?;

    log::info!("Created employee {} in company {company_id}", employee.id);

    Ok(EmployeeDto::from(employee))
}

pub fn delete_employee<R>(
    repo: &R,
    company_id: CompanyId,
    employee_id: EmployeeId,
    track_changes: bool,
) -> ServiceResult<()>
where
    R: CompanyReader + EmployeeReader + EmployeeWriter + ?Sized,
{
    require_company(repo, company_id, track_changes)?;
    let employee = find_employee(repo, company_id, employee_id, track_changes)?;

    repo.delete_employee(&employee).map_err(|err| {
        log::error!("Failed to delete employee {employee_id}: {err}");
        err
    })?;

    log::info!("Deleted employee {employee_id} from company {company_id}");

    Ok(())
}

/// Full replacement of an employee's mutable fields.
pub fn update_employee<R>(
    repo: &R,
    company_id: CompanyId,
    employee_id: EmployeeId,
    dto: EmployeeForUpdateDto,
    company_track_changes: bool,
    employee_track_changes: bool,
) -> ServiceResult<()>
where
    R: CompanyReader + EmployeeReader + EmployeeWriter + ?Sized,
{
    dto.validate()?;
    let updates = UpdateEmployee::try_from(dto)?;

    require_company(repo, company_id, company_track_changes)?;
    let mut employee = find_employee(repo, company_id, employee_id, employee_track_changes)?;

    employee.apply(updates);
    repo.update_employee(&employee).map_err(|err| {
        log::error!("Failed to update employee {employee_id}: {err}");
        err
    })?;

    log::info!("Updated employee {employee_id} in company {company_id}");

    Ok(())
}

/// First phase of a partial update: the loaded employee and an editable copy.
///
/// Patch documents are applied to `employee_to_patch`; the stored entity is
/// only touched by [`commit_employee_patch`], which needs the
/// [`ValidatedEmployeePatch`] produced by [`PatchContext::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchContext {
    pub employee_to_patch: EmployeeForUpdateDto,
    pub employee: Employee,
}

impl PatchContext {
    /// Applies `document` to the editable copy; on failure the copy is unchanged.
    pub fn apply(&mut self, document: &PatchDocument) -> Result<(), PatchError> {
        document.apply_to(&mut self.employee_to_patch)
    }

    pub fn validate(self) -> ServiceResult<ValidatedEmployeePatch> {
        self.employee_to_patch.validate()?;
        let updates = UpdateEmployee::try_from(self.employee_to_patch)?;

        Ok(ValidatedEmployeePatch {
            employee: self.employee,
            updates,
        })
    }
}

/// Patched fields that passed validation, ready to be committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedEmployeePatch {
    employee: Employee,
    updates: UpdateEmployee,
}

impl ValidatedEmployeePatch {
    pub fn employee_id(&self) -> EmployeeId {
        self.employee.id
    }

    pub fn updates(&self) -> &UpdateEmployee {
        &self.updates
    }
}

pub fn prepare_employee_patch<R>(
    repo: &R,
    company_id: CompanyId,
    employee_id: EmployeeId,
    company_track_changes: bool,
    employee_track_changes: bool,
) -> ServiceResult<PatchContext>
where
    R: CompanyReader + EmployeeReader + ?Sized,
{
    require_company(repo, company_id, company_track_changes)?;
    let employee = find_employee(repo, company_id, employee_id, employee_track_changes)?;

    Ok(PatchContext {
        employee_to_patch: EmployeeForUpdateDto::from(&employee),
        employee,
    })
}

pub fn commit_employee_patch<R>(repo: &R, patch: ValidatedEmployeePatch) -> ServiceResult<()>
where
    R: EmployeeWriter + ?Sized,
{
    let ValidatedEmployeePatch {
        mut employee,
        updates,
    } = patch;
    employee.apply(updates);

    repo.update_employee(&employee).map_err(|err| {
        log::error!("Failed to save patched employee {}: {err}", employee.id);
        err
    })?;

    log::info!("Patched employee {}", employee.id);

    Ok(())
}
