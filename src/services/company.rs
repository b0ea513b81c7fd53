//! Services for the company resource.

use std::slice;
use std::str::FromStr;

use validator::Validate;

use crate::domain::company::NewCompany;
use crate::domain::types::CompanyId;
use crate::dto::company::{CompanyDto, CompanyForCreationDto, CompanyForUpdateDto};
use crate::repository::errors::RepositoryError;
use crate::repository::{CompanyReader, CompanyWriter};
use crate::services::{ServiceError, ServiceResult, require_company};

/// Parses a comma separated id list such as `(id1,id2)`; the parentheses are
/// optional and blank entries are ignored.
pub fn parse_company_ids(raw: &str) -> ServiceResult<Vec<CompanyId>> {
    let trimmed = raw.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);

    inner
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            CompanyId::from_str(part)
                .map_err(|_| ServiceError::BadRequest(format!("'{part}' is not a valid company id.")))
        })
        .collect()
}

/// Returns every company ordered by name.
pub fn get_companies<R>(repo: &R, track_changes: bool) -> ServiceResult<Vec<CompanyDto>>
where
    R: CompanyReader + ?Sized,
{
    let companies = repo.list_companies(track_changes).map_err(|err| {
        log::error!("Failed to list companies: {err}");
        err
    })?;

    Ok(companies.into_iter().map(CompanyDto::from).collect())
}

pub fn get_company<R>(repo: &R, company_id: CompanyId, track_changes: bool) -> ServiceResult<CompanyDto>
where
    R: CompanyReader + ?Sized,
{
    require_company(repo, company_id, track_changes).map(CompanyDto::from)
}

/// Returns exactly the requested companies, or fails when any id is unknown.
pub fn get_companies_by_ids<R>(
    repo: &R,
    ids: &[CompanyId],
    track_changes: bool,
) -> ServiceResult<Vec<CompanyDto>>
where
    R: CompanyReader + ?Sized,
{
    let mut unique = ids.to_vec();
    unique.sort();
    unique.dedup();

    if unique.is_empty() {
        return Err(ServiceError::BadRequest("Parameter ids is null".to_string()));
    }

    let companies = repo
        .list_companies_by_ids(&unique, track_changes)
        .map_err(|err| {
            log::error!("Failed to load company collection: {err}");
            err
        })?;

    if companies.len() != unique.len() {
        return Err(ServiceError::BadRequest(
            "Collection count mismatch comparing to ids.".to_string(),
        ));
    }

    Ok(companies.into_iter().map(CompanyDto::from).collect())
}

/// Creates a company together with any nested employees.
pub fn create_company<R>(repo: &R, dto: CompanyForCreationDto) -> ServiceResult<CompanyDto>
where
    R: CompanyWriter + ?Sized,
{
    dto.validate()?;
    let new_company = NewCompany::try_from(dto)?;

    let created = repo
        .create_companies(slice::from_ref(&new_company))
        .map_err(|err| {
            log::error!("Failed to create company: {err}");
            err
        })?
        .into_iter()
        .next()
        .ok_or_else(|| {
            RepositoryError::Unexpected("company insert returned no row".to_string())
        })?;

    log::info!(
        "Created company {} with {} employees",
        created.id,
        new_company.employees.len()
    );

    Ok(CompanyDto::from(created))
}

/// Creates every company in one unit of work.
pub fn create_company_collection<R>(
    repo: &R,
    dtos: Vec<CompanyForCreationDto>,
) -> ServiceResult<Vec<CompanyDto>>
where
    R: CompanyWriter + ?Sized,
{
    if dtos.is_empty() {
        return Err(ServiceError::BadRequest(
            "Company collection is null".to_string(),
        ));
    }

    let new_companies = dtos
        .into_iter()
        .map(|dto| -> ServiceResult<NewCompany> {
            dto.validate()?;
            Ok(NewCompany::try_from(dto)?)
        })
        .collect::<ServiceResult<Vec<_>>>()?;

    let created = repo.create_companies(&new_companies).map_err(|err| {
        log::error!("Failed to create company collection: {err}");
        err
    })?;

    log::info!("Created {} companies", created.len());

    Ok(created.into_iter().map(CompanyDto::from).collect())
}

/// Replaces the company's fields and adds any nested employees.
pub fn update_company<R>(
    repo: &R,
    company_id: CompanyId,
    dto: CompanyForUpdateDto,
    track_changes: bool,
) -> ServiceResult<()>
where
    R: CompanyReader + CompanyWriter + ?Sized,
{
    dto.validate()?;
    let updates = dto.into_domain(company_id)?;

    require_company(repo, company_id, track_changes)?;

    repo.update_company(company_id, &updates).map_err(|err| {
        log::error!("Failed to update company {company_id}: {err}");
        err
    })?;

    log::info!("Updated company {company_id}");

    Ok(())
}

/// Deletes the company; its employees go with it.
pub fn delete_company<R>(repo: &R, company_id: CompanyId, track_changes: bool) -> ServiceResult<()>
where
    R: CompanyReader + CompanyWriter + ?Sized,
{
    require_company(repo, company_id, track_changes)?;

    repo.delete_company(company_id).map_err(|err| {
        log::error!("Failed to delete company {company_id}: {err}");
        err
    })?;

    log::info!("Deleted company {company_id}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::company::Company;
    use crate::domain::types::{CompanyAddress, CompanyName, Country};
    use crate::dto::employee::EmployeeForCreationDto;
    use crate::repository::mock::MockRepository;
    use crate::services::ErrorKind;

    fn company(name: &str) -> Company {
        Company {
            id: CompanyId::new(),
            name: CompanyName::new(name).unwrap(),
            address: CompanyAddress::new("583 Wall Dr. Gwynn Oak, MD 21207").unwrap(),
            country: Country::new("USA").unwrap(),
        }
    }

    fn creation_dto(name: &str) -> CompanyForCreationDto {
        CompanyForCreationDto {
            name: Some(name.to_string()),
            address: Some("312 Forest Avenue, BF 923".to_string()),
            country: Some("USA".to_string()),
            employees: None,
        }
    }

    #[test]
    fn parses_parenthesised_id_lists() {
        let first = CompanyId::new();
        let second = CompanyId::new();

        let ids = parse_company_ids(&format!("({first}, {second})")).unwrap();

        assert_eq!(ids, vec![first, second]);
        assert_eq!(parse_company_ids(&first.to_string()).unwrap(), vec![first]);
        assert!(parse_company_ids("()").unwrap().is_empty());
    }

    #[test]
    fn malformed_ids_are_bad_requests() {
        assert!(matches!(
            parse_company_ids("(not-a-uuid)"),
            Err(ServiceError::BadRequest(_))
        ));
    }

    #[test]
    fn lists_companies_as_dtos() {
        let mut repo = MockRepository::new();
        repo.expect_list_companies()
            .withf(|track_changes| !*track_changes)
            .times(1)
            .returning(|_| Ok(vec![company("Admin_Solutions Ltd"), company("IT_Solutions Ltd")]));

        let companies = get_companies(&repo, false).unwrap();

        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0].name, "Admin_Solutions Ltd");
        assert_eq!(
            companies[0].full_address,
            "583 Wall Dr. Gwynn Oak, MD 21207 USA"
        );
    }

    #[test]
    fn empty_collection_request_is_rejected_without_querying() {
        let mut repo = MockRepository::new();
        repo.expect_list_companies_by_ids().times(0);

        let result = get_companies_by_ids(&repo, &[], false);

        assert!(matches!(result, Err(ServiceError::BadRequest(_))));
    }

    #[test]
    fn collection_with_unknown_id_is_a_mismatch() {
        let known = company("IT_Solutions Ltd");
        let mut repo = MockRepository::new();
        repo.expect_list_companies_by_ids()
            .times(1)
            .returning(move |_, _| Ok(vec![known.clone()]));

        let result = get_companies_by_ids(&repo, &[CompanyId::new(), CompanyId::new()], false);

        assert!(
            matches!(result, Err(ServiceError::BadRequest(message)) if message.contains("mismatch"))
        );
    }

    #[test]
    fn duplicate_ids_are_requested_once() {
        let known = company("IT_Solutions Ltd");
        let id = known.id;
        let mut repo = MockRepository::new();
        repo.expect_list_companies_by_ids()
            .withf(move |ids, _| ids == [id])
            .times(1)
            .returning(move |_, _| Ok(vec![known.clone()]));

        let companies = get_companies_by_ids(&repo, &[id, id], false).unwrap();

        assert_eq!(companies.len(), 1);
    }

    #[test]
    fn create_company_inserts_nested_employees_together() {
        let mut dto = creation_dto("Electronics Solutions Ltd");
        dto.employees = Some(vec![EmployeeForCreationDto {
            name: Some("Joan Dane".to_string()),
            age: Some(29),
            position: Some("Manager".to_string()),
        }]);
        let mut repo = MockRepository::new();
        repo.expect_create_companies()
            .withf(|companies| {
                companies.len() == 1
                    && companies[0].employees.len() == 1
                    && companies[0].employees[0].company_id == companies[0].id
            })
            .times(1)
            .returning(|companies| {
                Ok(companies
                    .iter()
                    .map(|new| Company {
                        id: new.id,
                        name: new.name.clone(),
                        address: new.address.clone(),
                        country: new.country.clone(),
                    })
                    .collect())
            });

        let created = create_company(&repo, dto).unwrap();

        assert_eq!(created.name, "Electronics Solutions Ltd");
        assert_eq!(created.full_address, "312 Forest Avenue, BF 923 USA");
    }

    #[test]
    fn invalid_company_never_reaches_the_repository() {
        let mut dto = creation_dto("Electronics Solutions Ltd");
        dto.name = None;
        let mut repo = MockRepository::new();
        repo.expect_create_companies().times(0);

        let result = create_company(&repo, dto);

        assert!(matches!(result, Err(ref err) if err.kind() == ErrorKind::Validation));
    }

    #[test]
    fn empty_company_collection_is_rejected() {
        let mut repo = MockRepository::new();
        repo.expect_create_companies().times(0);

        let result = create_company_collection(&repo, Vec::new());

        assert!(matches!(result, Err(ServiceError::BadRequest(_))));
    }

    #[test]
    fn update_missing_company_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_company_by_id()
            .withf(|_, track_changes| *track_changes)
            .times(1)
            .returning(|_, _| Ok(None));
        repo.expect_update_company().times(0);
        let dto = CompanyForUpdateDto {
            name: Some("Renamed Ltd".to_string()),
            address: Some("1 Main St".to_string()),
            country: Some("USA".to_string()),
            employees: None,
        };

        let result = update_company(&repo, CompanyId::new(), dto, true);

        assert!(matches!(result, Err(ServiceError::CompanyNotFound(_))));
    }

    #[test]
    fn delete_removes_existing_company() {
        let existing = company("IT_Solutions Ltd");
        let id = existing.id;
        let mut repo = MockRepository::new();
        repo.expect_get_company_by_id()
            .times(1)
            .returning(move |_, _| Ok(Some(existing.clone())));
        repo.expect_delete_company()
            .withf(move |company_id| *company_id == id)
            .times(1)
            .returning(|_| Ok(()));

        delete_company(&repo, id, false).unwrap();
    }

    #[test]
    fn delete_missing_company_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_company_by_id()
            .times(1)
            .returning(|_, _| Ok(None));
        repo.expect_delete_company().times(0);

        let result = delete_company(&repo, CompanyId::new(), false);

        assert!(matches!(result, Err(ServiceError::CompanyNotFound(_))));
    }
}
