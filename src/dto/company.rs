//! Transfer shapes for the company resource.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::company::{Company, NewCompany, UpdateCompany};
use crate::domain::employee::NewEmployee;
use crate::domain::types::{
    CompanyAddress, CompanyId, CompanyName, Country, TypeConstraintError,
};
use crate::dto::employee::EmployeeForCreationDto;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    pub id: CompanyId,
    pub name: String,
    pub full_address: String,
}

impl From<Company> for CompanyDto {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            full_address: company.full_address(),
            name: company.name.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body accepted when creating a company.
pub struct CompanyForCreationDto {
    #[validate(
        required(message = "Company name is a required field."),
        length(min = 1, max = 60, message = "Maximum length for the Name is 60 characters.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Company address is a required field."),
        length(min = 1, max = 60, message = "Maximum length for the Address is 60 characters.")
    )]
    pub address: Option<String>,
    #[validate(
        required(message = "Country is a required field."),
        length(min = 1, max = 60)
    )]
    pub country: Option<String>,
    /// Employees created together with the company.
    #[validate(nested)]
    pub employees: Option<Vec<EmployeeForCreationDto>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body accepted when replacing a company.
pub struct CompanyForUpdateDto {
    #[validate(
        required(message = "Company name is a required field."),
        length(min = 1, max = 60, message = "Maximum length for the Name is 60 characters.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Company address is a required field."),
        length(min = 1, max = 60, message = "Maximum length for the Address is 60 characters.")
    )]
    pub address: Option<String>,
    #[validate(
        required(message = "Country is a required field."),
        length(min = 1, max = 60)
    )]
    pub country: Option<String>,
    /// Employees added to the company as part of the update.
    #[validate(nested)]
    pub employees: Option<Vec<EmployeeForCreationDto>>,
}

fn company_fields(
    name: Option<String>,
    address: Option<String>,
    country: Option<String>,
) -> Result<(CompanyName, CompanyAddress, Country), TypeConstraintError> {
    Ok((
        CompanyName::new(name.ok_or(TypeConstraintError::Missing("name"))?)?,
        CompanyAddress::new(address.ok_or(TypeConstraintError::Missing("address"))?)?,
        Country::new(country.ok_or(TypeConstraintError::Missing("country"))?)?,
    ))
}

fn employees_for(
    company_id: CompanyId,
    employees: Option<Vec<EmployeeForCreationDto>>,
) -> Result<Vec<NewEmployee>, TypeConstraintError> {
    employees
        .unwrap_or_default()
        .into_iter()
        .map(|employee| employee.into_domain(company_id))
        .collect()
}

impl TryFrom<CompanyForCreationDto> for NewCompany {
    type Error = TypeConstraintError;

    fn try_from(dto: CompanyForCreationDto) -> Result<Self, Self::Error> {
        let (name, address, country) = company_fields(dto.name, dto.address, dto.country)?;
        let mut company = NewCompany::new(name, address, country);
        company.employees = employees_for(company.id, dto.employees)?;
        Ok(company)
    }
}

impl CompanyForUpdateDto {
    pub fn into_domain(self, company_id: CompanyId) -> Result<UpdateCompany, TypeConstraintError> {
        let (name, address, country) = company_fields(self.name, self.address, self.country)?;
        Ok(UpdateCompany {
            name,
            address,
            country,
            employees: employees_for(company_id, self.employees)?,
        })
    }
}
