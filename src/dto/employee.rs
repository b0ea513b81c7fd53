//! Transfer shapes for the employee resource.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::domain::types::{
    CompanyId, EmployeeAge, EmployeeId, EmployeeName, EmployeePosition, TypeConstraintError,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: EmployeeId,
    pub name: String,
    pub age: i32,
    pub position: String,
}

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.into_inner(),
            age: employee.age.get(),
            position: employee.position.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
/// Body accepted when creating an employee.
pub struct EmployeeForCreationDto {
    #[validate(
        required(message = "Employee name is a required field."),
        length(min = 1, max = 30, message = "Maximum length for the Name is 30 characters.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Age is a required field."),
        range(min = 18, max = 120, message = "Age can't be lower than 18 or higher than 120.")
    )]
    pub age: Option<i32>,
    #[validate(
        required(message = "Position is a required field."),
        length(min = 1, max = 20, message = "Maximum length for the Position is 20 characters.")
    )]
    pub position: Option<String>,
}

/// Body accepted when replacing an employee. Also the mutable copy that patch
/// documents operate on, which is why every field is optional: a `remove`
/// operation leaves the field empty and validation then rejects it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForUpdateDto {
    #[validate(
        required(message = "Employee name is a required field."),
        length(min = 1, max = 30, message = "Maximum length for the Name is 30 characters.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Age is a required field."),
        range(min = 18, max = 120, message = "Age can't be lower than 18 or higher than 120.")
    )]
    pub age: Option<i32>,
    #[validate(
        required(message = "Position is a required field."),
        length(min = 1, max = 20, message = "Maximum length for the Position is 20 characters.")
    )]
    pub position: Option<String>,
}

fn employee_fields(
    name: Option<String>,
    age: Option<i32>,
    position: Option<String>,
) -> Result<(EmployeeName, EmployeeAge, EmployeePosition), TypeConstraintError> {
    Ok((
        EmployeeName::new(name.ok_or(TypeConstraintError::Missing("name"))?)?,
        EmployeeAge::new(age.ok_or(TypeConstraintError::Missing("age"))?)?,
        EmployeePosition::new(position.ok_or(TypeConstraintError::Missing("position"))?)?,
    ))
}

impl EmployeeForCreationDto {
    pub fn into_domain(self, company_id: CompanyId) -> Result<NewEmployee, TypeConstraintError> {
        let (name, age, position) = employee_fields(self.name, self.age, self.position)?;
        Ok(NewEmployee::new(company_id, name, age, position))
    }
}

impl From<&Employee> for EmployeeForUpdateDto {
    fn from(employee: &Employee) -> Self {
        Self {
            name: Some(employee.name.to_string()),
            age: Some(employee.age.get()),
            position: Some(employee.position.to_string()),
        }
    }
}

impl TryFrom<EmployeeForUpdateDto> for UpdateEmployee {
    type Error = TypeConstraintError;

    fn try_from(dto: EmployeeForUpdateDto) -> Result<Self, Self::Error> {
        let (name, age, position) = employee_fields(dto.name, dto.age, dto.position)?;
        Ok(Self {
            name,
            age,
            position,
        })
    }
}
