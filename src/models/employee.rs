use diesel::prelude::*;

use crate::domain::employee::{Employee as DomainEmployee, NewEmployee as DomainNewEmployee};
use crate::domain::types::{
    CompanyId, EmployeeAge, EmployeeId, EmployeeName, EmployeePosition, TypeConstraintError,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::employees)]
/// Diesel model for [`crate::domain::employee::Employee`].
pub struct Employee {
    pub id: Vec<u8>,
    pub company_id: Vec<u8>,
    pub name: String,
    pub age: i32,
    pub position: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::employees)]
pub struct NewEmployee<'a> {
    pub id: &'a [u8],
    pub company_id: &'a [u8],
    pub name: &'a str,
    pub age: i32,
    pub position: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::employees)]
/// Mutable columns of an employee row.
pub struct UpdateEmployee<'a> {
    pub name: &'a str,
    pub age: i32,
    pub position: &'a str,
}

impl TryFrom<Employee> for DomainEmployee {
    type Error = TypeConstraintError;

    fn try_from(employee: Employee) -> Result<Self, Self::Error> {
        Ok(Self {
            id: EmployeeId::from_bytes(&employee.id)?,
            company_id: CompanyId::from_bytes(&employee.company_id)?,
            name: EmployeeName::new(employee.name)?,
            age: EmployeeAge::new(employee.age)?,
            position: EmployeePosition::new(employee.position)?,
        })
    }
}

impl<'a> From<&'a DomainNewEmployee> for NewEmployee<'a> {
    fn from(employee: &'a DomainNewEmployee) -> Self {
        Self {
            id: employee.id.as_bytes(),
            company_id: employee.company_id.as_bytes(),
            name: employee.name.as_str(),
            age: employee.age.get(),
            position: employee.position.as_str(),
        }
    }
}

impl<'a> From<&'a DomainEmployee> for UpdateEmployee<'a> {
    fn from(employee: &'a DomainEmployee) -> Self {
        Self {
            name: employee.name.as_str(),
            age: employee.age.get(),
            position: employee.position.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db_employee(age: i32) -> Employee {
        Employee {
            id: EmployeeId::new().as_bytes().to_vec(),
            company_id: CompanyId::new().as_bytes().to_vec(),
            name: "Kane Miller".to_string(),
            age,
            position: "Administrator".to_string(),
        }
    }

    #[test]
    fn employee_into_domain() {
        let row = db_employee(35);
        let company_id = CompanyId::from_bytes(&row.company_id).unwrap();

        let domain = DomainEmployee::try_from(row).unwrap();

        assert_eq!(domain.company_id, company_id);
        assert_eq!(domain.age.get(), 35);
        assert_eq!(domain.position.as_str(), "Administrator");
    }

    #[test]
    fn out_of_range_age_is_rejected() {
        assert_eq!(
            DomainEmployee::try_from(db_employee(9)),
            Err(TypeConstraintError::AgeOutOfRange)
        );
    }

    #[test]
    fn update_changeset_skips_identity() {
        let domain = DomainEmployee::try_from(db_employee(40)).unwrap();

        let changes: UpdateEmployee = (&domain).into();

        assert_eq!(changes.name, "Kane Miller");
        assert_eq!(changes.age, 40);
    }
}
