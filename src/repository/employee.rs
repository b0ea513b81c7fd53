//! Repository implementation for employees.

use diesel::prelude::*;

use crate::{
    domain::{
        employee::{Employee, NewEmployee},
        types::{CompanyId, EmployeeId},
    },
    models::employee::{
        Employee as DbEmployee, NewEmployee as DbNewEmployee, UpdateEmployee as DbUpdateEmployee,
    },
    repository::{
        DieselRepository, EmployeeReader, EmployeeWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl EmployeeReader for DieselRepository {
    fn list_employees(
        &self,
        company_id: CompanyId,
        _track_changes: bool,
    ) -> RepositoryResult<Vec<Employee>> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let db_employees = employees::table
            .filter(employees::company_id.eq(company_id.as_bytes().as_slice()))
            .load::<DbEmployee>(&mut conn)?;

        db_employees
            .into_iter()
            .map(|db_employee| Employee::try_from(db_employee).map_err(RepositoryError::from))
            .collect()
    }

    fn get_employee(
        &self,
        company_id: CompanyId,
        id: EmployeeId,
        _track_changes: bool,
    ) -> RepositoryResult<Option<Employee>> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let db_employee = employees::table
            .filter(employees::id.eq(id.as_bytes().as_slice()))
            .filter(employees::company_id.eq(company_id.as_bytes().as_slice()))
            .first::<DbEmployee>(&mut conn)
            .optional()?;

        db_employee
            .map(Employee::try_from)
            .transpose()
            .map_err(RepositoryError::from)
    }
}

impl EmployeeWriter for DieselRepository {
    fn create_employee(&self, new_employee: &NewEmployee) -> RepositoryResult<Employee> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let db_employee = diesel::insert_into(employees::table)
            .values(DbNewEmployee::from(new_employee))
            .get_result::<DbEmployee>(&mut conn)?;

        Ok(Employee::try_from(db_employee)?)
    }

    fn update_employee(&self, employee: &Employee) -> RepositoryResult<Employee> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let target = employees::table
            .filter(employees::id.eq(employee.id.as_bytes().as_slice()))
            .filter(employees::company_id.eq(employee.company_id.as_bytes().as_slice()));

        let db_employee = diesel::update(target)
            .set(DbUpdateEmployee::from(employee))
            .get_result::<DbEmployee>(&mut conn)?;

        Ok(Employee::try_from(db_employee)?)
    }

    fn delete_employee(&self, employee: &Employee) -> RepositoryResult<()> {
        use crate::schema::employees;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(
            employees::table
                .filter(employees::id.eq(employee.id.as_bytes().as_slice()))
                .filter(employees::company_id.eq(employee.company_id.as_bytes().as_slice())),
        )
        .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
