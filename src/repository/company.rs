//! Repository implementation for companies.

use diesel::{Connection, prelude::*};

use crate::{
    domain::{
        company::{Company, NewCompany, UpdateCompany},
        employee::NewEmployee,
        types::CompanyId,
    },
    models::{
        company::{
            Company as DbCompany, NewCompany as DbNewCompany, UpdateCompany as DbUpdateCompany,
        },
        employee::NewEmployee as DbNewEmployee,
    },
    repository::{
        CompanyReader, CompanyWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

/// Inserts `employees` under `company_id`, ignoring whatever owner they carry.
fn insert_employees(
    conn: &mut SqliteConnection,
    company_id: CompanyId,
    employees: &[NewEmployee],
) -> RepositoryResult<usize> {
    use crate::schema::employees;

    if employees.is_empty() {
        return Ok(0);
    }

    let rows = employees
        .iter()
        .map(|employee| DbNewEmployee {
            company_id: company_id.as_bytes(),
            ..employee.into()
        })
        .collect::<Vec<_>>();

    let inserted = diesel::insert_into(employees::table)
        .values(&rows)
        .execute(conn)?;

    Ok(inserted)
}

impl CompanyReader for DieselRepository {
    fn get_company_by_id(
        &self,
        id: CompanyId,
        _track_changes: bool,
    ) -> RepositoryResult<Option<Company>> {
        use crate::schema::companies;

        let mut conn = self.conn()?;
        let db_company = companies::table
            .filter(companies::id.eq(id.as_bytes().as_slice()))
            .first::<DbCompany>(&mut conn)
            .optional()?;

        match db_company {
            Some(db_company) => Ok(Some(
                Company::try_from(db_company).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_companies(&self, _track_changes: bool) -> RepositoryResult<Vec<Company>> {
        use crate::schema::companies;

        let mut conn = self.conn()?;
        let db_companies = companies::table
            .order((companies::name.asc(), companies::id.asc()))
            .load::<DbCompany>(&mut conn)?;

        db_companies
            .into_iter()
            .map(|db_company| Company::try_from(db_company).map_err(RepositoryError::from))
            .collect()
    }

    fn list_companies_by_ids(
        &self,
        ids: &[CompanyId],
        _track_changes: bool,
    ) -> RepositoryResult<Vec<Company>> {
        use crate::schema::companies;

        let mut conn = self.conn()?;
        let id_bytes = ids
            .iter()
            .map(|id| id.as_bytes().to_vec())
            .collect::<Vec<_>>();

        let db_companies = companies::table
            .filter(companies::id.eq_any(id_bytes))
            .order((companies::name.asc(), companies::id.asc()))
            .load::<DbCompany>(&mut conn)?;

        db_companies
            .into_iter()
            .map(|db_company| Company::try_from(db_company).map_err(RepositoryError::from))
            .collect()
    }
}

impl CompanyWriter for DieselRepository {
    fn create_companies(&self, new_companies: &[NewCompany]) -> RepositoryResult<Vec<Company>> {
        use crate::schema::companies;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let mut created = Vec::with_capacity(new_companies.len());

            for new_company in new_companies {
                let db_company = diesel::insert_into(companies::table)
                    .values(DbNewCompany::from(new_company))
                    .get_result::<DbCompany>(conn)?;

                insert_employees(conn, new_company.id, &new_company.employees)?;

                created.push(Company::try_from(db_company)?);
            }

            Ok(created)
        })
    }

    fn update_company(
        &self,
        id: CompanyId,
        updates: &UpdateCompany,
    ) -> RepositoryResult<Company> {
        use crate::schema::companies;

        let mut conn = self.conn()?;

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let db_company =
                diesel::update(companies::table.filter(companies::id.eq(id.as_bytes().as_slice())))
                    .set(DbUpdateCompany::from(updates))
                    .get_result::<DbCompany>(conn)?;

            insert_employees(conn, id, &updates.employees)?;

            Ok(Company::try_from(db_company)?)
        })
    }

    fn delete_company(&self, id: CompanyId) -> RepositoryResult<()> {
        use crate::schema::companies;

        let mut conn = self.conn()?;
        let deleted =
            diesel::delete(companies::table.filter(companies::id.eq(id.as_bytes().as_slice())))
                .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
