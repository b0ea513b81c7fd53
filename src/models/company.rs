use diesel::prelude::*;

use crate::domain::company::{
    Company as DomainCompany, NewCompany as DomainNewCompany,
    UpdateCompany as DomainUpdateCompany,
};
use crate::domain::types::{CompanyAddress, CompanyId, CompanyName, Country, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::companies)]
/// Diesel model for [`crate::domain::company::Company`].
pub struct Company {
    pub id: Vec<u8>,
    pub name: String,
    pub address: String,
    pub country: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::companies)]
/// Insertable form of [`Company`].
pub struct NewCompany<'a> {
    pub id: &'a [u8],
    pub name: &'a str,
    pub address: &'a str,
    pub country: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::companies)]
/// Data used when replacing a [`Company`] record.
pub struct UpdateCompany<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub country: &'a str,
}

impl TryFrom<Company> for DomainCompany {
    type Error = TypeConstraintError;

    fn try_from(company: Company) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CompanyId::from_bytes(&company.id)?,
            name: CompanyName::new(company.name)?,
            address: CompanyAddress::new(company.address)?,
            country: Country::new(company.country)?,
        })
    }
}

impl<'a> From<&'a DomainNewCompany> for NewCompany<'a> {
    fn from(company: &'a DomainNewCompany) -> Self {
        Self {
            id: company.id.as_bytes(),
            name: company.name.as_str(),
            address: company.address.as_str(),
            country: company.country.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCompany> for UpdateCompany<'a> {
    fn from(company: &'a DomainUpdateCompany) -> Self {
        Self {
            name: company.name.as_str(),
            address: company.address.as_str(),
            country: company.country.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_domain_new_borrows_fields() {
        let domain = DomainNewCompany::new(
            CompanyName::new("IT_Solutions Ltd").unwrap(),
            CompanyAddress::new("583 Wall Dr. Gwynn Oak, MD 21207").unwrap(),
            Country::new("USA").unwrap(),
        );

        let insertable: NewCompany = (&domain).into();

        assert_eq!(insertable.id, domain.id.as_bytes());
        assert_eq!(insertable.name, "IT_Solutions Ltd");
        assert_eq!(insertable.country, "USA");
    }

    #[test]
    fn company_into_domain() {
        let id = CompanyId::new();
        let db_company = Company {
            id: id.as_bytes().to_vec(),
            name: "Admin_Solutions Ltd".to_string(),
            address: "312 Forest Avenue, BF 923".to_string(),
            country: "USA".to_string(),
        };

        let domain = DomainCompany::try_from(db_company).unwrap();

        assert_eq!(domain.id, id);
        assert_eq!(domain.name.as_str(), "Admin_Solutions Ltd");
        assert_eq!(domain.full_address(), "312 Forest Avenue, BF 923 USA");
    }

    #[test]
    fn corrupted_id_is_rejected() {
        let db_company = Company {
            id: vec![0; 3],
            name: "Broken".to_string(),
            address: "Nowhere".to_string(),
            country: "None".to_string(),
        };

        assert_eq!(
            DomainCompany::try_from(db_company),
            Err(TypeConstraintError::InvalidUuid)
        );
    }
}
