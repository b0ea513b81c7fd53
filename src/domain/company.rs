use serde::{Deserialize, Serialize};

use crate::domain::employee::NewEmployee;
use crate::domain::types::{CompanyAddress, CompanyId, CompanyName, Country};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    pub id: CompanyId,
    pub name: CompanyName,
    pub address: CompanyAddress,
    pub country: Country,
}

impl Company {
    /// Address and country joined the way clients display them.
    pub fn full_address(&self) -> String {
        format!("{} {}", self.address, self.country)
    }
}

/// A company about to be inserted, together with the employees created with it.
#[derive(Clone, Debug)]
pub struct NewCompany {
    pub id: CompanyId,
    pub name: CompanyName,
    pub address: CompanyAddress,
    pub country: Country,
    /// Employees inserted in the same transaction. Each one must reference `id`.
    pub employees: Vec<NewEmployee>,
}

impl NewCompany {
    #[must_use]
    pub fn new(name: CompanyName, address: CompanyAddress, country: Country) -> Self {
        Self {
            id: CompanyId::new(),
            name,
            address,
            country,
            employees: Vec::new(),
        }
    }
}

/// Full replacement of a company's fields, optionally adding new employees.
#[derive(Clone, Debug)]
pub struct UpdateCompany {
    pub name: CompanyName,
    pub address: CompanyAddress,
    pub country: Country,
    pub employees: Vec<NewEmployee>,
}
