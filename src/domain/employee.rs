use serde::{Deserialize, Serialize};

use crate::domain::types::{CompanyId, EmployeeAge, EmployeeId, EmployeeName, EmployeePosition};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub company_id: CompanyId,
    pub name: EmployeeName,
    pub age: EmployeeAge,
    pub position: EmployeePosition,
}

impl Employee {
    /// Overwrites the mutable fields with `updates`, keeping identity and owner.
    pub fn apply(&mut self, updates: UpdateEmployee) {
        self.name = updates.name;
        self.age = updates.age;
        self.position = updates.position;
    }
}

#[derive(Clone, Debug)]
pub struct NewEmployee {
    pub id: EmployeeId,
    pub company_id: CompanyId,
    pub name: EmployeeName,
    pub age: EmployeeAge,
    pub position: EmployeePosition,
}

impl NewEmployee {
    #[must_use]
    pub fn new(
        company_id: CompanyId,
        name: EmployeeName,
        age: EmployeeAge,
        position: EmployeePosition,
    ) -> Self {
        Self {
            id: EmployeeId::new(),
            company_id,
            name,
            age,
            position,
        }
    }
}

impl From<NewEmployee> for Employee {
    fn from(new: NewEmployee) -> Self {
        Self {
            id: new.id,
            company_id: new.company_id,
            name: new.name,
            age: new.age,
            position: new.position,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateEmployee {
    pub name: EmployeeName,
    pub age: EmployeeAge,
    pub position: EmployeePosition,
}
