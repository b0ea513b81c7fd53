//! Domain aggregates exposed by the company/employee service layer.

pub mod company;
pub mod employee;
pub mod types;
