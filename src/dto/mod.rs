//! DTOs exchanged with HTTP clients, plus the projections between them and
//! domain entities.

pub mod company;
pub mod employee;
