//! Database models shared across the repository layer.

pub mod company;
#[cfg(feature = "server")]
pub mod config;
pub mod employee;
