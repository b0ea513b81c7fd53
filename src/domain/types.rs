//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (trimmed non-empty text with a
//! length cap, bounded ages, well-formed identifiers) so that once a value
//! reaches the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Youngest age an employee record may carry.
pub const EMPLOYEE_MIN_AGE: i32 = 18;
/// Oldest age an employee record may carry.
pub const EMPLOYEE_MAX_AGE: i32 = 120;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string exceeded the allowed number of characters.
    #[error("value cannot be longer than {max} characters")]
    TooLong { max: usize },
    /// Provided age fell outside the accepted range.
    #[error("age must be between {} and {}", EMPLOYEE_MIN_AGE, EMPLOYEE_MAX_AGE)]
    AgeOutOfRange,
    /// Provided uuid failed format validation.
    #[error("invalid uuid value")]
    InvalidUuid,
    /// A required value was not supplied.
    #[error("{0} is required")]
    Missing(&'static str),
}

/// Macro to generate opaque UUID-backed identifiers.
macro_rules! uuid_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Parse from raw bytes (DB boundary).
            pub fn from_bytes(bytes: &[u8]) -> Result<Self, TypeConstraintError> {
                Uuid::from_slice(bytes)
                    .map(Self)
                    .map_err(|_| TypeConstraintError::InvalidUuid)
            }

            /// Convert to raw bytes (DB boundary).
            pub fn as_bytes(&self) -> &[u8; 16] {
                self.0.as_bytes()
            }

            /// Returns the wrapped [`Uuid`].
            pub const fn get(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|_| TypeConstraintError::InvalidUuid)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }
    };
}

uuid_newtype!(CompanyId, "Unique identifier for a company.");
uuid_newtype!(EmployeeId, "Unique identifier for an employee.");

/// Trims the input and checks it is non-empty and at most `max` characters.
fn bounded_text<S: Into<String>>(value: S, max: usize) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    if trimmed.chars().count() > max {
        return Err(TypeConstraintError::TooLong { max });
    }
    Ok(trimmed)
}

macro_rules! bounded_string_newtype {
    ($name:ident, $max:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Maximum number of characters accepted.
            pub const MAX_LEN: usize = $max;

            /// Constructs a trimmed, non-empty value no longer than [`Self::MAX_LEN`].
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                bounded_text(value, Self::MAX_LEN).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

bounded_string_newtype!(CompanyName, 60, "Company name, trimmed and non-empty.");
bounded_string_newtype!(CompanyAddress, 60, "Company street address.");
bounded_string_newtype!(Country, 60, "Country the company is registered in.");
bounded_string_newtype!(EmployeeName, 30, "Employee full name.");
bounded_string_newtype!(EmployeePosition, 20, "Free-text job position.");

/// Employee age limited to [`EMPLOYEE_MIN_AGE`]..=[`EMPLOYEE_MAX_AGE`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeAge(i32);

impl EmployeeAge {
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if (EMPLOYEE_MIN_AGE..=EMPLOYEE_MAX_AGE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::AgeOutOfRange)
        }
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for EmployeeAge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for EmployeeAge {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmployeeAge> for i32 {
    fn from(value: EmployeeAge) -> Self {
        value.0
    }
}
