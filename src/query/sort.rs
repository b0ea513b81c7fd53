//! Parsing of `orderBy` expressions into an employee ordering.
//!
//! Expressions look like `age desc, name`: comma separated fields with an
//! optional `asc`/`desc` direction. Only whitelisted fields are honoured;
//! anything else is skipped, and an expression with no usable field falls back
//! to ordering by name. Identity always breaks ties so the same data is always
//! returned in the same order.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::domain::employee::Employee;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn parse(token: Option<&str>) -> Self {
        match token {
            Some(token) if token.eq_ignore_ascii_case("desc") => Self::Descending,
            _ => Self::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Employee fields clients are allowed to order by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmployeeSortField {
    Name,
    Age,
    Position,
}

impl EmployeeSortField {
    fn compare(self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Age => a.age.cmp(&b.age),
            Self::Position => a.position.cmp(&b.position),
        }
    }
}

impl FromStr for EmployeeSortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "age" => Ok(Self::Age),
            "position" => Ok(Self::Position),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub field: EmployeeSortField,
    pub direction: SortDirection,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeOrdering {
    keys: Vec<SortKey>,
}

impl EmployeeOrdering {
    const FALLBACK: SortKey = SortKey {
        field: EmployeeSortField::Name,
        direction: SortDirection::Ascending,
    };

    pub fn parse(order_by: Option<&str>) -> Self {
        let mut keys: Vec<SortKey> = Vec::new();

        for clause in order_by.unwrap_or_default().split(',') {
            let mut tokens = clause.split_whitespace();
            let Some(Ok(field)) = tokens.next().map(EmployeeSortField::from_str) else {
                continue;
            };
            if keys.iter().any(|key| key.field == field) {
                continue;
            }
            keys.push(SortKey {
                field,
                direction: SortDirection::parse(tokens.next()),
            });
        }

        if keys.is_empty() {
            keys.push(Self::FALLBACK);
        }

        Self { keys }
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        self.keys
            .iter()
            .map(|key| key.direction.apply(key.field.compare(a, b)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| a.id.cmp(&b.id))
    }

    pub fn sort(&self, employees: &mut [Employee]) {
        employees.sort_by(|a, b| self.compare(a, b));
    }
}

impl Default for EmployeeOrdering {
    fn default() -> Self {
        Self {
            keys: vec![Self::FALLBACK],
        }
    }
}
