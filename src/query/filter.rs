use crate::domain::employee::Employee;

///
/// EmployeePredicate
///
/// Composable filter evaluated against loaded employees. Built from the age
/// range and search term of an employee query; terms combine with AND.
///

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmployeePredicate {
    /// Matches every employee.
    True,
    And(Vec<Self>),
    /// Age greater than or equal to the bound.
    MinAge(i32),
    /// Age less than or equal to the bound.
    MaxAge(i32),
    /// Position contains the lowercase needle, ignoring case.
    PositionContains(String),
}

impl EmployeePredicate {
    pub fn build(min_age: Option<i32>, max_age: Option<i32>, search_term: Option<&str>) -> Self {
        let mut predicate = Self::True;

        if let Some(min) = min_age {
            predicate = predicate.and(Self::MinAge(min));
        }
        if let Some(max) = max_age {
            predicate = predicate.and(Self::MaxAge(max));
        }
        if let Some(term) = search_term.map(str::trim).filter(|term| !term.is_empty()) {
            predicate = predicate.and(Self::PositionContains(term.to_lowercase()));
        }

        predicate
    }

    /// Conjunction that treats `True` as the identity and flattens nested `And`s.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::True, other) => other,
            (this, Self::True) => this,
            (Self::And(mut left), Self::And(right)) => {
                left.extend(right);
                Self::And(left)
            }
            (Self::And(mut left), other) => {
                left.push(other);
                Self::And(left)
            }
            (this, Self::And(mut right)) => {
                right.insert(0, this);
                Self::And(right)
            }
            (this, other) => Self::And(vec![this, other]),
        }
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        match self {
            Self::True => true,
            Self::And(terms) => terms.iter().all(|term| term.matches(employee)),
            Self::MinAge(min) => employee.age.get() >= *min,
            Self::MaxAge(max) => employee.age.get() <= *max,
            Self::PositionContains(needle) => {
                employee.position.to_lowercase().contains(needle.as_str())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{
        CompanyId, EmployeeAge, EmployeeId, EmployeeName, EmployeePosition,
    };

    fn employee(age: i32, position: &str) -> Employee {
        Employee {
            id: EmployeeId::new(),
            company_id: CompanyId::new(),
            name: EmployeeName::new("Jana McLeaf").unwrap(),
            age: EmployeeAge::new(age).unwrap(),
            position: EmployeePosition::new(position).unwrap(),
        }
    }

    #[test]
    fn no_inputs_yield_identity() {
        let predicate = EmployeePredicate::build(None, None, None);

        assert_eq!(predicate, EmployeePredicate::True);
        assert!(predicate.matches(&employee(18, "Dev")));
    }

    #[test]
    fn age_bounds_are_inclusive() {
        let predicate = EmployeePredicate::build(Some(26), Some(40), None);

        assert!(!predicate.matches(&employee(25, "Dev")));
        assert!(predicate.matches(&employee(26, "Dev")));
        assert!(predicate.matches(&employee(40, "Dev")));
        assert!(!predicate.matches(&employee(41, "Dev")));
    }

    #[test]
    fn search_is_case_insensitive_substring_on_position() {
        let predicate = EmployeePredicate::build(None, None, Some("MAN"));

        assert!(predicate.matches(&employee(30, "Manager")));
        assert!(predicate.matches(&employee(30, "Account manager")));
        assert!(!predicate.matches(&employee(30, "Dev")));
    }

    #[test]
    fn whitespace_search_term_is_ignored() {
        assert_eq!(
            EmployeePredicate::build(None, None, Some("  \t ")),
            EmployeePredicate::True
        );
    }

    #[test]
    fn conjunction_flattens() {
        let predicate = EmployeePredicate::build(Some(20), Some(30), Some("dev"));

        assert_eq!(
            predicate,
            EmployeePredicate::And(vec![
                EmployeePredicate::MinAge(20),
                EmployeePredicate::MaxAge(30),
                EmployeePredicate::PositionContains("dev".to_string()),
            ])
        );
        assert!(!predicate.matches(&employee(25, "Manager")));
        assert!(predicate.matches(&employee(25, "Senior Dev")));
    }

    #[test]
    fn every_match_lies_within_the_requested_range() {
        let predicate = EmployeePredicate::build(Some(30), Some(50), None);

        let matched: Vec<i32> = (18..=120)
            .map(|age| employee(age, "Dev"))
            .filter(|e| predicate.matches(e))
            .map(|e| e.age.get())
            .collect();

        assert_eq!(matched.len(), 21);
        assert!(matched.iter().all(|age| (30..=50).contains(age)));
    }
}
