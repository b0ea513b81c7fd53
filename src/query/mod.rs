//! Client supplied paging, filtering, searching and sorting input for the
//! employee collection.
//!
//! Raw query-string values arrive as [`EmployeeQueryParams`] and are normalized
//! into [`EmployeeQueryParameters`]. Normalization never fails: page numbers and
//! page sizes are clamped into range and blank search terms are dropped. The
//! only invalid state that survives is an inverted age range, reported by
//! [`EmployeeQueryParameters::has_valid_age_range`] so the caller can reject the
//! request before touching the store.

use serde::Deserialize;

pub mod filter;
pub mod sort;

pub use filter::EmployeePredicate;
pub use sort::{EmployeeOrdering, EmployeeSortField, SortDirection, SortKey};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 50;

/// Page size bounds applied while normalizing query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingOptions {
    pub default_page_size: usize,
    pub max_page_size: usize,
}

impl PagingOptions {
    /// Builds options ensuring `1 <= default_page_size <= max_page_size`.
    pub fn new(default_page_size: usize, max_page_size: usize) -> Self {
        let max_page_size = max_page_size.max(1);
        Self {
            default_page_size: default_page_size.clamp(1, max_page_size),
            max_page_size,
        }
    }
}

impl Default for PagingOptions {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE)
    }
}

/// Raw query parameters accepted by the employee listing endpoint.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeQueryParams {
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub search_term: Option<String>,
    pub order_by: Option<String>,
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

/// Normalized employee query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeQueryParameters {
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    /// Trimmed search term, `None` when the client sent nothing useful.
    pub search_term: Option<String>,
    pub order_by: Option<String>,
    /// 1-based page number.
    pub page_number: usize,
    pub page_size: usize,
}

fn clamp_to_usize(value: i64, min: usize, max: usize) -> usize {
    usize::try_from(value).unwrap_or(0).clamp(min, max)
}

impl EmployeeQueryParameters {
    pub fn from_params(params: EmployeeQueryParams, options: &PagingOptions) -> Self {
        let page_number = params
            .page_number
            .map_or(1, |page| clamp_to_usize(page, 1, usize::MAX));
        let page_size = params.page_size.map_or(options.default_page_size, |size| {
            clamp_to_usize(size, 1, options.max_page_size)
        });

        Self {
            min_age: params.min_age,
            max_age: params.max_age,
            search_term: params
                .search_term
                .map(|term| term.trim().to_string())
                .filter(|term| !term.is_empty()),
            order_by: params
                .order_by
                .map(|order| order.trim().to_string())
                .filter(|order| !order.is_empty()),
            page_number,
            page_size,
        }
    }

    /// `false` when both bounds are present and `min_age > max_age`.
    pub fn has_valid_age_range(&self) -> bool {
        match (self.min_age, self.max_age) {
            (Some(min), Some(max)) => min <= max,
            _ => true,
        }
    }

    pub fn predicate(&self) -> EmployeePredicate {
        EmployeePredicate::build(self.min_age, self.max_age, self.search_term.as_deref())
    }

    pub fn ordering(&self) -> EmployeeOrdering {
        EmployeeOrdering::parse(self.order_by.as_deref())
    }
}

impl Default for EmployeeQueryParameters {
    fn default() -> Self {
        Self::from_params(EmployeeQueryParams::default(), &PagingOptions::default())
    }
}
