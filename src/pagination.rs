use serde::Serialize;

/// Describes the window of a paged result. Serialized into the
/// `X-Pagination` response header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageMetadata {
    pub fn new(total_count: usize, current_page: usize, page_size: usize) -> Self {
        let current_page = current_page.max(1);
        let page_size = page_size.max(1);
        let total_pages = total_count.div_ceil(page_size);

        Self {
            current_page,
            total_pages,
            page_size,
            total_count,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        }
    }
}

/// A single page of items together with its [`PageMetadata`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub metadata: PageMetadata,
}

impl<T> PagedList<T> {
    /// Slices `source` down to the requested page. Pages past the end yield no
    /// items while the metadata still reports the full count.
    pub fn paginate(source: Vec<T>, page_number: usize, page_size: usize) -> Self {
        let metadata = PageMetadata::new(source.len(), page_number, page_size);
        let skip = (metadata.current_page - 1).saturating_mul(metadata.page_size);

        let items = source
            .into_iter()
            .skip(skip)
            .take(metadata.page_size)
            .collect();

        Self { items, metadata }
    }

    /// Transforms the items while keeping the page window.
    pub fn map<U, F>(self, f: F) -> PagedList<U>
    where
        F: FnMut(T) -> U,
    {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            metadata: self.metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let metadata = PageMetadata::new(11, 1, 5);

        assert_eq!(metadata.total_pages, 3);
        assert!(!metadata.has_previous);
        assert!(metadata.has_next);
    }

    #[test]
    fn empty_source_has_no_pages() {
        let page = PagedList::<u8>::paginate(Vec::new(), 1, 10);

        assert!(page.items.is_empty());
        assert_eq!(page.metadata.total_count, 0);
        assert_eq!(page.metadata.total_pages, 0);
        assert!(!page.metadata.has_next);
    }

    #[test]
    fn returns_requested_window() {
        let page = PagedList::paginate((1..=12).collect::<Vec<_>>(), 2, 5);

        assert_eq!(page.items, vec![6, 7, 8, 9, 10]);
        assert_eq!(page.metadata.current_page, 2);
        assert!(page.metadata.has_previous);
        assert!(page.metadata.has_next);
    }

    #[test]
    fn last_page_may_be_partial() {
        let page = PagedList::paginate((1..=12).collect::<Vec<_>>(), 3, 5);

        assert_eq!(page.items, vec![11, 12]);
        assert!(!page.metadata.has_next);
    }

    #[test]
    fn page_past_the_end_is_empty_but_keeps_counts() {
        let page = PagedList::paginate((1..=12).collect::<Vec<_>>(), 9, 5);

        assert!(page.items.is_empty());
        assert_eq!(page.metadata.total_count, 12);
        assert_eq!(page.metadata.total_pages, 3);
    }

    #[test]
    fn huge_page_numbers_do_not_overflow() {
        let page = PagedList::paginate(vec![1, 2, 3], usize::MAX, 50);

        assert!(page.items.is_empty());
        assert_eq!(page.metadata.total_pages, 1);
    }

    #[test]
    fn page_math_holds_for_a_grid_of_inputs() {
        for total in [0_usize, 1, 7, 10, 23] {
            for size in 1..=6 {
                for number in 1..=6 {
                    let page = PagedList::paginate(vec![0; total], number, size);
                    assert_eq!(page.metadata.total_pages, total.div_ceil(size));
                    assert!(page.items.len() <= size);
                }
            }
        }
    }

    #[test]
    fn map_keeps_metadata() {
        let page = PagedList::paginate(vec![1, 2, 3], 1, 2).map(|n| n * 10);

        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.metadata.total_count, 3);
    }
}
