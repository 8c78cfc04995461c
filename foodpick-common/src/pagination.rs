//! Page arithmetic for the explore view
//!
//! Pages are 1-indexed. A request outside `[1, total_pages]` is clamped into
//! it; an empty result still reports page 1 with zero pages.

use std::ops::Range;

/// Venues per explore page
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Position of one page within a result list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub total_pages: usize,
    /// Index of the page's first item
    pub offset: usize,
}

impl Pagination {
    /// Index range of this page's items in a list of `len` items
    pub fn range(&self, len: usize, page_size: usize) -> Range<usize> {
        let start = self.offset.min(len);
        let end = (self.offset + page_size.max(1)).min(len);
        start..end
    }
}

/// Clamp `requested_page` against `total_results` split into pages of
/// `page_size` (zero is read as 1)
///
/// ```
/// use foodpick_common::pagination::calculate_pagination;
///
/// // 30 venues at 12 per page: 12 + 12 + 6
/// let p = calculate_pagination(30, 99, 12);
/// assert_eq!((p.page, p.total_pages, p.offset), (3, 3, 24));
/// ```
pub fn calculate_pagination(
    total_results: usize,
    requested_page: usize,
    page_size: usize,
) -> Pagination {
    let page_size = page_size.max(1);
    let total_pages = total_results.div_ceil(page_size);
    let page = requested_page.clamp(1, total_pages.max(1));

    Pagination {
        page,
        total_pages,
        offset: (page - 1) * page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triple(total: usize, requested: usize, size: usize) -> (usize, usize, usize) {
        let p = calculate_pagination(total, requested, size);
        (p.page, p.total_pages, p.offset)
    }

    #[test]
    fn test_in_range_pages() {
        assert_eq!(triple(30, 1, 12), (1, 3, 0));
        assert_eq!(triple(30, 2, 12), (2, 3, 12));
        assert_eq!(triple(24, 2, 12), (2, 2, 12));
    }

    #[test]
    fn test_requests_clamp() {
        assert_eq!(triple(20, 99, 12), (2, 2, 12));
        assert_eq!(triple(20, 0, 12), (1, 2, 0));
    }

    #[test]
    fn test_no_results_is_page_one_of_zero() {
        assert_eq!(triple(0, 5, 12), (1, 0, 0));
    }

    #[test]
    fn test_zero_page_size_reads_as_one() {
        assert_eq!(triple(3, 2, 0), (2, 3, 1));
    }

    #[test]
    fn test_range_last_page_is_short() {
        let p = calculate_pagination(30, 3, 12);
        assert_eq!(p.range(30, 12), 24..30);
        assert_eq!(calculate_pagination(0, 1, 12).range(0, 12), 0..0);
    }
}
