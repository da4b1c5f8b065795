use serde::{Deserialize, Serialize};

/// One page of a filtered, sorted listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> PaginatedResponse<T> {
    /// Slice `rows` down to `page` (1-based), clamping the page into range.
    pub fn paginate(rows: Vec<T>, page: usize, limit: usize) -> Self {
        let limit = limit.max(1);
        let total = rows.len();
        let total_pages = page_count(total, limit);
        let page = clamp_page(page, total_pages);
        let start = (page - 1) * limit;

        let data = rows.into_iter().skip(start).take(limit).collect();

        Self {
            data,
            meta: PaginationMeta {
                page,
                limit,
                total,
                total_pages,
                has_next: page < total_pages,
                has_prev: page > 1,
            },
        }
    }
}

/// `ceil(total / limit)`; zero when there is nothing to show.
pub fn page_count(total: usize, limit: usize) -> usize {
    let limit = limit.max(1);
    total.div_ceil(limit)
}

/// Clamp a requested page into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(12, 10), 2);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 0), 1);
    }

    #[test]
    fn clamp_page_bounds() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn paginate_second_page() {
        let rows: Vec<u32> = (1..=12).collect();
        let page = PaginatedResponse::paginate(rows, 2, 10);
        assert_eq!(page.data, vec![11, 12]);
        assert_eq!(page.meta.total_pages, 2);
        assert!(page.meta.has_prev);
        assert!(!page.meta.has_next);
    }

    #[test]
    fn paginate_empty_input() {
        let page = PaginatedResponse::<u32>::paginate(Vec::new(), 3, 10);
        assert!(page.data.is_empty());
        assert_eq!(page.meta.page, 1);
        assert_eq!(page.meta.total_pages, 0);
        assert!(!page.meta.has_next);
    }
}
