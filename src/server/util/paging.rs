//! Page arithmetic for listings paged in the store with OFFSET/LIMIT.
//!
//! Pages are 1-based. Page `p` of a listing with `total` rows holds
//! `min(page_size, total - page_size * (p - 1))` rows; page 0 and pages past the
//! last one hold none.

/// Window of rows to fetch for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

/// Number of pages needed for `total` rows, `ceil(total / page_size)`.
pub fn number_of_pages(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Row window for `page_id`, or `None` when the page is out of range.
pub fn page_window(total: u64, page_size: u64, page_id: u64) -> Option<PageWindow> {
    if page_id == 0 || page_id > number_of_pages(total, page_size) {
        return None;
    }

    let offset = page_size * (page_id - 1);
    Some(PageWindow {
        offset,
        limit: page_size.min(total - offset),
    })
}
