// src/shared/view/pagination.rs
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Page size used when a caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Page cursor over a collection of `total` items. Pages are 1-indexed and
/// the current page is always kept within `[1, max(total_pages, 1)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    current_page: usize,
    total: usize,
}

impl Pagination {
    /// A zero page size is treated as 1.
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            total,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// `ceil(total / page_size)`
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }

    pub fn next(&mut self) {
        self.go_to_page(self.current_page.saturating_add(1));
    }

    pub fn previous(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.last_page());
    }

    /// Back to page 1; used whenever filter inputs change.
    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }

    /// Adopts a new collection length, keeping the current page in range.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.go_to_page(self.current_page);
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Index range of the current page within the collection.
    pub fn current_range(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    pub fn current_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.current_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }
}

/// One page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T: Clone> Page<T> {
    /// Slices `items` at `page` (clamped) and clones that page out.
    pub fn slice(items: &[&T], page: usize, per_page: usize) -> Self {
        let mut pagination = Pagination::new(items.len(), per_page);
        pagination.go_to_page(page);

        Page {
            items: pagination
                .current_items(items)
                .iter()
                .map(|item| (*item).clone())
                .collect(),
            page: pagination.current_page(),
            per_page: pagination.page_size(),
            total: pagination.total(),
            total_pages: pagination.total_pages(),
        }
    }
}
