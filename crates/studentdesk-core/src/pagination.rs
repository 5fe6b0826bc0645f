//! Pagination utilities for in-memory collections.
//!
//! All functions here are pure: they take counts and positions and return
//! new values. Pages are 1-indexed.
//!
//! # Page arithmetic
//!
//! - `total_pages = max(1, ceil(total_items / items_per_page))`
//! - a requested page is clamped into `[1, total_pages]`
//! - the slice for page `p` covers indexes `[(p - 1) * per_page, p * per_page)`,
//!   clamped to the collection bounds
//!
//! An empty collection is not an error: it has one (empty) page, and the
//! caller is expected to render an empty state instead of page controls.
//!
//! # Page buttons
//!
//! [`page_window`] lays out the page buttons around the current page:
//!
//! ```text
//! current = 5, total = 10   ->   1 … 4 5 6 … 10
//! current = 1, total = 10   ->   1 2 3 … 10
//! current = 2, total = 3    ->   1 2 3
//! ```

use serde::{Deserialize, Serialize};

/// Number of consecutive page buttons shown around the current page.
pub const WINDOW_SIZE: usize = 3;

/// A single entry in the page-button bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "page", rename_all = "snake_case")]
pub enum PageItem {
    /// A button for the given page number.
    Page(usize),
    /// A gap marker standing for one or more hidden pages.
    Ellipsis,
}

/// Returns the number of pages needed for `total_items`.
///
/// Always at least 1. An `items_per_page` of 0 is treated as 1.
#[must_use]
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    let per_page = items_per_page.max(1);
    total_items.div_ceil(per_page).max(1)
}

/// Clamps `page` into `[1, total_pages]`.
#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Returns the items shown on `page`.
///
/// Out-of-range pages yield an empty slice rather than panicking.
#[must_use]
pub fn slice_page<T>(items: &[T], page: usize, items_per_page: usize) -> &[T] {
    let per_page = items_per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(per_page).min(items.len());
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// Computes the page-button layout for `current` out of `total_pages`.
///
/// A window of at most [`WINDOW_SIZE`] pages is centred on the current page
/// and shifted to stay inside `[1, total_pages]`. The first and last pages
/// are always reachable; an [`PageItem::Ellipsis`] separates them from the
/// window whenever at least one page is hidden in between.
#[must_use]
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageItem> {
    let total = total_pages.max(1);
    if total <= WINDOW_SIZE {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = clamp_page(current, total);
    let half = WINDOW_SIZE / 2;
    let mut start = current.saturating_sub(half).max(1);
    let mut end = start + WINDOW_SIZE - 1;
    if end > total {
        end = total;
        start = total + 1 - WINDOW_SIZE;
    }

    let mut items = Vec::with_capacity(WINDOW_SIZE + 4);

    if start > 1 {
        items.push(PageItem::Page(1));
        if start > 2 {
            items.push(PageItem::Ellipsis);
        }
    }

    items.extend((start..=end).map(PageItem::Page));

    if end < total {
        if end < total - 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(total));
    }

    items
}

/// Current position in a paginated list.
///
/// The page is only ever clamped down: when the item count or page size
/// shrinks so that `current_page` falls past the last page, it moves to the
/// last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    current_page: usize,
    items_per_page: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: 10,
        }
    }
}

impl PaginationState {
    #[must_use]
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Requests `page` and `items_per_page`, clamped against `total_items`.
    pub fn set(&mut self, page: usize, items_per_page: usize, total_items: usize) {
        self.items_per_page = items_per_page.max(1);
        self.current_page = page.max(1);
        self.clamp_to(total_items);
    }

    /// Returns to the first page.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Clamps the current page against the given item count.
    pub fn clamp_to(&mut self, total_items: usize) {
        let pages = self.total_pages(total_items);
        self.current_page = clamp_page(self.current_page, pages);
    }

    #[must_use]
    pub fn total_pages(&self, total_items: usize) -> usize {
        total_pages(total_items, self.items_per_page)
    }

    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        slice_page(items, self.current_page, self.items_per_page)
    }

    #[must_use]
    pub fn window(&self, total_items: usize) -> Vec<PageItem> {
        page_window(self.current_page, self.total_pages(total_items))
    }
}
