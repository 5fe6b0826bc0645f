//! The student list state machine.
//!
//! The displayed page is always `slice(sort(filter(records)))`. Each event
//! only redoes the stages downstream of what it changed:
//!
//! | Event                 | filter | sort | slice |
//! |-----------------------|--------|------|-------|
//! | `on_records_loaded`   | yes    | yes  | yes   |
//! | `on_search`           | yes    | yes  | yes (back to page 1) |
//! | `on_sort_change`      |        | yes  | yes   |
//! | `on_page_change`      |        |      | yes   |
//!
//! The current page is clamped after every recomputation.

use serde::Serialize;
use studentdesk_config::ListConfig;
use studentdesk_core::{AppError, PageItem, PaginationState};
use studentdesk_models::{SortConfig, Student, StudentId};
use tracing::debug;

use super::query::{filter_students, is_blank};
use super::sorter::sort_students;
use crate::utils::notifications::Notifier;

#[derive(Debug, Clone)]
pub struct StudentListController {
    records: Vec<Student>,
    /// Records passing the current query, in load order.
    filtered: Vec<Student>,
    /// `filtered` ordered by `sort`.
    sorted: Vec<Student>,
    query: String,
    sort: SortConfig,
    pagination: PaginationState,
    loaded: bool,
}

/// What the list shows right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListView<'a> {
    pub items: &'a [Student],
    pub query: &'a str,
    pub sort: SortConfig,
    pub current_page: usize,
    pub items_per_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub window: Vec<PageItem>,
    pub loaded: bool,
}

impl ListView<'_> {
    /// Nothing to show; the page control is hidden in this case.
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// One-based positions of the first and last item on the page.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.current_page - 1) * self.items_per_page + 1;
        Some((first, first + self.items.len() - 1))
    }
}

impl Default for StudentListController {
    fn default() -> Self {
        Self::new(&ListConfig::default())
    }
}

impl StudentListController {
    pub fn new(config: &ListConfig) -> Self {
        Self {
            records: Vec::new(),
            filtered: Vec::new(),
            sorted: Vec::new(),
            query: String::new(),
            sort: SortConfig::default(),
            pagination: PaginationState::new(config.default_per_page),
            loaded: false,
        }
    }

    /// Replaces the loaded collection, keeping query, sort and page.
    pub fn on_records_loaded(&mut self, records: Vec<Student>) {
        debug!(count = records.len(), "Records loaded");
        self.records = records;
        self.loaded = true;
        self.refilter();
    }

    /// Applies a new query and returns to the first page.
    pub fn on_search(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.pagination.reset();
        self.refilter();
    }

    /// Re-sorts the current filtered set with a new configuration.
    pub fn on_sort_change(&mut self, sort: SortConfig) {
        self.sort = sort;
        self.resort();
    }

    pub fn on_page_change(&mut self, page: usize, items_per_page: usize) {
        self.pagination
            .set(page, items_per_page, self.sorted.len());
    }

    /// Reports a failed load and keeps whatever is currently displayed.
    pub fn on_load_failed(&self, err: &AppError, notifier: &Notifier) {
        notifier.report(err);
    }

    pub fn next_page(&mut self) {
        let page = self.pagination.current_page() + 1;
        self.on_page_change(page, self.pagination.items_per_page());
    }

    pub fn prev_page(&mut self) {
        let page = self.pagination.current_page().saturating_sub(1);
        self.on_page_change(page, self.pagination.items_per_page());
    }

    fn refilter(&mut self) {
        self.filtered = filter_students(&self.records, &self.query);
        self.resort();
    }

    fn resort(&mut self) {
        self.sorted = sort_students(&self.filtered, self.sort);
        self.pagination.clamp_to(self.sorted.len());
    }

    pub fn view(&self) -> ListView<'_> {
        let total_items = self.sorted.len();
        ListView {
            items: self.pagination.slice(&self.sorted),
            query: &self.query,
            sort: self.sort,
            current_page: self.pagination.current_page(),
            items_per_page: self.pagination.items_per_page(),
            total_pages: self.pagination.total_pages(total_items),
            total_items,
            window: self.pagination.window(total_items),
            loaded: self.loaded,
        }
    }

    /// Records currently on screen.
    pub fn displayed(&self) -> &[Student] {
        self.pagination.slice(&self.sorted)
    }

    /// The full loaded collection, unfiltered.
    pub fn records(&self) -> &[Student] {
        &self.records
    }

    pub fn find(&self, id: &StudentId) -> Option<&Student> {
        self.records.iter().find(|s| &s.id == id)
    }

    /// A record by its one-based position on the current page.
    pub fn at_position(&self, position: usize) -> Option<&Student> {
        position
            .checked_sub(1)
            .and_then(|idx| self.displayed().get(idx))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn has_filter(&self) -> bool {
        !is_blank(&self.query)
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
