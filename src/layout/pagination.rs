//! Pagination planning and page navigation
//!
//! A `PaginationPlan` turns a total item count and a per-page capacity into
//! page boundaries. `PageCursor` tracks the active page on top of a plan and
//! keeps navigation inside bounds.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Page split for a content size and layout capacity
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationPlan {
    pub items_per_page: usize,
    pub total_pages: usize,
    pub enable_pagination: bool,

    /// Number of items the plan was computed for
    pub total_items: usize,
}

impl PaginationPlan {
    pub fn new(total_items: usize, capacity: usize) -> Self {
        let items_per_page = capacity.max(1);
        let total_pages = total_items.div_ceil(items_per_page);

        Self {
            items_per_page,
            total_pages,
            enable_pagination: total_pages > 1,
            total_items,
        }
    }

    /// Plan with an explicit items-per-page override (e.g. from the activity
    /// URL) taking precedence over the layout capacity
    pub fn with_override(total_items: usize, capacity: usize, items_per_page: Option<usize>) -> Self {
        match items_per_page {
            Some(forced) => Self::new(total_items, forced),
            None => Self::new(total_items, capacity),
        }
    }

    /// Clamp a page index to the valid range (0 for an empty plan)
    pub fn clamp_page(&self, page: usize) -> usize {
        page.min(self.total_pages.saturating_sub(1))
    }

    /// Item indices shown on `page`; out-of-range pages clamp to the last one
    pub fn page_range(&self, page: usize) -> Range<usize> {
        if self.total_items == 0 {
            return 0..0;
        }
        let page = self.clamp_page(page);
        let start = page * self.items_per_page;
        let end = start.saturating_add(self.items_per_page).min(self.total_items);
        start..end
    }

    /// Slice of `items` shown on `page`.
    ///
    /// The slice is additionally bounded by `items.len()` in case the caller
    /// passes fewer items than the plan was built for.
    pub fn page_slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let range = self.page_range(page);
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// Page containing item `index`
    pub fn page_of_item(&self, index: usize) -> usize {
        self.clamp_page(index / self.items_per_page)
    }
}

/// Active page on top of a `PaginationPlan`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageCursor {
    plan: PaginationPlan,
    current: usize,
}

impl PageCursor {
    pub fn new(plan: PaginationPlan) -> Self {
        Self { plan, current: 0 }
    }

    pub fn plan(&self) -> &PaginationPlan {
        &self.plan
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.plan.total_pages
    }

    /// Advance one page; returns false when already on the last page
    pub fn next(&mut self) -> bool {
        self.go_to(self.current + 1)
    }

    /// Go back one page; returns false when already on the first page
    pub fn prev(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(page) => self.go_to(page),
            None => false,
        }
    }

    /// Jump to `page`, clamped; returns whether the active page changed
    pub fn go_to(&mut self, page: usize) -> bool {
        let target = self.plan.clamp_page(page);
        let changed = target != self.current;
        self.current = target;
        changed
    }

    pub fn visible_range(&self) -> Range<usize> {
        self.plan.page_range(self.current)
    }

    /// "current/total" text for the page indicator, 1-based
    pub fn indicator(&self) -> String {
        format!("{}/{}", self.current + 1, self.plan.total_pages.max(1))
    }

    /// Swap in a plan recomputed after a resize, keeping the first visible
    /// item on screen
    pub fn replan(&mut self, plan: PaginationPlan) {
        let first_visible = self.visible_range().start;
        self.plan = plan;
        self.current = plan.page_of_item(first_visible);
    }
}
