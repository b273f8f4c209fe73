//! Pagination bar support.

mod window;

pub use window::{
    DEFAULT_BOUNDARY_COUNT, DEFAULT_SIBLING_COUNT, PageItem, PageWindow, page_window,
};

use serde::{Deserialize, Serialize};

/// Current position in a paged range, as shown by a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationModel {
    pub current_page: usize,
    pub total_pages: usize,
    pub window: PageWindow,
}

impl PaginationModel {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages: total_pages.max(1),
            window: PageWindow::default(),
        }
    }

    pub fn with_window(mut self, window: PageWindow) -> Self {
        self.window = window;
        self
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Previous page, if any.
    pub fn previous(&self) -> Option<usize> {
        self.has_previous()
            .then(|| (self.current_page - 1).min(self.total_pages))
    }

    /// Next page, if any.
    pub fn next(&self) -> Option<usize> {
        self.has_next().then(|| self.current_page.max(1) + 1)
    }

    /// Items to render.
    pub fn items(&self) -> Vec<PageItem> {
        self.window.items(self.current_page, self.total_pages)
    }
}
