//! The derived view pipeline: visible columns -> search -> sort -> paginate.

use super::item::{Column, TableRow};
use super::page::{paginate, total_pages};
use super::search::{SearchMode, filter_by_search_with};
use super::sort::{SortState, sort_rows};

/// Inputs to [`derive`] besides the columns and rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DeriveParams {
    pub search: String,
    pub search_mode: SearchMode,
    pub sort: SortState,
    pub page_size: Option<usize>,
    pub current_page: usize,
}

impl Default for DeriveParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            search_mode: SearchMode::default(),
            sort: SortState::none(),
            page_size: None,
            current_page: 1,
        }
    }
}

/// What a table renders.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a, T> {
    /// Visible columns in order
    pub visible_columns: Vec<&'a Column>,
    /// Rows of the current page
    pub rows: Vec<&'a T>,
    /// Rows passing the search, across all pages
    pub filtered_count: usize,
    /// Page count for the filtered rows
    pub total_pages: usize,
}

impl<T> TableView<'_, T> {
    /// Check if the current page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Derive the rendered view from columns, rows and table state.
///
/// Sorting only sees rows that passed the search, and pagination runs last
/// so `total_pages` reflects the filtered count.
pub fn derive<'a, T: TableRow>(
    columns: &'a [Column],
    rows: &'a [T],
    params: &DeriveParams,
) -> TableView<'a, T> {
    let visible_columns: Vec<&Column> = columns.iter().filter(|c| c.visible).collect();

    let searched = filter_by_search_with(
        rows.iter().collect(),
        columns,
        &params.search,
        params.search_mode,
    );
    let sorted = sort_rows(searched, &params.sort, columns);

    let filtered_count = sorted.len();
    let total_pages = total_pages(filtered_count, params.page_size);
    let page = paginate(sorted, params.page_size, params.current_page);

    log::trace!(
        "derived table view: {} of {} rows, page {}/{}",
        page.len(),
        rows.len(),
        params.current_page,
        total_pages
    );

    TableView {
        visible_columns,
        rows: page,
        filtered_count,
        total_pages,
    }
}
