//! Table engine: owns rows, columns and per-slice table state.

use std::collections::HashMap;

use log::{debug, warn};

use crate::state::Slot;

use super::error::TableError;
use super::expansion::Expansion;
use super::item::{Column, TableRow, apply_visibility, row_identity};
use super::pipeline::{DeriveParams, TableView, derive};
use super::search::{SearchFilter, SearchMode};
use super::selection::{Selection, SelectionMode, SelectionSummary};
use super::sort::{SortDirection, SortState};

/// Check that every row identity is unique.
pub fn validate_row_ids<T: TableRow>(rows: &[T]) -> Result<(), TableError> {
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let id = row_identity(row, index);
        if let Some(&first) = seen.get(&id) {
            return Err(TableError::DuplicateRowId {
                id,
                first,
                second: index,
            });
        }
        seen.insert(id, index);
    }
    Ok(())
}

/// Search, sort, selection, expansion and pagination over in-memory rows.
///
/// Each piece of state lives in a [`Slot`], so any of them can be owned by
/// the engine or controlled by the caller independently of the others.
/// Derivation is pure: [`TableEngine::view`] recomputes from scratch.
///
/// # Examples
///
/// ```
/// use tabula::table::{Column, Record, SortDirection, TableEngine};
///
/// let rows = vec![
///     Record::with_id("a").set("name", "Cardano").set("price", 0.45),
///     Record::with_id("b").set("name", "Bitcoin").set("price", 64000),
///     Record::with_id("c").set("name", "Avalanche").set("price", 28),
/// ];
/// let mut table = TableEngine::new(vec![
///     Column::new("name", "Name").sortable(),
///     Column::new("price", "Price").sortable(),
/// ])
/// .with_rows(rows)
/// .with_page_size(2);
///
/// table.set_sort(Some("price"), Some(SortDirection::Desc));
/// let view = table.view();
/// assert_eq!(view.total_pages, 2);
/// assert_eq!(view.rows[0].id.as_deref(), Some("b"));
/// ```
#[derive(Debug)]
pub struct TableEngine<T: TableRow> {
    columns: Vec<Column>,
    rows: Vec<T>,
    selection_mode: SelectionMode,
    allow_multiple_expanded: bool,
    search_mode: SearchMode,
    page_size: Option<usize>,
    search: Slot<String>,
    sort: Slot<SortState>,
    selection: Slot<Selection>,
    expansion: Slot<Expansion>,
    page: Slot<usize>,
}

impl<T: TableRow> TableEngine<T> {
    /// Create an empty table with column definitions.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            selection_mode: SelectionMode::default(),
            allow_multiple_expanded: true,
            search_mode: SearchMode::default(),
            page_size: None,
            search: Slot::default(),
            sort: Slot::default(),
            selection: Slot::default(),
            expansion: Slot::default(),
            page: Slot::owned(1),
        }
    }

    /// Set the initial rows.
    pub fn with_rows(mut self, rows: Vec<T>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Set the selection mode.
    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Allow or forbid more than one expanded row.
    pub fn with_multiple_expanded(mut self, allow: bool) -> Self {
        self.allow_multiple_expanded = allow;
        self
    }

    /// Set how searches match cells.
    pub fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    /// Enable client-side paging.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Use a custom search slot (e.g. a controlled one).
    pub fn with_search(mut self, slot: Slot<String>) -> Self {
        self.search = slot;
        self
    }

    /// Use a custom sort slot.
    pub fn with_sort(mut self, slot: Slot<SortState>) -> Self {
        self.sort = slot;
        self
    }

    /// Use a custom selection slot.
    pub fn with_selection(mut self, slot: Slot<Selection>) -> Self {
        self.selection = slot;
        self
    }

    /// Use a custom expansion slot.
    pub fn with_expansion(mut self, slot: Slot<Expansion>) -> Self {
        self.expansion = slot;
        self
    }

    /// Use a custom current-page slot.
    pub fn with_page(mut self, slot: Slot<usize>) -> Self {
        self.page = slot;
        self
    }

    // -------------------------------------------------------------------------
    // Columns and rows
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Set the column definitions.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    /// Apply an external column visibility map.
    pub fn set_column_visibility(&mut self, visibility: &HashMap<String, bool>) {
        apply_visibility(&mut self.columns, visibility);
    }

    /// Get all rows.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace all rows, rejecting duplicate identities.
    pub fn try_set_rows(&mut self, rows: Vec<T>) -> Result<(), TableError> {
        validate_row_ids(&rows)?;
        self.rows = rows;
        Ok(())
    }

    /// Replace all rows.
    ///
    /// Duplicate identities panic in debug builds. Release builds log a
    /// warning and keep the rows; selection and expansion then alias them.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        if let Err(err) = validate_row_ids(&rows) {
            if cfg!(debug_assertions) {
                panic!("{err}");
            }
            warn!("{err}");
        }
        self.rows = rows;
    }

    /// Identities of all rows, in order.
    pub fn row_ids(&self) -> Vec<String> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| row_identity(row, index))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Current search string, untrimmed.
    pub fn search(&self) -> String {
        self.search.get()
    }

    /// Set the search string.
    pub fn set_search(&mut self, value: impl Into<String>) {
        let value = value.into();
        debug!("table search -> {:?}", value);
        self.search.set(value);
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get current sort state.
    pub fn sort(&self) -> SortState {
        self.sort.get()
    }

    /// Replace the sort state.
    pub fn set_sort(&mut self, column_id: Option<&str>, direction: Option<SortDirection>) {
        let state = SortState {
            column_id: column_id.map(str::to_string),
            direction,
        };
        debug!("table sort -> {:?}", state);
        self.sort.set(state);
    }

    /// Advance the header click cycle for a column.
    ///
    /// Only sortable columns respond; others return `None`. Otherwise returns
    /// the sort state read back after the write, which a controlled slot may
    /// have left unchanged.
    pub fn toggle_sort(&mut self, column_id: &str) -> Option<SortState> {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.id == column_id && c.sortable);
        if !sortable {
            return None;
        }
        let next = self.sort.get().toggled(column_id);
        debug!("table sort -> {:?}", next);
        self.sort.set(next);
        Some(self.sort.get())
    }

    /// Clear sort state.
    pub fn clear_sort(&mut self) {
        self.sort.set(SortState::none());
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get the selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    /// Get the selection state.
    pub fn selection(&self) -> Selection {
        self.selection.get()
    }

    /// Check if a row is selected by ID.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.get().is_selected(id)
    }

    /// Select or deselect a row by ID.
    pub fn select_row(&mut self, id: &str, selected: bool) {
        if self.selection_mode == SelectionMode::None {
            return;
        }
        let mode = self.selection_mode;
        debug!("table select {:?} -> {}", id, selected);
        self.selection.update(|s| s.set(mode, id, selected));
    }

    /// Select every row in the table, or clear the selection.
    ///
    /// This covers the full row set, not just rows passing the search. Use
    /// [`select_all_visible`](Self::select_all_visible) for that. Selecting
    /// all only applies in `Multiple` mode; clearing works in any mode.
    pub fn select_all(&mut self, selected: bool) {
        if selected && self.selection_mode != SelectionMode::Multiple {
            return;
        }
        let ids = if selected { self.row_ids() } else { Vec::new() };
        debug!("table select all -> {} rows", ids.len());
        self.selection.update(|s| s.select_all(ids));
    }

    /// Select or deselect every row passing the current search.
    ///
    /// Selection outside the search result is left as it is. Selecting only
    /// applies in `Multiple` mode.
    pub fn select_all_visible(&mut self, selected: bool) {
        if self.selection_mode == SelectionMode::None
            || (selected && self.selection_mode != SelectionMode::Multiple)
        {
            return;
        }
        let ids = self.searched_ids();
        let mode = self.selection_mode;
        debug!("table select visible -> {} rows, {}", ids.len(), selected);
        self.selection.update(|s| {
            for id in &ids {
                s.set(mode, id, selected);
            }
        });
    }

    /// Header checkbox state against the full row count.
    ///
    /// Only selected IDs that name a current row are counted, so IDs left
    /// over from replaced rows do not skew the header.
    pub fn selection_summary(&self) -> SelectionSummary {
        SelectionSummary::new(self.selected_rows().len(), self.rows.len())
    }

    /// Get all selected rows, in table order.
    pub fn selected_rows(&self) -> Vec<&T> {
        let selection = self.selection.get();
        self.rows
            .iter()
            .enumerate()
            .filter(|(index, row)| selection.is_selected(&row_identity(*row, *index)))
            .map(|(_, row)| row)
            .collect()
    }

    fn searched_ids(&self) -> Vec<String> {
        let search = self.search.get();
        let mut filter = SearchFilter::new(&self.columns, &search, self.search_mode);
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| filter.as_mut().is_none_or(|f| f.matches(*row)))
            .map(|(index, row)| row_identity(row, index))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Expansion
    // -------------------------------------------------------------------------

    /// Get the expansion state.
    pub fn expansion(&self) -> Expansion {
        self.expansion.get()
    }

    /// Check if a row is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.get().is_expanded(id)
    }

    /// Expand or collapse a row.
    pub fn expand_row(&mut self, id: &str, expanded: bool) {
        let allow_multiple = self.allow_multiple_expanded;
        debug!("table expand {:?} -> {}", id, expanded);
        self.expansion.update(|e| e.set(id, expanded, allow_multiple));
    }

    /// Flip a row between expanded and collapsed.
    pub fn toggle_row_expanded(&mut self, id: &str) {
        let expanded = self.is_expanded(id);
        self.expand_row(id, !expanded);
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Current page (1-based).
    pub fn current_page(&self) -> usize {
        self.page.get()
    }

    /// Change the current page.
    ///
    /// No bounds are checked: page 0 and pages past the end are stored and
    /// derive an empty page.
    pub fn change_page(&mut self, page: usize) {
        debug!("table page -> {}", page);
        self.page.set(page);
    }

    /// Get the page size.
    pub fn page_size(&self) -> Option<usize> {
        self.page_size
    }

    /// Set or clear the page size.
    pub fn set_page_size(&mut self, size: Option<usize>) {
        self.page_size = size;
    }

    // -------------------------------------------------------------------------
    // View
    // -------------------------------------------------------------------------

    /// Inputs for [`derive`] from the current state.
    pub fn params(&self) -> DeriveParams {
        DeriveParams {
            search: self.search.get(),
            search_mode: self.search_mode,
            sort: self.sort.get(),
            page_size: self.page_size,
            current_page: self.page.get(),
        }
    }

    /// Derive the rendered view from the current state.
    pub fn view(&self) -> TableView<'_, T> {
        derive(&self.columns, &self.rows, &self.params())
    }
}
