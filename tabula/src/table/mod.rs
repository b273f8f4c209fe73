//! Table data engine.
//!
//! Rows are searched, sorted and paged through a fixed pipeline
//! (visible columns -> search -> sort -> paginate). The pipeline steps are
//! plain functions over row references, usable on their own; [`TableEngine`]
//! ties them to search, sort, selection, expansion and page state.

mod engine;
mod error;
mod expansion;
mod item;
mod page;
mod pipeline;
mod search;
mod selection;
mod sort;
mod value;

pub use engine::{TableEngine, validate_row_ids};
pub use error::TableError;
pub use expansion::Expansion;
pub use item::{Column, Record, TableRow, apply_visibility, row_identity};
pub use page::{paginate, total_pages};
pub use pipeline::{DeriveParams, TableView, derive};
pub use search::{SearchMode, filter_by_search, filter_by_search_with};
pub use selection::{Selection, SelectionMode, SelectionSummary};
pub use sort::{SortDirection, SortState, compare_cells, sort_rows};
pub use value::{CellValue, locale_compare};
