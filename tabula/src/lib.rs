pub mod pagination;
pub mod state;
pub mod table;
pub mod theme;

pub mod prelude {
    pub use crate::pagination::{PageItem, PageWindow, PaginationModel, page_window};
    pub use crate::state::{Slot, State};
    pub use crate::table::{
        CellValue, Column, Record, SearchMode, Selection, SelectionMode, SelectionSummary,
        SortDirection, SortState, TableEngine, TableError, TableRow, TableView,
    };
    pub use crate::theme::{
        DesignTokens, ThemeError, ThemeMode, ThemePreference, ThemeProvider, ThemeStorage,
    };
}
