//! TableRow trait and Column types for table data.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::value::CellValue;

/// Column configuration.
///
/// Column order is significant: it is the render order and the order cells
/// are searched in.
///
/// # Examples
///
/// ```
/// use tabula::table::Column;
///
/// let columns = vec![
///     Column::new("name", "Name").sortable(),
///     Column::new("price", "Price").sortable(),
///     Column::new("notes", "Notes").hidden(),
/// ];
/// assert!(columns[0].sortable);
/// assert!(!columns[2].visible);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column id, unique within a column set
    pub id: String,
    /// Column header text
    pub header: String,
    /// Whether this column is sortable
    pub sortable: bool,
    /// Whether this column is shown (and searched)
    pub visible: bool,
}

impl Column {
    /// Create a new visible, non-sortable column.
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            sortable: false,
            visible: true,
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Hide the column.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Apply an external visibility map to a column set.
///
/// Columns missing from the map keep their own `visible` flag.
pub fn apply_visibility(columns: &mut [Column], visibility: &HashMap<String, bool>) {
    for column in columns {
        if let Some(&visible) = visibility.get(&column.id) {
            column.visible = visible;
        }
    }
}

/// Trait for items that can be displayed as rows in a table.
///
/// # Examples
///
/// ```
/// use tabula::table::{CellValue, TableRow};
///
/// #[derive(Clone)]
/// struct Coin {
///     symbol: String,
///     price: f64,
/// }
///
/// impl TableRow for Coin {
///     fn id(&self) -> Option<String> {
///         Some(self.symbol.clone())
///     }
///
///     fn cell(&self, column_id: &str) -> CellValue {
///         match column_id {
///             "symbol" => self.symbol.as_str().into(),
///             "price" => self.price.into(),
///             _ => CellValue::Null,
///         }
///     }
/// }
/// ```
pub trait TableRow {
    /// Stable identifier for this row.
    ///
    /// Rows without one are identified by their position in the full row set.
    fn id(&self) -> Option<String>;

    /// Value of the cell in the given column. Unknown columns read as null.
    fn cell(&self, column_id: &str) -> CellValue;
}

/// Identity of a row: its own id, or its position rendered as a string.
pub fn row_identity<T: TableRow>(row: &T, index: usize) -> String {
    row.id().unwrap_or_else(|| index.to_string())
}

/// A generic row backed by a map of cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub cells: HashMap<String, CellValue>,
}

impl Record {
    /// Create an empty record without an id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record with an id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            cells: HashMap::new(),
        }
    }

    /// Set a cell value.
    pub fn set(mut self, column_id: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(column_id.into(), value.into());
        self
    }
}

impl TableRow for Record {
    fn id(&self) -> Option<String> {
        self.id.clone()
    }

    fn cell(&self, column_id: &str) -> CellValue {
        self.cells.get(column_id).cloned().unwrap_or_default()
    }
}

impl<T: TableRow + ?Sized> TableRow for &T {
    fn id(&self) -> Option<String> {
        (**self).id()
    }

    fn cell(&self, column_id: &str) -> CellValue {
        (**self).cell(column_id)
    }
}
