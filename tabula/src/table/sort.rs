//! Single-column sorting.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::item::{Column, TableRow};
use super::value::CellValue;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Next direction in the header click cycle: none -> asc -> desc -> none.
    pub fn cycle(current: Option<SortDirection>) -> Option<SortDirection> {
        match current {
            None => Some(SortDirection::Asc),
            Some(SortDirection::Asc) => Some(SortDirection::Desc),
            Some(SortDirection::Desc) => None,
        }
    }
}

/// Current sort: at most one column, replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column_id: Option<String>,
    pub direction: Option<SortDirection>,
}

impl SortState {
    /// Unsorted state.
    pub fn none() -> Self {
        Self::default()
    }

    /// Sort by a column in the given direction.
    pub fn by(column_id: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column_id: Some(column_id.into()),
            direction: Some(direction),
        }
    }

    /// The active column and direction, if both are set.
    pub fn active(&self) -> Option<(&str, SortDirection)> {
        match (&self.column_id, self.direction) {
            (Some(id), Some(direction)) => Some((id.as_str(), direction)),
            _ => None,
        }
    }

    /// The state after clicking a column header.
    ///
    /// Clicking the sorted column advances its direction; clicking any other
    /// column starts it ascending. Reaching the end of the cycle clears the
    /// column as well.
    pub fn toggled(&self, column_id: &str) -> Self {
        let current = match self.active() {
            Some((id, direction)) if id == column_id => Some(direction),
            _ => None,
        };
        match SortDirection::cycle(current) {
            Some(direction) => Self::by(column_id, direction),
            None => Self::none(),
        }
    }
}

/// Compare two cells in the given direction.
///
/// Nulls are always last, whatever the direction.
pub fn compare_cells(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = a.compare_defined(b);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
    }
}

/// Whether the non-null values hold more than one kind of value.
///
/// A mixed column sorts every value by its string form, so that a number
/// and a string never compare one way while two numbers compare another.
fn is_mixed<'v>(values: impl Iterator<Item = &'v CellValue>) -> bool {
    let mut kinds = values
        .filter(|value| !value.is_null())
        .map(std::mem::discriminant);
    match kinds.next() {
        Some(first) => kinds.any(|kind| kind != first),
        None => false,
    }
}

/// Sort rows by the active sort column.
///
/// Returns `rows` as given when nothing is sorted or the column is not in
/// `columns`. The sort is stable. Numbers and booleans compare by value only
/// when the whole column holds that kind.
pub fn sort_rows<'a, T: TableRow>(
    rows: Vec<&'a T>,
    sort: &SortState,
    columns: &[Column],
) -> Vec<&'a T> {
    let Some((column_id, direction)) = sort.active() else {
        return rows;
    };
    if !columns.iter().any(|c| c.id == column_id) {
        return rows;
    }

    // Read each cell once rather than on every comparison
    let mut keyed: Vec<(CellValue, &'a T)> = rows
        .into_iter()
        .map(|row| (row.cell(column_id), row))
        .collect();
    if is_mixed(keyed.iter().map(|(value, _)| value)) {
        for (value, _) in &mut keyed {
            if let Some(text) = value.to_text() {
                *value = CellValue::Text(text);
            }
        }
    }
    keyed.sort_by(|(a, _), (b, _)| compare_cells(a, b, direction));
    keyed.into_iter().map(|(_, row)| row).collect()
}
