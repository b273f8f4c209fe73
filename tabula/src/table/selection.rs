//! Selection state for table rows.
//!
//! Selection tracks row identities rather than positions, so it survives
//! sorting, searching and paging.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Selection mode for a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// No selection allowed
    None,
    /// At most one row selected
    Single,
    /// Any number of rows selected
    #[default]
    Multiple,
}

/// ID-based selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    selected: HashSet<String>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection from a set of IDs.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Get all selected IDs (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an ID is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear all selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Select or deselect one ID under the given mode.
    ///
    /// In `Single` mode selecting clears everything else first. Deselecting
    /// always just removes the ID. `None` mode ignores the call.
    pub fn set(&mut self, mode: SelectionMode, id: &str, selected: bool) {
        match (mode, selected) {
            (SelectionMode::None, _) => {}
            (_, false) => {
                self.selected.remove(id);
            }
            (SelectionMode::Single, true) => {
                self.selected.clear();
                self.selected.insert(id.to_string());
            }
            (SelectionMode::Multiple, true) => {
                self.selected.insert(id.to_string());
            }
        }
    }

    /// Replace the selection with the given IDs.
    pub fn select_all<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.selected = ids.into_iter().collect();
    }

    /// Derived checkbox state against a total row count.
    pub fn summary(&self, total_rows: usize) -> SelectionSummary {
        SelectionSummary::new(self.selected.len(), total_rows)
    }
}

/// Header checkbox state derived from a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSummary {
    /// Number of selected IDs
    pub count: usize,
    /// Every row is selected (and there is at least one row)
    pub all_selected: bool,
    /// Some but not all rows are selected
    pub indeterminate: bool,
}

impl SelectionSummary {
    pub fn new(count: usize, total_rows: usize) -> Self {
        Self {
            count,
            all_selected: total_rows > 0 && count == total_rows,
            indeterminate: count > 0 && count < total_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_mode_keeps_latest() {
        let mut selection = Selection::new();
        selection.set(SelectionMode::Single, "a", true);
        selection.set(SelectionMode::Single, "b", true);
        assert_eq!(selection.selected(), vec!["b".to_string()]);
    }

    #[test]
    fn test_none_mode_ignores() {
        let mut selection = Selection::new();
        selection.set(SelectionMode::None, "a", true);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            SelectionSummary::new(0, 0),
            SelectionSummary { count: 0, all_selected: false, indeterminate: false }
        );
        assert!(SelectionSummary::new(3, 3).all_selected);
        assert!(SelectionSummary::new(1, 3).indeterminate);
        assert!(!SelectionSummary::new(3, 3).indeterminate);
    }
}
