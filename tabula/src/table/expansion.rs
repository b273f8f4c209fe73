//! Expanded-row state.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Set of expanded row IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expansion {
    expanded: HashSet<String>,
}

impl Expansion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a row is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Expanded IDs, sorted.
    pub fn expanded(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.expanded.iter().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Expand or collapse a row.
    ///
    /// Without `allow_multiple`, expanding a row collapses every other row.
    pub fn set(&mut self, id: &str, expanded: bool, allow_multiple: bool) {
        if !expanded {
            self.expanded.remove(id);
            return;
        }
        if !allow_multiple {
            self.expanded.clear();
        }
        self.expanded.insert(id.to_string());
    }
}
