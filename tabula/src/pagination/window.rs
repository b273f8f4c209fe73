//! Page-number window for pagination bars.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One slot in a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageItem {
    /// A clickable page number.
    Page(usize),
    /// A run of elided pages.
    Ellipsis,
}

impl PageItem {
    /// The page number, if this is not an ellipsis.
    pub fn page(&self) -> Option<usize> {
        match self {
            Self::Page(page) => Some(*page),
            Self::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{}", page),
            Self::Ellipsis => f.write_str("…"),
        }
    }
}

/// Pages shown either side of the current page by default.
pub const DEFAULT_SIBLING_COUNT: usize = 1;
/// Pages shown at each end by default.
pub const DEFAULT_BOUNDARY_COUNT: usize = 1;

/// Build the page window for a pagination bar.
///
/// The first and last `boundary_count` pages are always present, as are
/// `sibling_count` pages either side of `current_page`. Overlapping blocks
/// merge. A gap of exactly one page shows that page; any longer gap,
/// including one before the first or after the last shown page, becomes a
/// single [`PageItem::Ellipsis`].
///
/// `total_pages` of 0 reads as 1, and `current_page` is clamped into
/// `1..=total_pages`.
///
/// # Examples
///
/// ```
/// use tabula::pagination::{PageItem::*, page_window};
///
/// assert_eq!(
///     page_window(5, 10, 1, 1),
///     vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
/// );
/// assert_eq!(
///     page_window(1, 5, 1, 1),
///     vec![Page(1), Page(2), Ellipsis, Page(5)]
/// );
/// ```
pub fn page_window(
    current_page: usize,
    total_pages: usize,
    sibling_count: usize,
    boundary_count: usize,
) -> Vec<PageItem> {
    let total = total_pages.max(1);
    if total == 1 {
        return vec![PageItem::Page(1)];
    }

    let current = current_page.clamp(1, total);
    let boundary = boundary_count.min(total);

    let mut shown = BTreeSet::new();
    shown.extend(1..=boundary);
    let first_sibling = current.saturating_sub(sibling_count).max(1);
    let last_sibling = current.saturating_add(sibling_count).min(total);
    shown.extend(first_sibling..=last_sibling);
    shown.extend(total - boundary + 1..=total);

    let mut items = Vec::with_capacity(shown.len() + 2);
    let mut previous = 0;
    for page in shown {
        push_gap(&mut items, previous, page);
        items.push(PageItem::Page(page));
        previous = page;
    }
    push_gap(&mut items, previous, total + 1);
    items
}

/// Fill the pages strictly between `after` and `before`.
fn push_gap(items: &mut Vec<PageItem>, after: usize, before: usize) {
    match before - after {
        0 | 1 => {}
        2 => items.push(PageItem::Page(after + 1)),
        _ => items.push(PageItem::Ellipsis),
    }
}

/// Sibling and boundary counts for a pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    pub sibling_count: usize,
    pub boundary_count: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            sibling_count: DEFAULT_SIBLING_COUNT,
            boundary_count: DEFAULT_BOUNDARY_COUNT,
        }
    }
}

impl PageWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn siblings(mut self, count: usize) -> Self {
        self.sibling_count = count;
        self
    }

    pub fn boundaries(mut self, count: usize) -> Self {
        self.boundary_count = count;
        self
    }

    /// Upper bound on the number of items produced.
    pub fn max_items(&self) -> usize {
        2 * self.boundary_count + 2 * self.sibling_count + 3
    }

    /// Build the window for a page.
    pub fn items(&self, current_page: usize, total_pages: usize) -> Vec<PageItem> {
        page_window(
            current_page,
            total_pages,
            self.sibling_count,
            self.boundary_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(PageItem::Page(12).to_string(), "12");
        assert_eq!(PageItem::Ellipsis.to_string(), "…");
    }

    #[test]
    fn test_zero_total_reads_as_one() {
        assert_eq!(page_window(3, 0, 1, 1), vec![PageItem::Page(1)]);
    }

    #[test]
    fn test_edge_gaps_without_boundaries() {
        // Page 1 is the only page before the siblings, so it is shown
        assert_eq!(
            page_window(3, 6, 1, 0),
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Page(4),
                PageItem::Ellipsis,
            ]
        );
    }
}
