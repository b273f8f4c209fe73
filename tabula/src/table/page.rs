//! Client-side page slicing.

/// Number of pages for `row_count` rows.
///
/// Always at least 1. Slicing is disabled when `page_size` is `None` or 0.
pub fn total_pages(row_count: usize, page_size: Option<usize>) -> usize {
    match page_size {
        Some(size) if size > 0 => row_count.div_ceil(size).max(1),
        _ => 1,
    }
}

/// Take one page of rows.
///
/// Pages are 1-based. Page 0 and pages past the end are empty rather than
/// clamped.
pub fn paginate<R>(rows: Vec<R>, page_size: Option<usize>, current_page: usize) -> Vec<R> {
    let size = match page_size {
        Some(size) if size > 0 => size,
        _ => return rows,
    };
    let Some(start) = current_page.checked_sub(1) else {
        return Vec::new();
    };
    let start = start.saturating_mul(size);
    rows.into_iter().skip(start).take(size).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(5, Some(2)), 3);
        assert_eq!(total_pages(4, Some(2)), 2);
        assert_eq!(total_pages(0, Some(2)), 1);
        assert_eq!(total_pages(100, None), 1);
        assert_eq!(total_pages(100, Some(0)), 1);
    }

    #[test]
    fn test_page_zero_is_empty() {
        assert!(paginate(vec![1, 2, 3], Some(2), 0).is_empty());
        assert_eq!(paginate(vec![1, 2, 3], None, 0), vec![1, 2, 3]);
    }

    #[test]
    fn test_unset_page_size_returns_everything() {
        assert_eq!(paginate(vec![1, 2, 3], None, 7), vec![1, 2, 3]);
        assert_eq!(paginate(vec![1, 2, 3], Some(0), 2), vec![1, 2, 3]);
    }
}
