use tabula::pagination::PageItem::{Ellipsis, Page};
use tabula::pagination::{PageItem, PageWindow, PaginationModel, page_window};

fn pages(items: &[PageItem]) -> Vec<usize> {
    items.iter().filter_map(PageItem::page).collect()
}

#[test]
fn test_window_middle() {
    assert_eq!(
        page_window(5, 10, 1, 1),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
    );
}

#[test]
fn test_window_small_range() {
    // Pages 3 and 4 are a two-page gap, so they collapse
    assert_eq!(
        page_window(1, 5, 1, 1),
        vec![Page(1), Page(2), Ellipsis, Page(5)]
    );
    assert_eq!(
        page_window(3, 5, 1, 1),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
    );
}

#[test]
fn test_window_near_start_keeps_siblings_around_current() {
    assert_eq!(
        page_window(1, 10, 1, 1),
        vec![Page(1), Page(2), Ellipsis, Page(10)]
    );
}

#[test]
fn test_window_near_end_keeps_siblings_around_current() {
    assert_eq!(
        page_window(10, 10, 1, 1),
        vec![Page(1), Ellipsis, Page(9), Page(10)]
    );
}

#[test]
fn test_window_sides_hold_sibling_count() {
    for total in 2..=25 {
        for current in 1..=total {
            let numbers = pages(&page_window(current, total, 1, 0));
            let before = numbers.iter().filter(|&&p| p < current).count();
            let after = numbers.iter().filter(|&&p| p > current).count();
            // At most one sibling plus one filled-in gap page per side
            assert!(before <= 2 && after <= 2, "{current}/{total}: {numbers:?}");
        }
    }
}

#[test]
fn test_single_missing_page_is_filled_in() {
    // Gap between 1 and 3 is just page 2
    assert_eq!(
        page_window(4, 10, 1, 1),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
    );
}

#[test]
fn test_single_page() {
    for siblings in 0..3 {
        for boundaries in 0..3 {
            assert_eq!(page_window(1, 1, siblings, boundaries), vec![Page(1)]);
        }
    }
}

#[test]
fn test_wider_boundaries() {
    assert_eq!(
        page_window(10, 20, 1, 2),
        vec![
            Page(1),
            Page(2),
            Ellipsis,
            Page(9),
            Page(10),
            Page(11),
            Ellipsis,
            Page(19),
            Page(20),
        ]
    );
}

#[test]
fn test_zero_boundaries() {
    assert_eq!(
        page_window(6, 12, 1, 0),
        vec![Ellipsis, Page(5), Page(6), Page(7), Ellipsis]
    );
}

#[test]
fn test_current_page_is_clamped() {
    assert_eq!(pages(&page_window(0, 3, 1, 1)), vec![1, 2, 3]);
    assert!(pages(&page_window(42, 20, 1, 1)).contains(&20));
}

#[test]
fn test_window_invariants() {
    for total in 1..=25 {
        for current in 1..=total {
            for siblings in 0..=3 {
                for boundaries in 0..=3 {
                    let items = page_window(current, total, siblings, boundaries);
                    let numbers = pages(&items);

                    assert!(
                        numbers.windows(2).all(|w| w[0] < w[1]),
                        "not ascending: {:?}",
                        items
                    );
                    assert!(
                        !items.windows(2).any(|w| w == [Ellipsis, Ellipsis]),
                        "adjacent ellipses: {:?}",
                        items
                    );
                    assert!(numbers.contains(&current), "missing current: {:?}", items);
                    assert!(
                        items.len() <= 2 * boundaries + 2 * siblings + 3,
                        "too long: {:?}",
                        items
                    );
                    assert!(numbers.iter().all(|&p| p >= 1 && p <= total));
                }
            }
        }
    }
}

#[test]
fn test_page_window_builder() {
    let window = PageWindow::new().siblings(2).boundaries(1);
    assert_eq!(window.max_items(), 9);
    assert_eq!(window.items(1, 1), vec![Page(1)]);
}

#[test]
fn test_pagination_model_navigation() {
    let model = PaginationModel::new(1, 3);
    assert!(!model.has_previous());
    assert_eq!(model.previous(), None);
    assert_eq!(model.next(), Some(2));

    let model = PaginationModel::new(3, 3);
    assert_eq!(model.previous(), Some(2));
    assert_eq!(model.next(), None);
    assert_eq!(model.items(), vec![Page(1), Page(2), Page(3)]);
}
