//! Pure pagination math: index stepping and page-window shaping.

/// Direction of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

/// Step a 0-based page index in the given direction, clamped to the page set.
///
/// At the first page `Previous` is a no-op; at the last page `Next` is a
/// no-op. An empty page set never moves.
pub fn step_index(current: usize, page_count: usize, direction: NavDirection) -> usize {
    match direction {
        NavDirection::Previous => current.saturating_sub(1),
        NavDirection::Next => {
            if current + 1 < page_count {
                current + 1
            } else {
                current
            }
        }
    }
}

/// Compute the number of pages needed for a list of items.
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Return start/end indices for a 0-based page window over a list.
pub fn page_window(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = page.saturating_mul(safe_per_page).min(total_items);
    let end = (start + safe_per_page).min(total_items);
    (start, end)
}
