//! Page window math shared by the repository and the list templates.

use serde::Serialize;

/// Fixed page window size for the employee list.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Pages always shown at the start and end of the pagination controls.
const EDGE_PAGES: usize = 2;
/// Pages shown on either side of the current page.
const SURROUNDING_PAGES: usize = 2;

/// Clamps a requested page number into the valid range for a result set.
///
/// Page numbering is 1-based. An empty result set still reports page 1 so
/// callers always have a page to render.
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.max(1).min(total_pages.max(1))
}

/// Builds the page list rendered by the pagination controls: a leading edge,
/// a window around the current page and a trailing edge, with `None` marking
/// a gap between sections.
fn page_windows(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return Vec::new();
    }

    let mut pages = Vec::new();

    let left_end = (1 + EDGE_PAGES).min(total_pages + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(SURROUNDING_PAGES));
    let mid_end = (current_page + SURROUNDING_PAGES + 1).min(total_pages + 1);
    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max((total_pages + 1).saturating_sub(EDGE_PAGES));
    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=total_pages).map(Some));

    pages
}

/// One rendered page of a larger result set.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub pages: Vec<Option<usize>>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let page = clamp_page(current_page, total_pages);

        Self {
            items,
            page,
            total_pages,
            pages: page_windows(total_pages, page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_page_keeps_valid_pages() {
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(1, 1), 1);
    }

    #[test]
    fn clamp_page_raises_low_requests_to_first_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(0, 0), 1);
    }

    #[test]
    fn clamp_page_lowers_high_requests_to_last_page() {
        assert_eq!(clamp_page(9999, 3), 3);
        assert_eq!(clamp_page(4, 3), 3);
    }

    #[test]
    fn clamp_page_reports_page_one_for_empty_sets() {
        assert_eq!(clamp_page(7, 0), 1);
    }

    #[test]
    fn page_windows_is_empty_without_pages() {
        assert!(page_windows(0, 1).is_empty());
    }

    #[test]
    fn page_windows_lists_small_sets_without_gaps() {
        let pages = page_windows(3, 2);
        assert_eq!(pages, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn page_windows_elides_far_sections() {
        let pages = page_windows(20, 10);
        assert_eq!(
            pages,
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(19),
                Some(20),
            ]
        );
    }

    #[test]
    fn paginated_clamps_the_current_page() {
        let paginated = Paginated::new(vec![1, 2], 0, 2);
        assert_eq!(paginated.page, 1);

        let paginated = Paginated::new(vec![3], 9999, 2);
        assert_eq!(paginated.page, 2);
        assert_eq!(paginated.total_pages, 2);
    }
}
