//! Page slicing and the navigation window.

use serde::Serialize;

use crate::stada::{StationData, StationFilter};
use crate::upstream::UpstreamError;

use super::source::StationSource;

/// One rendered page of stations.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    /// `ceil(candidates / page_size)`; zero when nothing matched.
    pub total_pages: usize,
    /// Zero-based index of this page.
    pub page_index: usize,
    /// At most `page_size` stations, in upstream order.
    pub elements: Vec<StationData>,
}

impl PageResult {
    /// The "no matching records" result.
    pub fn empty() -> Self {
        Self {
            total_pages: 0,
            page_index: 0,
            elements: Vec::new(),
        }
    }
}

/// Number of pages needed for `candidates` items.
pub fn total_pages(candidates: usize, page_size: usize) -> usize {
    candidates.div_ceil(page_size.max(1))
}

/// Native mode: one upstream call for exactly the requested page.
pub async fn paginate<S: StationSource>(
    source: &S,
    filter: &StationFilter,
    page_index: usize,
    page_size: usize,
) -> Result<PageResult, UpstreamError> {
    let page_size = page_size.max(1);
    let limit = u32::try_from(page_size).unwrap_or(u32::MAX);
    let offset = page_index
        .checked_mul(page_size)
        .and_then(|o| u32::try_from(o).ok())
        .unwrap_or(u32::MAX);

    let page = source.fetch_stations(&filter.page(limit, offset)).await?;

    Ok(PageResult {
        total_pages: total_pages(page.total as usize, page_size),
        page_index,
        elements: page.items,
    })
}

/// Local mode: slice an in-memory candidate list.
///
/// An index past the last page gives an empty page with the right count.
pub fn paginate_local(
    candidates: Vec<StationData>,
    page_index: usize,
    page_size: usize,
) -> PageResult {
    let page_size = page_size.max(1);
    let total_pages = total_pages(candidates.len(), page_size);

    let start = page_index.saturating_mul(page_size).min(candidates.len());
    let end = start.saturating_add(page_size).min(candidates.len());

    let elements = candidates
        .into_iter()
        .skip(start)
        .take(end - start)
        .collect();

    PageResult {
        total_pages,
        page_index,
        elements,
    }
}

/// The visible page links around the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// Zero-based page indices to show, ascending.
    pub visible: Vec<usize>,
    /// Zero-based index of the current page.
    pub current: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Window size the window was computed with.
    #[serde(skip)]
    size: usize,
}

impl PageWindow {
    /// Index the "back" control jumps to: one window back, clamped at 0.
    pub fn jump_back(&self) -> usize {
        self.current.saturating_sub(self.size)
    }

    /// Index the "forward" control jumps to: one window on, clamped at the last page.
    pub fn jump_forward(&self) -> usize {
        self.current
            .saturating_add(self.size)
            .min(self.total_pages.saturating_sub(1))
    }

    /// First visible index.
    pub fn first(&self) -> usize {
        self.visible.first().copied().unwrap_or(0)
    }

    /// Last visible index.
    pub fn last(&self) -> usize {
        self.visible.last().copied().unwrap_or(0)
    }
}

/// Compute the navigation window.
///
/// Returns `None` when there is at most one page. Otherwise the window is
/// pinned to the start while `current <= half`, pinned to the end while
/// `current >= total_pages - half`, and centred on `current` in between.
/// A `current` past the last page is treated as the last page, so every
/// link stays inside the listing.
///
/// # Examples
///
/// ```
/// use station_server::listing::compute_window;
///
/// let window = compute_window(5, 10, 5).unwrap();
/// assert_eq!(window.visible, vec![3, 4, 5, 6, 7]);
///
/// assert!(compute_window(0, 1, 5).is_none());
/// ```
pub fn compute_window(current: usize, total_pages: usize, size: usize) -> Option<PageWindow> {
    if total_pages <= 1 {
        return None;
    }

    let size = size.max(1);
    let half = size / 2;
    let current = current.min(total_pages - 1);

    let visible: Vec<usize> = if current <= half {
        (0..size.min(total_pages)).collect()
    } else if current >= total_pages.saturating_sub(half) {
        (total_pages.saturating_sub(size)..total_pages).collect()
    } else {
        (current - half..=current + half).collect()
    };

    Some(PageWindow {
        visible,
        current,
        total_pages,
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stations(n: u32) -> Vec<StationData> {
        (1..=n)
            .map(|number| StationData {
                number,
                ..Default::default()
            })
            .collect()
    }

    fn numbers(page: &PageResult) -> Vec<u32> {
        page.elements.iter().map(|s| s.number).collect()
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(5400, 20), 270);
    }

    #[test]
    fn local_first_middle_last() {
        let first = paginate_local(stations(45), 0, 20);
        assert_eq!(first.total_pages, 3);
        assert_eq!(numbers(&first), (1..=20).collect::<Vec<_>>());

        let middle = paginate_local(stations(45), 1, 20);
        assert_eq!(numbers(&middle), (21..=40).collect::<Vec<_>>());

        let last = paginate_local(stations(45), 2, 20);
        assert_eq!(numbers(&last), vec![41, 42, 43, 44, 45]);
        assert_eq!(last.page_index, 2);
    }

    #[test]
    fn local_empty_candidates() {
        let page = paginate_local(Vec::new(), 0, 20);
        assert_eq!(page.total_pages, 0);
        assert!(page.elements.is_empty());
    }

    #[test]
    fn local_index_past_end() {
        let page = paginate_local(stations(10), 7, 20);
        assert_eq!(page.total_pages, 1);
        assert!(page.elements.is_empty());

        let page = paginate_local(stations(10), usize::MAX, 20);
        assert!(page.elements.is_empty());
    }

    #[test]
    fn window_pinned_to_start() {
        let window = compute_window(0, 10, 5).unwrap();
        assert_eq!(window.visible, vec![0, 1, 2, 3, 4]);

        let window = compute_window(2, 10, 5).unwrap();
        assert_eq!(window.visible, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn window_pinned_to_end() {
        let window = compute_window(9, 10, 5).unwrap();
        assert_eq!(window.visible, vec![5, 6, 7, 8, 9]);

        let window = compute_window(8, 10, 5).unwrap();
        assert_eq!(window.visible, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn window_centred() {
        let window = compute_window(5, 10, 5).unwrap();
        assert_eq!(window.visible, vec![3, 4, 5, 6, 7]);
        assert_eq!(window.first(), 3);
        assert_eq!(window.last(), 7);
    }

    #[test]
    fn window_fewer_pages_than_size() {
        let window = compute_window(0, 3, 5).unwrap();
        assert_eq!(window.visible, vec![0, 1, 2]);

        let window = compute_window(2, 3, 5).unwrap();
        assert_eq!(window.visible, vec![0, 1, 2]);
    }

    #[test]
    fn no_window_for_single_page() {
        assert!(compute_window(0, 1, 5).is_none());
        assert!(compute_window(0, 0, 5).is_none());
    }

    #[test]
    fn index_past_end_stays_in_range() {
        let window = compute_window(50, 10, 5).unwrap();
        assert_eq!(window.visible, vec![5, 6, 7, 8, 9]);
        assert_eq!(window.current, 9);
        assert_eq!(window.jump_back(), 4);
        assert_eq!(window.jump_forward(), 9);

        let window = compute_window(usize::MAX, 3, 5).unwrap();
        assert_eq!(window.visible, vec![0, 1, 2]);
        assert_eq!(window.jump_back(), 0);
        assert_eq!(window.jump_forward(), 2);
    }

    #[test]
    fn jumps_are_clamped() {
        let window = compute_window(1, 10, 5).unwrap();
        assert_eq!(window.jump_back(), 0);
        assert_eq!(window.jump_forward(), 6);

        let window = compute_window(8, 10, 5).unwrap();
        assert_eq!(window.jump_back(), 3);
        assert_eq!(window.jump_forward(), 9);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Page count is the ceiling and is zero only for no candidates
        #[test]
        fn page_count_is_ceiling(candidates in 0usize..10_000, page_size in 1usize..200) {
            let pages = total_pages(candidates, page_size);
            prop_assert!(pages * page_size >= candidates);
            prop_assert!(pages == 0 || (pages - 1) * page_size < candidates);
            prop_assert_eq!(pages == 0, candidates == 0);
        }

        /// Every page but the last is full; the last holds the remainder
        #[test]
        fn page_lengths(candidates in 0u32..500, page_size in 1usize..50) {
            let all: Vec<StationData> = (0..candidates)
                .map(|number| StationData { number, ..Default::default() })
                .collect();
            let pages = total_pages(all.len(), page_size);

            for index in 0..pages {
                let page = paginate_local(all.clone(), index, page_size);
                let expected = page_size.min(all.len() - index * page_size);
                prop_assert_eq!(page.elements.len(), expected);
                prop_assert_eq!(page.total_pages, pages);
            }
        }

        /// The window stays in range, is ascending and contains the current page
        #[test]
        fn window_is_well_formed(total in 2usize..200, size in 1usize..12, seed in 0usize..200) {
            let current = seed % total;
            let window = compute_window(current, total, size).unwrap();

            let half = size / 2;
            let expected_len = if current <= half || current >= total.saturating_sub(half) {
                size.min(total)
            } else {
                // centred: half either side, one more than `size` when even
                2 * half + 1
            };
            prop_assert_eq!(window.visible.len(), expected_len);
            prop_assert!(window.visible.windows(2).all(|w| w[1] == w[0] + 1));
            prop_assert!(window.last() < total);
            prop_assert!(window.visible.contains(&current));
        }

        /// Jump targets are valid page indices whatever the requested index
        #[test]
        fn jumps_stay_in_listing(total in 2usize..200, size in 1usize..12, current in 0usize..1_000) {
            let window = compute_window(current, total, size).unwrap();

            prop_assert!(window.jump_back() < total);
            prop_assert!(window.jump_forward() < total);
            prop_assert!(window.jump_back() <= window.current);
            prop_assert!(window.jump_forward() >= window.current);
        }
    }
}
