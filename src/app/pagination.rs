//! Page window - offset bookkeeping for the pager

use crate::constants::{PAGE_LINK_SIZE, PAGE_SIZE};

/// The slice of the remote collection currently on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// Zero-based index of the first row on screen
    pub offset: u64,
    pub page_size: u64,
    /// Last total reported by the API; only fetch responses change it
    pub total_records: u64,
}

impl Default for PageWindow {
    fn default() -> Self {
        PageWindow {
            offset: 0,
            page_size: PAGE_SIZE,
            total_records: 0,
        }
    }
}

/// One-based API page holding `offset`. Any offset is accepted.
pub fn api_page_for_offset(offset: u64, page_size: u64) -> u64 {
    offset / page_size.max(1) + 1
}

impl PageWindow {
    pub fn api_page(&self) -> u64 {
        api_page_for_offset(self.offset, self.page_size)
    }

    /// Zero-based index of the current page
    pub fn page_index(&self) -> u64 {
        self.offset / self.page_size.max(1)
    }

    pub fn page_count(&self) -> u64 {
        self.total_records.div_ceil(self.page_size.max(1))
    }

    pub fn is_first_page(&self) -> bool {
        self.page_index() == 0
    }

    pub fn is_last_page(&self) -> bool {
        self.page_index() + 1 >= self.page_count()
    }

    /// Offset of the first row of page `index`
    pub fn offset_of_page(&self, index: u64) -> u64 {
        index * self.page_size
    }

    // Navigation targets. `None` means the move would not change the page.

    pub fn first(&self) -> Option<u64> {
        (!self.is_first_page()).then_some(0)
    }

    pub fn prev(&self) -> Option<u64> {
        (!self.is_first_page()).then(|| self.offset_of_page(self.page_index() - 1))
    }

    pub fn next(&self) -> Option<u64> {
        (!self.is_last_page()).then(|| self.offset_of_page(self.page_index() + 1))
    }

    pub fn last(&self) -> Option<u64> {
        (!self.is_last_page()).then(|| self.offset_of_page(self.page_count() - 1))
    }

    pub fn goto_page(&self, index: u64) -> Option<u64> {
        if index >= self.page_count() || index == self.page_index() {
            return None;
        }
        Some(self.offset_of_page(index))
    }

    /// Zero-based indices of the numbered page links around the current page
    pub fn page_links(&self) -> Vec<u64> {
        let page_count = self.page_count();
        if page_count == 0 {
            return Vec::new();
        }

        let visible = PAGE_LINK_SIZE.min(page_count);
        let page = self.page_index().min(page_count - 1);
        // ceil(page - visible / 2), clamped at zero
        let mut start = (2 * page).saturating_sub(visible).div_ceil(2);
        let end = (start + visible - 1).min(page_count - 1);
        let shortfall = PAGE_LINK_SIZE.saturating_sub(end - start + 1);
        start = start.saturating_sub(shortfall);

        (start..=end).collect()
    }

    /// One-based numbers of the first and last row on screen
    pub fn visible_range(&self) -> (u64, u64) {
        if self.total_records == 0 {
            return (0, 0);
        }
        let last = (self.offset + self.page_size).min(self.total_records);
        // An offset past a shrunken total still reports a non-inverted range
        let first = (self.offset + 1).min(last);
        (first, last)
    }

    /// "Showing X to Y of Z"
    pub fn report(&self) -> String {
        let (first, last) = self.visible_range();
        format!("Showing {} to {} of {}", first, last, self.total_records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(offset: u64, total: u64) -> PageWindow {
        PageWindow {
            offset,
            page_size: 12,
            total_records: total,
        }
    }

    #[test]
    fn test_api_page_for_offset() {
        assert_eq!(api_page_for_offset(0, 12), 1);
        assert_eq!(api_page_for_offset(11, 12), 1);
        assert_eq!(api_page_for_offset(12, 12), 2);
        assert_eq!(api_page_for_offset(24, 12), 3);
        // off-grid offsets still map deterministically
        assert_eq!(api_page_for_offset(25, 12), 3);
        for o in (0..1000).step_by(7) {
            assert_eq!(api_page_for_offset(o, 12), o / 12 + 1);
        }
    }

    #[test]
    fn test_report() {
        assert_eq!(window(0, 129884).report(), "Showing 1 to 12 of 129884");
        assert_eq!(window(24, 30).report(), "Showing 25 to 30 of 30");
        assert_eq!(window(0, 0).report(), "Showing 0 to 0 of 0");
        assert_eq!(window(48, 30).report(), "Showing 30 to 30 of 30");
    }

    #[test]
    fn test_navigation_bounds() {
        let w = window(0, 30);
        assert_eq!(w.page_count(), 3);
        assert_eq!(w.prev(), None);
        assert_eq!(w.first(), None);
        assert_eq!(w.next(), Some(12));
        assert_eq!(w.last(), Some(24));

        let w = window(24, 30);
        assert_eq!(w.next(), None);
        assert_eq!(w.last(), None);
        assert_eq!(w.prev(), Some(12));
        assert_eq!(w.first(), Some(0));
    }

    #[test]
    fn test_empty_collection_has_no_moves() {
        let w = window(0, 0);
        assert_eq!(w.next(), None);
        assert_eq!(w.last(), None);
        assert!(w.page_links().is_empty());
    }

    #[test]
    fn test_goto_page() {
        let w = window(12, 100);
        assert_eq!(w.goto_page(1), None);
        assert_eq!(w.goto_page(3), Some(36));
        assert_eq!(w.goto_page(9), None);
    }

    #[test]
    fn test_page_links_window() {
        assert_eq!(window(0, 1000).page_links(), vec![0, 1, 2, 3, 4]);
        assert_eq!(window(12, 1000).page_links(), vec![0, 1, 2, 3, 4]);
        assert_eq!(window(5 * 12, 1000).page_links(), vec![3, 4, 5, 6, 7]);
        // last page of 84 pages (0..=83)
        assert_eq!(window(83 * 12, 1000).page_links(), vec![79, 80, 81, 82, 83]);
        assert_eq!(window(0, 30).page_links(), vec![0, 1, 2]);
    }
}
