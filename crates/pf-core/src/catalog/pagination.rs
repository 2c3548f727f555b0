//! Page slicing, page window and result range.
//!
//! 分页切片、页码窗口与结果范围。

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of consecutive page buttons in the window.
pub const MAX_VISIBLE_PAGES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page size must be one of 3, 6, 9 or 12, got {0}")]
pub struct InvalidPageSize(pub usize);

/// Cards per page, restricted to the values offered by the selector.
///
/// 每页卡片数，仅允许 3/6/9/12。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    Three,
    #[default]
    Six,
    Nine,
    Twelve,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Three,
        PageSize::Six,
        PageSize::Nine,
        PageSize::Twelve,
    ];

    pub fn get(self) -> usize {
        match self {
            PageSize::Three => 3,
            PageSize::Six => 6,
            PageSize::Nine => 9,
            PageSize::Twelve => 12,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(PageSize::Three),
            6 => Ok(PageSize::Six),
            9 => Ok(PageSize::Nine),
            12 => Ok(PageSize::Twelve),
            other => Err(InvalidPageSize(other)),
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Current page (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: PageSize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl PageState {
    /// Same page size, back on page 1.
    pub fn first_page(self) -> Self {
        Self {
            current_page: 1,
            ..self
        }
    }
}

/// `ceil(len / page_size)`; 0 for an empty list.
pub fn total_pages(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get())
}

/// One page of a filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

/// Slice page `page` (1-based) out of `filtered`.
///
/// Does not clamp: page 0 or a page past the end yields an empty slice. Keeping
/// `page` in range is the caller's job.
pub fn paginate<T>(filtered: &[T], page: usize, page_size: PageSize) -> Page<'_, T> {
    let total_pages = total_pages(filtered.len(), page_size);
    let size = page_size.get();

    let Some(start) = page.checked_sub(1).map(|p| p.saturating_mul(size)) else {
        return Page {
            items: &[],
            total_pages,
        };
    };
    if start >= filtered.len() {
        return Page {
            items: &[],
            total_pages,
        };
    }

    let end = start.saturating_add(size).min(filtered.len());
    Page {
        items: &filtered[start..end],
        total_pages,
    }
}

/// Slot of the pagination widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageSlot {
    Page(usize),
    Ellipsis,
}

/// Page-number buttons around the current page.
///
/// 当前页附近的页码按钮。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PageWindow {
    /// Page 1, when the window does not start there
    pub first_anchor: Option<usize>,
    pub leading_gap: bool,
    /// Consecutive pages, at most [`MAX_VISIBLE_PAGES`]
    pub pages: Vec<usize>,
    pub trailing_gap: bool,
    /// Last page, when the window does not reach it
    pub last_anchor: Option<usize>,
}

impl PageWindow {
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Flatten into render order: anchor, gap, window, gap, anchor.
    pub fn slots(&self) -> Vec<PageSlot> {
        let mut slots = Vec::with_capacity(self.pages.len() + 4);
        if let Some(first) = self.first_anchor {
            slots.push(PageSlot::Page(first));
        }
        if self.leading_gap {
            slots.push(PageSlot::Ellipsis);
        }
        slots.extend(self.pages.iter().copied().map(PageSlot::Page));
        if self.trailing_gap {
            slots.push(PageSlot::Ellipsis);
        }
        if let Some(last) = self.last_anchor {
            slots.push(PageSlot::Page(last));
        }
        slots
    }
}

/// Compute the page window for `current` out of `total_pages`.
///
/// The window is centred on the current page and shifted to stay inside
/// `[1, total_pages]`. Page 1 and the last page are added as anchors when the
/// window does not include them, with an ellipsis only when there is a gap.
pub fn page_window(current: usize, total_pages: usize) -> PageWindow {
    if total_pages == 0 {
        return PageWindow::default();
    }

    let current = current.clamp(1, total_pages);
    let mut start = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total_pages);
    if end + 1 - start < MAX_VISIBLE_PAGES {
        start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
    }

    PageWindow {
        first_anchor: (start > 1).then_some(1),
        leading_gap: start > 2,
        pages: (start..=end).collect(),
        trailing_gap: end + 1 < total_pages,
        last_anchor: (end < total_pages).then_some(total_pages),
    }
}

/// "Showing X-Y of Z projects".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultRange {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl ResultRange {
    pub fn compute(filtered_len: usize, page: usize, page_size: PageSize) -> Self {
        if filtered_len == 0 || page == 0 {
            return Self {
                first: 0,
                last: 0,
                total: filtered_len,
            };
        }

        let size = page_size.get();
        Self {
            first: (page - 1).saturating_mul(size).saturating_add(1),
            last: page.saturating_mul(size).min(filtered_len),
            total: filtered_len,
        }
    }
}

impl fmt::Display for ResultRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {}-{} of {} projects",
            self.first, self.last, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_accepts_only_selector_values() {
        for size in PageSize::ALL {
            assert_eq!(PageSize::try_from(size.get()), Ok(size));
        }
        assert_eq!(PageSize::try_from(4), Err(InvalidPageSize(4)));
        assert_eq!(PageSize::try_from(0), Err(InvalidPageSize(0)));
        assert_eq!(PageSize::default().get(), 6);
    }

    #[test]
    fn page_size_serializes_as_number() {
        assert_eq!(serde_json::to_string(&PageSize::Nine).unwrap(), "9");
        assert_eq!(serde_json::from_str::<PageSize>("12").unwrap(), PageSize::Twelve);
        assert!(serde_json::from_str::<PageSize>("7").is_err());
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, PageSize::Three), 0);
        assert_eq!(total_pages(1, PageSize::Three), 1);
        assert_eq!(total_pages(3, PageSize::Three), 1);
        assert_eq!(total_pages(4, PageSize::Three), 2);
        assert_eq!(total_pages(10, PageSize::Six), 2);
        assert_eq!(total_pages(10, PageSize::Twelve), 1);
    }

    #[test]
    fn paginate_four_items_by_three() {
        let items = [1, 2, 3, 4];

        let first = paginate(&items, 1, PageSize::Three);
        let second = paginate(&items, 2, PageSize::Three);

        assert_eq!(first.items, &[1, 2, 3]);
        assert_eq!(second.items, &[4]);
        assert_eq!(first.total_pages, 2);
        assert_eq!(second.total_pages, 2);
    }

    #[test]
    fn paginate_does_not_clamp_out_of_range_pages() {
        let items = [1, 2, 3, 4];

        assert!(paginate(&items, 0, PageSize::Three).items.is_empty());
        assert!(paginate(&items, 3, PageSize::Three).items.is_empty());
        assert!(paginate(&items, usize::MAX, PageSize::Three).items.is_empty());
    }

    #[test]
    fn paginate_empty_list_has_zero_pages() {
        let items: [u8; 0] = [];

        let page = paginate(&items, 1, PageSize::Six);

        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn pages_concatenate_back_to_the_list() {
        let items: Vec<usize> = (0..23).collect();

        for size in PageSize::ALL {
            let total = total_pages(items.len(), size);
            let rebuilt: Vec<usize> = (1..=total)
                .flat_map(|page| paginate(&items, page, size).items.iter().copied())
                .collect();
            assert_eq!(rebuilt, items, "page size {size}");
        }
    }

    #[test]
    fn window_is_empty_without_pages() {
        let window = page_window(1, 0);
        assert!(window.is_empty());
        assert!(window.slots().is_empty());
    }

    #[test]
    fn window_shows_all_pages_when_few() {
        let window = page_window(2, 3);

        assert_eq!(window.pages, vec![1, 2, 3]);
        assert_eq!(window.first_anchor, None);
        assert_eq!(window.last_anchor, None);
        assert!(!window.leading_gap && !window.trailing_gap);
    }

    #[test]
    fn window_at_start_anchors_last_page() {
        let window = page_window(1, 10);

        assert_eq!(
            window.slots(),
            vec![
                PageSlot::Page(1),
                PageSlot::Page(2),
                PageSlot::Page(3),
                PageSlot::Page(4),
                PageSlot::Page(5),
                PageSlot::Ellipsis,
                PageSlot::Page(10),
            ]
        );
    }

    #[test]
    fn window_in_the_middle_anchors_both_ends() {
        let window = page_window(5, 9);

        assert_eq!(window.pages, vec![3, 4, 5, 6, 7]);
        assert_eq!(
            window.slots(),
            vec![
                PageSlot::Page(1),
                PageSlot::Ellipsis,
                PageSlot::Page(3),
                PageSlot::Page(4),
                PageSlot::Page(5),
                PageSlot::Page(6),
                PageSlot::Page(7),
                PageSlot::Ellipsis,
                PageSlot::Page(9),
            ]
        );
    }

    #[test]
    fn window_skips_ellipsis_for_adjacent_anchor() {
        let window = page_window(4, 7);

        assert_eq!(window.pages, vec![2, 3, 4, 5, 6]);
        assert_eq!(window.first_anchor, Some(1));
        assert!(!window.leading_gap);
        assert_eq!(window.last_anchor, Some(7));
        assert!(!window.trailing_gap);
    }

    #[test]
    fn window_at_end_shifts_left() {
        let window = page_window(10, 10);

        assert_eq!(window.pages, vec![6, 7, 8, 9, 10]);
        assert_eq!(window.first_anchor, Some(1));
        assert!(window.leading_gap);
        assert_eq!(window.last_anchor, None);
    }

    #[test]
    fn window_clamps_current_page() {
        assert_eq!(page_window(42, 3).pages, vec![1, 2, 3]);
        assert_eq!(page_window(0, 8).pages, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn result_range_label() {
        assert_eq!(
            ResultRange::compute(10, 2, PageSize::Six).to_string(),
            "Showing 7-10 of 10 projects"
        );
        assert_eq!(
            ResultRange::compute(4, 1, PageSize::Three).to_string(),
            "Showing 1-3 of 4 projects"
        );
        assert_eq!(
            ResultRange::compute(0, 1, PageSize::Six).to_string(),
            "Showing 0-0 of 0 projects"
        );
    }
}
