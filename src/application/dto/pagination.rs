use serde::Serialize;

/// How many page links to offer around the current page.
const PAGE_WINDOW: u32 = 5;

/// Offset-based page of results, 1-based page numbers, plus the
/// navigation window the list views render.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub page_range: Vec<u32>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: u32, per_page: u32, total_items: u64) -> Self {
        let total_pages = total_pages(total_items, per_page);
        Self {
            items,
            page,
            total_pages,
            total_items,
            page_range: page_range(page, total_pages),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            page_range: self.page_range,
        }
    }
}

pub fn total_pages(total_items: u64, per_page: u32) -> u32 {
    debug_assert!(per_page > 0);
    total_items.div_ceil(per_page as u64) as u32
}

/// Centered window of at most `PAGE_WINDOW` page numbers, clamped to
/// `[1, total_pages]`.
pub fn page_range(current: u32, total_pages: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let half = PAGE_WINDOW / 2;
    let mut lo = current.saturating_sub(half).max(1);
    let hi = (lo + PAGE_WINDOW - 1).min(total_pages);
    lo = hi.saturating_sub(PAGE_WINDOW - 1).max(1);
    (lo..=hi).collect()
}
