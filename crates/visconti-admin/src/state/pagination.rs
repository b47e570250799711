//! Client-side pagination over an already fetched list

/// Items per page
pub const PAGE_SIZE: usize = 6;

/// Zero-based page cursor
///
/// Kept within `[0, total_pages(n) - 1]` for the list it pages over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pager {
    page: usize,
}

impl Pager {
    /// Current page index
    pub const fn page(self) -> usize {
        self.page
    }

    /// Number of pages for `len` items; never zero
    pub const fn total_pages(len: usize) -> usize {
        let pages = len.div_ceil(PAGE_SIZE);
        if pages == 0 { 1 } else { pages }
    }

    /// Whether pagination controls are worth rendering
    pub const fn shows_controls(len: usize) -> bool {
        Self::total_pages(len) > 1
    }

    /// Go back to the first page
    pub const fn reset(&mut self) {
        self.page = 0;
    }

    /// Pull the cursor back inside the range for `len` items
    pub fn clamp(&mut self, len: usize) {
        self.page = self.page.min(Self::total_pages(len) - 1);
    }

    /// Whether a previous page exists
    pub const fn has_prev(self) -> bool {
        self.page > 0
    }

    /// Whether a next page exists for `len` items
    pub const fn has_next(self, len: usize) -> bool {
        self.page + 1 < Self::total_pages(len)
    }

    /// Step back one page if possible
    pub const fn prev(&mut self) {
        if self.has_prev() {
            self.page -= 1;
        }
    }

    /// Step forward one page if possible
    pub const fn next(&mut self, len: usize) {
        if self.has_next(len) {
            self.page += 1;
        }
    }

    /// The items on the current page
    pub fn slice<T>(self, items: &[T]) -> &[T] {
        let start = self.page * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(items.len());
        items.get(start..end).unwrap_or(&[])
    }
}
