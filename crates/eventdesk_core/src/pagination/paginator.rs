//! Page computation and navigation state.
//!
//! # Responsibility
//! - Compute one page window plus navigation flags from a slice.
//! - Keep the user's page index/size between recomputations.
//!
//! # Invariants
//! - `page_count = max(1, ceil(len / page_size))`.
//! - Changing the page size resets the index to the first page.

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One window of a sequence plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub rows: &'a [T],
    /// Zero-based, already clamped into `[0, page_count - 1]`.
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
    pub total_rows: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl<T> Page<'_, T> {
    /// One-based index of the first row shown, `0` when the page is empty.
    pub fn first_row(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            self.page_index * self.page_size + 1
        }
    }

    /// One-based index of the last row shown, `0` when the page is empty.
    pub fn last_row(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            self.page_index * self.page_size + self.rows.len()
        }
    }
}

/// Number of pages for `len` rows. A zero page size counts as one.
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Returns the clamped page window of `rows`.
pub fn paginate<T>(rows: &[T], page_size: usize, page_index: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let page_count = page_count(rows.len(), page_size);
    let page_index = page_index.min(page_count - 1);
    let start = (page_index * page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());

    Page {
        rows: &rows[start..end],
        page_index,
        page_count,
        page_size,
        total_rows: rows.len(),
        can_go_previous: page_index > 0,
        can_go_next: page_index + 1 < page_count,
    }
}

/// Navigation command issued by the table footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Previous,
    Next,
    Last,
    GoTo(usize),
}

/// Page size and index kept across recomputations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    page_index: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page_index: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Raw stored index; may exceed the range of a shrunken sequence.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Sets a new page size and returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page_index = 0;
    }

    /// Computes the current window over `rows`.
    pub fn page<'a, T>(&self, rows: &'a [T]) -> Page<'a, T> {
        paginate(rows, self.page_size, self.page_index)
    }

    /// Moves within a sequence of `len` rows. Returns the resulting index.
    ///
    /// The stored index is clamped first, so `Previous` after the sequence
    /// shrank lands on the page before the last valid one.
    pub fn navigate(&mut self, nav: PageNav, len: usize) -> usize {
        let last = page_count(len, self.page_size) - 1;
        let current = self.page_index.min(last);
        self.page_index = match nav {
            PageNav::First => 0,
            PageNav::Previous => current.saturating_sub(1),
            PageNav::Next => (current + 1).min(last),
            PageNav::Last => last,
            PageNav::GoTo(index) => index.min(last),
        };
        self.page_index
    }
}

#[cfg(test)]
mod tests {
    use super::{page_count, paginate, PageNav, Paginator};

    #[test]
    fn page_count_has_a_floor_of_one() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(20, 10), 2);
        assert_eq!(page_count(3, 0), 3);
    }

    #[test]
    fn display_range_is_one_based() {
        let rows: Vec<u32> = (0..25).collect();
        let page = paginate(&rows, 10, 2);
        assert_eq!(page.first_row(), 21);
        assert_eq!(page.last_row(), 25);

        let empty: Vec<u32> = Vec::new();
        let page = paginate(&empty, 10, 0);
        assert_eq!((page.first_row(), page.last_row()), (0, 0));
    }

    #[test]
    fn navigation_clamps_to_available_pages() {
        let mut paginator = Paginator::new(10);
        assert_eq!(paginator.navigate(PageNav::Next, 25), 1);
        assert_eq!(paginator.navigate(PageNav::Last, 25), 2);
        assert_eq!(paginator.navigate(PageNav::Next, 25), 2);
        assert_eq!(paginator.navigate(PageNav::GoTo(99), 25), 2);
        assert_eq!(paginator.navigate(PageNav::Previous, 5), 0);
        assert_eq!(paginator.navigate(PageNav::First, 25), 0);
    }
}
