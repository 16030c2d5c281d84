//! Fixed-size page arithmetic shared by the leaderboard and userbase views.

/// Rows shown per embed page.
pub const PAGE_SIZE: u64 = 10;

/// Zero-indexed page over an ordered result set.
///
/// Page `n` covers rows `[n * per_page, n * per_page + per_page)`. Navigation never
/// moves before the first page or past the last page that contains rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of rows per page.
    pub per_page: u64,
}

impl Pagination {
    /// Creates a pagination for `page` with the default page size.
    pub fn new(page: u64) -> Self {
        Self {
            page,
            per_page: PAGE_SIZE,
        }
    }

    /// Index of the first row on this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.per_page)
    }

    /// Index of the last page that holds rows; `0` for an empty result set.
    pub fn last_page(&self, total: u64) -> u64 {
        if total == 0 {
            0
        } else {
            (total - 1) / self.per_page
        }
    }

    /// Number of pages to display, never less than one.
    pub fn total_pages(&self, total: u64) -> u64 {
        self.last_page(total) + 1
    }

    /// Moves the page back inside `[0, last_page]`.
    pub fn clamp(self, total: u64) -> Self {
        Self {
            page: self.page.min(self.last_page(total)),
            ..self
        }
    }

    /// Previous page, staying on the first page.
    pub fn prev(self) -> Self {
        Self {
            page: self.page.saturating_sub(1),
            ..self
        }
    }

    /// Next page if it holds at least one row, otherwise the current page.
    pub fn next(self, total: u64) -> Self {
        let has_next = (self.page + 1).saturating_mul(self.per_page) < total;
        Self {
            page: if has_next { self.page + 1 } else { self.page },
            ..self
        }
    }

    /// Returns the rows of this page from an already fetched list.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len() as u64;
        let start = self.offset().min(len) as usize;
        let end = self.offset().saturating_add(self.per_page).min(len) as usize;
        &items[start..end]
    }
}
