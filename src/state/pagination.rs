// ============================================================================
// PAGINATION - Page cursor clamped to the known total
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationCursor {
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
}

impl PaginationCursor {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_count: 0,
        }
    }

    /// At least one page, even when the list is empty
    pub fn total_pages(&self) -> u32 {
        let size = u64::from(self.page_size.max(1));
        let pages = self.total_count.div_ceil(size);
        pages.clamp(1, u64::from(u32::MAX)) as u32
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Returns whether the page moved
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Record a new total and pull the page back into range
    pub fn set_total(&mut self, total_count: u64) {
        self.total_count = total_count;
        self.page = self.page.clamp(1, self.total_pages());
    }

    /// Rows of the current page out of a locally held list
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let size = self.page_size.max(1) as usize;
        let start = (self.page.saturating_sub(1) as usize).saturating_mul(size);
        if start >= rows.len() {
            return &[];
        }
        let end = (start + size).min(rows.len());
        &rows[start..end]
    }
}
