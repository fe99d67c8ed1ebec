/// Number of records revealed per "load more" step
pub const PAGE_SIZE: usize = 5;

/// Prefix cursor over the filtered-and-sorted result list
///
/// The cursor only tracks how many records are revealed; it never re-fetches.
/// Growth is monotonic within a record collection and the count is clamped to
/// the result length at slice time, so a shrinking filter result never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleCursor {
    count: usize,
    page_size: usize,
}

impl VisibleCursor {
    pub fn new(page_size: usize) -> Self {
        Self {
            count: page_size,
            page_size,
        }
    }

    /// Records currently revealed, before clamping
    pub fn count(&self) -> usize {
        self.count
    }

    /// Reveal one more page
    pub fn load_more(&mut self) {
        self.count += self.page_size;
    }

    /// Collapse back to the first page (fresh record collection)
    pub fn reset(&mut self) {
        self.count = self.page_size;
    }

    /// The visible prefix of `items`, clamped to its length
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.count.min(items.len())]
    }
}

impl Default for VisibleCursor {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}
