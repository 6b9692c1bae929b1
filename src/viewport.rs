//! Viewport over the results area

/// Scrollable window onto the rendered result rows
#[derive(Debug)]
pub struct Viewport {
    /// First visible row
    offset: usize,
    /// Number of visible rows
    height: usize,
    /// Total rows of content
    content_rows: usize,
    /// Rows scrolled before the scroll-to-top button shows
    threshold: usize,
    /// Whether a smooth return to the top is in progress
    returning: bool,
}

impl Viewport {
    /// Create a viewport with the given visible height
    pub fn new(height: usize, threshold: usize) -> Self {
        Self {
            offset: 0,
            height,
            content_rows: 0,
            threshold,
            returning: false,
        }
    }

    /// Get the first visible row
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get the visible height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Set the visible height (after a resize)
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.clamp();
    }

    /// Set the amount of content (after a search or resize)
    pub fn set_content_rows(&mut self, rows: usize) {
        self.content_rows = rows;
        self.clamp();
    }

    /// Largest offset that still fills the view
    fn max_offset(&self) -> usize {
        self.content_rows.saturating_sub(self.height)
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    /// Jump back to the first row without animation
    pub fn reset(&mut self) {
        self.offset = 0;
        self.returning = false;
    }

    /// Scroll down by n rows
    pub fn scroll_down(&mut self, n: usize) {
        self.returning = false;
        self.offset = self.offset.saturating_add(n).min(self.max_offset());
    }

    /// Scroll up by n rows
    pub fn scroll_up(&mut self, n: usize) {
        self.returning = false;
        self.offset = self.offset.saturating_sub(n);
    }

    /// Scroll down one page
    pub fn page_down(&mut self) {
        self.scroll_down(self.height.saturating_sub(2).max(1));
    }

    /// Scroll up one page
    pub fn page_up(&mut self) {
        self.scroll_up(self.height.saturating_sub(2).max(1));
    }

    /// Whether the scroll-to-top button should be shown
    pub fn show_top_button(&self) -> bool {
        self.offset > self.threshold
    }

    /// Begin a smooth return to the top
    pub fn start_return_to_top(&mut self) {
        self.returning = self.offset > 0;
    }

    /// Whether a smooth return is in progress
    pub fn is_returning(&self) -> bool {
        self.returning
    }

    /// Advance the return animation one frame. Returns true while it continues.
    ///
    /// Each frame covers a quarter of the remaining distance, at least one row.
    pub fn step_return(&mut self) -> bool {
        if !self.returning {
            return false;
        }
        let step = (self.offset / 4).max(1);
        self.offset = self.offset.saturating_sub(step);
        if self.offset == 0 {
            self.returning = false;
        }
        self.returning
    }
}
