//! Display rendering
//!
//! Screen layout, top to bottom:
//!
//! ```text
//!            Exam Question Finder
//!   Search for exam questions and their correct answers
//!
//! > query text______________________ × [ Search ]
//!
//! Results                                   <- scrollable rows
//! ── 1 ────────────────────────────────────
//!   What is 2+2?
//!     A. 3
//!   ✓ B. 4
//! status message                  [ ↑ Top ]
//! ```

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::card::Row;
use crate::error::Result;
use crate::input::Action;
use crate::search::SearchState;
use crate::style::Style;
use crate::terminal::Terminal;
use crate::viewport::Viewport;

const TITLE: &str = "Exam Question Finder";
const SUBTITLE: &str = "Search for exam questions and their correct answers";
const PLACEHOLDER: &str = "Search for a question or topic...";
const FIELD_PROMPT: &str = "> ";
const CLEAR_LABEL: &str = " × ";
const SEARCH_LABEL: &str = "[ Search ]";
const TOP_LABEL: &str = "[ ↑ Top ]";

/// Screen row of the query field
const FIELD_ROW: u16 = 3;
/// Rows above the results area
const HEADER_ROWS: u16 = 5;
/// Rows below the results area
const FOOTER_ROWS: u16 = 1;

/// Height of the results area for a terminal of `rows` rows
pub fn results_height(rows: u16) -> usize {
    rows.saturating_sub(HEADER_ROWS + FOOTER_ROWS).max(1) as usize
}

/// A clickable area on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Button {
    row: u16,
    start_col: u16,
    end_col: u16,
    action: Action,
}

/// Everything a frame shows
pub struct Frame<'a> {
    pub search: &'a SearchState,
    pub rows: &'a [Row],
    pub viewport: &'a Viewport,
}

/// Display state
pub struct Display {
    /// Whether a full redraw is needed
    needs_redraw: bool,
    /// Message to show in the status line
    message: Option<String>,
    /// Buttons drawn by the last render
    buttons: Vec<Button>,
}

impl Display {
    pub fn new() -> Self {
        Self {
            needs_redraw: true,
            message: None,
            buttons: Vec::new(),
        }
    }

    /// Mark that a full redraw is needed
    pub fn force_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Set a message to display
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear the message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Action of the button at a screen position, if any
    pub fn hit_test(&self, row: u16, col: u16) -> Option<Action> {
        self.buttons
            .iter()
            .find(|b| b.row == row && col >= b.start_col && col < b.end_col)
            .map(|b| b.action)
    }

    /// Render a full frame
    pub fn render(&mut self, terminal: &mut Terminal, frame: &Frame<'_>) -> Result<()> {
        let cols = terminal.cols() as usize;
        let rows = terminal.rows();

        if self.needs_redraw {
            terminal.clear_screen()?;
        }
        terminal.set_cursor_visible(false)?;
        self.buttons.clear();

        self.render_header(terminal, cols)?;
        let cursor_col = self.render_field(terminal, frame.search, cols)?;
        self.render_results(terminal, frame, cols, rows)?;
        self.render_status(terminal, frame.viewport, rows.saturating_sub(1), cols)?;

        terminal.move_cursor(FIELD_ROW, cursor_col)?;
        terminal.set_cursor_visible(true)?;
        terminal.flush()?;

        self.needs_redraw = false;
        Ok(())
    }

    /// Render title and subtitle, centered
    fn render_header(&self, terminal: &mut Terminal, cols: usize) -> Result<()> {
        for (row, text, style) in [
            (0u16, TITLE, Style::title()),
            (1, SUBTITLE, Style::default().with_dim()),
        ] {
            terminal.move_cursor(row, 0)?;
            let text = truncate_to_width(text, cols);
            terminal.write_str(&" ".repeat(cols.saturating_sub(text.width()) / 2))?;
            terminal.apply_style(&style)?;
            terminal.write_str(&text)?;
            terminal.reset_attributes()?;
            terminal.clear_to_eol()?;
        }
        terminal.move_cursor(2, 0)?;
        terminal.clear_to_eol()?;
        Ok(())
    }

    /// Render the query field with its clear and search buttons.
    /// Returns the screen column of the text cursor.
    fn render_field(&mut self, terminal: &mut Terminal, search: &SearchState, cols: usize) -> Result<u16> {
        let prompt_width = FIELD_PROMPT.width();
        let buttons_width = CLEAR_LABEL.width() + 1 + SEARCH_LABEL.width();
        let field_width = cols.saturating_sub(prompt_width + buttons_width).max(1);

        terminal.move_cursor(FIELD_ROW, 0)?;
        terminal.write_str(FIELD_PROMPT)?;

        let (visible, cursor_offset) = field_window(&search.query, search.cursor(), field_width);
        terminal.apply_style(&Style::reverse())?;
        if search.query.is_empty() {
            let placeholder = truncate_to_width(PLACEHOLDER, field_width);
            terminal.apply_style(&Style::reverse().with_dim())?;
            terminal.write_str(&placeholder)?;
            terminal.apply_style(&Style::reverse())?;
            terminal.write_str(&" ".repeat(field_width - placeholder.width()))?;
        } else {
            terminal.write_str(&visible)?;
            terminal.write_str(&" ".repeat(field_width.saturating_sub(visible.width())))?;
        }
        terminal.reset_attributes()?;

        let mut col = prompt_width + field_width;
        if search.query.is_empty() {
            terminal.write_str(&" ".repeat(CLEAR_LABEL.width()))?;
        } else {
            terminal.write_str(CLEAR_LABEL)?;
            self.add_button(FIELD_ROW, col, CLEAR_LABEL.width(), Action::Clear);
        }
        col += CLEAR_LABEL.width();

        terminal.write_str(" ")?;
        col += 1;
        terminal.apply_style(&Style::button())?;
        terminal.write_str(SEARCH_LABEL)?;
        terminal.reset_attributes()?;
        self.add_button(FIELD_ROW, col, SEARCH_LABEL.width(), Action::Submit);
        terminal.clear_to_eol()?;

        terminal.move_cursor(FIELD_ROW + 1, 0)?;
        terminal.clear_to_eol()?;

        let cursor_col = (prompt_width + cursor_offset).min(cols.saturating_sub(1));
        Ok(cursor_col as u16)
    }

    /// Render the visible slice of result rows
    fn render_results(&self, terminal: &mut Terminal, frame: &Frame<'_>, cols: usize, rows: u16) -> Result<()> {
        let height = frame.viewport.height();
        let offset = frame.viewport.offset();

        for i in 0..height {
            let screen_row = HEADER_ROWS + i as u16;
            if screen_row >= rows.saturating_sub(FOOTER_ROWS) {
                break;
            }
            terminal.move_cursor(screen_row, 0)?;
            if let Some(row) = frame.rows.get(offset + i) {
                self.render_row(terminal, row, cols)?;
            }
            terminal.clear_to_eol()?;
        }
        Ok(())
    }

    /// Render one row of styled pieces, cut at the screen edge
    fn render_row(&self, terminal: &mut Terminal, row: &Row, cols: usize) -> Result<()> {
        let mut remaining = cols;
        for piece in &row.pieces {
            if remaining == 0 {
                break;
            }
            let text = truncate_to_width(&piece.text, remaining);
            remaining -= text.width();
            let style = piece.style();
            if style.is_default() {
                terminal.write_str(&text)?;
            } else {
                terminal.apply_style(&style)?;
                terminal.write_str(&text)?;
                terminal.reset_attributes()?;
            }
        }
        Ok(())
    }

    /// Render the status line and the scroll-to-top button
    fn render_status(&mut self, terminal: &mut Terminal, viewport: &Viewport, row: u16, cols: usize) -> Result<()> {
        terminal.move_cursor(row, 0)?;

        let show_button = viewport.show_top_button() && cols > TOP_LABEL.width();
        let text_cols = if show_button {
            cols.saturating_sub(TOP_LABEL.width() + 1)
        } else {
            cols
        };

        let msg = self
            .message
            .as_deref()
            .unwrap_or("Enter: search  Esc: clear  ↑/↓ PgUp/PgDn: scroll  Ctrl-Q: quit");
        let msg = truncate_to_width(msg, text_cols);
        terminal.apply_style(&Style::default().with_dim())?;
        terminal.write_str(&msg)?;
        terminal.reset_attributes()?;
        terminal.clear_to_eol()?;

        if show_button {
            let col = cols - TOP_LABEL.width();
            terminal.move_cursor(row, col as u16)?;
            terminal.apply_style(&Style::button())?;
            terminal.write_str(TOP_LABEL)?;
            terminal.reset_attributes()?;
            self.add_button(row, col, TOP_LABEL.width(), Action::ScrollToTop);
        }
        Ok(())
    }

    fn add_button(&mut self, row: u16, col: usize, width: usize, action: Action) {
        self.buttons.push(Button {
            row,
            start_col: col as u16,
            end_col: (col + width) as u16,
            action,
        });
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}

/// The part of `query` that fits in `width` columns with the cursor visible,
/// and the cursor's column within it.
fn field_window(query: &str, cursor: usize, width: usize) -> (String, usize) {
    let chars: Vec<char> = query.chars().collect();
    let cursor = cursor.min(chars.len());
    let col_of = |from: usize, to: usize| -> usize { chars[from..to].iter().map(|c| c.width().unwrap_or(0)).sum() };

    // Leave one column for the cursor itself
    let mut start = 0;
    while start < cursor && col_of(start, cursor) + 1 > width {
        start += 1;
    }

    let visible: String = chars[start..].iter().collect();
    (truncate_to_width(&visible, width), col_of(start, cursor))
}

/// Truncate a string to fit within a display width
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("hi", 10), "hi");
        assert_eq!(truncate_to_width("日本語", 5), "日本");
    }

    #[test]
    fn test_field_window_short_query() {
        assert_eq!(field_window("cat", 3, 10), ("cat".to_string(), 3));
        assert_eq!(field_window("cat", 1, 10), ("cat".to_string(), 1));
        assert_eq!(field_window("", 0, 10), (String::new(), 0));
    }

    #[test]
    fn test_field_window_scrolls_to_cursor() {
        let (visible, col) = field_window("abcdefghij", 10, 5);
        assert_eq!(visible, "ghij");
        assert_eq!(col, 4);

        let (visible, col) = field_window("abcdefghij", 2, 5);
        assert_eq!(visible, "abcde");
        assert_eq!(col, 2);
    }

    #[test]
    fn test_results_height() {
        assert_eq!(results_height(24), 18);
        assert_eq!(results_height(3), 1);
    }

    #[test]
    fn test_hit_test() {
        let mut display = Display::new();
        display.add_button(3, 40, 10, Action::Submit);
        display.add_button(23, 70, 9, Action::ScrollToTop);

        assert_eq!(display.hit_test(3, 40), Some(Action::Submit));
        assert_eq!(display.hit_test(3, 49), Some(Action::Submit));
        assert_eq!(display.hit_test(3, 50), None);
        assert_eq!(display.hit_test(23, 75), Some(Action::ScrollToTop));
        assert_eq!(display.hit_test(10, 45), None);
    }
}
