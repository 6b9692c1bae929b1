//! Search field state
//!
//! `query` follows every keystroke. `committed_term` and `results` only
//! change when a search is executed, so editing the field afterwards does not
//! change which records are shown or how their questions are highlighted.

use tracing::debug;

use crate::filter::{matching_indices, EmptyQuery};
use crate::question::QuestionRecord;

/// Query field and results of the last executed search
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Current text in the input field
    pub query: String,
    /// Query as it was when the last search ran
    pub committed_term: String,
    /// Dataset indices matched by the last search, in dataset order
    pub results: Vec<usize>,
    /// Cursor position in the field, in chars
    cursor: usize,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor position in chars
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Byte offset of a char index in the query
    fn byte_offset(&self, char_idx: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_idx)
            .map(|(byte, _)| byte)
            .unwrap_or(self.query.len())
    }

    fn char_count(&self) -> usize {
        self.query.chars().count()
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.query.insert(at, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.query.remove(at);
        true
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.query.remove(at);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Reset the query field to empty. Results are untouched.
    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }

    /// Run the filter over `dataset` with the current query
    pub fn commit(&mut self, dataset: &[QuestionRecord], empty: EmptyQuery) -> usize {
        self.results = matching_indices(dataset, &self.query, empty);
        self.committed_term = self.query.clone();
        debug!(query = %self.query, results = self.results.len(), "search executed");
        self.results.len()
    }

    /// Records of the last search, in order
    pub fn result_records<'a>(&'a self, dataset: &'a [QuestionRecord]) -> impl Iterator<Item = &'a QuestionRecord> + 'a {
        self.results.iter().filter_map(move |&idx| dataset.get(idx))
    }
}
