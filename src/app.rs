//! Finder state and main loop

use std::time::Duration;

use tracing::{debug, info};

use crate::card::{results_rows, Row, Terms};
use crate::config::{ChoiceHighlight, Config};
use crate::display::{results_height, Display, Frame};
use crate::error::Result;
use crate::input::{translate_event, Action};
use crate::question::QuestionRecord;
use crate::search::SearchState;
use crate::terminal::Terminal;
use crate::viewport::Viewport;

/// Time between frames of the scroll-to-top animation
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Search state and result layout, independent of the terminal
pub struct Finder {
    /// Loaded once, never mutated
    dataset: Vec<QuestionRecord>,
    config: Config,
    pub search: SearchState,
    pub viewport: Viewport,
    /// Rendered result rows for the current width
    rows: Vec<Row>,
    /// Screen width the rows are wrapped to
    width: usize,
    /// Status line text
    status: Option<String>,
    /// Whether the finder is running
    running: bool,
}

impl Finder {
    /// Create a finder for a terminal of `cols` x `rows`
    pub fn new(dataset: Vec<QuestionRecord>, config: Config, cols: u16, rows: u16) -> Self {
        let viewport = Viewport::new(results_height(rows), config.scroll_top_threshold);
        let mut finder = Self {
            dataset,
            config,
            search: SearchState::new(),
            viewport,
            rows: Vec::new(),
            width: cols as usize,
            status: None,
            running: true,
        };
        finder.status = Some(format!("{} questions loaded", finder.dataset.len()));
        finder.rebuild_rows();
        finder
    }

    /// Rows of the results area
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Status line text
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Keyword for choice highlighting
    fn choice_term(&self) -> &str {
        match self.config.choice_highlight {
            ChoiceHighlight::Live => &self.search.query,
            ChoiceHighlight::Committed => &self.search.committed_term,
        }
    }

    /// Lay the current results out again
    fn rebuild_rows(&mut self) {
        let terms = Terms {
            question: &self.search.committed_term,
            choices: self.choice_term(),
        };
        let records = self.search.result_records(&self.dataset);
        self.rows = results_rows(records, terms, Some(self.width));
        self.viewport.set_content_rows(self.rows.len());
    }

    /// Execute the search for the current query
    fn submit(&mut self) {
        let count = self.search.commit(&self.dataset, self.config.empty_query);
        info!(query = %self.search.query, results = count, "search");
        self.status = Some(match count {
            0 => "No results found.".to_string(),
            1 => "1 result".to_string(),
            n => format!("{} results", n),
        });
        self.viewport.reset();
        self.rebuild_rows();
    }

    /// Apply a terminal resize
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.width = cols as usize;
        self.viewport.set_height(results_height(rows));
        self.rebuild_rows();
    }

    /// Apply one user action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Insert(ch) => {
                self.search.insert_char(ch);
                self.rebuild_rows();
            }
            Action::Backspace => {
                if self.search.backspace() {
                    self.rebuild_rows();
                }
            }
            Action::Delete => {
                if self.search.delete() {
                    self.rebuild_rows();
                }
            }
            Action::CursorLeft => self.search.move_left(),
            Action::CursorRight => self.search.move_right(),
            Action::CursorHome => self.search.move_home(),
            Action::CursorEnd => self.search.move_end(),
            Action::Clear => {
                self.search.clear();
                self.rebuild_rows();
            }
            Action::Submit => self.submit(),
            Action::ScrollUp(n) => self.viewport.scroll_up(n),
            Action::ScrollDown(n) => self.viewport.scroll_down(n),
            Action::PageUp => self.viewport.page_up(),
            Action::PageDown => self.viewport.page_down(),
            Action::ScrollToTop => self.viewport.start_return_to_top(),
            Action::Resize(cols, rows) => self.resize(cols, rows),
            Action::Quit => self.running = false,
            // Handled by the terminal side
            Action::Click { .. } | Action::Redraw => {}
        }
    }
}

/// Interactive finder bound to a terminal
pub struct App {
    finder: Finder,
    terminal: Terminal,
    display: Display,
}

impl App {
    /// Create the app around a loaded dataset
    pub fn new(terminal: Terminal, dataset: Vec<QuestionRecord>, config: Config) -> Self {
        let finder = Finder::new(dataset, config, terminal.cols(), terminal.rows());
        Self {
            finder,
            terminal,
            display: Display::new(),
        }
    }

    /// Run the main loop until the user quits
    pub fn run(&mut self) -> Result<()> {
        self.display.force_redraw();

        while self.finder.is_running() {
            match self.finder.status() {
                Some(status) => self.display.set_message(status),
                None => self.display.clear_message(),
            }

            let frame = Frame {
                search: &self.finder.search,
                rows: self.finder.rows(),
                viewport: &self.finder.viewport,
            };
            self.display.render(&mut self.terminal, &frame)?;

            // Animate the return to top between input events
            if self.finder.viewport.is_returning() && !self.terminal.poll_event(FRAME_INTERVAL)? {
                self.finder.viewport.step_return();
                continue;
            }

            let event = self.terminal.read_event()?;
            if let Some(action) = translate_event(event) {
                self.dispatch(action);
            }
        }

        info!("finder closed");
        Ok(())
    }

    /// Route an action, resolving clicks against the drawn buttons
    fn dispatch(&mut self, action: Action) {
        match action {
            Action::Click { row, col } => {
                if let Some(target) = self.display.hit_test(row, col) {
                    debug!(?target, row, col, "button clicked");
                    self.finder.handle_action(target);
                }
            }
            Action::Redraw => self.display.force_redraw(),
            Action::Resize(..) => {
                self.display.force_redraw();
                self.finder.handle_action(action);
            }
            _ => self.finder.handle_action(action),
        }
    }
}
