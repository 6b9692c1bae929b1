//! Result cards
//!
//! Turns matched question records into rows of styled pieces, wrapped to the
//! screen width. The same rows back both the interactive view and the plain
//! text printed by `--query`.

use unicode_width::UnicodeWidthChar;

use crate::highlight::{highlight, Segment};
use crate::question::QuestionRecord;
use crate::style::{Style, Tone};

/// Marker in front of a correct choice
pub const CORRECT_MARKER: &str = "✓ ";
/// Rule width when output is not wrapped
const UNWRAPPED_RULE_WIDTH: usize = 40;

/// A run of text with one look
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub text: String,
    pub tone: Tone,
    /// Part of a search match
    pub emphasized: bool,
}

impl Piece {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
            emphasized: false,
        }
    }

    fn from_segment(segment: Segment, tone: Tone) -> Self {
        Self {
            text: segment.text,
            tone,
            emphasized: segment.emphasized,
        }
    }

    /// Terminal style for this piece
    pub fn style(&self) -> Style {
        if self.emphasized {
            Style::highlight()
        } else {
            self.tone.style()
        }
    }
}

/// One screen row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub pieces: Vec<Piece>,
}

impl Row {
    fn single(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            pieces: vec![Piece::new(text, tone)],
        }
    }

    /// Row text with matches wrapped in brackets
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for piece in &self.pieces {
            if piece.emphasized {
                out.push('[');
                out.push_str(&piece.text);
                out.push(']');
            } else {
                out.push_str(&piece.text);
            }
        }
        out
    }
}

/// Keywords used to highlight a card
#[derive(Debug, Clone, Copy)]
pub struct Terms<'a> {
    /// Highlights the question text
    pub question: &'a str,
    /// Highlights the choice texts
    pub choices: &'a str,
}

/// Rows for a single question card. `width` of `None` disables wrapping.
pub fn card_rows(number: usize, record: &QuestionRecord, terms: Terms<'_>, width: Option<usize>) -> Vec<Row> {
    let mut rows = Vec::new();
    rows.push(rule_row(number, width));

    let indent = || vec![Piece::new("  ", Tone::Normal)];

    let question = highlight(&record.question, terms.question)
        .into_iter()
        .map(|s| Piece::from_segment(s, Tone::Title))
        .collect();
    rows.extend(wrap(indent(), question, width));

    if let Some(description) = record.description() {
        rows.extend(wrap(indent(), vec![Piece::new(description, Tone::Muted)], width));
    }

    for image in &record.question_images {
        let text = format!("[question image] {}", image);
        rows.extend(wrap(indent(), vec![Piece::new(text, Tone::Muted)], width));
    }
    for image in &record.answer_images {
        let text = format!("[answer image] {}", image);
        rows.extend(wrap(indent(), vec![Piece::new(text, Tone::Muted)], width));
    }

    for choice in &record.choices {
        let correct = record.is_correct(&choice.key);
        let (marker, tone) = if correct {
            (CORRECT_MARKER, Tone::Correct)
        } else {
            ("  ", Tone::Normal)
        };
        let prefix = vec![
            Piece::new("  ", Tone::Normal),
            Piece::new(marker, Tone::Correct),
            Piece::new(format!("{}. ", choice.key), if correct { Tone::Correct } else { Tone::Title }),
        ];
        let body = highlight(&choice.text, terms.choices)
            .into_iter()
            .map(|s| Piece::from_segment(s, tone))
            .collect();
        rows.extend(wrap(prefix, body, width));
    }

    rows.push(Row::default());
    rows
}

/// Rows for the whole results area: heading, then cards or an empty notice
pub fn results_rows<'a>(
    records: impl IntoIterator<Item = &'a QuestionRecord>,
    terms: Terms<'_>,
    width: Option<usize>,
) -> Vec<Row> {
    let mut rows = vec![Row::single("Results", Tone::Title)];
    let mut count = 0;

    for (i, record) in records.into_iter().enumerate() {
        rows.extend(card_rows(i + 1, record, terms, width));
        count += 1;
    }

    if count == 0 {
        rows.push(Row::single("No results found.", Tone::Muted));
    }

    rows
}

fn rule_row(number: usize, width: Option<usize>) -> Row {
    let label = format!("── {} ", number);
    let total = width.unwrap_or(UNWRAPPED_RULE_WIDTH);
    let fill = total.saturating_sub(str_width(&label));
    Row::single(format!("{}{}", label, "─".repeat(fill)), Tone::Rule)
}

fn str_width(s: &str) -> usize {
    s.chars().map(|ch| ch.width().unwrap_or(0)).sum()
}

/// Lay `body` out after `prefix`, breaking at newlines and at `width`.
///
/// Only the first row carries the prefix; later rows are indented by its
/// width so wrapped text lines up.
fn wrap(prefix: Vec<Piece>, body: Vec<Piece>, width: Option<usize>) -> Vec<Row> {
    let prefix_width: usize = prefix.iter().map(|p| str_width(&p.text)).sum();
    let available = width.map(|w| w.saturating_sub(prefix_width).max(1));
    let indent = " ".repeat(prefix_width);

    let mut rows = Vec::new();
    let mut current = Row { pieces: prefix };
    let mut used = 0;
    let mut has_content = false;

    let new_row = |rows: &mut Vec<Row>, current: &mut Row| {
        let finished = std::mem::replace(
            current,
            Row {
                pieces: vec![Piece::new(indent.clone(), Tone::Normal)],
            },
        );
        rows.push(finished);
    };

    for piece in body {
        let mut run = String::new();

        for ch in piece.text.chars() {
            if ch == '\n' {
                flush_run(&mut current, &mut run, &piece);
                new_row(&mut rows, &mut current);
                used = 0;
                has_content = false;
                continue;
            }

            let ch_width = ch.width().unwrap_or(0);
            if let Some(limit) = available {
                if has_content && used + ch_width > limit {
                    flush_run(&mut current, &mut run, &piece);
                    new_row(&mut rows, &mut current);
                    used = 0;
                }
            }

            run.push(ch);
            used += ch_width;
            has_content = true;
        }

        flush_run(&mut current, &mut run, &piece);
    }

    rows.push(current);
    rows
}

fn flush_run(row: &mut Row, run: &mut String, source: &Piece) {
    if run.is_empty() {
        return;
    }
    row.pieces.push(Piece {
        text: std::mem::take(run),
        tone: source.tone,
        emphasized: source.emphasized,
    });
}
