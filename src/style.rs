//! Style types for text rendering

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Green,
    Yellow,
    BrightBlack,
    BrightGreen,
    BrightYellow,
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    /// Bold text
    pub bold: bool,
    /// Dim/faint text
    pub dim: bool,
    /// Reverse video (swap fg/bg)
    pub reverse: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Create a reverse video style (for the input field and buttons)
    pub fn reverse() -> Self {
        Self {
            reverse: true,
            ..Default::default()
        }
    }

    /// Style for the page title
    pub fn title() -> Self {
        Self::fg(Color::Yellow).with_bold()
    }

    /// Style for clickable buttons
    pub fn button() -> Self {
        Self::fg(Color::Black).with_bg(Color::Green).with_bold()
    }

    /// Style for a search match
    pub fn highlight() -> Self {
        Self::fg(Color::Black).with_bg(Color::BrightYellow).with_bold()
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set dim
    pub fn with_dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// What a piece of rendered text is, independent of how it looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    /// Question text
    Title,
    /// Descriptions, image references, hints
    Muted,
    /// A correct choice
    Correct,
    /// Card separators
    Rule,
}

impl Tone {
    /// Terminal style for this tone
    pub fn style(self) -> Style {
        match self {
            Tone::Normal => Style::default(),
            Tone::Title => Style::default().with_bold(),
            Tone::Muted => Style::default().with_dim(),
            Tone::Correct => Style::fg(Color::BrightGreen).with_bold(),
            Tone::Rule => Style::fg(Color::BrightBlack),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert!(style.is_default());
        assert_eq!(style.fg, Color::Default);
        assert_eq!(style.bg, Color::Default);
        assert!(!style.bold);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Color::Yellow).with_bold().with_bg(Color::Green);
        assert_eq!(style.fg, Color::Yellow);
        assert_eq!(style.bg, Color::Green);
        assert!(style.bold);
        assert!(!style.is_default());
    }

    #[test]
    fn test_tone_styles() {
        assert!(Tone::Normal.style().is_default());
        assert!(Tone::Title.style().bold);
        assert!(Tone::Muted.style().dim);
        assert_eq!(Tone::Correct.style().fg, Color::BrightGreen);
        assert_eq!(Style::highlight().bg, Color::BrightYellow);
        assert_eq!(Style::button().bg, Color::Green);
    }
}
