//! Input handling - translate terminal events into finder actions

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Rows moved per mouse wheel notch
const WHEEL_ROWS: usize = 3;

/// Something the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Type a character into the query field
    Insert(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Reset the query field to empty
    Clear,
    /// Execute the search
    Submit,
    ScrollUp(usize),
    ScrollDown(usize),
    PageUp,
    PageDown,
    /// Smoothly return the results to the top
    ScrollToTop,
    /// Left click at a screen position
    Click { row: u16, col: u16 },
    /// Terminal resized to (cols, rows)
    Resize(u16, u16),
    Redraw,
    Quit,
}

/// Translate a crossterm event; `None` for events the finder ignores
pub fn translate_event(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        Event::Resize(cols, rows) => Some(Action::Resize(cols, rows)),
        _ => None,
    }
}

/// Translate a key event
pub fn translate_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent {
        code, modifiers, kind, ..
    } = event;

    // Only process key press events, ignore release and repeat
    // This is critical on Windows where crossterm sends all event types
    if kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);

    match code {
        KeyCode::Char(ch) if ctrl => match ch.to_ascii_lowercase() {
            'c' | 'q' => Some(Action::Quit),
            'u' => Some(Action::Clear),
            'a' => Some(Action::CursorHome),
            'e' => Some(Action::CursorEnd),
            'b' => Some(Action::CursorLeft),
            'f' => Some(Action::CursorRight),
            'h' => Some(Action::Backspace),
            'd' => Some(Action::Delete),
            't' => Some(Action::ScrollToTop),
            'l' => Some(Action::Redraw),
            'n' => Some(Action::ScrollDown(1)),
            'p' => Some(Action::ScrollUp(1)),
            'v' => Some(Action::PageDown),
            _ => None,
        },
        KeyCode::Char('v') if alt => Some(Action::PageUp),
        KeyCode::Char('<') if alt => Some(Action::ScrollToTop),
        KeyCode::Char(_) if alt => None,
        KeyCode::Char(ch) => Some(Action::Insert(ch)),
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Esc => Some(Action::Clear),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Delete => Some(Action::Delete),
        KeyCode::Left => Some(Action::CursorLeft),
        KeyCode::Right => Some(Action::CursorRight),
        KeyCode::Up => Some(Action::ScrollUp(1)),
        KeyCode::Down => Some(Action::ScrollDown(1)),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Home => Some(Action::ScrollToTop),
        _ => None,
    }
}

/// Translate a mouse event
pub fn translate_mouse(event: MouseEvent) -> Option<Action> {
    match event.kind {
        MouseEventKind::ScrollUp => Some(Action::ScrollUp(WHEEL_ROWS)),
        MouseEventKind::ScrollDown => Some(Action::ScrollDown(WHEEL_ROWS)),
        MouseEventKind::Down(MouseButton::Left) => Some(Action::Click {
            row: event.row,
            col: event.column,
        }),
        _ => None,
    }
}
