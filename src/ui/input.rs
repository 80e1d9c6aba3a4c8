use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, Input, Key, TextArea};

/// Single-line identifier input backed by a [`TextArea`].
pub struct IdentifierInput<'a> {
    textarea: TextArea<'a>,
}

impl IdentifierInput<'_> {
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        let mut textarea = if initial.is_empty() {
            TextArea::default()
        } else {
            TextArea::new(vec![initial])
        };
        textarea.set_placeholder_text("Enter ID number...");
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(CursorMove::End);
        Self { textarea }
    }

    /// Current input text.
    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Replace the input content, leaving the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.textarea = TextArea::new(vec![text.into()]);
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea.move_cursor(CursorMove::End);
    }

    /// Forward a key event to the textarea, rejecting newline insertion so
    /// the input stays on one line. Returns whether the content changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let input = Input::from(key);
        if matches!(input.key, Key::Enter) {
            return false;
        }
        self.textarea.input(input)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}
