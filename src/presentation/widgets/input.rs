//! Text input widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Text input field widget.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
    numeric: bool,
    placeholder: String,
    label: String,
}

impl TextInput {
    /// Creates new input with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            numeric: false,
            placeholder: String::new(),
            label: label.into(),
        }
    }

    /// Restricts input to ASCII digits.
    ///
    /// Mirrors a numeric form field: the filter applies to keystrokes only,
    /// values set programmatically are not validated.
    #[must_use]
    pub fn numeric(mut self) -> Self {
        self.numeric = true;
        self
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns focus state.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Sets value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    /// Clears value.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Inserts character at cursor, ignoring non-digits in numeric mode.
    pub fn input_char(&mut self, c: char) {
        if self.numeric && !c.is_ascii_digit() {
            return;
        }
        self.value.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Deletes character before cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.value.remove(self.cursor);
        }
    }

    /// Deletes character at cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    /// Moves cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor += 1;
        }
    }

    /// Moves cursor to start.
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    fn display_text(&self) -> String {
        if self.value.is_empty() {
            self.placeholder.clone()
        } else {
            self.value.clone()
        }
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let text_style = if self.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);

        let display = self.display_text();
        let paragraph = Paragraph::new(display).style(text_style);

        block.render(area, buf);
        paragraph.render(inner, buf);

        if self.focused && inner.width > 0 {
            #[allow(clippy::cast_possible_truncation)]
            let cursor_x = inner.x + (self.cursor as u16).min(inner.width.saturating_sub(1));
            if let Some(cell) = buf.cell_mut((cursor_x, inner.y)) {
                cell.set_style(Style::default().bg(Color::Cyan).fg(Color::Black));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_editing() {
        let mut input = TextInput::new("Name");
        input.input_char('A');
        input.input_char('d');
        input.input_char('a');
        assert_eq!(input.value(), "Ada");

        input.backspace();
        assert_eq!(input.value(), "Ad");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "d");
    }

    #[test]
    fn test_numeric_mode_rejects_non_digits() {
        let mut input = TextInput::new("Age").numeric();
        input.input_char('3');
        input.input_char('x');
        input.input_char('.');
        input.input_char('-');
        input.input_char('0');
        assert_eq!(input.value(), "30");
    }

    #[test]
    fn test_numeric_mode_does_not_guard_set_value() {
        let mut input = TextInput::new("Age").numeric();
        input.set_value("thirty");
        assert_eq!(input.value(), "thirty");
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut input = TextInput::new("Name");
        input.set_value("Ada");
        input.clear();
        assert_eq!(input.value(), "");
        input.input_char('G');
        assert_eq!(input.value(), "G");
    }
}
