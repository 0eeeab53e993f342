#[cfg(test)]
#[path = "input_capture_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use tui_textarea::Input;
use tui_textarea::Key;
use tui_textarea::TextArea;

use crate::domain::models::InputValidationError;
use crate::domain::models::PendingAction;

const MAX_VALUE_CHARS: usize = 64;

/// Single line text prompt for a parameterized action.
pub struct InputCapture {
    pending: PendingAction,
    textarea: TextArea<'static>,
}

impl InputCapture {
    pub fn new(pending: PendingAction) -> InputCapture {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(pending.placeholder.clone());
        textarea.set_cursor_line_style(Style::default());
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

        return InputCapture { pending, textarea };
    }

    pub fn pending(&self) -> &PendingAction {
        return &self.pending;
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        return &self.textarea;
    }

    /// The raw, untrimmed buffer.
    pub fn value(&self) -> String {
        return self.textarea.lines().join("");
    }

    /// Edits the buffer. Line breaks are never inserted.
    pub fn handle_input(&mut self, input: Input) {
        match input {
            Input {
                key: Key::Enter, ..
            }
            | Input {
                key: Key::Char('m') | Key::Char('j'),
                ctrl: true,
                ..
            } => {}
            Input {
                key: Key::Char(_),
                ctrl: false,
                alt: false,
                ..
            } if self.value().chars().count() >= MAX_VALUE_CHARS => {}
            Input { key: Key::Tab, .. } => {}
            input => {
                if self.textarea.input(input) {
                    self.truncate();
                }
            }
        }
    }

    /// Drops characters before the cursor until the value fits the cap again.
    fn truncate(&mut self) {
        while self.value().chars().count() > MAX_VALUE_CHARS {
            if !self.textarea.delete_char() {
                break;
            }
        }
    }

    pub fn paste(&mut self, text: &str) {
        let room = MAX_VALUE_CHARS.saturating_sub(self.value().chars().count());
        let line: String = text
            .chars()
            .filter(|c| return !c.is_control())
            .take(room)
            .collect();
        self.textarea.insert_str(line);
    }

    /// The trimmed value, or an error when nothing but whitespace was typed.
    pub fn confirm(&self) -> Result<String, InputValidationError> {
        let value = self.value().trim().to_string();
        if value.is_empty() {
            return Err(InputValidationError::Empty);
        }

        return Ok(value);
    }
}
