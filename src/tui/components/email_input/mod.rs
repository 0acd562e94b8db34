//! # EmailInput Component
//!
//! Single-line text field for the submission email.
//!
//! ## State Management
//!
//! The text is a prop: `GridState` owns the email, and the input mirrors it
//! through `sync()`. Edits are reported as `EmailEvent::Changed` with the
//! full new text; the event loop turns that into `Action::SetEmail`.
//! Cursor position and horizontal scroll stay local in `CursorState`.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::{CursorState, next_char_boundary, prev_char_boundary};

pub const PLACEHOLDER: &str = "type email";
pub const EMAIL_INPUT_HEIGHT: u16 = 3;

/// High-level events emitted by the EmailInput
#[derive(Debug, Clone, PartialEq)]
pub enum EmailEvent {
    /// Text changed; carries the whole new value
    Changed(String),
    /// Enter pressed
    Submit,
}

pub struct EmailInput {
    /// Mirrored email text (Prop, see `sync`)
    pub text: String,
    /// Whether keystrokes are currently routed here (Prop)
    pub focused: bool,
    cursor: CursorState,
}

impl Default for EmailInput {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailInput {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            focused: false,
            cursor: CursorState::new(),
        }
    }

    /// Adopt the state's email if it changed outside this component
    /// (reset, or cleared after a successful submission).
    pub fn sync(&mut self, email: &str) {
        if self.text == email {
            return;
        }
        self.text = email.to_string();
        if self.text.is_empty() {
            self.cursor.reset();
        } else {
            self.cursor.clamp(&self.text);
        }
    }

    fn changed(&self) -> Option<EmailEvent> {
        Some(EmailEvent::Changed(self.text.clone()))
    }

    /// The slice of text that fits after horizontal scrolling.
    fn visible_text(&self) -> String {
        let mut skipped = 0u16;
        self.text
            .chars()
            .skip_while(|c| {
                if skipped >= self.cursor.scroll_offset {
                    return false;
                }
                skipped += c.width().unwrap_or(0) as u16;
                true
            })
            .collect()
    }
}

impl Component for EmailInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.cursor.update_scroll_offset(&self.text, area.width);

        let border_color = if self.focused { Color::Green } else { Color::DarkGray };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title("Email");

        let paragraph = if self.text.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.visible_text()).style(Style::default().fg(Color::Green))
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            frame.set_cursor_position(self.cursor.screen_pos(&self.text, area));
        }
    }
}

impl EventHandler for EmailInput {
    type Event = EmailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.text.insert(self.cursor.pos, *c);
                self.cursor.pos += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line field: drop any line breaks from the paste
                let line: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
                if line.is_empty() {
                    return None;
                }
                self.text.insert_str(self.cursor.pos, &line);
                self.cursor.pos += line.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor.pos == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.text, self.cursor.pos);
                self.text.drain(prev..self.cursor.pos);
                self.cursor.pos = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor.pos >= self.text.len() {
                    return None;
                }
                let next = next_char_boundary(&self.text, self.cursor.pos);
                self.text.drain(self.cursor.pos..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor.pos = prev_char_boundary(&self.text, self.cursor.pos);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor.pos = next_char_boundary(&self.text, self.cursor.pos);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor.pos = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor.pos = self.text.len();
                None
            }
            TuiEvent::Submit => Some(EmailEvent::Submit),
            _ => None,
        }
    }
}
