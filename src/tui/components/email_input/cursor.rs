//! Cursor position tracking for the EmailInput.
//!
//! `CursorState` owns the cursor byte offset and the horizontal scroll.
//! All methods accept `buffer: &str` explicitly; the text itself is owned
//! by `GridState` and only mirrored by the input.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Left border plus one column of padding.
pub(super) const BORDER_OFFSET: u16 = 1;
/// Both borders.
pub(super) const HORIZONTAL_OVERHEAD: u16 = 2;

pub(super) struct CursorState {
    /// Cursor position as byte offset in buffer (0..=buffer.len())
    pub pos: usize,
    /// First visible display column when the text is wider than the field
    pub scroll_offset: u16,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    /// Keep `pos` on a char boundary inside `buffer` after the text changed
    /// underneath us.
    pub fn clamp(&mut self, buffer: &str) {
        self.pos = self.pos.min(buffer.len());
        while !buffer.is_char_boundary(self.pos) {
            self.pos -= 1;
        }
    }

    /// Display column of the cursor within the whole buffer.
    pub fn column(&self, buffer: &str) -> u16 {
        buffer[..self.pos].width() as u16
    }

    /// Scroll just enough to keep the cursor inside the field.
    pub fn update_scroll_offset(&mut self, buffer: &str, area_width: u16) {
        let visible = area_width.saturating_sub(HORIZONTAL_OVERHEAD).max(1);
        let column = self.column(buffer);
        if column < self.scroll_offset {
            self.scroll_offset = column;
        } else if column >= self.scroll_offset + visible {
            self.scroll_offset = column + 1 - visible;
        }
    }

    /// Screen position of the cursor inside a bordered field drawn at `area`.
    pub fn screen_pos(&self, buffer: &str, area: Rect) -> (u16, u16) {
        let column = self.column(buffer).saturating_sub(self.scroll_offset);
        (area.x + BORDER_OFFSET + column, area.y + BORDER_OFFSET)
    }
}

pub(super) fn prev_char_boundary(buffer: &str, pos: usize) -> usize {
    buffer[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

pub(super) fn next_char_boundary(buffer: &str, pos: usize) -> usize {
    buffer[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(buffer.len())
}
