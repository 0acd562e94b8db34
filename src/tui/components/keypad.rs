//! # Keypad Component
//!
//! A row of clickable buttons mirroring the keyboard commands:
//! `LEFT  UP  RIGHT  DOWN  RESET`. The button rectangles are computed the
//! same way for drawing and for mouse hit testing, so a click always lands
//! on the button the user sees.

use crate::core::action::Action;
use crate::core::grid::Direction;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadButton {
    Move(Direction),
    Reset,
}

impl KeypadButton {
    pub const ALL: [KeypadButton; 5] = [
        KeypadButton::Move(Direction::Left),
        KeypadButton::Move(Direction::Up),
        KeypadButton::Move(Direction::Right),
        KeypadButton::Move(Direction::Down),
        KeypadButton::Reset,
    ];

    pub fn label(self) -> &'static str {
        match self {
            KeypadButton::Move(Direction::Left) => "LEFT",
            KeypadButton::Move(Direction::Up) => "UP",
            KeypadButton::Move(Direction::Right) => "RIGHT",
            KeypadButton::Move(Direction::Down) => "DOWN",
            KeypadButton::Reset => "RESET",
        }
    }

    pub fn action(self) -> Action {
        match self {
            KeypadButton::Move(direction) => Action::Move(direction),
            KeypadButton::Reset => Action::Reset,
        }
    }
}

const BUTTON_WIDTH: u16 = 9;
pub const KEYPAD_HEIGHT: u16 = 3;

pub struct Keypad {
    /// Dim the buttons while the email field has focus
    pub dimmed: bool,
}

impl Keypad {
    pub fn button_areas(area: Rect) -> Vec<(KeypadButton, Rect)> {
        let areas = Layout::horizontal([Constraint::Length(BUTTON_WIDTH); 5])
            .flex(Flex::Center)
            .spacing(1)
            .split(area);
        KeypadButton::ALL.into_iter().zip(areas.iter().copied()).collect()
    }

    /// Which button, if any, is under the given screen cell.
    pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<KeypadButton> {
        Keypad::button_areas(area)
            .into_iter()
            .find(|(_, rect)| rect.contains((column, row).into()))
            .map(|(button, _)| button)
    }
}

impl Component for Keypad {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let color = if self.dimmed { Color::DarkGray } else { Color::White };
        for (button, rect) in Keypad::button_areas(area) {
            let paragraph = Paragraph::new(button.label())
                .block(Block::bordered().border_type(BorderType::Rounded))
                .style(Style::default().fg(color))
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, rect);
        }
    }
}
