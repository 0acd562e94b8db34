//! # Board Component
//!
//! The 3×3 grid. The active cell shows the "B" marker; the rest are empty.
//! Cells are fixed-size bordered blocks centered in whatever area the board
//! is given.

use crate::core::grid::{GRID_SIZE, Position};
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

pub const MARKER: &str = "B";
const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

pub struct Board {
    pub position: Position,
}

impl Board {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Height needed to draw every row without clipping.
    pub fn required_height() -> u16 {
        CELL_HEIGHT * GRID_SIZE as u16
    }

    /// Screen rectangles for every cell, in index order.
    pub fn cell_areas(area: Rect) -> Vec<Rect> {
        let rows = Layout::vertical([Constraint::Length(CELL_HEIGHT); GRID_SIZE as usize])
            .flex(Flex::Center)
            .split(area);
        rows.iter()
            .flat_map(|row| {
                Layout::horizontal([Constraint::Length(CELL_WIDTH); GRID_SIZE as usize])
                    .flex(Flex::Center)
                    .split(*row)
                    .to_vec()
            })
            .collect()
    }
}

impl Component for Board {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        for (index, cell) in Board::cell_areas(area).into_iter().enumerate() {
            let active = index == self.position.index() as usize;
            let (text, style) = if active {
                (
                    MARKER,
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("", Style::default().fg(Color::DarkGray))
            };

            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(style);
            let paragraph = Paragraph::new(text)
                .block(block)
                .style(style)
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, cell);
        }
    }
}
