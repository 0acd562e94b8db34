//! # InfoBar Component
//!
//! Coordinates on the left, step count on the right. An optional message
//! line below them; an empty message renders nothing.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

pub struct InfoBar {
    pub coordinates: String,
    pub steps: String,
}

impl Component for InfoBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);
        let style = Style::default().add_modifier(Modifier::BOLD);

        frame.render_widget(Paragraph::new(self.coordinates.as_str()).style(style), left);
        frame.render_widget(
            Paragraph::new(self.steps.as_str())
                .style(style)
                .alignment(Alignment::Right),
            right,
        );
    }
}

/// The single status message. Latest message wins; empty shows nothing.
pub struct MessageLine {
    pub message: String,
}

impl Component for MessageLine {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.message.is_empty() {
            return;
        }
        let paragraph = Paragraph::new(self.message.as_str())
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}
