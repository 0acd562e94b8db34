//! # TitleBar Component
//!
//! Top line of the screen: app name, the endpoint results go to, and a
//! "Submitting…" marker while a result is on the wire.
//!
//! Purely presentational. All data arrives as props.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Where results are POSTed
    pub endpoint: String,
    /// Whether a submission is in flight
    pub submitting: bool,
}

impl TitleBar {
    pub fn new(endpoint: String, submitting: bool) -> Self {
        Self {
            endpoint,
            submitting,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Gridwalk", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" (results: {})", self.endpoint),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if self.submitting {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("Submitting…", Style::default().fg(Color::Yellow)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
