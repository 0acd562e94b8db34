use crate::core::state::GridState;
use crate::tui::component::Component;
use crate::tui::components::email_input::EMAIL_INPUT_HEIGHT;
use crate::tui::components::keypad::KEYPAD_HEIGHT;
use crate::tui::components::{Board, InfoBar, Keypad, MessageLine, TitleBar};
use crate::tui::{InputMode, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

const MAX_CONTENT_WIDTH: u16 = 60;

/// Where each piece of the screen goes. Shared by drawing and hit testing.
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub title: Rect,
    pub info: Rect,
    pub board: Rect,
    pub message: Rect,
    pub keypad: Rect,
    pub email: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(frame_area: Rect) -> Self {
        use Constraint::{Length, Max, Min};

        let [column] = Layout::horizontal([Max(MAX_CONTENT_WIDTH)])
            .flex(Flex::Center)
            .areas(frame_area);

        let [title, _, info, board, message, keypad, email, _, footer] = Layout::vertical([
            Length(1),
            Length(1),
            Length(1),
            Length(Board::required_height()),
            Length(1),
            Length(KEYPAD_HEIGHT),
            Length(EMAIL_INPUT_HEIGHT),
            Min(0),
            Length(1),
        ])
        .areas(column);

        Self {
            title,
            info,
            board,
            message,
            keypad,
            email,
            footer,
        }
    }
}

pub fn draw_ui(frame: &mut Frame, state: &GridState, tui: &mut TuiState) {
    let layout = ScreenLayout::new(frame.area());

    TitleBar::new(tui.endpoint.clone(), state.is_submitting()).render(frame, layout.title);

    InfoBar {
        coordinates: state.coordinates_text(),
        steps: state.steps_text(),
    }
    .render(frame, layout.info);

    Board::new(state.position).render(frame, layout.board);

    MessageLine {
        message: state.message.clone(),
    }
    .render(frame, layout.message);

    Keypad {
        dimmed: tui.input_mode == InputMode::Email,
    }
    .render(frame, layout.keypad);

    tui.email_input.focused = tui.input_mode == InputMode::Email;
    tui.email_input.render(frame, layout.email);

    let hints = Paragraph::new(key_hints(tui.input_mode)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, layout.footer);
}

fn key_hints(mode: InputMode) -> &'static str {
    match mode {
        InputMode::Grid => "←↑→↓/hjkl move · r reset · Tab email · Enter submit · q quit",
        InputMode::Email => "Enter submit · Tab/Esc back to grid · Ctrl+R reset · Ctrl+C quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::Direction;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(state: &GridState, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, state, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_initial_screen() {
        let mut tui = TuiState::new("http://localhost:9000/api/result".to_string());
        let text = screen_text(&GridState::new(), &mut tui);

        assert!(text.contains("Coordinates (2, 2)"));
        assert!(text.contains("You moved 0 times"));
        assert!(text.contains("B"));
        for label in ["LEFT", "UP", "RIGHT", "DOWN", "RESET"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains("type email"));
    }

    #[test]
    fn test_screen_after_move() {
        let mut tui = TuiState::new("http://x.test".to_string());
        let state = GridState::new().moved(Direction::Left);
        let text = screen_text(&state, &mut tui);
        assert!(text.contains("Coordinates (1, 2)"));
        assert!(text.contains("You moved 1 time"));
        assert!(!text.contains("You moved 1 times"));
    }

    #[test]
    fn test_screen_shows_message() {
        let mut tui = TuiState::new("http://x.test".to_string());
        let state = GridState::new().moved(Direction::Up).moved(Direction::Up);
        let text = screen_text(&state, &mut tui);
        assert!(text.contains("You can't go up"));
    }

    #[test]
    fn test_layout_sections_do_not_overlap() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 30));
        let order = [
            layout.title,
            layout.info,
            layout.board,
            layout.message,
            layout.keypad,
            layout.email,
            layout.footer,
        ];
        for pair in order.windows(2) {
            assert!(pair[0].bottom() <= pair[1].y);
        }
        assert_eq!(layout.board.height, Board::required_height());
        assert!(layout.keypad.width <= MAX_CONTENT_WIDTH);
    }
}
