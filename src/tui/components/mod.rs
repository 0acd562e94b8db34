//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name, endpoint, in-flight marker
//! - `InfoBar` / `MessageLine`: coordinates, step count, status message
//! - `Board`: the 3×3 grid with the "B" marker
//! - `Keypad`: clickable command buttons (also does its own hit testing)
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `EmailInput`: single-line email field with a local cursor
//!
//! Components receive external data as props, not by reaching into
//! `GridState`, so each one can be rendered in isolation in tests:
//!
//! ```rust,ignore
//! let mut board = Board::new(state.position);
//! board.render(frame, area);
//! ```

pub mod board;
pub mod email_input;
pub mod info_bar;
pub mod keypad;
pub mod title_bar;

pub use board::Board;
pub use email_input::{EmailEvent, EmailInput};
pub use info_bar::{InfoBar, MessageLine};
pub use keypad::Keypad;
pub use title_bar::TitleBar;
