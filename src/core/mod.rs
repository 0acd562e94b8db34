//! # Core Application Logic
//!
//! The grid walk itself: board geometry, the state value, and the reducer.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • GridState (data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!         ┌────────────┐                  ┌────────────┐
//!         │    TUI     │                  │ Submission │
//!         │  Adapter   │                  │    sink    │
//!         │ (ratatui)  │                  │ (reqwest)  │
//!         └────────────┘                  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`grid`]: `Position`, `Direction` and the per-direction move rules
//! - [`state`]: `GridState`, the whole widget state in one value
//! - [`action`]: the `Action` enum and `update()`
//! - [`controller`]: `GridController`, state owner plus result sink
//! - [`config`]: config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod controller;
pub mod grid;
pub mod state;

pub use action::{Action, Effect, update};
pub use controller::GridController;
pub use grid::{Direction, Position};
pub use state::{GridState, Phase, SubmitOutcome};
