//! # Grid Controller
//!
//! Owns the current `GridState` and the sink that submissions go to.
//! The synchronous commands are thin wrappers over `update()`. `submit()`
//! runs the whole round trip inline; the TUI drives the same two actions
//! but awaits the sink on a spawned task instead.

use std::sync::Arc;

use log::info;

use crate::core::action::{Action, Effect, update};
use crate::core::grid::Direction;
use crate::core::state::{GridState, SubmitOutcome};
use crate::submission::ResultSink;

pub struct GridController {
    pub state: GridState,
    pub sink: Arc<dyn ResultSink>,
}

impl GridController {
    pub fn new(sink: Arc<dyn ResultSink>) -> Self {
        info!("Grid controller using '{}' result sink", sink.name());
        Self {
            state: GridState::new(),
            sink,
        }
    }

    pub fn move_marker(&mut self, direction: Direction) {
        update(self, Action::Move(direction));
    }

    pub fn reset(&mut self) {
        update(self, Action::Reset);
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        update(self, Action::SetEmail(email.into()));
    }

    /// Validates, sends, and applies the answer.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let payload = match update(self, Action::Submit) {
            Effect::Submit(payload) => payload,
            _ if self.state.is_submitting() => return SubmitOutcome::Busy,
            _ => return SubmitOutcome::Rejected,
        };

        let result = self.sink.submit(&payload).await;
        let succeeded = result.is_ok();
        update(self, Action::SubmissionFinished(result));

        let message = self.state.message.clone();
        if succeeded {
            SubmitOutcome::Succeeded(message)
        } else {
            SubmitOutcome::Failed(message)
        }
    }
}
