//! # Actions
//!
//! Everything that can happen to the grid becomes an `Action`.
//! User presses an arrow? That's `Action::Move(direction)`.
//! The endpoint answers? That's `Action::SubmissionFinished(result)`.
//!
//! `update()` swaps in the next `GridState` and tells the caller what
//! side effect, if any, to run. The reducer itself never touches the network.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::controller::GridController;
use crate::core::grid::Direction;
use crate::submission::{ResultPayload, ResultResponse, SubmitError};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Move(Direction),
    Reset,
    SetEmail(String),
    Submit,
    SubmissionFinished(Result<ResultResponse, SubmitError>),
    Quit,
}

/// Side effects the caller must perform after `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Deliver this payload and feed the result back as `SubmissionFinished`.
    Submit(ResultPayload),
    Quit,
}

pub fn update(controller: &mut GridController, action: Action) -> Effect {
    debug!("update: {:?}", action);
    let state = &controller.state;

    match action {
        Action::Move(direction) => {
            controller.state = state.moved(direction);
            Effect::None
        }
        Action::Reset => {
            controller.state = state.reset();
            Effect::None
        }
        Action::SetEmail(email) => {
            controller.state = state.with_email(email);
            Effect::None
        }
        Action::Submit => {
            if state.is_submitting() {
                info!("Submit ignored: a submission is already in flight");
                return Effect::None;
            }
            match state.begin_submit() {
                Ok((payload, next)) => {
                    controller.state = next;
                    Effect::Submit(payload)
                }
                Err(rejected) => {
                    controller.state = rejected;
                    Effect::None
                }
            }
        }
        Action::SubmissionFinished(result) => {
            if let Err(e) = &result {
                warn!("Submission failed: {}", e);
            } else {
                info!("Submission accepted");
            }
            controller.state = state.finish_submit(&result);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
