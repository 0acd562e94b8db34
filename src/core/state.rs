//! # Grid State
//!
//! Everything the widget shows lives in one `GridState` value. Transitions
//! take the current value and return the next one; nothing mutates a field
//! in place, so a half-applied update can't be observed.
//!
//! ```text
//! GridState
//! ├── position: Position   // marker cell, 0..=8
//! ├── steps: u32           // accepted moves since reset
//! ├── message: String      // status line ("" = nothing shown)
//! ├── email: String        // form field text
//! └── phase: Phase         // Idle | Submitting
//! ```

use crate::core::grid::{Direction, Position};
use crate::submission::{ResultPayload, ResultResponse, SubmitError};

pub const EMAIL_REQUIRED: &str = "Ouch: email is required";
pub const SUBMIT_SUCCESS_NO_MESSAGE: &str = "Submission successful but no message returned.";
pub const SUBMIT_FAILED: &str = "An error occurred while submitting the form.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// A payload is on the wire and its result hasn't come back yet.
    Submitting,
}

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Email was blank; nothing was sent.
    Rejected,
    /// A submission is already in flight; nothing was sent.
    Busy,
    /// The endpoint accepted the payload. Carries the displayed message.
    Succeeded(String),
    /// Transport, status or parse failure. Carries the displayed message.
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridState {
    pub position: Position,
    pub steps: u32,
    pub message: String,
    pub email: String,
    pub phase: Phase,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// One step in `direction`, or a boundary notice if the edge is in the way.
    pub fn moved(&self, direction: Direction) -> Self {
        match self.position.neighbor(direction) {
            Some(position) => Self {
                position,
                steps: self.steps + 1,
                message: String::new(),
                ..self.clone()
            },
            None => Self {
                message: format!("You can't go {direction}"),
                ..self.clone()
            },
        }
    }

    /// Back to the initial board. An in-flight submission keeps its phase.
    pub fn reset(&self) -> Self {
        Self {
            phase: self.phase,
            ..Self::default()
        }
    }

    pub fn with_email(&self, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..self.clone()
        }
    }

    /// Validates the form. On success returns the payload and the
    /// `Submitting` state; on a blank email returns the rejected state.
    pub fn begin_submit(&self) -> Result<(ResultPayload, Self), Self> {
        if self.email.trim().is_empty() {
            return Err(Self {
                message: EMAIL_REQUIRED.to_string(),
                ..self.clone()
            });
        }
        let next = Self {
            phase: Phase::Submitting,
            ..self.clone()
        };
        Ok((self.payload(), next))
    }

    /// Applies the endpoint's answer. Success clears the email and leaves the
    /// result visible; failure keeps the email so the user can retry.
    pub fn finish_submit(&self, result: &Result<ResultResponse, SubmitError>) -> Self {
        match result {
            Ok(response) => Self {
                message: response
                    .message()
                    .unwrap_or(SUBMIT_SUCCESS_NO_MESSAGE)
                    .to_string(),
                email: String::new(),
                phase: Phase::Idle,
                ..self.clone()
            },
            Err(error) => Self {
                message: failure_message(error).to_string(),
                phase: Phase::Idle,
                ..self.clone()
            },
        }
    }

    pub fn payload(&self) -> ResultPayload {
        let (x, y) = self.position.coordinates();
        ResultPayload {
            x,
            y,
            steps: self.steps,
            email: self.email.clone(),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn coordinates_text(&self) -> String {
        let (x, y) = self.position.coordinates();
        format!("Coordinates ({x}, {y})")
    }

    pub fn steps_text(&self) -> String {
        let unit = if self.steps == 1 { "time" } else { "times" };
        format!("You moved {} {}", self.steps, unit)
    }
}

fn failure_message(error: &SubmitError) -> &str {
    match error {
        SubmitError::Api {
            message: Some(message),
            ..
        } if !message.is_empty() => message.as_str(),
        _ => SUBMIT_FAILED,
    }
}
