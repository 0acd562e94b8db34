//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::controller::GridController;
use crate::submission::{ResultPayload, ResultResponse, ResultSink, SubmitError};

/// A sink that accepts everything and says nothing.
pub struct NoopSink;

#[async_trait]
impl ResultSink for NoopSink {
    fn name(&self) -> &str {
        "noop"
    }

    async fn submit(&self, _payload: &ResultPayload) -> Result<ResultResponse, SubmitError> {
        Ok(ResultResponse::default())
    }
}

/// A sink that returns a canned result and records what it was sent.
pub struct StaticSink {
    result: Result<ResultResponse, SubmitError>,
    calls: AtomicUsize,
    last_payload: Mutex<Option<ResultPayload>>,
}

impl StaticSink {
    pub fn ok(response: ResultResponse) -> Self {
        Self::with_result(Ok(response))
    }

    pub fn err(error: SubmitError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(result: Result<ResultResponse, SubmitError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            last_payload: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_payload(&self) -> Option<ResultPayload> {
        self.last_payload.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResultSink for StaticSink {
    fn name(&self) -> &str {
        "static"
    }

    async fn submit(&self, payload: &ResultPayload) -> Result<ResultResponse, SubmitError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_payload.lock().unwrap() = Some(payload.clone());
        self.result.clone()
    }
}

/// Creates a test controller backed by a NoopSink.
pub fn test_controller() -> GridController {
    GridController::new(Arc::new(NoopSink))
}
