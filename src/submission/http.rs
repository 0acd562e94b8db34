//! HTTP result sink.
//!
//! POSTs the payload as JSON to a single endpoint and reads back a JSON
//! object. There is no timeout and no retry: the call waits for the network
//! stack to either answer or fail.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::CONTENT_TYPE;

use super::sink::{ResultSink, SubmitError};
use super::types::{ResultPayload, ResultResponse};

pub struct HttpResultSink {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpResultSink {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ResultSink for HttpResultSink {
    fn name(&self) -> &str {
        "http"
    }

    async fn submit(&self, payload: &ResultPayload) -> Result<ResultResponse, SubmitError> {
        info!(
            "POST {} (x={}, y={}, steps={})",
            self.endpoint, payload.x, payload.y, payload.steps
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Result endpoint status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!("Result endpoint error: {} - {}", status.as_u16(), body);
            // Error bodies are best-effort: keep the message if the server sent one.
            let message = serde_json::from_str::<ResultResponse>(&body)
                .ok()
                .and_then(|r| r.message().map(str::to_string));
            return Err(SubmitError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str::<ResultResponse>(&body).map_err(|e| {
            warn!("Unparseable result response: {}", e);
            SubmitError::Parse(e.to_string())
        })
    }
}
