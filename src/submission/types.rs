use serde::{Deserialize, Serialize};

/// Body of the result POST. Field order matches the wire format.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ResultPayload {
    pub x: u8,
    pub y: u8,
    pub steps: u32,
    pub email: String,
}

/// What the result endpoint sends back. Anything besides `message` is ignored.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl ResultResponse {
    /// The server's message, if it sent a non-empty one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }
}
