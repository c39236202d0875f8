//! Receiver response handling.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON body returned by a receiver, forwarded verbatim.
///
/// The client never rejects a body based on its content. Callers that care
/// about application-level failures use [`ReceiverResponse::application_error`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiverResponse(Value);

impl ReceiverResponse {
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    pub fn body(&self) -> &Value {
        &self.0
    }

    pub fn into_body(self) -> Value {
        self.0
    }

    /// The body's `status` field, if it is a string.
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(Value::as_str)
    }

    /// The body's `message` field, if it is a string.
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// Returns the error message when the body reports `status: "error"`.
    ///
    /// Falls back to the whole body when no `message` is present.
    pub fn application_error(&self) -> Option<String> {
        match self.status() {
            Some(status) if status.eq_ignore_ascii_case("error") => Some(
                self.message()
                    .map(str::to_string)
                    .unwrap_or_else(|| self.0.to_string()),
            ),
            _ => None,
        }
    }

    pub fn to_pretty_string(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_default()
    }
}

impl From<Value> for ReceiverResponse {
    fn from(body: Value) -> Self {
        Self(body)
    }
}
