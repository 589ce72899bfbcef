use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Body of `POST /api/sendEmail`. Fields are optional on the wire so the
/// server can answer missing values with its own validation messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct SendEmailRequest {
    pub email: Option<String>,
    pub goal: Option<serde_json::Value>,
    #[serde(rename = "type")]
    pub goal_type: Option<String>,
}

/// `{ message, error? }` as returned by every API route on failure and by
/// the email route on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MessageBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }
}
