use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Action;

/// Body for executing a single action on a sandbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[serde(rename_all = "camelCase")]
#[setters(into)]
pub struct ExecuteActionRequest {
    pub action: Action,
    #[serde(default)]
    pub include_screen_shot: bool,
    #[serde(default)]
    pub include_cursor_position: bool,
}

impl ExecuteActionRequest {
    pub fn new(action: impl Into<Action>) -> Self {
        Self {
            action: action.into(),
            include_screen_shot: false,
            include_cursor_position: false,
        }
    }
}

/// Body for asking the remote service to parse raw model output into an
/// [`crate::ActionResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseTextRequest {
    pub text_content: String,
}

impl ParseTextRequest {
    pub fn new(text_content: impl Into<String>) -> Self {
        Self {
            text_content: text_content.into(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, fake::Dummy)]
#[serde(rename_all = "camelCase")]
pub struct CursorPosition {
    pub x: i64,
    pub y: i64,
    pub screen_width: i64,
    pub screen_height: i64,
    pub screen_index: i64,
}

/// Result of executing an action on a sandbox.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SandboxActionResponse {
    /// URL of the screenshot taken after the action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_shot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_position: Option<CursorPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_result: Option<Value>,
}

/// Error body returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("code: {code}, message: {message}")]
pub struct ApiError {
    pub code: String,
    pub message: String,
}
