//! Command request, editor response and the status envelope.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use siteedit_core::{EditState, ParsedCommand};

/// Body of `POST /process_command`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditCommandRequest {
    /// Free-text instruction, e.g. "make the text yellow".
    pub command: String,
}

/// Outcome of the tool that handled a command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolResult {
    /// The store accepted the edit or undo; carries the installed state,
    /// `null` when undo returned to an empty session.
    State(Option<EditState>),
    /// The fallback tool echoes the interpreted command.
    Parsed(ParsedCommand),
    /// Expected, non-fatal failure such as "No previous state".
    Failed { error: String },
}

/// Payload of a successful envelope.
#[derive(Debug, Clone, Serialize)]
pub struct EditorResponse {
    pub request_id: Uuid,
    pub parsed: ParsedCommand,
    pub tool_used: String,
    /// Session state after the tool ran.
    pub current_state: Option<EditState>,
    pub result: ToolResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

/// Response wrapper for `POST /process_command`.
#[derive(Debug, Clone, Serialize)]
pub struct CommandEnvelope {
    pub status: EnvelopeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<EditorResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CommandEnvelope {
    pub fn success(response: EditorResponse) -> Self {
        CommandEnvelope {
            status: EnvelopeStatus::Success,
            response: Some(response),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        CommandEnvelope {
            status: EnvelopeStatus::Error,
            response: None,
            message: Some(message.into()),
        }
    }
}
