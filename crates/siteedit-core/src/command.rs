//! Structured edit commands produced by interpreters.
//!
//! Model output is decoded with `serde_json` against a fixed schema. Anything
//! that does not fit is rejected with [`CoreError::MalformedCommand`]; callers
//! degrade that to [`ParsedCommand::unknown`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::state::StyleProps;

/// What the instruction asks the editor to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditAction {
    CreateLayout,
    UpdateCss,
    Undo,
    #[serde(other)]
    Unknown,
}

impl EditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditAction::CreateLayout => "create_layout",
            EditAction::UpdateCss => "update_css",
            EditAction::Undo => "undo",
            EditAction::Unknown => "unknown",
        }
    }
}

/// An interpreted instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommand {
    pub action: EditAction,
    /// Selector such as `header`, `body` or `footer`; may be empty.
    #[serde(default)]
    pub target: String,
    /// Requested style properties, values not yet color-resolved.
    #[serde(default)]
    pub props: StyleProps,
}

#[derive(Deserialize)]
struct RawCommand {
    action: EditAction,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    props: Option<BTreeMap<String, serde_json::Value>>,
}

impl ParsedCommand {
    pub fn new(action: EditAction, target: impl Into<String>, props: StyleProps) -> Self {
        ParsedCommand {
            action,
            target: target.into(),
            props,
        }
    }

    /// The result for instructions that could not be interpreted.
    pub fn unknown() -> Self {
        ParsedCommand::new(EditAction::Unknown, "", StyleProps::new())
    }

    /// Decodes a model reply into a command.
    ///
    /// Accepts a bare JSON object or one wrapped in a markdown code fence.
    /// Property values must be strings, numbers or booleans.
    pub fn from_model_output(raw: &str) -> Result<Self, CoreError> {
        let body = strip_code_fence(raw);
        let parsed: RawCommand = serde_json::from_str(body).map_err(|err| {
            CoreError::MalformedCommand {
                reason: err.to_string(),
            }
        })?;

        let mut props = StyleProps::new();
        for (key, value) in parsed.props.unwrap_or_default() {
            let value = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                other => {
                    return Err(CoreError::MalformedCommand {
                        reason: format!("property '{}' has non-scalar value {}", key, other),
                    })
                }
            };
            props.insert(key, value);
        }

        Ok(ParsedCommand {
            action: parsed.action,
            target: parsed.target.unwrap_or_default(),
            props,
        })
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (`json`): up to the newline, or up to the object
    // when the fence sits on one line.
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest.find('{').map(|start| &rest[start..]).unwrap_or(""),
    };
    body.trim_end().trim_end_matches("```").trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_update_css() {
        let cmd = ParsedCommand::from_model_output(
            r#"{
                "action": "update_css",
                "target": "header",
                "props": {"fontWeight": "bold", "color": "red"}
            }"#,
        )
        .unwrap();

        assert_eq!(cmd.action, EditAction::UpdateCss);
        assert_eq!(cmd.target, "header");
        assert_eq!(cmd.props["fontWeight"], "bold");
        assert_eq!(cmd.props["color"], "red");
    }

    #[test]
    fn decodes_fenced_reply_with_missing_fields() {
        let cmd = ParsedCommand::from_model_output("```json\n{\"action\": \"undo\"}\n```").unwrap();
        assert_eq!(cmd, ParsedCommand::new(EditAction::Undo, "", StyleProps::new()));
    }

    #[test]
    fn decodes_single_line_fence() {
        let cmd = ParsedCommand::from_model_output(r#"```json {"action":"undo"}```"#).unwrap();
        assert_eq!(cmd.action, EditAction::Undo);

        let cmd = ParsedCommand::from_model_output(r#"```{"action":"update_css"}```"#).unwrap();
        assert_eq!(cmd.action, EditAction::UpdateCss);
    }

    #[test]
    fn unrecognized_action_maps_to_unknown() {
        let cmd = ParsedCommand::from_model_output(r#"{"action": "delete_site"}"#).unwrap();
        assert_eq!(cmd.action, EditAction::Unknown);
    }

    #[test]
    fn numeric_and_boolean_props_become_strings() {
        let cmd = ParsedCommand::from_model_output(
            r#"{"action": "update_css", "props": {"opacity": 0.5, "hidden": false}}"#,
        )
        .unwrap();
        assert_eq!(cmd.props["opacity"], "0.5");
        assert_eq!(cmd.props["hidden"], "false");
    }

    #[test]
    fn rejects_non_json_reply() {
        let err = ParsedCommand::from_model_output("{'action': 'undo'}").unwrap_err();
        assert!(matches!(err, CoreError::MalformedCommand { .. }));
    }

    #[test]
    fn rejects_python_style_expression() {
        let err = ParsedCommand::from_model_output("__import__('os').system('true')").unwrap_err();
        assert!(matches!(err, CoreError::MalformedCommand { .. }));
    }

    #[test]
    fn rejects_nested_prop_values() {
        let err = ParsedCommand::from_model_output(
            r#"{"action": "update_css", "props": {"color": {"r": 255}}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("non-scalar"));
    }

    #[test]
    fn rejects_missing_action() {
        assert!(ParsedCommand::from_model_output(r#"{"target": "body"}"#).is_err());
    }

    #[test]
    fn action_names_match_wire_format() {
        for action in [
            EditAction::CreateLayout,
            EditAction::UpdateCss,
            EditAction::Undo,
            EditAction::Unknown,
        ] {
            let json = serde_json::to_value(action).unwrap();
            assert_eq!(json, serde_json::json!(action.as_str()));
        }
    }
}
