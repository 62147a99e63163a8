//! Instruction interpreters.
//!
//! An interpreter maps free text to a [`ParsedCommand`]. It never fails: any
//! provider or decoding problem degrades to [`ParsedCommand::unknown`], which
//! the editor routes to the fallback tool.

use std::sync::Arc;

use async_trait::async_trait;

use siteedit_core::{EditAction, ParsedCommand, PresetColors, StyleProps};

use crate::config::LlmConfig;
use crate::error::ApiError;
use crate::llm_provider::{build_client, run_external_chat_json};

#[async_trait]
pub trait CommandInterpreter: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    async fn interpret(&self, command: &str) -> ParsedCommand;
}

/// Picks the LLM interpreter when a provider is fully configured, otherwise
/// the keyword interpreter.
pub fn interpreter_from_config(
    llm: &LlmConfig,
    presets: &PresetColors,
) -> Result<Arc<dyn CommandInterpreter>, ApiError> {
    if llm.is_configured() {
        return Ok(Arc::new(LlmInterpreter::new(llm.clone())?));
    }
    if llm.provider.is_some() {
        tracing::warn!("LLM provider set without an API key; using keyword interpreter");
    }
    Ok(Arc::new(KeywordInterpreter::new(presets.clone())))
}

/// Asks a hosted model for a JSON command.
pub struct LlmInterpreter {
    llm: LlmConfig,
    client: reqwest::Client,
}

impl LlmInterpreter {
    pub fn new(llm: LlmConfig) -> Result<Self, ApiError> {
        let client = build_client(&llm)?;
        Ok(LlmInterpreter { llm, client })
    }
}

#[async_trait]
impl CommandInterpreter for LlmInterpreter {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn interpret(&self, command: &str) -> ParsedCommand {
        let prompt = build_parser_prompt(command);
        let raw = match run_external_chat_json(&self.client, &self.llm, &prompt).await {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "interpreter provider call failed");
                return ParsedCommand::unknown();
            }
        };

        match ParsedCommand::from_model_output(&raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(error = %err, "rejected model output");
                ParsedCommand::unknown()
            }
        }
    }
}

fn build_parser_prompt(command: &str) -> String {
    format!(
        "You convert website editing instructions into JSON.\n\
Return only one JSON object with no markdown and no surrounding text.\n\
Fields:\n\
- action: one of create_layout, update_css, undo, unknown\n\
- target: selector such as header, body or footer (empty string if none)\n\
- props: object of camelCase CSS properties to string values (empty if none)\n\
Use plain color names as given by the user; do not convert them to hex.\n\
\n\
Instruction: \"Make the header bold and red\"\n\
Output: {{\"action\": \"update_css\", \"target\": \"header\", \
\"props\": {{\"fontWeight\": \"bold\", \"color\": \"red\"}}}}\n\
\n\
Instruction: {}\n\
Output:",
        serde_json::Value::String(command.to_string())
    )
}

/// Offline interpreter driven by keywords and the preset color names.
pub struct KeywordInterpreter {
    presets: PresetColors,
}

const UNDO_WORDS: [&str; 4] = ["undo", "previous", "revert", "back"];
const LAYOUT_WORDS: [&str; 4] = ["layout", "page", "website", "site"];
const TARGET_WORDS: [&str; 4] = ["header", "footer", "button", "body"];

impl KeywordInterpreter {
    pub fn new(presets: PresetColors) -> Self {
        KeywordInterpreter { presets }
    }

    /// Two colors style background then text; one color styles text.
    fn color_props(&self, words: &[&str]) -> StyleProps {
        let colors: Vec<&str> = words
            .iter()
            .copied()
            .filter(|w| self.presets.get(w).is_some())
            .collect();

        let mut props = StyleProps::new();
        match colors.as_slice() {
            [] => {}
            [text] => {
                props.insert("color".to_string(), text.to_string());
            }
            [background, text, ..] => {
                props.insert("backgroundColor".to_string(), background.to_string());
                props.insert("color".to_string(), text.to_string());
            }
        }
        props
    }
}

#[async_trait]
impl CommandInterpreter for KeywordInterpreter {
    fn name(&self) -> &'static str {
        "keyword"
    }

    async fn interpret(&self, command: &str) -> ParsedCommand {
        let lower = command.to_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        let has_any = |set: &[&str]| words.iter().any(|w| set.contains(w));

        if has_any(&UNDO_WORDS) {
            return ParsedCommand::new(EditAction::Undo, "", StyleProps::new());
        }

        let target = words
            .iter()
            .find(|w| TARGET_WORDS.contains(w))
            .copied()
            .unwrap_or("body");
        let props = self.color_props(&words);

        if has_any(&LAYOUT_WORDS) {
            return ParsedCommand::new(EditAction::CreateLayout, target, props);
        }
        if !props.is_empty() {
            return ParsedCommand::new(EditAction::UpdateCss, target, props);
        }
        ParsedCommand::unknown()
    }
}
