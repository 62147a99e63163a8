//! Editor pipeline: interpret, route to a tool, apply to the session.
//!
//! The interpreter runs before the session lock is taken, so a slow model call
//! never blocks other requests from reading or editing the session. The tool
//! itself runs entirely under the lock.

use uuid::Uuid;

use siteedit_core::{
    CoreError, EditAction, ParsedCommand, PresetColors, SessionStore, StyleProps, DEFAULT_LAYOUT,
};

use crate::error::ApiError;
use crate::schema::command::{EditorResponse, ToolResult};
use crate::state::AppState;

/// The four editor branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorTool {
    GenerateLayout,
    ApplyCss,
    UndoChange,
    ParseFallback,
}

impl EditorTool {
    pub fn route(action: EditAction) -> Self {
        match action {
            EditAction::CreateLayout => EditorTool::GenerateLayout,
            EditAction::UpdateCss => EditorTool::ApplyCss,
            EditAction::Undo => EditorTool::UndoChange,
            EditAction::Unknown => EditorTool::ParseFallback,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditorTool::GenerateLayout => "generate_layout",
            EditorTool::ApplyCss => "apply_css",
            EditorTool::UndoChange => "undo_change",
            EditorTool::ParseFallback => "parse_fallback",
        }
    }
}

/// Runs one instruction end to end.
pub async fn run_editor(state: &AppState, command: &str) -> Result<EditorResponse, ApiError> {
    let command = command.trim();
    if command.is_empty() {
        return Err(ApiError::BadRequest("command must not be empty".to_string()));
    }

    let request_id = Uuid::new_v4();
    tracing::info!(
        %request_id,
        interpreter = state.interpreter.name(),
        command,
        "processing command"
    );

    let parsed = state.interpreter.interpret(command).await;
    let tool = EditorTool::route(parsed.action);
    tracing::debug!(
        %request_id,
        action = parsed.action.as_str(),
        selector = %parsed.target,
        tool = tool.name(),
        "routed command"
    );

    let mut session = state.session.lock().await;
    let result = execute(tool, &parsed, &mut session);
    let current_state = session.current().cloned();
    drop(session);

    if let ToolResult::Failed { error } = &result {
        tracing::info!(%request_id, tool = tool.name(), reason = %error, "tool reported failure");
    }

    Ok(EditorResponse {
        request_id,
        parsed,
        tool_used: tool.name().to_string(),
        current_state,
        result,
    })
}

/// Applies `tool` to the session. Expected failures become
/// [`ToolResult::Failed`]; the session is left untouched in that case.
pub fn execute(tool: EditorTool, parsed: &ParsedCommand, session: &mut SessionStore) -> ToolResult {
    let outcome = match tool {
        EditorTool::GenerateLayout => generate_layout(parsed, session),
        EditorTool::ApplyCss => apply_css(parsed, session),
        EditorTool::UndoChange => session
            .undo()
            .map(|restored| ToolResult::State(restored.cloned())),
        EditorTool::ParseFallback => Ok(ToolResult::Parsed(parsed.clone())),
    };

    outcome.unwrap_or_else(|err| ToolResult::Failed {
        error: err.to_string(),
    })
}

/// Black background with red text.
pub fn default_theme(presets: &PresetColors) -> Result<StyleProps, CoreError> {
    let mut props = StyleProps::new();
    props.insert("backgroundColor".to_string(), presets.resolve("black")?.to_string());
    props.insert("color".to_string(), presets.resolve("red")?.to_string());
    Ok(props)
}

fn generate_layout(
    parsed: &ParsedCommand,
    session: &mut SessionStore,
) -> Result<ToolResult, CoreError> {
    let mut props = default_theme(session.presets())?;
    props.extend(session.presets().resolve_props(&parsed.props)?);
    let installed = session.apply_layout(DEFAULT_LAYOUT, props);
    Ok(ToolResult::State(Some(installed.clone())))
}

fn apply_css(parsed: &ParsedCommand, session: &mut SessionStore) -> Result<ToolResult, CoreError> {
    let props = session.presets().resolve_props(&parsed.props)?;
    let installed = session.apply_style(&props);
    Ok(ToolResult::State(Some(installed.clone())))
}
