//! Instruction handler.

use axum::extract::State;
use axum::Json;

use crate::editor::run_editor;
use crate::error::ApiError;
use crate::schema::command::{CommandEnvelope, EditCommandRequest};
use crate::state::AppState;

/// Interprets and applies one instruction.
///
/// `POST /process_command`
pub async fn process_command(
    State(state): State<AppState>,
    Json(req): Json<EditCommandRequest>,
) -> Result<Json<CommandEnvelope>, ApiError> {
    let response = run_editor(&state, &req.command).await?;
    Ok(Json(CommandEnvelope::success(response)))
}
