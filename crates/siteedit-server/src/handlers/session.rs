//! Session inspection handler.

use axum::extract::State;
use axum::Json;

use crate::schema::session::SessionView;
use crate::state::AppState;

/// `GET /session`
pub async fn get_session(State(state): State<AppState>) -> Json<SessionView> {
    let session = state.session.lock().await;
    Json(SessionView {
        current: session.current().cloned(),
        history_depth: session.history_depth(),
        preset_colors: session.presets().clone(),
    })
}
