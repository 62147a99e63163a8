//! Application state shared by the axum handlers.
//!
//! The single editing session lives behind `tokio::sync::Mutex` so handlers
//! await the lock without blocking the runtime, and each tool applies its
//! push/pop to the undo stack without interleaving with another request.

use std::sync::Arc;

use tokio::sync::Mutex;

use siteedit_core::{PresetColors, SessionStore};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::interpreter::{interpreter_from_config, CommandInterpreter};

#[derive(Clone)]
pub struct AppState {
    /// The process-wide editing session.
    pub session: Arc<Mutex<SessionStore>>,
    /// Maps instructions to structured commands.
    pub interpreter: Arc<dyn CommandInterpreter>,
}

impl AppState {
    /// Creates state with the default presets and the interpreter selected by
    /// `config`.
    pub fn new(config: &ServerConfig) -> Result<Self, ApiError> {
        let presets = PresetColors::default();
        let interpreter = interpreter_from_config(&config.llm, &presets)?;
        Ok(Self::with_interpreter(SessionStore::with_presets(presets), interpreter))
    }

    pub fn with_interpreter(
        session: SessionStore,
        interpreter: Arc<dyn CommandInterpreter>,
    ) -> Self {
        AppState {
            session: Arc::new(Mutex::new(session)),
            interpreter,
        }
    }
}
