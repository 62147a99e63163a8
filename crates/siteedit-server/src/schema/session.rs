//! Read-only session snapshot.

use serde::Serialize;

use siteedit_core::{EditState, PresetColors};

/// Response for `GET /session`.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub current: Option<EditState>,
    /// Number of undo steps available.
    pub history_depth: usize,
    pub preset_colors: PresetColors,
}
