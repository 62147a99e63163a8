//! Edit session store with a linear undo stack.
//!
//! [`SessionStore`] owns the current document snapshot and the stack of
//! predecessors. Every edit pushes the state it replaces (absent included), so
//! `history.len()` always equals the number of edits not yet undone. Entries
//! are owned snapshots; later edits never alter them.
//!
//! The store does no locking of its own. The server keeps it behind a single
//! async mutex so each request sees the push/pop pair atomically.

use crate::colors::PresetColors;
use crate::error::CoreError;
use crate::state::{EditState, StyleProps};

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    current: Option<EditState>,
    history: Vec<Option<EditState>>,
    presets: PresetColors,
}

impl SessionStore {
    /// Creates an empty session using the default preset colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session with a custom preset table.
    pub fn with_presets(presets: PresetColors) -> Self {
        SessionStore {
            current: None,
            history: Vec::new(),
            presets,
        }
    }

    pub fn current(&self) -> Option<&EditState> {
        self.current.as_ref()
    }

    /// Prior states, oldest first.
    pub fn history(&self) -> &[Option<EditState>] {
        &self.history
    }

    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    pub fn presets(&self) -> &PresetColors {
        &self.presets
    }

    /// Replaces the document with a freshly generated layout.
    pub fn apply_layout(&mut self, layout: impl Into<String>, props: StyleProps) -> &EditState {
        let next = EditState::new(layout, props);
        self.install(next)
    }

    /// Merges `props` into the current document.
    ///
    /// With no document yet, the merge starts from an empty body. The entry
    /// pushed is the state before the call, so a single undo returns to it.
    pub fn apply_style(&mut self, props: &StyleProps) -> &EditState {
        let mut next = self
            .current
            .clone()
            .unwrap_or_else(EditState::empty_document);
        next.merge_props(props);
        self.install(next)
    }

    /// Restores the most recently pushed state.
    ///
    /// Returns the restored state, which is `None` when the undone edit was the
    /// first one. An empty history leaves the session untouched.
    pub fn undo(&mut self) -> Result<Option<&EditState>, CoreError> {
        let previous = self.history.pop().ok_or(CoreError::NoPreviousState)?;
        self.current = previous;
        Ok(self.current.as_ref())
    }

    fn install(&mut self, next: EditState) -> &EditState {
        self.history.push(self.current.take());
        self.current.insert(next)
    }
}
