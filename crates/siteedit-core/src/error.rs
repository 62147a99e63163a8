//! Core error types for siteedit-core.
//!
//! Uses `thiserror` for matchable variants. None of these are fatal: the
//! editor pipeline reports them inside a normal response.

use thiserror::Error;

/// Errors produced by the siteedit-core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// `undo` was called with an empty history.
    #[error("No previous state")]
    NoPreviousState,

    /// A symbolic color name has no preset entry.
    #[error("unknown color: '{name}'")]
    UnknownColor { name: String },

    /// Interpreter output did not match the command schema.
    #[error("malformed command: {reason}")]
    MalformedCommand { reason: String },
}
