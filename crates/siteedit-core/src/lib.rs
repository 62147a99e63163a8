//! Core data model for siteedit: edit snapshots, the session store with its
//! linear undo stack, preset color resolution, and the structured command
//! shape produced by interpreters.

pub mod colors;
pub mod command;
pub mod error;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use colors::PresetColors;
pub use command::{EditAction, ParsedCommand};
pub use error::CoreError;
pub use session::SessionStore;
pub use state::{EditState, StyleProps, DEFAULT_LAYOUT, EMPTY_DOCUMENT};
