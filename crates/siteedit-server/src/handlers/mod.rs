//! HTTP handler modules.
//!
//! Handlers parse requests, delegate to [`crate::editor`] or read the
//! session, and return JSON. No editing logic lives here.

pub mod command;
pub mod session;
