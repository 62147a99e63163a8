//! HTTP/JSON backend that turns natural-language instructions into website
//! edits.
//!
//! A request flows through an interpreter (LLM-backed or keyword-based), the
//! tool router in [`editor`], and the shared
//! [`SessionStore`](siteedit_core::SessionStore) held in [`state::AppState`].

pub mod config;
pub mod editor;
pub mod error;
pub mod handlers;
pub mod interpreter;
pub mod llm_provider;
pub mod router;
pub mod schema;
pub mod state;
