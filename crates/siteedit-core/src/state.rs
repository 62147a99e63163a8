//! Edit snapshots.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Style property name to value. Keys are unique; ordering carries no meaning.
pub type StyleProps = BTreeMap<String, String>;

/// Merge base used when styles are applied before any layout exists.
pub const EMPTY_DOCUMENT: &str = "<html><body></body></html>";

/// Storefront page installed by the layout generator.
pub const DEFAULT_LAYOUT: &str =
    "<html><body><h1>Welcome to Shoe Store</h1><p>Best shoes here.</p></body></html>";

/// One snapshot of the edited document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditState {
    /// Opaque markup; `None` when no document has been generated.
    pub layout: Option<String>,
    /// Style properties applied to the document.
    #[serde(default)]
    pub props: StyleProps,
}

impl EditState {
    pub fn new(layout: impl Into<String>, props: StyleProps) -> Self {
        EditState {
            layout: Some(layout.into()),
            props,
        }
    }

    /// An empty body with no styles.
    pub fn empty_document() -> Self {
        EditState::new(EMPTY_DOCUMENT, StyleProps::new())
    }

    /// Merges `props` into this state, overwriting existing keys.
    pub fn merge_props(&mut self, props: &StyleProps) {
        for (key, value) in props {
            self.props.insert(key.clone(), value.clone());
        }
    }
}
