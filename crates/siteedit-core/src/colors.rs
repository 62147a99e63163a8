//! Preset color table and style-value resolution.
//!
//! Symbolic color names in color-valued properties are resolved here before
//! a style reaches the [`SessionStore`](crate::SessionStore). Literal values
//! (`#rrggbb`, `rgb(...)` and friends) pass through untouched; any other name
//! must exist in the table or resolution fails.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::CoreError;
use crate::state::StyleProps;

/// Read-only mapping from color name to hex code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PresetColors(BTreeMap<String, String>);

impl PresetColors {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        PresetColors(
            entries
                .into_iter()
                .map(|(k, v)| (k.into().to_ascii_lowercase(), v.into()))
                .collect(),
        )
    }

    /// Looks up a color name, ignoring case and surrounding whitespace.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(&name.trim().to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Resolves a color name to its hex code.
    pub fn resolve(&self, name: &str) -> Result<&str, CoreError> {
        self.get(name).ok_or_else(|| CoreError::UnknownColor {
            name: name.trim().to_string(),
        })
    }

    /// Resolves every color-valued property in `props`.
    ///
    /// Fails on the first symbolic name with no preset entry.
    pub fn resolve_props(&self, props: &StyleProps) -> Result<StyleProps, CoreError> {
        let mut resolved = StyleProps::new();
        for (key, value) in props {
            let value = if is_color_property(key) && !is_literal_color(value) {
                self.resolve(value)?.to_string()
            } else {
                value.clone()
            };
            resolved.insert(key.clone(), value);
        }
        Ok(resolved)
    }
}

impl Default for PresetColors {
    fn default() -> Self {
        PresetColors::new([
            ("black", "#000000"),
            ("red", "#ff0000"),
            ("yellow", "#ffff00"),
        ])
    }
}

/// `color`, `backgroundColor`, `border-color`, ...
pub fn is_color_property(key: &str) -> bool {
    key.to_ascii_lowercase().contains("color")
}

fn is_literal_color(value: &str) -> bool {
    let value = value.trim();
    value.starts_with('#') || value.contains('(')
}
