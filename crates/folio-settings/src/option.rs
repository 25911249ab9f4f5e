//! Selectable catalog entries.
//!
//! # Design
//! - Entries are immutable once built; fields are only reachable through accessors.
//! - Controls round-trip whole entries, never reconstruct them from raw strings.

use serde::{Deserialize, Serialize};

/// One selectable choice within a setting category (e.g. one font size).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionValue {
    label: String,
    value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
}

impl OptionValue {
    /// Build an entry from its display label and underlying value.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            hint: None,
        }
    }

    /// Attach a rendering hint (typically a class name for the option row).
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Underlying value applied to the host content.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Optional rendering hint.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }
}

/// Look up the entry whose underlying value equals `value`.
///
/// Native form controls only report strings; this maps them back onto the catalog entry.
#[must_use]
pub fn find_by_value<'a>(options: &'a [OptionValue], value: &str) -> Option<&'a OptionValue> {
    options.iter().find(|option| option.value == value)
}
