//! Option catalogs supplied to the settings panel.
//!
//! # Design
//! - The catalog is configuration: built in by default, replaceable with a JSON document.
//! - Loading only checks structure (non-empty categories, defaults present); the panel trusts it.
//! - Entries are handed out by shared reference and never mutated after load.

use crate::defaults;
use crate::error::{CatalogError, CatalogResult};
use crate::option::OptionValue;
use crate::state::{FieldKey, SettingsState};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Available options per category plus the baseline selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionCatalog {
    font_families: Vec<OptionValue>,
    font_sizes: Vec<OptionValue>,
    font_colors: Vec<OptionValue>,
    background_colors: Vec<OptionValue>,
    content_widths: Vec<OptionValue>,
    defaults: SettingsState,
}

impl Default for OptionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl OptionCatalog {
    /// Stock catalog shipped with the reader.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            font_families: defaults::font_families(),
            font_sizes: defaults::font_sizes(),
            font_colors: defaults::font_colors(),
            background_colors: defaults::background_colors(),
            content_widths: defaults::content_widths(),
            defaults: defaults::default_settings(),
        }
    }

    /// Parse a catalog from JSON and check its structure.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] for malformed documents, [`CatalogError::EmptyCategory`]
    /// when a category is empty, or [`CatalogError::DefaultNotInCatalog`] when a default is not
    /// one of its category's options.
    pub fn from_json_str(raw: &str) -> CatalogResult<Self> {
        let catalog: Self =
            serde_json::from_str(raw).map_err(|source| CatalogError::Parse { source })?;
        catalog.check()?;
        debug!("option catalog loaded from JSON");
        Ok(catalog)
    }

    /// Options offered for `key`.
    #[must_use]
    pub fn options(&self, key: FieldKey) -> &[OptionValue] {
        match key {
            FieldKey::FontFamily => &self.font_families,
            FieldKey::FontSize => &self.font_sizes,
            FieldKey::FontColor => &self.font_colors,
            FieldKey::BackgroundColor => &self.background_colors,
            FieldKey::ContentWidth => &self.content_widths,
        }
    }

    /// Baseline selection used by resets.
    #[must_use]
    pub const fn defaults(&self) -> &SettingsState {
        &self.defaults
    }

    fn check(&self) -> CatalogResult<()> {
        for field in FieldKey::all() {
            let options = self.options(field);
            if options.is_empty() {
                return Err(CatalogError::EmptyCategory { field });
            }
            let default = self.defaults.field(field);
            if !options.contains(default) {
                return Err(CatalogError::DefaultNotInCatalog {
                    field,
                    value: default.value().to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::OptionCatalog;
    use crate::state::{FieldKey, SettingsState};

    #[test]
    fn builtin_defaults_match_settings_default() {
        let catalog = OptionCatalog::builtin();
        assert_eq!(catalog.defaults(), &SettingsState::default());
        assert!(catalog.check().is_ok());
    }

    #[test]
    fn every_category_is_populated() {
        let catalog = OptionCatalog::default();
        for key in FieldKey::all() {
            assert!(!catalog.options(key).is_empty(), "{} empty", key.as_str());
        }
        assert_eq!(catalog.options(FieldKey::FontSize).len(), 3);
        assert_eq!(catalog.options(FieldKey::ContentWidth).len(), 2);
    }
}
