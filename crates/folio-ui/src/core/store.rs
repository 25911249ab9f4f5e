//! Host-side yewdux store for the committed reader settings.
//!
//! # Design
//! - The host owns committed settings; the panel only reads them at mount.
//! - Commits replace the record wholesale.

use folio_settings::{OptionCatalog, SettingsState};
use std::rc::Rc;
use tracing::debug;
use yewdux::store::Store;

/// Reader page state shared across components.
#[derive(Clone, Debug, PartialEq, Eq, Store)]
pub struct ReaderStore {
    /// Option catalog in effect.
    pub catalog: Rc<OptionCatalog>,
    /// Settings currently applied to the article.
    pub committed: SettingsState,
}

impl Default for ReaderStore {
    fn default() -> Self {
        Self::with_catalog(OptionCatalog::builtin())
    }
}

impl ReaderStore {
    /// Store whose committed settings start at the catalog defaults.
    #[must_use]
    pub fn with_catalog(catalog: OptionCatalog) -> Self {
        let committed = catalog.defaults().clone();
        Self {
            catalog: Rc::new(catalog),
            committed,
        }
    }

    /// Replace the committed settings.
    pub fn commit(&mut self, settings: SettingsState) {
        debug!(
            font_family = settings.font_family.value(),
            font_size = settings.font_size.value(),
            "committing reader settings"
        );
        self.committed = settings;
    }
}

#[cfg(test)]
mod tests {
    use super::ReaderStore;
    use folio_settings::{FieldKey, OptionCatalog, OptionValue, SettingsState};

    #[test]
    fn default_store_commits_catalog_defaults() {
        let store = ReaderStore::default();
        assert_eq!(store.committed, SettingsState::default());
        assert_eq!(*store.catalog, OptionCatalog::builtin());
    }

    #[test]
    fn commit_replaces_wholesale() {
        let mut store = ReaderStore::default();
        let next = SettingsState::default()
            .with_field(FieldKey::FontFamily, OptionValue::new("Ubuntu", "Ubuntu"))
            .with_field(FieldKey::ContentWidth, OptionValue::new("Narrow", "948px"));
        store.commit(next.clone());
        assert_eq!(store.committed, next);
    }
}
