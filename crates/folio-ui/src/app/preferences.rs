//! Environment helpers for the reader shell.

use crate::i18n::LocaleCode;
use folio_settings::OptionCatalog;
use gloo::console;
use gloo::utils::{document, window};

/// Element id of an optional embedded catalog document.
pub(crate) const CATALOG_ELEMENT_ID: &str = "folio-catalog";

/// Locale matching the browser language, English otherwise.
pub(crate) fn load_locale() -> LocaleCode {
    window()
        .navigator()
        .language()
        .and_then(|tag| LocaleCode::from_lang_tag(&tag))
        .unwrap_or_default()
}

/// Catalog embedded in the page, or the built-in one.
pub(crate) fn load_catalog() -> OptionCatalog {
    let Some(raw) = document()
        .get_element_by_id(CATALOG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return OptionCatalog::builtin();
    };
    match OptionCatalog::from_json_str(&raw) {
        Ok(catalog) => catalog,
        Err(err) => {
            console::error!("catalog load failed, using built-in options", err.to_string());
            OptionCatalog::builtin()
        }
    }
}
