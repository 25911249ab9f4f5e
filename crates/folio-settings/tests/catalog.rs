use folio_settings::{CatalogError, FieldKey, OptionCatalog};
use serde_json::json;

#[test]
fn builtin_catalog_round_trips_through_json() -> anyhow::Result<()> {
    let raw = serde_json::to_string(&OptionCatalog::builtin())?;
    let loaded = OptionCatalog::from_json_str(&raw)?;
    assert_eq!(loaded, OptionCatalog::builtin());
    Ok(())
}

#[test]
fn custom_catalog_replaces_options_and_defaults() -> anyhow::Result<()> {
    let mut doc = serde_json::to_value(OptionCatalog::builtin())?;
    doc["fontSizes"] = json!([
        { "label": "Small", "value": "14px" },
        { "label": "Large", "value": "22px" }
    ]);
    doc["defaults"]["fontSize"] = json!({ "label": "Large", "value": "22px" });

    let catalog = OptionCatalog::from_json_str(&doc.to_string())?;
    assert_eq!(catalog.options(FieldKey::FontSize).len(), 2);
    assert_eq!(catalog.defaults().font_size.value(), "22px");
    assert_eq!(catalog.defaults().font_size.hint(), None);
    Ok(())
}

#[test]
fn malformed_document_is_a_parse_error() {
    let err = OptionCatalog::from_json_str("{\"fontFamilies\": 3}")
        .expect_err("document should be rejected");
    assert!(matches!(err, CatalogError::Parse { .. }));
}

#[test]
fn empty_category_is_rejected() -> anyhow::Result<()> {
    let mut doc = serde_json::to_value(OptionCatalog::builtin())?;
    doc["contentWidths"] = json!([]);
    let err = OptionCatalog::from_json_str(&doc.to_string())
        .expect_err("empty category should be rejected");
    assert!(matches!(
        err,
        CatalogError::EmptyCategory {
            field: FieldKey::ContentWidth
        }
    ));
    Ok(())
}

#[test]
fn default_outside_catalog_is_rejected() -> anyhow::Result<()> {
    let mut doc = serde_json::to_value(OptionCatalog::builtin())?;
    doc["defaults"]["fontColor"] = json!({ "label": "Teal", "value": "#008080" });
    let err = OptionCatalog::from_json_str(&doc.to_string())
        .expect_err("unknown default should be rejected");
    match err {
        CatalogError::DefaultNotInCatalog { field, value } => {
            assert_eq!(field, FieldKey::FontColor);
            assert_eq!(value, "#008080");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(
        err_message(&doc).contains("fontColor"),
        "message names the category"
    );
    Ok(())
}

fn err_message(doc: &serde_json::Value) -> String {
    OptionCatalog::from_json_str(&doc.to_string())
        .map(|_| String::new())
        .unwrap_or_else(|err| err.to_string())
}
