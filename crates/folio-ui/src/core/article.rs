//! Mapping from committed settings to the article's CSS custom properties.

use folio_settings::SettingsState;

/// Custom property names paired with their values, in a stable order.
#[must_use]
pub fn css_variables(settings: &SettingsState) -> [(&'static str, &str); 5] {
    [
        ("--font-family", settings.font_family.value()),
        ("--font-size", settings.font_size.value()),
        ("--font-color", settings.font_color.value()),
        ("--container-width", settings.content_width.value()),
        ("--bg-color", settings.background_color.value()),
    ]
}

/// Inline `style` attribute for the article root.
#[must_use]
pub fn article_style(settings: &SettingsState) -> String {
    css_variables(settings)
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}
