//! Settings record and its field keys.

use crate::option::OptionValue;
use serde::{Deserialize, Serialize};

/// Named field of a [`SettingsState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKey {
    /// Typeface used for the article body.
    FontFamily,
    /// Body text size.
    FontSize,
    /// Body text color.
    FontColor,
    /// Page background color.
    BackgroundColor,
    /// Maximum article width.
    ContentWidth,
}

impl FieldKey {
    /// Every field in panel display order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::FontFamily,
            Self::FontSize,
            Self::FontColor,
            Self::BackgroundColor,
            Self::ContentWidth,
        ]
    }

    /// Stable identifier, matching the serialized field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FontFamily => "fontFamily",
            Self::FontSize => "fontSize",
            Self::FontColor => "fontColor",
            Self::BackgroundColor => "backgroundColor",
            Self::ContentWidth => "contentWidth",
        }
    }
}

/// Typography and layout selection applied to the reader content.
///
/// Either the committed settings owned by the host or a draft owned by the panel.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsState {
    /// Selected font family.
    pub font_family: OptionValue,
    /// Selected font size.
    pub font_size: OptionValue,
    /// Selected text color.
    pub font_color: OptionValue,
    /// Selected background color.
    pub background_color: OptionValue,
    /// Selected content width.
    pub content_width: OptionValue,
}

impl Default for SettingsState {
    /// Defaults of the built-in catalog.
    fn default() -> Self {
        crate::defaults::default_settings()
    }
}

impl SettingsState {
    /// Read one field.
    #[must_use]
    pub const fn field(&self, key: FieldKey) -> &OptionValue {
        match key {
            FieldKey::FontFamily => &self.font_family,
            FieldKey::FontSize => &self.font_size,
            FieldKey::FontColor => &self.font_color,
            FieldKey::BackgroundColor => &self.background_color,
            FieldKey::ContentWidth => &self.content_width,
        }
    }

    /// Replace one field in place.
    pub fn set_field(&mut self, key: FieldKey, value: OptionValue) {
        let slot = match key {
            FieldKey::FontFamily => &mut self.font_family,
            FieldKey::FontSize => &mut self.font_size,
            FieldKey::FontColor => &mut self.font_color,
            FieldKey::BackgroundColor => &mut self.background_color,
            FieldKey::ContentWidth => &mut self.content_width,
        };
        *slot = value;
    }

    /// Copy of `self` with one field replaced.
    #[must_use]
    pub fn with_field(&self, key: FieldKey, value: OptionValue) -> Self {
        let mut next = self.clone();
        next.set_field(key, value);
        next
    }
}
