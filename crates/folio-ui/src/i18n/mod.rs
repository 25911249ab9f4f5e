//! Localised labels for the settings panel and the reader shell.
//!
//! # Design
//! - Every string the UI shows is a [`Label`]; there are no free-form lookup keys.
//! - Tables are bundled JSON (`section -> key -> text`), one per locale.
//! - Lookups fall back to English, then to an empty string.

use folio_settings::FieldKey;
use std::collections::HashMap;
use std::rc::Rc;

/// Locales with a bundled label table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// English.
    #[default]
    En,
    /// Russian.
    Ru,
}

impl LocaleCode {
    /// Every bundled locale.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::Ru]
    }

    /// Primary language subtag.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// Locale for a browser language tag such as `ru-RU`, if one is bundled.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let primary = tag.split_once('-').map_or(tag, |(primary, _)| primary);
        Self::all()
            .into_iter()
            .find(|locale| primary.eq_ignore_ascii_case(locale.code()))
    }

    const fn raw_table(self) -> &'static str {
        match self {
            Self::En => include_str!("../../i18n/en.json"),
            Self::Ru => include_str!("../../i18n/ru.json"),
        }
    }
}

/// Text shown by the panel, its toggle and the demo article.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    /// Panel heading.
    PanelTitle,
    /// Caption of the font family control.
    FontFamily,
    /// Caption of the font size control.
    FontSize,
    /// Caption of the font color control.
    FontColor,
    /// Caption of the background color control.
    BackgroundColor,
    /// Caption of the content width control.
    ContentWidth,
    /// Reset button.
    Reset,
    /// Apply button.
    Apply,
    /// Accessible name of the toggle control.
    ToggleHint,
    /// Tooltip of the toggle arrow.
    ToggleIcon,
    /// Demo article heading.
    ArticleTitle,
    /// Demo article body.
    ArticleBody,
}

impl Label {
    /// Every label.
    #[must_use]
    pub const fn all() -> [Self; 12] {
        [
            Self::PanelTitle,
            Self::FontFamily,
            Self::FontSize,
            Self::FontColor,
            Self::BackgroundColor,
            Self::ContentWidth,
            Self::Reset,
            Self::Apply,
            Self::ToggleHint,
            Self::ToggleIcon,
            Self::ArticleTitle,
            Self::ArticleBody,
        ]
    }

    /// Caption for the control editing `key`.
    #[must_use]
    pub const fn field(key: FieldKey) -> Self {
        match key {
            FieldKey::FontFamily => Self::FontFamily,
            FieldKey::FontSize => Self::FontSize,
            FieldKey::FontColor => Self::FontColor,
            FieldKey::BackgroundColor => Self::BackgroundColor,
            FieldKey::ContentWidth => Self::ContentWidth,
        }
    }

    /// `(section, key)` location in a label table.
    #[must_use]
    pub const fn path(self) -> (&'static str, &'static str) {
        match self {
            Self::PanelTitle => ("panel", "title"),
            Self::FontFamily => ("panel", "font_family"),
            Self::FontSize => ("panel", "font_size"),
            Self::FontColor => ("panel", "font_color"),
            Self::BackgroundColor => ("panel", "background_color"),
            Self::ContentWidth => ("panel", "content_width"),
            Self::Reset => ("panel", "reset"),
            Self::Apply => ("panel", "apply"),
            Self::ToggleHint => ("toggle", "label"),
            Self::ToggleIcon => ("toggle", "icon"),
            Self::ArticleTitle => ("article", "title"),
            Self::ArticleBody => ("article", "body"),
        }
    }
}

type LabelTable = HashMap<String, HashMap<String, String>>;

fn parse_table(locale: LocaleCode) -> Rc<LabelTable> {
    Rc::new(serde_json::from_str(locale.raw_table()).unwrap_or_default())
}

fn lookup(table: &LabelTable, label: Label) -> Option<&str> {
    let (section, key) = label.path();
    table.get(section)?.get(key).map(String::as_str)
}

/// Labels for one locale, backed by the English table.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    locale: LocaleCode,
    labels: Rc<LabelTable>,
    english: Rc<LabelTable>,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl Default for TranslationBundle {
    fn default() -> Self {
        Self::new(LocaleCode::default())
    }
}

impl TranslationBundle {
    /// Load the bundled table for `locale`.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let english = parse_table(LocaleCode::En);
        let labels = if locale == LocaleCode::En {
            Rc::clone(&english)
        } else {
            parse_table(locale)
        };
        Self {
            locale,
            labels,
            english,
        }
    }

    /// Locale the bundle was loaded for.
    #[must_use]
    pub const fn locale(&self) -> LocaleCode {
        self.locale
    }

    /// Text for `label`.
    #[must_use]
    pub fn label(&self, label: Label) -> String {
        lookup(&self.labels, label)
            .or_else(|| lookup(&self.english, label))
            .unwrap_or_default()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{Label, LocaleCode, TranslationBundle};
    use folio_settings::FieldKey;

    #[test]
    fn english_table_covers_every_label() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        for label in Label::all() {
            assert!(!bundle.label(label).is_empty(), "missing {label:?}");
        }
    }

    #[test]
    fn russian_table_is_used_when_present() {
        let ru = TranslationBundle::new(LocaleCode::Ru);
        assert_eq!(ru.locale(), LocaleCode::Ru);
        assert_eq!(ru.label(Label::Apply), "Применить");
        assert_ne!(
            ru.label(Label::PanelTitle),
            TranslationBundle::default().label(Label::PanelTitle)
        );
    }

    #[test]
    fn missing_russian_label_falls_back_to_english() {
        let ru = TranslationBundle::new(LocaleCode::Ru);
        let en = TranslationBundle::new(LocaleCode::En);
        assert_eq!(ru.label(Label::ArticleBody), en.label(Label::ArticleBody));
    }

    #[test]
    fn every_field_has_a_distinct_caption() {
        let bundle = TranslationBundle::default();
        let captions: Vec<String> = FieldKey::all()
            .into_iter()
            .map(|key| bundle.label(Label::field(key)))
            .collect();
        for (index, caption) in captions.iter().enumerate() {
            assert!(!captions[index + 1..].contains(caption), "duplicate {caption}");
        }
    }

    #[test]
    fn lang_tags_map_to_primary_subtag() {
        assert_eq!(LocaleCode::from_lang_tag("ru-RU"), Some(LocaleCode::Ru));
        assert_eq!(LocaleCode::from_lang_tag("EN-gb"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_lang_tag("ru"), Some(LocaleCode::Ru));
        assert_eq!(LocaleCode::from_lang_tag("fr"), None);
    }
}
