//! Stock catalog entries and the baseline selection.
//!
//! # Design
//! - Keep the built-in values in one place so the catalog and `SettingsState::default` agree.

use crate::option::OptionValue;
use crate::state::SettingsState;

pub(crate) fn font_families() -> Vec<OptionValue> {
    vec![
        OptionValue::new("Open Sans", "Open Sans").with_hint("open-sans"),
        OptionValue::new("Ubuntu", "Ubuntu").with_hint("ubuntu"),
        OptionValue::new("Cormorant Garamond", "Cormorant Garamond").with_hint("cormorant-garamond"),
        OptionValue::new("Days One", "Days One").with_hint("days-one"),
        OptionValue::new("Merriweather", "Merriweather").with_hint("merriweather"),
    ]
}

pub(crate) fn font_sizes() -> Vec<OptionValue> {
    vec![
        OptionValue::new("18px", "18px").with_hint("font-size-18"),
        OptionValue::new("25px", "25px").with_hint("font-size-25"),
        OptionValue::new("38px", "38px").with_hint("font-size-38"),
    ]
}

pub(crate) fn font_colors() -> Vec<OptionValue> {
    palette("font")
}

pub(crate) fn background_colors() -> Vec<OptionValue> {
    palette("bg")
}

pub(crate) fn content_widths() -> Vec<OptionValue> {
    vec![
        OptionValue::new("Wide", "1394px").with_hint("width-wide"),
        OptionValue::new("Narrow", "948px").with_hint("width-narrow"),
    ]
}

fn palette(prefix: &str) -> Vec<OptionValue> {
    [
        ("Black", "#000000", "black"),
        ("White", "#FFFFFF", "white"),
        ("Gray", "#C4C4C4", "gray"),
        ("Pink", "#FEAFE8", "pink"),
        ("Fuchsia", "#FD24AF", "fuchsia"),
        ("Yellow", "#FFC802", "yellow"),
        ("Green", "#80D994", "green"),
        ("Blue", "#6FC1FD", "blue"),
        ("Purple", "#5F00BD", "purple"),
    ]
    .into_iter()
    .map(|(label, hex, slug)| OptionValue::new(label, hex).with_hint(format!("{prefix}-{slug}")))
    .collect()
}

/// Baseline selection: first font, smallest size, black on white, wide column.
pub(crate) fn default_settings() -> SettingsState {
    SettingsState {
        font_family: OptionValue::new("Open Sans", "Open Sans").with_hint("open-sans"),
        font_size: OptionValue::new("18px", "18px").with_hint("font-size-18"),
        font_color: OptionValue::new("Black", "#000000").with_hint("font-black"),
        background_color: OptionValue::new("White", "#FFFFFF").with_hint("bg-white"),
        content_width: OptionValue::new("Wide", "1394px").with_hint("width-wide"),
    }
}
