//! Toggle control helpers shared by the arrow button.

/// Whether a keyboard key activates a focused toggle (same as a click).
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Container and arrow classes for the given visibility.
#[must_use]
pub const fn toggle_classes(is_open: bool) -> (&'static str, &'static str) {
    if is_open {
        ("arrow-toggle arrow-toggle-open", "arrow-icon arrow-icon-open")
    } else {
        ("arrow-toggle", "arrow-icon")
    }
}
