//! In-progress settings edited by the panel.
//!
//! # Design
//! - The draft is a pure record holder; it never validates keys or values.
//! - Snapshots are shared `Rc`s and updates are copy-on-write, so a snapshot taken before an
//!   edit keeps its contents.
//! - Seeded once from the committed settings; later host changes are not pulled in.

use crate::option::OptionValue;
use crate::state::{FieldKey, SettingsState};
use std::rc::Rc;
use tracing::debug;

/// Draft settings plus the baseline used by resets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsDraft {
    current: Rc<SettingsState>,
    defaults: Rc<SettingsState>,
}

impl SettingsDraft {
    /// Start a draft as a copy of `initial`, resetting to `defaults`.
    #[must_use]
    pub fn seeded(initial: &SettingsState, defaults: SettingsState) -> Self {
        Self {
            current: Rc::new(initial.clone()),
            defaults: Rc::new(defaults),
        }
    }

    /// Current draft contents.
    #[must_use]
    pub fn current(&self) -> &SettingsState {
        &self.current
    }

    /// Shared handle to the current contents; unaffected by later edits.
    #[must_use]
    pub fn snapshot(&self) -> Rc<SettingsState> {
        Rc::clone(&self.current)
    }

    /// Baseline applied by [`Self::reset_to_default`].
    #[must_use]
    pub fn defaults(&self) -> &SettingsState {
        &self.defaults
    }

    /// Set the draft to a copy of `initial`.
    pub fn seed(&mut self, initial: &SettingsState) {
        self.current = Rc::new(initial.clone());
    }

    /// Replace exactly one field, leaving the others as they were.
    pub fn set_field(&mut self, key: FieldKey, value: OptionValue) {
        debug!(field = key.as_str(), value = value.value(), "draft field updated");
        Rc::make_mut(&mut self.current).set_field(key, value);
    }

    /// Replace the whole draft with the baseline.
    pub fn reset_to_default(&mut self) {
        debug!("draft reset to defaults");
        self.current = Rc::clone(&self.defaults);
    }

    /// Replace the whole draft.
    pub fn replace(&mut self, next: SettingsState) {
        self.current = Rc::new(next);
    }
}
