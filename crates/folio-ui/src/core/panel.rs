//! Settings panel controller: visibility state machine plus draft commit/reset.
//!
//! # Design
//! - Visibility (`OpenState`) and the draft are orthogonal; no action touches both.
//! - The draft is seeded once at construction; later host updates are ignored until remount.
//! - Apply and Reset are the only actions with host-visible effects.

use folio_settings::{FieldKey, OptionValue, SettingsDraft, SettingsState};
use tracing::debug;
use yew::Callback;

/// Panel visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpenState {
    /// Panel hidden; the outside-interaction watcher is inactive.
    #[default]
    Closed,
    /// Panel visible.
    Open,
}

impl OpenState {
    /// Whether the panel is visible.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Opposite visibility.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// User intent routed to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelAction {
    /// Toggle control activated.
    Toggle,
    /// Pointer-down landed outside the panel root.
    OutsideInteraction,
    /// A sub-control reported a new selection for one field.
    FieldChanged {
        /// Field being edited.
        key: FieldKey,
        /// Entry reported by the control.
        value: OptionValue,
    },
    /// Form submitted.
    Apply,
    /// Form reset.
    Reset,
}

/// Owns visibility and the draft, forwarding committed settings to the host.
#[derive(Debug)]
pub struct PanelController {
    open: OpenState,
    draft: SettingsDraft,
    on_apply: Callback<SettingsState>,
}

impl PanelController {
    /// Seed a closed panel from the host's committed settings.
    #[must_use]
    pub fn new(
        committed: &SettingsState,
        defaults: SettingsState,
        on_apply: Callback<SettingsState>,
    ) -> Self {
        Self {
            open: OpenState::Closed,
            draft: SettingsDraft::seeded(committed, defaults),
            on_apply,
        }
    }

    /// Current visibility.
    #[must_use]
    pub const fn open_state(&self) -> OpenState {
        self.open
    }

    /// Whether the panel is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open.is_open()
    }

    /// Draft being edited.
    #[must_use]
    pub fn draft(&self) -> &SettingsState {
        self.draft.current()
    }

    /// Take the host's props for a re-render.
    ///
    /// Only the apply callback is refreshed. `committed` is never copied into the draft after
    /// construction; a remount is the only way to reseed.
    pub fn receive_props(&mut self, committed: &SettingsState, on_apply: Callback<SettingsState>) {
        if committed != self.draft.current() {
            debug!("host settings differ from draft; keeping draft");
        }
        self.on_apply = on_apply;
    }

    /// Route one action through the state machine.
    pub fn dispatch(&mut self, action: PanelAction) {
        match action {
            PanelAction::Toggle => self.toggle(),
            PanelAction::OutsideInteraction => self.outside_interaction(),
            PanelAction::FieldChanged { key, value } => self.draft.set_field(key, value),
            PanelAction::Apply => self.apply(),
            PanelAction::Reset => self.reset(),
        }
    }

    fn toggle(&mut self) {
        self.open = self.open.toggled();
        debug!(open = self.open.is_open(), "settings panel toggled");
    }

    fn outside_interaction(&mut self) {
        if self.open.is_open() {
            self.open = OpenState::Closed;
            debug!("settings panel closed by outside interaction");
        }
    }

    fn apply(&self) {
        debug!("applying draft settings");
        self.on_apply.emit(self.draft.current().clone());
    }

    fn reset(&mut self) {
        self.draft.reset_to_default();
        debug!("resetting settings to defaults");
        self.on_apply.emit(self.draft.defaults().clone());
    }
}

#[cfg(test)]
mod tests {
    use super::{OpenState, PanelAction, PanelController};
    use folio_settings::{FieldKey, OptionValue, SettingsState};
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::Callback;

    type Applied = Rc<RefCell<Vec<SettingsState>>>;

    fn recorder() -> (Applied, Callback<SettingsState>) {
        let applied: Applied = Rc::default();
        let sink = {
            let applied = Rc::clone(&applied);
            Callback::from(move |settings| applied.borrow_mut().push(settings))
        };
        (applied, sink)
    }

    fn custom() -> SettingsState {
        SettingsState {
            font_family: OptionValue::new("Days One", "Days One"),
            font_size: OptionValue::new("38px", "38px"),
            font_color: OptionValue::new("Pink", "#FEAFE8"),
            background_color: OptionValue::new("Gray", "#C4C4C4"),
            content_width: OptionValue::new("Narrow", "948px"),
        }
    }

    fn size(value: &str) -> OptionValue {
        OptionValue::new(value, value)
    }

    #[test]
    fn starts_closed_with_seeded_draft() {
        let (applied, sink) = recorder();
        let panel = PanelController::new(&custom(), SettingsState::default(), sink);
        assert_eq!(panel.open_state(), OpenState::Closed);
        assert_eq!(panel.draft(), &custom());
        assert!(applied.borrow().is_empty());
    }

    #[test]
    fn outside_interaction_only_closes() {
        let mut panel =
            PanelController::new(&custom(), SettingsState::default(), Callback::noop());
        panel.dispatch(PanelAction::OutsideInteraction);
        assert_eq!(panel.open_state(), OpenState::Closed);
        panel.dispatch(PanelAction::Toggle);
        panel.dispatch(PanelAction::OutsideInteraction);
        assert_eq!(panel.open_state(), OpenState::Closed);
    }

    #[test]
    fn field_changes_stay_local_until_apply() {
        let (applied, sink) = recorder();
        let mut panel = PanelController::new(&custom(), SettingsState::default(), sink);
        panel.dispatch(PanelAction::FieldChanged {
            key: FieldKey::ContentWidth,
            value: OptionValue::new("Wide", "1394px"),
        });
        assert!(applied.borrow().is_empty());
        panel.dispatch(PanelAction::Apply);
        let expected =
            custom().with_field(FieldKey::ContentWidth, OptionValue::new("Wide", "1394px"));
        assert_eq!(applied.borrow().as_slice(), &[expected.clone()]);
        assert_eq!(panel.draft(), &expected);
    }

    #[test]
    fn apply_and_reset_keep_visibility() {
        let mut panel =
            PanelController::new(&custom(), SettingsState::default(), Callback::noop());
        panel.dispatch(PanelAction::Toggle);
        panel.dispatch(PanelAction::Apply);
        assert!(panel.is_open());
        panel.dispatch(PanelAction::Reset);
        assert!(panel.is_open());
    }

    #[test]
    fn edit_close_reopen_apply_forwards_edit() {
        let (applied, sink) = recorder();
        let mut panel =
            PanelController::new(&SettingsState::default(), SettingsState::default(), sink);
        panel.dispatch(PanelAction::Toggle);
        panel.dispatch(PanelAction::FieldChanged {
            key: FieldKey::FontSize,
            value: size("25px"),
        });
        panel.dispatch(PanelAction::OutsideInteraction);
        assert_eq!(panel.open_state(), OpenState::Closed);
        assert_eq!(panel.draft().font_size, size("25px"));

        panel.dispatch(PanelAction::Toggle);
        panel.dispatch(PanelAction::Apply);
        let expected = SettingsState {
            font_size: size("25px"),
            ..SettingsState::default()
        };
        assert_eq!(applied.borrow().as_slice(), &[expected]);
    }

    #[test]
    fn reset_forwards_defaults_verbatim() {
        let (applied, sink) = recorder();
        let mut panel = PanelController::new(&custom(), SettingsState::default(), sink);
        panel.dispatch(PanelAction::FieldChanged {
            key: FieldKey::FontSize,
            value: size("25px"),
        });
        panel.dispatch(PanelAction::Reset);
        assert_eq!(applied.borrow().as_slice(), &[SettingsState::default()]);
        assert_eq!(panel.draft(), &SettingsState::default());

        panel.dispatch(PanelAction::Apply);
        assert_eq!(applied.borrow().len(), 2);
        assert_eq!(applied.borrow()[1], SettingsState::default());
    }

    #[test]
    fn reset_uses_supplied_defaults() {
        let (applied, sink) = recorder();
        let mut panel = PanelController::new(&SettingsState::default(), custom(), sink);
        panel.dispatch(PanelAction::Reset);
        assert_eq!(applied.borrow().as_slice(), &[custom()]);
    }

    #[test]
    fn rerender_with_new_host_settings_keeps_mount_seed() {
        let (applied, sink) = recorder();
        let mut panel = PanelController::new(&custom(), SettingsState::default(), sink.clone());
        panel.dispatch(PanelAction::Toggle);

        let newer = custom().with_field(FieldKey::FontSize, size("18px"));
        panel.receive_props(&newer, sink.clone());
        panel.receive_props(&SettingsState::default(), sink);
        assert_eq!(panel.draft(), &custom());
        assert!(panel.is_open());

        panel.dispatch(PanelAction::Apply);
        assert_eq!(applied.borrow().as_slice(), &[custom()]);
    }

    #[test]
    fn rerender_swaps_apply_callback() {
        let (first, first_sink) = recorder();
        let (second, second_sink) = recorder();
        let mut panel = PanelController::new(&custom(), SettingsState::default(), first_sink);
        panel.receive_props(&custom(), second_sink);
        panel.dispatch(PanelAction::Apply);
        assert!(first.borrow().is_empty());
        assert_eq!(second.borrow().as_slice(), &[custom()]);
    }

    proptest! {
        #[test]
        fn toggle_parity(count in 0usize..64) {
            let mut panel =
                PanelController::new(&custom(), SettingsState::default(), Callback::noop());
            for _ in 0..count {
                panel.dispatch(PanelAction::Toggle);
            }
            let expected = if count % 2 == 0 { OpenState::Closed } else { OpenState::Open };
            prop_assert_eq!(panel.open_state(), expected);
        }

        #[test]
        fn apply_forwards_current_draft(
            edits in prop::collection::vec((0usize..5, "[0-9]{2}px"), 0..12)
        ) {
            let (applied, sink) = recorder();
            let mut panel = PanelController::new(&custom(), SettingsState::default(), sink);
            for (index, raw) in edits {
                panel.dispatch(PanelAction::FieldChanged {
                    key: FieldKey::all()[index],
                    value: size(&raw),
                });
            }
            let draft = panel.draft().clone();
            panel.dispatch(PanelAction::Apply);
            let got = applied.borrow();
            prop_assert_eq!(got.as_slice(), &[draft]);
        }
    }
}
