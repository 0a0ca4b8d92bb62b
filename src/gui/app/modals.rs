use crate::gui::settings::SettingsModal;

/// Modals that keep their own state between frames. The image dialog is
/// driven directly by the study state and is not listed here.
pub struct Modals {
    pub settings: SettingsModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self { settings: SettingsModal::new() }
    }
}
