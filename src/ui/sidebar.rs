//! Sidebar shell quick toggles.

use std::sync::Arc;

use crate::{
    config::{Language, Theme},
    state::SettingsStore,
};

/// Sidebar with theme and language quick toggles.
#[derive(Debug, Clone)]
pub struct Sidebar {
    settings: Arc<SettingsStore>,
}

impl Sidebar {
    #[must_use]
    pub fn new(settings: Arc<SettingsStore>) -> Self {
        Self { settings }
    }

    /// Theme button: dark goes light, anything else goes dark.
    pub fn toggle_theme(&self) {
        self.settings.toggle_theme();
    }

    /// Language button: cycles en and vi.
    pub fn toggle_language(&self) {
        self.settings.toggle_language();
    }

    /// Theme shown on the toggle.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.settings.theme()
    }

    /// Language code shown next to the toggle.
    #[must_use]
    pub fn language_badge(&self) -> String {
        self.settings.language().as_str().to_uppercase()
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.settings.language()
    }
}
