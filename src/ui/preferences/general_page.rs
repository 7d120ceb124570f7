//! Settings page: theme and language selection.

use std::sync::Arc;

use tracing::debug;

use crate::{
    config::{Language, Theme},
    state::SettingsStore,
};

/// Theme choices in display order.
pub const THEME_OPTIONS: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

/// Language choices in display order.
pub const LANGUAGE_OPTIONS: [Language; 2] = [Language::En, Language::Vi];

/// Settings page bound to the settings store.
#[derive(Debug, Clone)]
pub struct SettingsPage {
    settings: Arc<SettingsStore>,
}

impl SettingsPage {
    #[must_use]
    pub fn new(settings: Arc<SettingsStore>) -> Self {
        Self { settings }
    }

    /// Theme options paired with whether each one is selected.
    #[must_use]
    pub fn theme_options(&self) -> Vec<(Theme, bool)> {
        let current = self.settings.theme();
        THEME_OPTIONS
            .iter()
            .map(|theme| (*theme, *theme == current))
            .collect()
    }

    /// Language options paired with whether each one is selected.
    #[must_use]
    pub fn language_options(&self) -> Vec<(Language, bool)> {
        let current = self.settings.language();
        LANGUAGE_OPTIONS
            .iter()
            .map(|language| (*language, *language == current))
            .collect()
    }

    pub fn select_theme(&self, theme: Theme) {
        debug!("SettingsPage: Theme {theme} selected");
        self.settings.set_theme(theme);
    }

    pub fn select_language(&self, language: Language) {
        debug!("SettingsPage: Language {language} selected");
        self.settings.set_language(language);
    }
}
