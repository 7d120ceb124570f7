//! Persisted theme and language preference.
//!
//! Every mutation is written through to storage. Applying the theme is a
//! one-shot reconciliation with the display environment: a `System` theme
//! samples the environment preference when it is set or loaded and does
//! not follow later changes.

use std::sync::Arc;

use {
    anyhow::Error,
    async_channel::Receiver,
    parking_lot::RwLock,
    tracing::debug,
};

use crate::{
    config::{
        KeyValueStorage, LANGUAGE_STORAGE_KEY, Language, Settings, Theme,
        load_settings_or_default, save_settings,
    },
    error::ErrorReporter,
    state::{
        display::{DisplayEnvironment, apply_theme},
        observer::Subscribers,
    },
};

/// Settings store change events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    /// Theme changed; `dark` is the flag applied to the display.
    ThemeChanged { theme: Theme, dark: bool },
    LanguageChanged(Language),
}

/// Theme/language store backed by durable storage.
#[derive(Debug)]
pub struct SettingsStore {
    settings: RwLock<Settings>,
    /// Dark flag last applied to the display.
    dark: RwLock<bool>,
    storage: Arc<dyn KeyValueStorage>,
    display: Arc<dyn DisplayEnvironment>,
    subscribers: Subscribers<SettingsEvent>,
}

impl SettingsStore {
    /// Rehydrates the store from `storage` and applies the loaded theme.
    ///
    /// Absent or unreadable settings fall back to the defaults.
    ///
    /// # Arguments
    ///
    /// * `storage` - Durable storage holding the settings envelope
    /// * `display` - Display the theme is applied to
    pub fn load(storage: Arc<dyn KeyValueStorage>, display: Arc<dyn DisplayEnvironment>) -> Self {
        let settings = load_settings_or_default(storage.as_ref());
        let dark = apply_theme(settings.theme, display.as_ref());
        debug!(
            "SettingsStore: Loaded theme {} (dark: {dark}), language {}",
            settings.theme, settings.language
        );

        Self {
            settings: RwLock::new(settings),
            dark: RwLock::new(dark),
            storage,
            display,
            subscribers: Subscribers::default(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        *self.settings.read()
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.settings.read().theme
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.settings.read().language
    }

    /// Whether the display was last switched to dark.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        *self.dark.read()
    }

    /// Stores and persists `theme`, then applies it to the display.
    pub fn set_theme(&self, theme: Theme) {
        let settings = {
            let mut settings = self.settings.write();
            settings.theme = theme;
            *settings
        };
        self.persist(&settings);

        let dark = apply_theme(theme, self.display.as_ref());
        *self.dark.write() = dark;
        debug!("SettingsStore: Theme set to {theme} (dark: {dark})");

        self.subscribers
            .broadcast(&SettingsEvent::ThemeChanged { theme, dark });
    }

    /// Stores and persists `language`.
    pub fn set_language(&self, language: Language) {
        let settings = {
            let mut settings = self.settings.write();
            settings.language = language;
            *settings
        };
        self.persist(&settings);

        if let Err(e) = self.storage.set(LANGUAGE_STORAGE_KEY, language.as_str()) {
            ErrorReporter::warn(&Error::from(e), "Persisting interface language");
        }
        debug!("SettingsStore: Language set to {language}");

        self.subscribers
            .broadcast(&SettingsEvent::LanguageChanged(language));
    }

    /// Switches dark to light; any other theme becomes dark.
    pub fn toggle_theme(&self) {
        let next = match self.theme() {
            Theme::Dark => Theme::Light,
            Theme::Light | Theme::System => Theme::Dark,
        };
        self.set_theme(next);
    }

    /// Switches between the two supported languages.
    pub fn toggle_language(&self) {
        let next = match self.language() {
            Language::En => Language::Vi,
            Language::Vi => Language::En,
        };
        self.set_language(next);
    }

    /// Subscribes to settings changes.
    pub fn subscribe(&self) -> Receiver<SettingsEvent> {
        self.subscribers.subscribe()
    }

    fn persist(&self, settings: &Settings) {
        if let Err(e) = save_settings(self.storage.as_ref(), settings) {
            ErrorReporter::warn(&Error::from(e), "Persisting settings");
        }
    }
}
