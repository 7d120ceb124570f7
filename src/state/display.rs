//! Display environment the theme is applied to.

use std::{
    fmt::Debug,
    sync::atomic::{AtomicBool, Ordering},
};

use crate::config::Theme;

/// Light/dark capable display surface.
pub trait DisplayEnvironment: Debug + Send + Sync {
    /// Whether the environment currently prefers a dark appearance.
    fn prefers_dark(&self) -> bool;

    /// Switches the surface between dark and light.
    fn set_dark(&self, dark: bool);
}

/// Resolves whether `theme` means dark right now.
///
/// `System` reads the environment preference at call time only.
pub fn resolve_dark(theme: Theme, display: &dyn DisplayEnvironment) -> bool {
    match theme {
        Theme::Dark => true,
        Theme::Light => false,
        Theme::System => display.prefers_dark(),
    }
}

/// Applies `theme` to `display` and returns the dark flag that was set.
pub fn apply_theme(theme: Theme, display: &dyn DisplayEnvironment) -> bool {
    let dark = resolve_dark(theme, display);
    display.set_dark(dark);
    dark
}

/// Display with a fixed, externally adjustable preference.
///
/// Used by headless embedders and tests.
#[derive(Debug, Default)]
pub struct StaticDisplay {
    prefers_dark: AtomicBool,
    dark: AtomicBool,
}

impl StaticDisplay {
    /// Creates a display whose environment preference is `prefers_dark`.
    #[must_use]
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: AtomicBool::new(prefers_dark),
            dark: AtomicBool::new(false),
        }
    }

    /// Changes the environment preference without re-applying anything.
    pub fn set_preference(&self, prefers_dark: bool) {
        self.prefers_dark.store(prefers_dark, Ordering::Relaxed);
    }

    /// Whether dark mode is currently applied.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark.load(Ordering::Relaxed)
    }
}

impl DisplayEnvironment for StaticDisplay {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.load(Ordering::Relaxed)
    }

    fn set_dark(&self, dark: bool) {
        self.dark.store(dark, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Theme,
        state::display::{StaticDisplay, apply_theme, resolve_dark},
    };

    #[test]
    fn test_explicit_themes_ignore_preference() {
        let display = StaticDisplay::new(true);
        assert!(!apply_theme(Theme::Light, &display));
        assert!(!display.is_dark());

        display.set_preference(false);
        assert!(apply_theme(Theme::Dark, &display));
        assert!(display.is_dark());
    }

    #[test]
    fn test_system_theme_reads_preference_once() {
        let display = StaticDisplay::new(true);
        assert!(apply_theme(Theme::System, &display));

        // No live binding: a later preference change is not picked up
        display.set_preference(false);
        assert!(display.is_dark());
        assert!(!resolve_dark(Theme::System, &display));
    }
}
