//! Application shell wiring the page models to one shared context.

use std::sync::Arc;

use tracing::debug;

use crate::{
    library::TrackCatalog,
    state::AppContext,
    ui::{
        player_bar::PlayerBar, preferences::SettingsPage, sidebar::Sidebar,
        views::{CreateView, LibraryView},
    },
};

/// Shell holding every page model of the application.
#[derive(Debug)]
pub struct Shell {
    pub context: AppContext,
    pub sidebar: Sidebar,
    pub player_bar: PlayerBar,
    pub create: CreateView,
    pub library: LibraryView,
    pub settings: SettingsPage,
}

impl Shell {
    /// Builds all page models on top of `context`.
    ///
    /// # Arguments
    ///
    /// * `context` - Shared stores
    /// * `catalog` - Track source for the library page
    #[must_use]
    pub fn new(context: AppContext, catalog: Arc<dyn TrackCatalog>) -> Self {
        let shell = Self {
            sidebar: Sidebar::new(context.settings.clone()),
            player_bar: PlayerBar::new(context.player.clone()),
            create: CreateView::new(context.generation.clone()),
            library: LibraryView::new(catalog, context.player.clone()),
            settings: SettingsPage::new(context.settings.clone()),
            context,
        };
        debug!("Shell: Page models created");
        shell
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::{
        config::{MemoryStorage, Theme},
        library::InMemoryCatalog,
        state::{AppContext, StaticDisplay},
        ui::shell::Shell,
    };

    #[test]
    fn test_pages_share_the_context() {
        let context = AppContext::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(StaticDisplay::new(false)),
        );
        let shell = Shell::new(context, Arc::new(InMemoryCatalog::with_mock_tracks()));

        shell.library.play("1").unwrap();
        assert_eq!(shell.player_bar.now_playing().unwrap().title, "Pop Song Demo");
        assert!(shell.context.player.is_playing());

        shell.sidebar.toggle_theme();
        assert_eq!(
            shell.settings.theme_options()[0],
            (Theme::Light, true)
        );
    }
}
