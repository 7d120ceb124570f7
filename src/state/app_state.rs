//! Application context bundling the three stores.
//!
//! The context is built once by the embedding application and passed to
//! every page model; nothing here is a global.

use std::sync::Arc;

use tracing::debug;

use crate::{
    config::{FileStorage, KeyValueStorage},
    error::{Result, ResultExt},
    state::{
        display::DisplayEnvironment, generation_store::GenerationStore,
        player_store::PlayerStore, settings_store::SettingsStore,
    },
};

/// Shared handles to the application stores.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Generation parameters and request lifecycle.
    pub generation: Arc<GenerationStore>,
    /// Current track and transport state.
    pub player: Arc<PlayerStore>,
    /// Persisted theme and language.
    pub settings: Arc<SettingsStore>,
}

impl AppContext {
    /// Creates the stores, rehydrating settings from `storage`.
    ///
    /// # Arguments
    ///
    /// * `storage` - Durable storage for the settings envelope
    /// * `display` - Display the theme is applied to
    ///
    /// # Returns
    ///
    /// A new `AppContext` instance.
    pub fn new(storage: Arc<dyn KeyValueStorage>, display: Arc<dyn DisplayEnvironment>) -> Self {
        let settings = SettingsStore::load(storage, display);
        debug!("AppContext: Stores initialized");

        Self {
            generation: Arc::new(GenerationStore::new()),
            player: Arc::new(PlayerStore::new()),
            settings: Arc::new(settings),
        }
    }

    /// Creates the stores with settings kept in the default config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created.
    pub fn with_file_storage(display: Arc<dyn DisplayEnvironment>) -> Result<Self> {
        let storage = FileStorage::new().add_context("Failed to prepare settings storage")?;
        Ok(Self::new(Arc::new(storage), display))
    }
}
