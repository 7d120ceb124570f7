//! Acestudio - client state for a music generation studio
//!
//! Holds the state behind the create, library and settings pages of an
//! ACE-Step front end: generation parameters, the currently playing track
//! and the persisted theme/language preference, plus headless page models
//! that read and mutate them. The generative model and track storage live
//! behind the [`generation::GenerationClient`] seam.

pub mod config;
pub mod error;
pub mod generation;
pub mod library;
pub mod logging;
pub mod state;
pub mod ui;

// Re-export key types for convenience
pub use {
    config::{Language, Settings, SettingsError, Theme},
    error::{GenerationError, LibraryError},
    generation::{GenerationClient, GenerationParams, ParamsUpdate},
    library::{SortOrder, Track},
    state::{AppContext, GenerationStore, PlayerStore, SettingsStore},
    ui::Shell,
};
