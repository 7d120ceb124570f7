//! Headless page models for the application shell.
//!
//! Each model reads the shared stores, dispatches mutations and keeps only
//! transient view flags of its own. Rendering is left to the embedder.

pub mod player_bar;
pub mod preferences;
pub mod shell;
pub mod sidebar;
pub mod utils;
pub mod views;

pub use {
    player_bar::{NowPlaying, PlayerBar},
    preferences::SettingsPage,
    shell::Shell,
    sidebar::Sidebar,
    views::{CreateView, LibraryView},
};
