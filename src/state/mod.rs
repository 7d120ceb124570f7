//! Client-side state containers with change notification.
//!
//! Three independent stores (generation, player, settings) are bundled in
//! an [`AppContext`] that the page models share.

pub mod app_state;
pub mod display;
pub mod generation_store;
pub mod observer;
pub mod player_store;
pub mod settings_store;

pub use {
    app_state::AppContext,
    display::{DisplayEnvironment, StaticDisplay, apply_theme, resolve_dark},
    generation_store::{GenerationEvent, GenerationState, GenerationStore},
    observer::Subscribers,
    player_store::{PlayerEvent, PlayerState, PlayerStore},
    settings_store::{SettingsEvent, SettingsStore},
};
