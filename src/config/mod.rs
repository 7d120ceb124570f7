//! User preferences and their durable storage.
//!
//! This module owns the only persisted format in the crate: the settings
//! envelope stored under [`SETTINGS_STORAGE_KEY`].

pub mod settings;
pub mod storage;

pub use {
    settings::{
        LANGUAGE_STORAGE_KEY, Language, SETTINGS_STORAGE_KEY, Settings, SettingsError, Theme,
        decode_settings, encode_settings, load_settings, load_settings_or_default, save_settings,
    },
    storage::{FileStorage, KeyValueStorage, MemoryStorage, get_config_dir},
};
