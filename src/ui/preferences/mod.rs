//! Preferences pages.

pub mod general_page;

pub use general_page::SettingsPage;
