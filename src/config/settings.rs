//! Theme and language preferences with a versioned JSON envelope.
//!
//! Settings are stored as `{"state":{"theme":..,"language":..},"version":0}`
//! under [`SETTINGS_STORAGE_KEY`]. Reading returns a `Result` for malformed
//! JSON or a missing `state` object, while an unrecognised field value only
//! resets that field. [`load_settings_or_default`] is the entry point used at
//! startup, falling back to built-in defaults on any failure.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    io::Error as StdError,
    str::FromStr,
};

use {
    anyhow::Error,
    serde::{Deserialize, Deserializer, Serialize},
    serde_json::{Error as SerdeJsonError, Value, from_str, to_string},
    thiserror::Error,
    tracing::debug,
};

use crate::{config::storage::KeyValueStorage, error::ErrorReporter};

/// Storage key holding the settings envelope.
pub const SETTINGS_STORAGE_KEY: &str = "ace-step-settings";

/// Storage key holding the bare language code for the translation layer.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// Envelope version written alongside the state.
const SETTINGS_VERSION: u32 = 0;

/// Error type for settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read or write the storage backend.
    #[error("IO error: {0}")]
    IoError(#[from] StdError),
    /// Failed to serialize or deserialize settings.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] SerdeJsonError),
    /// Invalid settings value.
    #[error("Invalid settings value: {reason}")]
    InvalidValue { reason: String },
    /// Nothing has been stored yet.
    #[error("No settings stored under {key}")]
    NotFound { key: String },
}

/// Colour theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Always light.
    Light,
    /// Always dark.
    #[default]
    Dark,
    /// Follow the display environment at the time the theme is applied.
    System,
}

impl Theme {
    /// Storage identifier of the theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(SettingsError::InvalidValue {
                reason: format!("unknown theme '{other}'"),
            }),
        }
    }
}

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Vietnamese.
    Vi,
}

impl Language {
    /// ISO 639-1 code of the language.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Vi => "vi",
        }
    }

    /// Native display name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Vi => "Tiếng Việt",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "vi" => Ok(Language::Vi),
            other => Err(SettingsError::InvalidValue {
                reason: format!("unknown language '{other}'"),
            }),
        }
    }
}

/// Persisted user preferences.
///
/// Each field is decoded on its own: a missing or unrecognised value takes
/// that field's default without affecting the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Theme preference.
    #[serde(deserialize_with = "lenient")]
    pub theme: Theme,
    /// Interface language.
    #[serde(deserialize_with = "lenient")]
    pub language: Language,
}

/// Decodes a field, substituting its default for any unusable value.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: for<'a> Deserialize<'a> + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(&value).unwrap_or_else(|e| {
        debug!("Ignoring unusable settings value {value}: {e}");
        T::default()
    }))
}

/// On-disk envelope around [`Settings`].
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSettings {
    state: Settings,
    #[serde(default)]
    version: u32,
}

/// Decodes a settings envelope.
///
/// # Errors
///
/// Returns `SettingsError::SerializationError` for malformed JSON or a
/// missing `state` object. Unknown field values decode to their defaults.
pub fn decode_settings(raw: &str) -> Result<Settings, SettingsError> {
    let envelope: PersistedSettings = from_str(raw)?;
    if envelope.version != SETTINGS_VERSION {
        debug!(
            "Settings envelope version {} differs from {}, reading state as-is",
            envelope.version, SETTINGS_VERSION
        );
    }
    Ok(envelope.state)
}

/// Encodes settings into their storage envelope.
///
/// # Errors
///
/// Returns `SettingsError::SerializationError` if encoding fails.
pub fn encode_settings(settings: &Settings) -> Result<String, SettingsError> {
    let envelope = PersistedSettings {
        state: *settings,
        version: SETTINGS_VERSION,
    };
    Ok(to_string(&envelope)?)
}

/// Reads persisted settings from `storage`.
///
/// # Errors
///
/// Returns `SettingsError::NotFound` if nothing is stored, or the backend or
/// decoding error otherwise.
pub fn load_settings(storage: &dyn KeyValueStorage) -> Result<Settings, SettingsError> {
    let raw = storage
        .get(SETTINGS_STORAGE_KEY)?
        .ok_or_else(|| SettingsError::NotFound {
            key: SETTINGS_STORAGE_KEY.to_string(),
        })?;
    decode_settings(&raw)
}

/// Reads persisted settings, substituting defaults when they are absent or
/// unreadable.
#[must_use]
pub fn load_settings_or_default(storage: &dyn KeyValueStorage) -> Settings {
    match load_settings(storage) {
        Ok(settings) => {
            debug!(
                "Loaded settings: theme={}, language={}",
                settings.theme, settings.language
            );
            settings
        }
        Err(e @ SettingsError::NotFound { .. }) => {
            ErrorReporter::debug(&Error::from(e), "Using default settings");
            Settings::default()
        }
        Err(e) => {
            ErrorReporter::warn(&Error::from(e), "Discarding unreadable settings");
            Settings::default()
        }
    }
}

/// Writes `settings` to `storage` under [`SETTINGS_STORAGE_KEY`].
///
/// # Errors
///
/// Returns `SettingsError` if encoding or the backend write fails.
pub fn save_settings(
    storage: &dyn KeyValueStorage,
    settings: &Settings,
) -> Result<(), SettingsError> {
    let contents = encode_settings(settings)?;
    storage.set(SETTINGS_STORAGE_KEY, &contents)
}

#[cfg(test)]
mod tests {
    use std::io::{Error, ErrorKind::NotFound};

    use crate::config::{
        settings::{
            Language, SETTINGS_STORAGE_KEY, Settings, SettingsError, Theme, decode_settings,
            encode_settings, load_settings, load_settings_or_default, save_settings,
        },
        storage::MemoryStorage,
    };

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.language, Language::En);
    }

    #[test]
    fn test_decode_persisted_envelope() {
        let settings = decode_settings(r#"{"state":{"theme":"light","language":"vi"}}"#).unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.language, Language::Vi);
    }

    #[test]
    fn test_decode_missing_field_uses_default() {
        let settings = decode_settings(r#"{"state":{"theme":"system"},"version":0}"#).unwrap();
        assert_eq!(settings.theme, Theme::System);
        assert_eq!(settings.language, Language::En);
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(decode_settings("{not json").is_err());
        assert!(decode_settings(r#"{"theme":"light"}"#).is_err());
        assert!(decode_settings(r#"{"state":[]}"#).is_err());
    }

    #[test]
    fn test_decode_unknown_value_keeps_other_fields() {
        let settings =
            decode_settings(r#"{"state":{"theme":"light","language":"fr"},"version":0}"#).unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.language, Language::En);

        let settings = decode_settings(r#"{"state":{"theme":"sepia","language":"vi"}}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.language, Language::Vi);

        let settings = decode_settings(r#"{"state":{"theme":7,"language":null}}"#).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_encode_writes_envelope() {
        let settings = Settings {
            theme: Theme::System,
            language: Language::Vi,
        };
        assert_eq!(
            encode_settings(&settings).unwrap(),
            r#"{"state":{"theme":"system","language":"vi"},"version":0}"#
        );
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let settings = Settings {
            theme: Theme::Light,
            language: Language::Vi,
        };

        save_settings(&storage, &settings).unwrap();
        assert_eq!(load_settings(&storage).unwrap(), settings);
    }

    #[test]
    fn test_load_absent_is_not_found() {
        let storage = MemoryStorage::new();
        assert!(matches!(
            load_settings(&storage),
            Err(SettingsError::NotFound { .. })
        ));
        assert_eq!(load_settings_or_default(&storage), Settings::default());
    }

    #[test]
    fn test_load_corrupt_falls_back_to_dark() {
        let storage = MemoryStorage::with_entry(SETTINGS_STORAGE_KEY, "{\"state\":");
        let settings = load_settings_or_default(&storage);
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.language, Language::En);
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("system".parse::<Theme>().unwrap(), Theme::System);
        assert_eq!("vi".parse::<Language>().unwrap(), Language::Vi);
        assert_eq!(Language::Vi.label(), "Tiếng Việt");

        let error = "fr".parse::<Language>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid settings value: unknown language 'fr'"
        );
    }

    #[test]
    fn test_settings_error_display() {
        let io_error = Error::new(NotFound, "File not found");
        let settings_error = SettingsError::IoError(io_error);
        assert!(settings_error.to_string().contains("IO error"));

        let not_found = SettingsError::NotFound {
            key: SETTINGS_STORAGE_KEY.to_string(),
        };
        assert_eq!(
            not_found.to_string(),
            "No settings stored under ace-step-settings"
        );
    }
}
