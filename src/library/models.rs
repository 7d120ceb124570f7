//! Data model for generated tracks.

use {
    chrono::{DateTime, Utc},
    serde::{Deserialize, Serialize},
    serde_json::{Map, Value},
};

/// A finished generation result.
///
/// Tracks are owned by the external library service; this crate only reads
/// them and refers to their audio by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique identifier assigned by the service.
    pub id: String,
    /// Display title; may be empty.
    pub title: String,
    /// Prompt the track was generated from.
    pub prompt: String,
    /// Lyrics the track was generated with.
    pub lyrics: String,
    /// Location of the stored audio; empty when none is available.
    pub audio_path: String,
    /// Duration in seconds.
    pub duration: f64,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Parameter snapshot used to produce the track.
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl Track {
    /// Title to display, with a placeholder for untitled tracks.
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    /// Whether there is any audio to load for this track.
    #[must_use]
    pub fn has_audio(&self) -> bool {
        !self.audio_path.is_empty()
    }
}

impl Default for Track {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            prompt: String::new(),
            lyrics: String::new(),
            audio_path: String::new(),
            duration: 0.0,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            params: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{from_str, json};

    use crate::library::models::Track;

    #[test]
    fn test_track_from_service_payload() {
        let payload = json!({
            "id": "1",
            "title": "Pop Song Demo",
            "prompt": "pop, synth",
            "lyrics": "[verse]\nHello world...",
            "audioPath": "/outputs/demo1.wav",
            "duration": 180,
            "createdAt": "2026-01-02T03:04:05Z",
            "params": { "inferStep": 60 }
        })
        .to_string();

        let track: Track = from_str(&payload).unwrap();
        assert_eq!(track.id, "1");
        assert_eq!(track.audio_path, "/outputs/demo1.wav");
        assert_eq!(track.duration, 180.0);
        assert_eq!(track.created_at.to_rfc3339(), "2026-01-02T03:04:05+00:00");
        assert_eq!(track.params["inferStep"], json!(60));
    }

    #[test]
    fn test_track_params_optional() {
        let payload = r#"{"id":"2","title":"","prompt":"","lyrics":"","audioPath":"","duration":0,"createdAt":"2026-01-01T00:00:00Z"}"#;
        let track: Track = from_str(payload).unwrap();
        assert!(track.params.is_empty());
    }

    #[test]
    fn test_display_title_and_audio() {
        let track = Track::default();
        assert_eq!(track.display_title(), "Untitled");
        assert!(!track.has_audio());

        let track = Track {
            title: "Night Drive".to_string(),
            audio_path: "/outputs/a.wav".to_string(),
            ..Track::default()
        };
        assert_eq!(track.display_title(), "Night Drive");
        assert!(track.has_audio());
    }
}
