//! Read-only track catalogue backing the library page.

use std::fmt::Debug;

use {
    chrono::Utc,
    parking_lot::RwLock,
    serde_json::Map,
    tracing::debug,
};

use crate::{error::LibraryError, library::models::Track};

/// Source of generated tracks.
pub trait TrackCatalog: Debug + Send + Sync {
    /// All known tracks, in storage order.
    fn tracks(&self) -> Vec<Track>;

    /// Looks up a single track.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if no track has the given id.
    fn get(&self, id: &str) -> Result<Track, LibraryError>;
}

/// Catalogue held in memory, refreshed wholesale from the library service.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    tracks: RwLock<Vec<Track>>,
}

impl InMemoryCatalog {
    /// Creates a catalogue holding `tracks`.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::InvalidData` if any track is unusable.
    pub fn new(tracks: Vec<Track>) -> Result<Self, LibraryError> {
        let catalog = Self::default();
        catalog.replace_all(tracks)?;
        Ok(catalog)
    }

    /// Creates a catalogue seeded with the demo track shown before the
    /// library service is connected.
    #[must_use]
    pub fn with_mock_tracks() -> Self {
        let demo = Track {
            id: "1".to_string(),
            title: "Pop Song Demo".to_string(),
            prompt: "pop, synth, drums, guitar, 120 bpm, upbeat, catchy".to_string(),
            lyrics: "[verse]\nHello world...".to_string(),
            audio_path: "/outputs/demo1.wav".to_string(),
            duration: 180.0,
            created_at: Utc::now(),
            params: Map::new(),
        };

        Self {
            tracks: RwLock::new(vec![demo]),
        }
    }

    /// Replaces the catalogue contents after validating every track.
    ///
    /// Nothing is replaced if any track is rejected.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::InvalidData` for an empty id or a negative or
    /// non-finite duration.
    pub fn replace_all(&self, tracks: Vec<Track>) -> Result<(), LibraryError> {
        for track in &tracks {
            validate_track(track)?;
        }

        debug!("InMemoryCatalog: Replacing catalogue with {} tracks", tracks.len());
        *self.tracks.write() = tracks;
        Ok(())
    }

    /// Number of tracks held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.read().len()
    }

    /// Whether the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.read().is_empty()
    }
}

impl TrackCatalog for InMemoryCatalog {
    fn tracks(&self) -> Vec<Track> {
        self.tracks.read().clone()
    }

    fn get(&self, id: &str) -> Result<Track, LibraryError> {
        self.tracks
            .read()
            .iter()
            .find(|track| track.id == id)
            .cloned()
            .ok_or_else(|| LibraryError::NotFound { id: id.to_string() })
    }
}

fn validate_track(track: &Track) -> Result<(), LibraryError> {
    if track.id.is_empty() {
        return Err(LibraryError::InvalidData {
            reason: "track id is empty".to_string(),
        });
    }

    if !track.duration.is_finite() || track.duration < 0.0 {
        return Err(LibraryError::InvalidData {
            reason: format!("track {} has duration {}", track.id, track.duration),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        error::LibraryError,
        library::{
            catalog::{InMemoryCatalog, TrackCatalog},
            models::Track,
        },
    };

    fn track(id: &str, duration: f64) -> Track {
        Track {
            id: id.to_string(),
            duration,
            ..Track::default()
        }
    }

    #[test]
    fn test_mock_catalog() {
        let catalog = InMemoryCatalog::with_mock_tracks();
        assert_eq!(catalog.len(), 1);

        let demo = catalog.get("1").unwrap();
        assert_eq!(demo.title, "Pop Song Demo");
        assert_eq!(demo.duration, 180.0);
    }

    #[test]
    fn test_get_missing_track() {
        let catalog = InMemoryCatalog::new(vec![track("a", 10.0)]).unwrap();
        assert!(matches!(
            catalog.get("b"),
            Err(LibraryError::NotFound { id }) if id == "b"
        ));
    }

    #[test]
    fn test_replace_all_rejects_invalid_tracks() {
        let catalog = InMemoryCatalog::new(vec![track("a", 10.0)]).unwrap();

        assert!(catalog.replace_all(vec![track("b", 5.0), track("", 1.0)]).is_err());
        assert!(catalog.replace_all(vec![track("c", f64::NAN)]).is_err());
        assert!(catalog.replace_all(vec![track("d", -1.0)]).is_err());

        // Rejected batches leave the previous contents in place
        assert_eq!(catalog.tracks(), vec![track("a", 10.0)]);

        catalog.replace_all(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }
}
