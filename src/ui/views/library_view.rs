//! Library page: searchable, sortable list of generated tracks.

use std::sync::Arc;

use tracing::debug;

use crate::{
    error::LibraryError,
    library::{LibraryQuery, SortOrder, Track, TrackCatalog},
    state::PlayerStore,
    ui::utils::{format_date, format_duration},
};

/// One rendered row of the track list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRow {
    pub id: String,
    pub title: String,
    pub prompt: String,
    /// Duration and creation date, e.g. `3:00 • Jan 2, 2026`.
    pub details: String,
}

impl From<&Track> for TrackRow {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id.clone(),
            title: track.display_title().to_string(),
            prompt: track.prompt.clone(),
            details: format!(
                "{} • {}",
                format_duration(track.duration),
                format_date(&track.created_at)
            ),
        }
    }
}

/// Library page model.
#[derive(Debug)]
pub struct LibraryView {
    catalog: Arc<dyn TrackCatalog>,
    player: Arc<PlayerStore>,
    query: LibraryQuery,
}

impl LibraryView {
    /// Creates the page with an empty search, newest first.
    #[must_use]
    pub fn new(catalog: Arc<dyn TrackCatalog>, player: Arc<PlayerStore>) -> Self {
        Self {
            catalog,
            player,
            query: LibraryQuery::default(),
        }
    }

    #[must_use]
    pub fn query(&self) -> &LibraryQuery {
        &self.query
    }

    pub fn set_search(&mut self, search: &str) {
        self.query.search = search.to_string();
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.query.order = order;
    }

    /// Sort button: flips between newest and oldest.
    pub fn toggle_sort(&mut self) {
        self.query.order = self.query.order.toggle_recency();
    }

    /// Tracks matching the current search, in the current order.
    #[must_use]
    pub fn visible_tracks(&self) -> Vec<Track> {
        self.query.apply(&self.catalog.tracks())
    }

    /// Rows for the visible tracks.
    #[must_use]
    pub fn rows(&self) -> Vec<TrackRow> {
        self.visible_tracks().iter().map(TrackRow::from).collect()
    }

    /// Whether the "no results" state should be shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible_tracks().is_empty()
    }

    /// Play button: selects the track and starts playback.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if the track left the catalogue.
    pub fn play(&self, track_id: &str) -> Result<(), LibraryError> {
        let track = self.catalog.get(track_id)?;
        debug!("LibraryView: Playing track {track_id}");
        self.player.play_track(track);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use crate::{
        error::LibraryError,
        library::{InMemoryCatalog, SortOrder, Track},
        state::PlayerStore,
        ui::views::library_view::{LibraryView, TrackRow},
    };

    fn catalog() -> Arc<InMemoryCatalog> {
        let tracks = vec![
            Track {
                id: "old".to_string(),
                title: "Morning".to_string(),
                prompt: "acoustic, folk".to_string(),
                duration: 200.0,
                created_at: Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap(),
                ..Track::default()
            },
            Track {
                id: "new".to_string(),
                title: String::new(),
                prompt: "techno, 130 bpm".to_string(),
                duration: 75.0,
                created_at: Utc.with_ymd_and_hms(2026, 3, 9, 22, 0, 0).unwrap(),
                ..Track::default()
            },
        ];
        Arc::new(InMemoryCatalog::new(tracks).unwrap())
    }

    fn ids(view: &LibraryView) -> Vec<String> {
        view.visible_tracks().into_iter().map(|track| track.id).collect()
    }

    #[test]
    fn test_default_order_is_newest_first() {
        let view = LibraryView::new(catalog(), Arc::new(PlayerStore::new()));
        assert_eq!(ids(&view), ["new", "old"]);
    }

    #[test]
    fn test_search_and_sort() {
        let mut view = LibraryView::new(catalog(), Arc::new(PlayerStore::new()));

        view.toggle_sort();
        assert_eq!(view.query().order, SortOrder::Oldest);
        assert_eq!(ids(&view), ["old", "new"]);

        view.set_sort_order(SortOrder::Shortest);
        assert_eq!(ids(&view), ["new", "old"]);

        view.set_search("FOLK");
        assert_eq!(ids(&view), ["old"]);

        view.set_search("reggaeton");
        assert!(view.is_empty());
    }

    #[test]
    fn test_rows() {
        let view = LibraryView::new(catalog(), Arc::new(PlayerStore::new()));
        let rows = view.rows();

        assert_eq!(
            rows[0],
            TrackRow {
                id: "new".to_string(),
                title: "Untitled".to_string(),
                prompt: "techno, 130 bpm".to_string(),
                details: "1:15 • Mar 9, 2026".to_string(),
            }
        );
        assert_eq!(rows[1].details, "3:20 • Jan 1, 2026");
    }

    #[test]
    fn test_play_selects_and_starts() {
        let player = Arc::new(PlayerStore::new());
        let view = LibraryView::new(catalog(), player.clone());

        player.set_progress(50.0);
        view.play("old").unwrap();
        assert_eq!(player.current_track().unwrap().id, "old");
        assert!(player.is_playing());
        assert_eq!(player.progress(), 0.0);

        assert!(matches!(
            view.play("gone"),
            Err(LibraryError::NotFound { .. })
        ));
    }
}
