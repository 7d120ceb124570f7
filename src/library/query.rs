//! Search filter and sort orders for the library list.
//!
//! These are pure functions: the same tracks, query and order always give
//! the same result.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::library::models::Track;

/// Library list ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most recently created first.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
    /// Longest duration first.
    Longest,
    /// Shortest duration first.
    Shortest,
}

impl SortOrder {
    /// Orders two tracks under this sort order.
    #[must_use]
    pub fn compare(self, a: &Track, b: &Track) -> Ordering {
        match self {
            SortOrder::Newest => b.created_at.cmp(&a.created_at),
            SortOrder::Oldest => a.created_at.cmp(&b.created_at),
            SortOrder::Longest => b.duration.total_cmp(&a.duration),
            SortOrder::Shortest => a.duration.total_cmp(&b.duration),
        }
    }

    /// Flips between newest and oldest; duration orders switch to newest.
    #[must_use]
    pub fn toggle_recency(self) -> Self {
        match self {
            SortOrder::Newest => SortOrder::Oldest,
            _ => SortOrder::Newest,
        }
    }
}

/// Keeps tracks whose title or prompt contains `query`, ignoring case.
pub fn filter_tracks<'a>(tracks: &'a [Track], query: &str) -> Vec<&'a Track> {
    let needle = query.to_lowercase();
    tracks
        .iter()
        .filter(|track| {
            track.title.to_lowercase().contains(&needle)
                || track.prompt.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Sorts in place; ties keep their input order.
pub fn sort_tracks(tracks: &mut [Track], order: SortOrder) {
    tracks.sort_by(|a, b| order.compare(a, b));
}

/// Filters then sorts, returning an owned snapshot.
#[must_use]
pub fn query_tracks(tracks: &[Track], query: &str, order: SortOrder) -> Vec<Track> {
    let mut matches: Vec<Track> = filter_tracks(tracks, query).into_iter().cloned().collect();
    sort_tracks(&mut matches, order);
    matches
}

/// Search text and ordering of the library view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryQuery {
    /// Free-text search.
    pub search: String,
    /// Sort order.
    pub order: SortOrder,
}

impl LibraryQuery {
    /// Applies the query to `tracks`.
    #[must_use]
    pub fn apply(&self, tracks: &[Track]) -> Vec<Track> {
        query_tracks(tracks, &self.search, self.order)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};

    use crate::library::{
        models::Track,
        query::{LibraryQuery, SortOrder, filter_tracks, query_tracks},
    };

    fn track(id: &str, title: &str, prompt: &str, duration: f64, minutes: i64) -> Track {
        Track {
            id: id.to_string(),
            title: title.to_string(),
            prompt: prompt.to_string(),
            duration,
            created_at: DateTime::<Utc>::UNIX_EPOCH + Duration::minutes(minutes),
            ..Track::default()
        }
    }

    fn ids(tracks: &[Track]) -> Vec<&str> {
        tracks.iter().map(|track| track.id.as_str()).collect()
    }

    fn sample() -> Vec<Track> {
        // t1 < t2 < t3, durations deliberately not in time order
        vec![
            track("t2", "Sunrise", "ambient, pads", 60.0, 20),
            track("t3", "Riot", "punk, drums", 240.0, 30),
            track("t1", "Lullaby", "piano, soft", 120.0, 10),
        ]
    }

    #[test]
    fn test_sort_by_recency() {
        let tracks = sample();
        assert_eq!(
            ids(&query_tracks(&tracks, "", SortOrder::Oldest)),
            ["t1", "t2", "t3"]
        );
        assert_eq!(
            ids(&query_tracks(&tracks, "", SortOrder::Newest)),
            ["t3", "t2", "t1"]
        );
    }

    #[test]
    fn test_sort_by_duration_ignores_timestamps() {
        let tracks = sample();
        assert_eq!(
            ids(&query_tracks(&tracks, "", SortOrder::Longest)),
            ["t3", "t1", "t2"]
        );
        assert_eq!(
            ids(&query_tracks(&tracks, "", SortOrder::Shortest)),
            ["t2", "t1", "t3"]
        );
    }

    #[test]
    fn test_filter_matches_title_or_prompt_case_insensitive() {
        let tracks = sample();
        let by_title: Vec<_> = filter_tracks(&tracks, "RIOT").iter().map(|t| t.id.clone()).collect();
        assert_eq!(by_title, ["t3"]);

        let by_prompt: Vec<_> = filter_tracks(&tracks, "Piano").iter().map(|t| t.id.clone()).collect();
        assert_eq!(by_prompt, ["t1"]);

        assert_eq!(filter_tracks(&tracks, "").len(), 3);
        assert!(filter_tracks(&tracks, "zydeco").is_empty());
    }

    #[test]
    fn test_query_is_deterministic() {
        let tracks = sample();
        let query = LibraryQuery {
            search: "a".to_string(),
            order: SortOrder::Shortest,
        };
        assert_eq!(query.apply(&tracks), query.apply(&tracks));
    }

    #[test]
    fn test_toggle_recency() {
        assert_eq!(SortOrder::Newest.toggle_recency(), SortOrder::Oldest);
        assert_eq!(SortOrder::Oldest.toggle_recency(), SortOrder::Newest);
        assert_eq!(SortOrder::Longest.toggle_recency(), SortOrder::Newest);
    }
}
