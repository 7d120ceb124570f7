//! Generated-track library: models, catalogue and the list transform used by
//! the library page.

pub mod catalog;
pub mod models;
pub mod query;

pub use {
    catalog::{InMemoryCatalog, TrackCatalog},
    models::Track,
    query::{LibraryQuery, SortOrder, filter_tracks, query_tracks, sort_tracks},
};
