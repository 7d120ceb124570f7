//! Page models for the main views.

pub mod create_view;
pub mod library_view;

pub use {
    create_view::CreateView,
    library_view::{LibraryView, TrackRow},
};
