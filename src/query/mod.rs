//! Read-only queries over exported tracks.
//!
//! All operations here are stateless free functions over the immutable
//! [`TracksMap`](crate::core::TracksMap) and
//! [`TracksPerView`](crate::core::TracksPerView); they are re-entrant and
//! need no synchronisation.
//!
//! - **Per-view index**: [`tracks_per_view`] builds the inverted index,
//!   [`tracks_in_view_fast`] looks one view up in it
//! - **Visibility**: [`tracks_in_view`], [`tracks_touching_views`] (union),
//!   [`common_track_ids`] / [`common_tracks`] / [`common_tracks_fast`]
//!   (intersection)
//! - **Aggregates**: [`track_length_histogram`], [`view_ids_in_tracks`],
//!   [`track_ids`], [`features_in_view`], [`tracks_to_matches`]
//!
//! # Example
//!
//! ```rust,ignore
//! use sutra_tracks::query::{common_tracks_fast, tracks_per_view};
//!
//! let index = tracks_per_view(&tracks);
//! let shared = common_tracks_fast(&tracks, &index, &view_set);
//! ```

mod per_view;
mod stats;
mod visibility;

pub use per_view::{tracks_in_view_fast, tracks_per_view};
pub use stats::{
    features_in_view, track_ids, track_length_histogram, tracks_to_matches, view_ids_in_index,
    view_ids_in_tracks,
};
pub use visibility::{
    common_track_ids, common_tracks, common_tracks_fast, tracks_in_view, tracks_touching_views,
};
