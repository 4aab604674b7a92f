//! Per-view inverted index over exported tracks.

use std::collections::BTreeSet;

use crate::core::{TrackId, TracksMap, TracksPerView, ViewId};

/// Build the per-view index: for each view, the ascending list of track
/// ids with an observation in that view.
///
/// Downstream sweep-merges rely on each list being sorted and
/// duplicate-free, so both are enforced here.
pub fn tracks_per_view(tracks: &TracksMap) -> TracksPerView {
    let mut index = TracksPerView::new();
    for (&id, track) in tracks {
        for view in track.views() {
            index.entry(view).or_default().push(id);
        }
    }
    for ids in index.values_mut() {
        ids.sort_unstable();
        ids.dedup();
    }
    index
}

/// Track ids visible in `view`, by direct index lookup.
///
/// O(|index[view]|); views absent from the index yield the empty set.
pub fn tracks_in_view_fast(index: &TracksPerView, view: ViewId) -> BTreeSet<TrackId> {
    index
        .get(&view)
        .map(|ids| ids.iter().copied().collect())
        .unwrap_or_default()
}
