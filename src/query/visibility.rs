//! Visibility queries: which tracks appear in which views.
//!
//! Union-semantics operations answer "which tracks touch this set of
//! views"; intersection-semantics operations ("common tracks") answer
//! "which tracks are visible in every one of these views".

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::core::{TrackId, TracksMap, TracksPerView, ViewId};

/// Track ids visible in `view`, by linear scan over the track map.
///
/// Prefer [`tracks_in_view_fast`](super::tracks_in_view_fast) when a
/// per-view index is available.
pub fn tracks_in_view(tracks: &TracksMap, view: ViewId) -> BTreeSet<TrackId> {
    tracks
        .iter()
        .filter(|(_, track)| track.feature_in_view(view).is_some())
        .map(|(&id, _)| id)
        .collect()
}

/// Track ids visible in at least one view of `views` (union semantics).
///
/// Scans the track map once.
pub fn tracks_touching_views(tracks: &TracksMap, views: &BTreeSet<ViewId>) -> BTreeSet<TrackId> {
    tracks
        .iter()
        .filter(|(_, track)| track.views().any(|v| views.contains(&v)))
        .map(|(&id, _)| id)
        .collect()
}

/// Track ids visible in every view of `views` (intersection semantics).
///
/// Sweep-merges the sorted per-view id lists, starting from the shortest,
/// so cost is linear in the lists actually scanned. An empty query set is
/// vacuously satisfied by every track; a view with no tracks at all
/// empties the intersection.
pub fn common_track_ids(index: &TracksPerView, views: &BTreeSet<ViewId>) -> Vec<TrackId> {
    if views.is_empty() {
        let mut all: Vec<TrackId> = index.values().flatten().copied().collect();
        all.sort_unstable();
        all.dedup();
        return all;
    }

    let mut lists: Vec<&Vec<TrackId>> = Vec::with_capacity(views.len());
    for view in views {
        match index.get(view) {
            Some(ids) => lists.push(ids),
            None => return Vec::new(),
        }
    }
    lists.sort_unstable_by_key(|ids| ids.len());

    let mut common = lists[0].clone();
    for ids in &lists[1..] {
        common = intersect_sorted(&common, ids);
        if common.is_empty() {
            break;
        }
    }
    common
}

/// Tracks whose view domain covers every view in `views`.
///
/// Linear scan over the track map. An empty query set is vacuously
/// covered by every track, so it returns the whole map.
pub fn common_tracks(tracks: &TracksMap, views: &BTreeSet<ViewId>) -> TracksMap {
    tracks
        .iter()
        .filter(|(_, track)| track.covers_views(views))
        .map(|(&id, track)| (id, track.clone()))
        .collect()
}

/// Same result as [`common_tracks`], composed from the per-view index.
pub fn common_tracks_fast(
    tracks: &TracksMap,
    index: &TracksPerView,
    views: &BTreeSet<ViewId>,
) -> TracksMap {
    common_track_ids(index, views)
        .into_iter()
        .filter_map(|id| tracks.get(&id).map(|track| (id, track.clone())))
        .collect()
}

/// Intersection of two ascending, duplicate-free id lists.
fn intersect_sorted(a: &[TrackId], b: &[TrackId]) -> Vec<TrackId> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}
