//! Aggregate queries and conversions over exported tracks.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::{
    DescriptorKind, FeatureIndex, IndMatch, TrackId, TracksMap, TracksPerView, ViewId,
};
use crate::error::{Error, Result};

/// All track ids in the map, ascending.
pub fn track_ids(tracks: &TracksMap) -> BTreeSet<TrackId> {
    tracks.keys().copied().collect()
}

/// Occurrence count of each track length.
pub fn track_length_histogram(tracks: &TracksMap) -> BTreeMap<usize, usize> {
    let mut histogram = BTreeMap::new();
    for track in tracks.values() {
        *histogram.entry(track.len()).or_insert(0) += 1;
    }
    histogram
}

/// Every view observed by at least one track.
pub fn view_ids_in_tracks(tracks: &TracksMap) -> BTreeSet<ViewId> {
    tracks
        .values()
        .flat_map(|track| track.views())
        .collect()
}

/// Every view present in the per-view index.
pub fn view_ids_in_index(index: &TracksPerView) -> BTreeSet<ViewId> {
    index.keys().copied().collect()
}

/// The (kind, feature) observed in `view` for each requested track.
///
/// Requested ids missing from the map, and tracks without an observation
/// in `view`, are skipped rather than reported.
pub fn features_in_view(
    tracks: &TracksMap,
    track_ids: &BTreeSet<TrackId>,
    view: ViewId,
) -> Vec<(DescriptorKind, FeatureIndex)> {
    let mut features = Vec::new();
    for id in track_ids {
        if let Some(track) = tracks.get(id) {
            if let Some(feature) = track.feature_in_view(view) {
                features.push((track.kind, feature));
            }
        }
    }
    features
}

/// Convert two-view tracks back into indexed matches.
///
/// Every selected track must span exactly two views; each yields a match
/// pairing the feature in the smaller view with the feature in the larger
/// view. Fails on ids absent from the map ([`Error::UnknownTrack`]) and on
/// tracks of any other length ([`Error::NotTwoView`]).
pub fn tracks_to_matches(tracks: &TracksMap, selection: &[TrackId]) -> Result<Vec<IndMatch>> {
    let mut matches = Vec::with_capacity(selection.len());
    for &id in selection {
        let track = tracks.get(&id).ok_or(Error::UnknownTrack(id))?;
        let features: Vec<FeatureIndex> = track.features.values().copied().collect();
        match features[..] {
            [left, right] => matches.push(IndMatch::new(left, right)),
            _ => return Err(Error::NotTwoView(id, features.len())),
        }
    }
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Track;

    fn tracks_of(layout: &[(u32, &[(u32, u32)])]) -> TracksMap {
        let mut tracks = TracksMap::new();
        for &(id, entries) in layout {
            let mut track = Track::new(DescriptorKind::Sift);
            for &(view, feature) in entries {
                track.features.insert(ViewId::new(view), feature);
            }
            tracks.insert(TrackId::new(id), track);
        }
        tracks
    }

    #[test]
    fn test_track_ids() {
        let tracks = tracks_of(&[(0, &[(1, 10)]), (2, &[(1, 11)])]);
        let ids: Vec<u32> = track_ids(&tracks).iter().map(|id| id.value()).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn test_histogram() {
        let tracks = tracks_of(&[
            (0, &[(1, 10), (2, 20)]),
            (1, &[(1, 11), (2, 21)]),
            (2, &[(1, 12), (2, 22), (3, 32)]),
        ]);

        let histogram = track_length_histogram(&tracks);
        assert_eq!(histogram.get(&2), Some(&2));
        assert_eq!(histogram.get(&3), Some(&1));
        assert_eq!(histogram.get(&4), None);
    }

    #[test]
    fn test_view_ids() {
        let tracks = tracks_of(&[(0, &[(1, 10), (5, 50)]), (1, &[(2, 20), (5, 51)])]);
        let views: Vec<u32> = view_ids_in_tracks(&tracks)
            .iter()
            .map(|v| v.value())
            .collect();
        assert_eq!(views, vec![1, 2, 5]);
    }

    #[test]
    fn test_features_in_view_skips_missing() {
        let tracks = tracks_of(&[(0, &[(1, 10), (2, 20)]), (1, &[(2, 21), (3, 31)])]);
        let requested: BTreeSet<TrackId> =
            [0, 1, 7].iter().map(|&id| TrackId::new(id)).collect();

        // Track 7 does not exist; track 1 does not see view 1.
        let features = features_in_view(&tracks, &requested, ViewId::new(1));
        assert_eq!(features, vec![(DescriptorKind::Sift, 10)]);

        let features = features_in_view(&tracks, &requested, ViewId::new(2));
        assert_eq!(
            features,
            vec![(DescriptorKind::Sift, 20), (DescriptorKind::Sift, 21)]
        );
    }

    #[test]
    fn test_two_view_export() {
        // Views inserted out of order; the smaller view must come out left.
        let tracks = tracks_of(&[(0, &[(7, 70), (2, 20)]), (1, &[(3, 31), (5, 51)])]);

        let matches =
            tracks_to_matches(&tracks, &[TrackId::new(0), TrackId::new(1)]).unwrap();
        assert_eq!(matches, vec![IndMatch::new(20, 70), IndMatch::new(31, 51)]);
    }

    #[test]
    fn test_two_view_export_rejects_long_track() {
        let tracks = tracks_of(&[(0, &[(1, 10), (2, 20), (3, 30)])]);

        let err = tracks_to_matches(&tracks, &[TrackId::new(0)]).unwrap_err();
        assert_eq!(err, Error::NotTwoView(TrackId::new(0), 3));
    }

    #[test]
    fn test_two_view_export_rejects_unknown_id() {
        let tracks = tracks_of(&[(0, &[(1, 10), (2, 20)])]);

        let err = tracks_to_matches(&tracks, &[TrackId::new(4)]).unwrap_err();
        assert_eq!(err, Error::UnknownTrack(TrackId::new(4)));
    }
}
