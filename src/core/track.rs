//! Track output types.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::ids::{DescriptorKind, FeatureIndex, ViewId};

/// Identifier of an exported track, contiguous from zero within one export.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TrackId(pub u32);

impl TrackId {
    /// Create a new track ID.
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Track({})", self.0)
    }
}

/// A fused track: observations of one world point across multiple views.
///
/// `features` maps each view to the feature index observed there. After
/// filtering, every view appears at most once and the map holds at least
/// `min_length` entries. The ordered iteration over views is load-bearing:
/// the two-view match export pairs the smaller view's feature with the
/// larger view's.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Descriptor family shared by every observation in this track.
    pub kind: DescriptorKind,
    /// Feature index observed in each view, ordered by view id.
    pub features: BTreeMap<ViewId, FeatureIndex>,
}

impl Track {
    /// Create an empty track of the given kind.
    pub fn new(kind: DescriptorKind) -> Self {
        Self {
            kind,
            features: BTreeMap::new(),
        }
    }

    /// Number of views observing this track (the track length).
    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Does the track have no observations?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Feature index observed in `view`, if any.
    #[inline]
    pub fn feature_in_view(&self, view: ViewId) -> Option<FeatureIndex> {
        self.features.get(&view).copied()
    }

    /// Does the track's view domain cover every view in `views`?
    pub fn covers_views(&self, views: &BTreeSet<ViewId>) -> bool {
        views.iter().all(|v| self.features.contains_key(v))
    }

    /// Views observing this track, ascending.
    pub fn views(&self) -> impl Iterator<Item = ViewId> + '_ {
        self.features.keys().copied()
    }
}

/// All exported tracks, keyed by track id.
///
/// Iterating yields ascending ids, which is the order downstream code
/// relies on when determinism matters.
pub type TracksMap = BTreeMap<TrackId, Track>;

/// Inverted index: for each view, the ascending, duplicate-free list of
/// track ids with an observation in that view.
///
/// The sort order is required; multi-view intersections sweep-merge these
/// lists in linear time.
pub type TracksPerView = BTreeMap<ViewId, Vec<TrackId>>;
