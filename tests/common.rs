//! Shared helpers for building synthetic match sets.

#![allow(dead_code)]

use std::collections::BTreeSet;

use sutra_tracks::{DescriptorKind, IndMatch, Pair, PairwiseMatches, TrackId, ViewId};

/// Append `pairs` as matches of `kind` between views `a` and `b`.
pub fn add_matches(
    set: &mut PairwiseMatches,
    a: u32,
    b: u32,
    kind: DescriptorKind,
    pairs: &[(u32, u32)],
) {
    let key = (Pair::new(ViewId::new(a), ViewId::new(b)), kind);
    set.entry(key)
        .or_default()
        .extend(pairs.iter().map(|&(l, r)| IndMatch::new(l, r)));
}

/// Append SIFT matches between two views (the common case).
pub fn add_sift(set: &mut PairwiseMatches, a: u32, b: u32, pairs: &[(u32, u32)]) {
    add_matches(set, a, b, DescriptorKind::Sift, pairs);
}

/// Build a match set from SIFT pair entries in one call.
pub fn sift_matches(entries: &[(u32, u32, &[(u32, u32)])]) -> PairwiseMatches {
    let mut set = PairwiseMatches::new();
    for &(a, b, pairs) in entries {
        add_sift(&mut set, a, b, pairs);
    }
    set
}

/// View-id set literal.
pub fn view_set(ids: &[u32]) -> BTreeSet<ViewId> {
    ids.iter().map(|&v| ViewId::new(v)).collect()
}

/// Track-id set literal.
pub fn track_set(ids: &[u32]) -> BTreeSet<TrackId> {
    ids.iter().map(|&t| TrackId::new(t)).collect()
}

/// Track-id list literal.
pub fn track_list(ids: &[u32]) -> Vec<TrackId> {
    ids.iter().map(|&t| TrackId::new(t)).collect()
}
