//! Track builder: fuses pairwise matches into multi-view tracks.

use std::collections::{HashMap, HashSet};
use std::fmt;

use log::{debug, info};
use rayon::prelude::*;

use super::union_find::{NodeHandle, UnionFind};
use crate::config::FilterConfig;
use crate::core::{NodeKey, PairwiseMatches, Track, TrackId, TracksMap};
use crate::error::{Error, Result};

/// Counts reported by the filter phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterReport {
    /// Classes dropped for spanning fewer nodes than the minimum length.
    pub too_short: usize,
    /// Classes dropped for observing one view twice.
    pub view_conflict: usize,
    /// Classes surviving the filter.
    pub kept: usize,
}

impl FilterReport {
    /// Total classes dropped.
    #[inline]
    pub fn dropped(&self) -> usize {
        self.too_short + self.view_conflict
    }

    /// Total classes evaluated.
    #[inline]
    pub fn total(&self) -> usize {
        self.kept + self.dropped()
    }
}

/// Per-class filter outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verdict {
    Keep,
    TooShort,
    ViewConflict,
}

/// Fuses pairwise feature matches into tracks.
///
/// Union-find fusion after "Unordered feature tracking made fast and easy"
/// (Moulon & Monasse, CVMP 2012): every matched feature endpoint becomes a
/// forest node, every match unions its two endpoints, and the surviving
/// equivalence classes are the tracks.
///
/// Phases run in order on one driver: [`build`](Self::build) ingests
/// matches, [`filter`](Self::filter) drops invalid classes, and
/// [`export`](Self::export) materialises the result. The forest is owned
/// exclusively by the builder and is never exposed.
///
/// ```rust,ignore
/// let mut builder = TracksBuilder::new();
/// builder.build(&matches)?;
/// let report = builder.filter(&FilterConfig::default());
/// let tracks = builder.export();
/// ```
#[derive(Clone, Debug, Default)]
pub struct TracksBuilder {
    forest: UnionFind,
    /// NodeKey -> dense forest handle.
    handles: HashMap<NodeKey, NodeHandle>,
    /// Dense forest handle -> NodeKey (reverse of `handles`).
    keys: Vec<NodeKey>,
    /// Roots of classes kept by `filter`; `None` until filtered.
    kept_roots: Option<HashSet<NodeHandle>>,
}

impl TracksBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest a batch of pairwise matches.
    ///
    /// For each match the two endpoints are inserted as forest nodes
    /// (idempotently) and unioned. May be called several times to
    /// accumulate batches; doing so after [`filter`](Self::filter) clears
    /// the previous filter verdict.
    ///
    /// The whole batch is validated before the forest is touched, so a
    /// malformed input ([`Error::SelfPair`], [`Error::UninitializedKind`])
    /// leaves no partial state behind.
    pub fn build(&mut self, matches: &PairwiseMatches) -> Result<()> {
        for &(pair, kind) in matches.keys() {
            if pair.is_self_pair() {
                return Err(Error::SelfPair(pair.a));
            }
            if !kind.is_initialized() {
                return Err(Error::UninitializedKind {
                    a: pair.a,
                    b: pair.b,
                });
            }
        }

        let mut unions = 0usize;
        for (&(pair, kind), list) in matches {
            for m in list {
                let a = self.insert(NodeKey::new(pair.a, kind, m.left));
                let b = self.insert(NodeKey::new(pair.b, kind, m.right));
                if self.forest.union(a, b) {
                    unions += 1;
                }
            }
        }
        self.kept_roots = None;

        debug!(
            "build: {} pairs ingested, {} nodes, {} effective unions, {} classes",
            matches.len(),
            self.keys.len(),
            unions,
            self.forest.set_count()
        );
        Ok(())
    }

    /// Drop classes that are too short or that observe one view twice.
    ///
    /// A class survives only if it holds at least `min_length` nodes and
    /// no two of them share a view (a "view conflict", impossible for one
    /// world point). Dropping is wholesale; surviving membership is
    /// never altered. Classes of any size, including singletons, are
    /// handled.
    ///
    /// With `config.parallel`, classes are partitioned across rayon
    /// workers; the forest is read-only during the scan and the surviving
    /// set is identical either way. Re-running with a different
    /// configuration re-evaluates every class.
    pub fn filter(&mut self, config: &FilterConfig) -> FilterReport {
        self.forest.flatten();
        let classes = self.member_lists(false);

        let keys = &self.keys;
        let min_length = config.min_length;
        let verdicts: Vec<Verdict> = if config.parallel {
            classes
                .par_iter()
                .map(|members| class_verdict(keys, members, min_length))
                .collect()
        } else {
            classes
                .iter()
                .map(|members| class_verdict(keys, members, min_length))
                .collect()
        };

        let mut report = FilterReport::default();
        let mut kept = HashSet::new();
        for (members, verdict) in classes.iter().zip(&verdicts) {
            match verdict {
                Verdict::Keep => {
                    kept.insert(self.forest.root_of(members[0]));
                    report.kept += 1;
                }
                Verdict::TooShort => report.too_short += 1,
                Verdict::ViewConflict => report.view_conflict += 1,
            }
        }
        self.kept_roots = Some(kept);

        info!(
            "filter: kept {} of {} classes ({} too short, {} view conflicts)",
            report.kept,
            report.total(),
            report.too_short,
            report.view_conflict
        );
        report
    }

    /// Number of classes currently alive (all of them before
    /// [`filter`](Self::filter), the survivors after).
    pub fn nb_tracks(&self) -> usize {
        match &self.kept_roots {
            Some(kept) => kept.len(),
            None => self.forest.set_count(),
        }
    }

    /// Number of distinct feature observations seen by
    /// [`build`](Self::build).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.keys.len()
    }

    /// Materialise the surviving classes as a track map.
    ///
    /// Track ids are the contiguous range `0..nb_tracks()`, assigned by
    /// sorting classes on their minimum member [`NodeKey`]. Identical
    /// input therefore always yields the identical map, no matter how the
    /// pairs or the matches within a pair were ordered.
    pub fn export(&self) -> TracksMap {
        let classes = self.member_lists(true);

        let mut keyed: Vec<(NodeKey, &Vec<NodeHandle>)> = Vec::with_capacity(classes.len());
        for members in &classes {
            let mut min_key = self.keys[members[0].index()];
            for handle in &members[1..] {
                min_key = min_key.min(self.keys[handle.index()]);
            }
            keyed.push((min_key, members));
        }
        keyed.sort_unstable_by_key(|&(min_key, _)| min_key);

        let mut tracks = TracksMap::new();
        for (id, (min_key, members)) in keyed.into_iter().enumerate() {
            let mut track = Track::new(min_key.keypoint.kind);
            for handle in members {
                let key = self.keys[handle.index()];
                track.features.insert(key.view, key.keypoint.feature);
            }
            tracks.insert(TrackId::new(id as u32), track);
        }
        tracks
    }

    /// Members of each class currently alive, as node keys.
    ///
    /// Each class is sorted ascending; classes are ordered by their
    /// minimum key. Intended for diagnostics and testing; the exported
    /// [`TracksMap`] is the production output.
    pub fn classes(&self) -> Vec<Vec<NodeKey>> {
        let mut classes: Vec<Vec<NodeKey>> = self
            .member_lists(true)
            .into_iter()
            .map(|members| {
                let mut keys: Vec<NodeKey> =
                    members.iter().map(|h| self.keys[h.index()]).collect();
                keys.sort_unstable();
                keys
            })
            .collect();
        classes.sort_unstable();
        classes
    }

    /// Write a human-readable listing of the surviving tracks.
    pub fn dump(&self, out: &mut impl fmt::Write) -> fmt::Result {
        for (id, track) in self.export() {
            write!(out, "{} [{}]:", id, track.kind)?;
            for (view, feature) in &track.features {
                write!(out, " {}->{}", view.value(), feature)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Insert a node if unseen, returning its handle either way.
    fn insert(&mut self, key: NodeKey) -> NodeHandle {
        if let Some(&handle) = self.handles.get(&key) {
            return handle;
        }
        let handle = self.forest.make_set();
        self.handles.insert(key, handle);
        self.keys.push(key);
        handle
    }

    /// Group node handles by class, in first-seen order.
    ///
    /// With `surviving_only`, classes dropped by the filter are skipped.
    fn member_lists(&self, surviving_only: bool) -> Vec<Vec<NodeHandle>> {
        let mut slot_of_root: HashMap<NodeHandle, usize> = HashMap::new();
        let mut classes: Vec<Vec<NodeHandle>> = Vec::new();

        for index in 0..self.keys.len() {
            let handle = NodeHandle::new(index as u32);
            let root = self.forest.root_of(handle);
            if surviving_only {
                if let Some(kept) = &self.kept_roots {
                    if !kept.contains(&root) {
                        continue;
                    }
                }
            }
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                classes.push(Vec::new());
                classes.len() - 1
            });
            classes[slot].push(handle);
        }
        classes
    }
}

/// Decide whether one class survives the filter.
///
/// Too-short wins over conflict detection so singleton classes never reach
/// the view scan.
fn class_verdict(keys: &[NodeKey], members: &[NodeHandle], min_length: usize) -> Verdict {
    if members.len() < min_length {
        return Verdict::TooShort;
    }

    let mut views: Vec<_> = members
        .iter()
        .map(|handle| keys[handle.index()].view)
        .collect();
    views.sort_unstable();
    if views.windows(2).any(|w| w[0] == w[1]) {
        Verdict::ViewConflict
    } else {
        Verdict::Keep
    }
}
