//! Pairwise match input types and their validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::{DescriptorKind, FeatureIndex, ViewId};
use crate::error::{Error, Result};

/// A pairwise correspondence between two features sharing one descriptor
/// kind: `left` indexes the first view of the pair, `right` the second.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct IndMatch {
    /// Feature index in the pair's first view.
    pub left: FeatureIndex,
    /// Feature index in the pair's second view.
    pub right: FeatureIndex,
}

impl IndMatch {
    /// Create a new indexed match.
    #[inline]
    pub fn new(left: FeatureIndex, right: FeatureIndex) -> Self {
        Self { left, right }
    }
}

/// A pair of views holding matches between them.
///
/// Stored exactly as given: canonicalisation (smaller view first) is the
/// caller's convention, and the builder accepts either orientation since
/// fusing a match is symmetric.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Pair {
    /// First view; `IndMatch::left` indexes its features.
    pub a: ViewId,
    /// Second view; `IndMatch::right` indexes its features.
    pub b: ViewId,
}

impl Pair {
    /// Create a pair in the given orientation.
    #[inline]
    pub fn new(a: ViewId, b: ViewId) -> Self {
        Self { a, b }
    }

    /// Is the pair in canonical orientation (smaller view first)?
    #[inline]
    pub fn is_canonical(&self) -> bool {
        self.a < self.b
    }

    /// Do both sides reference the same view?
    #[inline]
    pub fn is_self_pair(&self) -> bool {
        self.a == self.b
    }
}

/// All pairwise matches of a scene, grouped by view pair and descriptor
/// kind.
///
/// The ordered map gives canonical iteration, though track numbering does
/// not depend on it: the builder derives track ids from class content.
pub type PairwiseMatches = BTreeMap<(Pair, DescriptorKind), Vec<IndMatch>>;

/// Declared number of features per view and descriptor kind, for optional
/// input validation.
pub type FeatureCounts = BTreeMap<(ViewId, DescriptorKind), u32>;

/// Check every referenced feature index against caller-declared counts.
///
/// Feature indices are only checkable when the caller says how many
/// features each view has; entries absent from `counts` are trusted. This
/// is a pre-build helper, not part of the build phase itself.
pub fn validate_matches(matches: &PairwiseMatches, counts: &FeatureCounts) -> Result<()> {
    let check = |view: ViewId, kind: DescriptorKind, feature: FeatureIndex| -> Result<()> {
        match counts.get(&(view, kind)) {
            Some(&count) if feature >= count => Err(Error::FeatureOutOfRange {
                view,
                kind,
                feature,
                count,
            }),
            _ => Ok(()),
        }
    };

    for (&(pair, kind), list) in matches {
        for m in list {
            check(pair.a, kind, m.left)?;
            check(pair.b, kind, m.right)?;
        }
    }
    Ok(())
}
