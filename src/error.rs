//! Error types for track fusion.

use thiserror::Error;

use crate::core::{DescriptorKind, FeatureIndex, TrackId, ViewId};

/// Track fusion error type.
///
/// No error is recovered internally; every failure surfaces to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A match pair references the same view on both sides.
    #[error("match pair references view {0} on both sides")]
    SelfPair(ViewId),

    /// A match list carries the uninitialised descriptor sentinel.
    #[error("match list for views ({a}, {b}) carries an uninitialised descriptor kind")]
    UninitializedKind {
        /// First view of the offending pair.
        a: ViewId,
        /// Second view of the offending pair.
        b: ViewId,
    },

    /// A match references a feature index at or beyond the declared count.
    #[error("feature {feature} ({kind}) out of range for {view}: declared count is {count}")]
    FeatureOutOfRange {
        /// View whose feature list is indexed.
        view: ViewId,
        /// Descriptor family of the feature list.
        kind: DescriptorKind,
        /// The offending index.
        feature: FeatureIndex,
        /// Caller-declared feature count for that view and kind.
        count: u32,
    },

    /// Two-view match export hit a track that does not span exactly two views.
    #[error("{0} spans {1} views, expected exactly 2")]
    NotTwoView(TrackId, usize),

    /// A requested track id is not present in the map.
    #[error("unknown track id {0}")]
    UnknownTrack(TrackId),
}

/// Convenience result alias for track fusion operations.
pub type Result<T> = std::result::Result<T, Error>;
