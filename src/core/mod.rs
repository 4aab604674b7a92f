//! Fundamental types: view/feature identities, pairwise match inputs, and
//! track outputs.
//!
//! Everything here is a plain value type. The fusion pipeline consumes
//! [`PairwiseMatches`] and produces [`TracksMap`] / [`TracksPerView`]; the
//! query layer only ever reads the latter two.

mod ids;
mod matches;
mod track;

pub use ids::{DescriptorKind, FeatureIndex, KeypointId, NodeKey, ViewId};
pub use matches::{validate_matches, FeatureCounts, IndMatch, Pair, PairwiseMatches};
pub use track::{Track, TrackId, TracksMap, TracksPerView};
