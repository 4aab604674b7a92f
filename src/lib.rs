//! # Sutra-Tracks
//!
//! Feature-track fusion for structure-from-motion pipelines.
//!
//! ## Overview
//!
//! Given pairwise feature matches between images, this crate computes the
//! transitive closure of the "is the same 3D point" relation and produces
//! a **track** per equivalence class: the observations of one world point
//! across multiple views. The fusion follows "Unordered feature tracking
//! made fast and easy" (Moulon & Monasse, CVMP 2012), with a flat
//! union-find forest instead of a graph substrate.
//!
//! The pipeline is a batch of three phases, run in order by one driver:
//!
//! 1. **build**: every matched endpoint becomes a forest node, every
//!    match unions its two endpoints
//! 2. **filter**: classes that are too short, or that observe one view
//!    twice (a "view conflict", impossible for one world point), are
//!    dropped wholesale
//! 3. **export**: survivors become an immutable [`TracksMap`], with track
//!    ids derived from class content so identical input always yields the
//!    identical map
//!
//! The [`query`] module then answers the downstream questions: which
//! tracks a view sees, which tracks a whole set of views shares, length
//! statistics, and conversion of two-view tracks back to matches.
//!
//! ## Quick Start
//!
//! ```rust
//! use sutra_tracks::{
//!     DescriptorKind, FilterConfig, IndMatch, Pair, PairwiseMatches, TracksBuilder, ViewId,
//! };
//!
//! // Matches chaining feature 4 of view 0 to feature 9 of view 1 to
//! // feature 2 of view 2.
//! let mut matches = PairwiseMatches::new();
//! matches.insert(
//!     (Pair::new(ViewId::new(0), ViewId::new(1)), DescriptorKind::Sift),
//!     vec![IndMatch::new(4, 9)],
//! );
//! matches.insert(
//!     (Pair::new(ViewId::new(1), ViewId::new(2)), DescriptorKind::Sift),
//!     vec![IndMatch::new(9, 2)],
//! );
//!
//! let mut builder = TracksBuilder::new();
//! builder.build(&matches)?;
//! let report = builder.filter(&FilterConfig::default());
//! assert_eq!(report.kept, 1);
//!
//! let tracks = builder.export();
//! assert_eq!(tracks.len(), 1);
//! # Ok::<(), sutra_tracks::Error>(())
//! ```
//!
//! ## Concurrency
//!
//! `build` runs on one thread. `filter` can fan its per-class scan out
//! across rayon workers with no behavioral effect. The exported results
//! are plain immutable values that any number of query callers may share.

#![warn(missing_docs)]

pub mod config;
pub mod core;
pub mod error;
pub mod fusion;
pub mod query;

pub use crate::config::FilterConfig;
pub use crate::core::{
    validate_matches, DescriptorKind, FeatureCounts, FeatureIndex, IndMatch, KeypointId, NodeKey,
    Pair, PairwiseMatches, Track, TrackId, TracksMap, TracksPerView, ViewId,
};
pub use crate::error::{Error, Result};
pub use crate::fusion::{FilterReport, TracksBuilder};
