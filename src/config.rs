//! Configuration for the track fusion pipeline.

use serde::{Deserialize, Serialize};

/// Configuration for the track filter phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Minimum number of views a track must span to be kept.
    /// Tracks shorter than this are dropped wholesale.
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Whether to fan the per-class scan out across rayon workers.
    /// Tuning knob only: the surviving set is identical either way.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_min_length() -> usize {
    2
}

fn default_parallel() -> bool {
    true
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            parallel: default_parallel(),
        }
    }
}

impl FilterConfig {
    /// Keep only tracks spanning at least `min_length` views.
    pub fn with_min_length(min_length: usize) -> Self {
        Self {
            min_length,
            ..Default::default()
        }
    }

    /// Single-threaded filtering.
    pub fn serial() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }
}
