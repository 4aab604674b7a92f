//! Identity types for views, features, and forest nodes.

use serde::{Deserialize, Serialize};

/// Unique identifier for a view (one image in the scene).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ViewId(pub u32);

impl ViewId {
    /// Create a new view ID.
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

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "View({})", self.0)
    }
}

/// Offset into a view's feature list.
///
/// A plain offset, not an identity: the same index names different features
/// in different views (and for different descriptor kinds).
pub type FeatureIndex = u32;

/// Feature detector/descriptor family.
///
/// Features, matches, and tracks are always partitioned by kind; no
/// operation fuses observations across kinds. The derived ordering (by
/// declaration) is the primary sort key of [`KeypointId`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum DescriptorKind {
    /// Sentinel default. No valid feature carries it.
    #[default]
    Uninitialized,
    /// SIFT with byte descriptors.
    Sift,
    /// SIFT with float descriptors.
    SiftFloat,
    /// AKAZE with float (SURF-like) descriptors.
    AkazeFloat,
    /// AKAZE with binary (MLDB) descriptors.
    AkazeBinary,
    /// CCTag fiducial marker, 3 crowns.
    Cctag3,
    /// CCTag fiducial marker, 4 crowns.
    Cctag4,
    /// AprilTag fiducial marker.
    AprilTag,
}

impl DescriptorKind {
    /// Is this a fiducial marker kind (as opposed to a photometric descriptor)?
    #[inline]
    pub fn is_marker(&self) -> bool {
        matches!(
            self,
            DescriptorKind::Cctag3 | DescriptorKind::Cctag4 | DescriptorKind::AprilTag
        )
    }

    /// Is this a real kind rather than the sentinel?
    #[inline]
    pub fn is_initialized(&self) -> bool {
        !matches!(self, DescriptorKind::Uninitialized)
    }
}

impl std::fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DescriptorKind::Uninitialized => "uninitialized",
            DescriptorKind::Sift => "sift",
            DescriptorKind::SiftFloat => "sift_float",
            DescriptorKind::AkazeFloat => "akaze_float",
            DescriptorKind::AkazeBinary => "akaze_binary",
            DescriptorKind::Cctag3 => "cctag3",
            DescriptorKind::Cctag4 => "cctag4",
            DescriptorKind::AprilTag => "apriltag",
        };
        write!(f, "{}", name)
    }
}

/// One feature detection within a view's feature lists, qualified by kind.
///
/// Ordered by kind first, then feature index.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct KeypointId {
    /// Descriptor family the feature belongs to.
    pub kind: DescriptorKind,
    /// Offset into the view's feature list for that family.
    pub feature: FeatureIndex,
}

impl KeypointId {
    /// Create a new keypoint ID.
    #[inline]
    pub fn new(kind: DescriptorKind, feature: FeatureIndex) -> Self {
        Self { kind, feature }
    }
}

impl std::fmt::Display for KeypointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.feature)
    }
}

/// Unique identity of one node in the fusion forest: a keypoint observed in
/// a specific view.
///
/// Ordered lexicographically (view, then keypoint). The minimum `NodeKey`
/// of an equivalence class is what anchors deterministic track numbering.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NodeKey {
    /// View the feature was detected in.
    pub view: ViewId,
    /// The feature itself.
    pub keypoint: KeypointId,
}

impl NodeKey {
    /// Create a node key from its parts.
    #[inline]
    pub fn new(view: ViewId, kind: DescriptorKind, feature: FeatureIndex) -> Self {
        Self {
            view,
            keypoint: KeypointId::new(kind, feature),
        }
    }
}

impl std::fmt::Display for NodeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.view, self.keypoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_id() {
        let id = ViewId::new(7);
        assert_eq!(id.value(), 7);
        assert_eq!(format!("{}", id), "View(7)");
    }

    #[test]
    fn test_descriptor_kind_sentinel() {
        assert_eq!(DescriptorKind::default(), DescriptorKind::Uninitialized);
        assert!(!DescriptorKind::Uninitialized.is_initialized());
        assert!(DescriptorKind::Sift.is_initialized());
    }

    #[test]
    fn test_descriptor_kind_markers() {
        assert!(DescriptorKind::Cctag3.is_marker());
        assert!(DescriptorKind::AprilTag.is_marker());
        assert!(!DescriptorKind::Sift.is_marker());
        assert!(!DescriptorKind::AkazeBinary.is_marker());
    }

    #[test]
    fn test_keypoint_order_kind_primary() {
        let a = KeypointId::new(DescriptorKind::Sift, 100);
        let b = KeypointId::new(DescriptorKind::AkazeFloat, 0);
        // Sift precedes AkazeFloat in declaration order, regardless of index.
        assert!(a < b);

        let c = KeypointId::new(DescriptorKind::Sift, 101);
        assert!(a < c);
    }

    #[test]
    fn test_node_key_order_view_primary() {
        let a = NodeKey::new(ViewId::new(1), DescriptorKind::AkazeBinary, 999);
        let b = NodeKey::new(ViewId::new(2), DescriptorKind::Sift, 0);
        assert!(a < b);

        let c = NodeKey::new(ViewId::new(1), DescriptorKind::AkazeBinary, 1000);
        assert!(a < c);
    }
}
