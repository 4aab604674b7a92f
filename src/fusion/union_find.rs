//! Flat-array disjoint-set forest.

/// Handle of one node in the forest.
///
/// Handles are dense: the n-th inserted node gets handle n. The builder
/// keeps the handle ↔ [`NodeKey`](crate::core::NodeKey) mapping in side
/// tables, so the forest itself is two flat vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeHandle(pub u32);

impl NodeHandle {
    /// Create a handle from its dense index.
    #[inline]
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// The dense index, for side-table lookups.
    #[inline]
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Disjoint-set forest with path compression and union by rank.
///
/// Amortised inverse-Ackermann time per operation. Set representatives are
/// stable between mutations but otherwise implementation-defined; callers
/// must not attach meaning to which member represents a set.
#[derive(Clone, Debug, Default)]
pub struct UnionFind {
    /// Parent pointer per node; a root points to itself.
    parent: Vec<u32>,
    /// Upper bound on subtree height, maintained only for roots.
    rank: Vec<u8>,
    /// Number of disjoint sets.
    sets: usize,
}

impl UnionFind {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty forest with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
            sets: 0,
        }
    }

    /// Number of nodes in the forest.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Is the forest empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    #[inline]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Add a new singleton set and return its handle.
    pub fn make_set(&mut self) -> NodeHandle {
        let handle = NodeHandle::new(self.parent.len() as u32);
        self.parent.push(handle.0);
        self.rank.push(0);
        self.sets += 1;
        handle
    }

    /// Representative of the set containing `node`, halving the path on
    /// the way up.
    pub fn find(&mut self, node: NodeHandle) -> NodeHandle {
        let mut i = node.index();
        while self.parent[i] as usize != i {
            let grandparent = self.parent[self.parent[i] as usize];
            self.parent[i] = grandparent;
            i = grandparent as usize;
        }
        NodeHandle::new(i as u32)
    }

    /// Representative of the set containing `node`, without mutation.
    ///
    /// Used during read-only phases where the forest is shared. O(1) after
    /// [`flatten`](Self::flatten).
    pub fn root_of(&self, node: NodeHandle) -> NodeHandle {
        let mut i = node.index();
        while self.parent[i] as usize != i {
            i = self.parent[i] as usize;
        }
        NodeHandle::new(i as u32)
    }

    /// Merge the sets holding `a` and `b`.
    ///
    /// Returns `false` if they were already in the same set.
    pub fn union(&mut self, a: NodeHandle, b: NodeHandle) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        // Attach the shallower root under the deeper one.
        let (child, root) = if self.rank[ra.index()] < self.rank[rb.index()] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[child.index()] = root.0;
        if self.rank[child.index()] == self.rank[root.index()] {
            self.rank[root.index()] += 1;
        }
        self.sets -= 1;
        true
    }

    /// Compress every path so each parent pointer leads directly to a root.
    ///
    /// After this, [`root_of`](Self::root_of) is a single array read until
    /// the next mutation.
    pub fn flatten(&mut self) {
        for i in 0..self.parent.len() {
            let root = self.find(NodeHandle::new(i as u32));
            self.parent[i] = root.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let forest = UnionFind::new();
        assert!(forest.is_empty());
        assert_eq!(forest.len(), 0);
        assert_eq!(forest.set_count(), 0);
    }

    #[test]
    fn test_singletons() {
        let mut forest = UnionFind::new();
        let a = forest.make_set();
        let b = forest.make_set();

        assert_eq!(forest.len(), 2);
        assert_eq!(forest.set_count(), 2);
        assert_eq!(forest.find(a), a);
        assert_eq!(forest.find(b), b);
    }

    #[test]
    fn test_union_merges() {
        let mut forest = UnionFind::new();
        let a = forest.make_set();
        let b = forest.make_set();
        let c = forest.make_set();

        assert!(forest.union(a, b));
        assert_eq!(forest.set_count(), 2);
        assert_eq!(forest.find(a), forest.find(b));
        assert_ne!(forest.find(a), forest.find(c));
    }

    #[test]
    fn test_union_idempotent() {
        let mut forest = UnionFind::new();
        let a = forest.make_set();
        let b = forest.make_set();

        assert!(forest.union(a, b));
        assert!(!forest.union(a, b));
        assert!(!forest.union(b, a));
        assert_eq!(forest.set_count(), 1);
    }

    #[test]
    fn test_transitive_chain() {
        let mut forest = UnionFind::new();
        let nodes: Vec<NodeHandle> = (0..100).map(|_| forest.make_set()).collect();

        for pair in nodes.windows(2) {
            forest.union(pair[0], pair[1]);
        }

        assert_eq!(forest.set_count(), 1);
        let root = forest.find(nodes[0]);
        for &n in &nodes {
            assert_eq!(forest.find(n), root);
        }
    }

    #[test]
    fn test_root_of_matches_find() {
        let mut forest = UnionFind::new();
        let nodes: Vec<NodeHandle> = (0..10).map(|_| forest.make_set()).collect();
        forest.union(nodes[0], nodes[5]);
        forest.union(nodes[5], nodes[9]);

        for &n in &nodes {
            let immutable = forest.root_of(n);
            assert_eq!(forest.find(n), immutable);
        }
    }

    #[test]
    fn test_flatten() {
        let mut forest = UnionFind::new();
        let nodes: Vec<NodeHandle> = (0..50).map(|_| forest.make_set()).collect();
        for pair in nodes.windows(2) {
            forest.union(pair[0], pair[1]);
        }

        forest.flatten();

        let root = forest.root_of(nodes[0]);
        for &n in &nodes {
            assert_eq!(forest.root_of(n), root);
        }
    }
}
