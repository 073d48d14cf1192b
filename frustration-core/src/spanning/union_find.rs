//! Disjoint-set forest over dense vertex indices.
//!
//! The partition builder maps every vertex to an index and merges the sets of
//! an edge's endpoints whenever that edge joins two trees.

use std::cmp::Ordering;

#[derive(Clone, Debug)]
pub(super) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    pub(super) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Number of disjoint sets currently tracked.
    pub(super) const fn sets(&self) -> usize {
        self.sets
    }

    /// Root of the set holding `node`, halving the path on the way up.
    pub(super) fn find(&mut self, mut node: usize) -> usize {
        loop {
            let parent = self.parent[node];
            if parent == node {
                return node;
            }
            let grandparent = self.parent[parent];
            self.parent[node] = grandparent;
            node = grandparent;
        }
    }

    /// Merges the sets holding `left` and `right`.
    ///
    /// Returns `false` without changing anything when both already share a
    /// set.
    pub(super) fn union(&mut self, left: usize, right: usize) -> bool {
        let (left, right) = (self.find(left), self.find(right));
        if left == right {
            return false;
        }
        let (root, child) = match self.rank[left].cmp(&self.rank[right]) {
            Ordering::Less => (right, left),
            Ordering::Greater => (left, right),
            Ordering::Equal => {
                self.rank[left] = self.rank[left].saturating_add(1);
                (left, right)
            }
        };
        self.parent[child] = root;
        self.sets = self.sets.saturating_sub(1);
        true
    }
}
