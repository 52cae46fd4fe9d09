//! Disjoint-set forest over the elements `0..len`.
//!
//! Sets are merged by size and paths are compressed on every mutating lookup,
//! so `union` and `connected` run in near-constant amortized time. Merging by
//! size alone keeps every tree at most `log2(len)` deep, which lets read-only
//! queries walk to the root through a shared reference.

use std::cmp::Ordering;

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Creates `len` singleton sets `{0}, {1}, ..., {len - 1}`.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the root of the set containing `x`, pointing every visited
    /// node at its grandparent on the way up.
    ///
    /// # Panics
    ///
    /// If `x >= len()`.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Same as [`find`](Self::find), without touching the forest.
    ///
    /// # Panics
    ///
    /// If `x >= len()`.
    pub fn root(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets containing `a` and `b`. The smaller tree is attached
    /// under the root of the larger one.
    ///
    /// Returns `true` if the two elements were in different sets.
    ///
    /// # Panics
    ///
    /// If `a` or `b` is out of range.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let (child, parent) = match self.size[root_a].cmp(&self.size[root_b]) {
            Ordering::Less => (root_a, root_b),
            Ordering::Greater | Ordering::Equal => (root_b, root_a),
        };
        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        self.count -= 1;
        true
    }

    /// Returns `true` if `a` and `b` belong to the same set.
    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.root(a) == self.root(b)
    }
}

////////////////////////////////////////////////////////////////////////////////
