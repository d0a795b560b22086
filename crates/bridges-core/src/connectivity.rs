//! Union-find over island indices.

use crate::IslandId;

/// A disjoint-set forest with path compression and union by size.
///
/// # Examples
///
/// ```
/// use bridges_core::{DisjointSet, IslandId};
///
/// let mut sets = DisjointSet::new(4);
/// assert_eq!(sets.count(), 4);
///
/// sets.union(IslandId::new(0), IslandId::new(1));
/// sets.union(IslandId::new(2), IslandId::new(3));
/// assert_eq!(sets.count(), 2);
/// assert!(sets.same(IslandId::new(1), IslandId::new(0)));
/// assert!(!sets.same(IslandId::new(1), IslandId::new(2)));
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the representative of the set containing `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn find(&mut self, id: IslandId) -> usize {
        let mut root = id.index();
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = id.index();
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `true` if they were in different sets.
    pub fn union(&mut self, a: IslandId, b: IslandId) -> bool {
        let mut ra = self.find(a);
        let mut rb = self.find(b);
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.count -= 1;
        true
    }

    /// Returns `true` if `a` and `b` are in the same set.
    pub fn same(&mut self, a: IslandId, b: IslandId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Flattens the forest into dense component labels.
    #[must_use]
    pub fn into_components(mut self) -> Components {
        let len = self.parent.len();
        let mut root_label = vec![usize::MAX; len];
        let mut labels = Vec::with_capacity(len);
        let mut next = 0;
        for i in 0..len {
            let root = self.find(IslandId::new(i));
            if root_label[root] == usize::MAX {
                root_label[root] = next;
                next += 1;
            }
            labels.push(root_label[root]);
        }
        Components {
            labels,
            count: next,
        }
    }
}

/// Connected components of a set of islands, labelled `0..count()`.
///
/// Labels are assigned in order of the lowest island id of each component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    labels: Vec<usize>,
    count: usize,
}

impl Components {
    /// Returns the number of components.
    #[must_use]
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the label of the component containing `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    #[must_use]
    #[inline]
    pub fn label(&self, id: IslandId) -> usize {
        self.labels[id.index()]
    }

    /// Returns the islands of each component, indexed by label.
    #[must_use]
    pub fn groups(&self) -> Vec<Vec<IslandId>> {
        let mut groups = vec![Vec::new(); self.count];
        for (i, &label) in self.labels.iter().enumerate() {
            groups[label].push(IslandId::new(i));
        }
        groups
    }
}
