//! Disjoint-set forest (union-find).

/// A partition of `0..len` into disjoint sets, with union by size and path
/// compression.
pub struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl DisjointSets {
    /// Create the discrete partition of `0..len`, every element on its own.
    pub fn new(len: usize) -> Self {
        DisjointSets {
            parent: (0..len).collect(),
            size: vec![1; len],
            sets: len,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the partition.
    pub fn sets(&self) -> usize {
        self.sets
    }

    /// Representative of the set containing `x`, compressing the path
    /// walked on the way up.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`; returns false when they were
    /// already the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        let (big, small) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.sets -= 1;
        true
    }

    /// Whether `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_find_basics() {
        let mut ds = DisjointSets::new(8);
        assert_eq!(ds.len(), 8);
        assert_eq!(ds.sets(), 8);
        assert!(!ds.connected(0, 1));

        assert!(ds.union(0, 1));
        assert!(ds.union(2, 3));
        assert!(ds.union(0, 3));
        assert!(!ds.union(1, 2)); // already merged through 0-3
        assert_eq!(ds.sets(), 5);
        assert!(ds.connected(1, 2));
        assert!(!ds.connected(1, 4));

        // everything into one set
        for i in 4..8 {
            ds.union(0, i);
        }
        assert_eq!(ds.sets(), 1);
        for i in 0..8 {
            assert_eq!(ds.find(i), ds.find(0));
        }
    }

    #[test]
    fn union_by_size_groups_components() {
        let mut ds = DisjointSets::new(6);
        ds.union(0, 1);
        ds.union(1, 2);
        ds.union(3, 4);
        // the pair joins the triple, not the other way around
        let root3 = ds.find(3);
        ds.union(2, 3);
        assert_ne!(ds.find(3), root3);
        assert_eq!(ds.sets(), 2);
    }
}
