//! Union-find (disjoint set union) family.
//!
//! One state representation serves four strategies. `parent` maps every
//! index to its current representative (quick-find) or its parent pointer
//! (the tree strategies); the weighted strategies also track the size of the
//! tree rooted at each root. [`UnionFindStrategy`] selects which pair of
//! `find`/`union` routines runs against that state.
//!
//! | Strategy | `find` | `union` |
//! | --- | --- | --- |
//! | [`QuickFind`](UnionFindStrategy::QuickFind) | O(1) lookup | O(n) relabel |
//! | [`QuickUnion`](UnionFindStrategy::QuickUnion) | O(depth) walk | root link |
//! | [`WeightedQuickUnion`](UnionFindStrategy::WeightedQuickUnion) | O(log n) walk | smaller under larger |
//! | [`WeightedQuickUnionPathCompression`](UnionFindStrategy::WeightedQuickUnionPathCompression) | walk + flatten | smaller under larger |

use crate::error::UnionFindError;

/// Selects the `find`/`union` routines a [`UnionFind`] runs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UnionFindStrategy {
    /// Every entry points straight at its representative.
    QuickFind,
    /// Entries form parent-pointer trees of unbounded depth.
    QuickUnion,
    /// Parent-pointer trees linked smaller-under-larger.
    WeightedQuickUnion,
    /// Weighted trees whose `find` flattens every visited path.
    WeightedQuickUnionPathCompression,
}

impl UnionFindStrategy {
    /// The strategy used wherever none is chosen explicitly.
    pub const DEFAULT: Self = Self::WeightedQuickUnionPathCompression;

    /// All strategies in declaration order.
    pub const ALL: [Self; 4] = [
        Self::QuickFind,
        Self::QuickUnion,
        Self::WeightedQuickUnion,
        Self::WeightedQuickUnionPathCompression,
    ];

    /// Returns `true` when the strategy tracks tree sizes.
    #[must_use]
    pub const fn is_weighted(self) -> bool {
        matches!(
            self,
            Self::WeightedQuickUnion | Self::WeightedQuickUnionPathCompression
        )
    }

    /// Returns a stable identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::QuickFind => "quick_find",
            Self::QuickUnion => "quick_union",
            Self::WeightedQuickUnion => "weighted_quick_union",
            Self::WeightedQuickUnionPathCompression => "weighted_quick_union_path_compression",
        }
    }
}

impl Default for UnionFindStrategy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Disjoint sets over the indices `[0, len)`.
///
/// # Examples
/// ```
/// use treeline_core::{UnionFind, UnionFindStrategy};
///
/// let mut sets = UnionFind::new(UnionFindStrategy::QuickFind, 4);
/// sets.union(0, 1)?;
/// sets.union(2, 1)?;
/// assert!(sets.connected(0, 2)?);
/// assert_eq!(sets.snapshot(), vec![1, 1, 1, 3]);
/// assert_eq!(sets.component_count(), 2);
/// # Ok::<(), treeline_core::UnionFindError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnionFind {
    strategy: UnionFindStrategy,
    parent: Vec<usize>,
    sizes: Option<Vec<usize>>,
    components: usize,
}

impl UnionFind {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(strategy: UnionFindStrategy, len: usize) -> Self {
        let sizes = strategy.is_weighted().then(|| vec![1; len]);
        Self {
            strategy,
            parent: (0..len).collect(),
            sizes,
            components: len,
        }
    }

    /// Returns the strategy driving this instance.
    #[must_use]
    #[rustfmt::skip]
    pub const fn strategy(&self) -> UnionFindStrategy { self.strategy }

    /// Returns the number of tracked elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no elements are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.components }

    /// Returns the representative of the set containing `index`.
    ///
    /// # Errors
    /// Returns [`UnionFindError::IndexOutOfRange`] when `index >= len()`.
    pub fn find(&mut self, index: usize) -> Result<usize, UnionFindError> {
        self.check(index)?;
        Ok(match self.strategy {
            UnionFindStrategy::QuickFind => quick_find::find(&self.parent, index),
            UnionFindStrategy::QuickUnion | UnionFindStrategy::WeightedQuickUnion => {
                tree::find(&self.parent, index)
            }
            UnionFindStrategy::WeightedQuickUnionPathCompression => {
                tree::find_compressing(&mut self.parent, index)
            }
        })
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Does nothing when both already share a representative.
    ///
    /// # Errors
    /// Returns [`UnionFindError::IndexOutOfRange`] when either index is
    /// `>= len()`.
    pub fn union(&mut self, left: usize, right: usize) -> Result<(), UnionFindError> {
        self.check(left)?;
        self.check(right)?;
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(());
        }

        match (self.strategy, self.sizes.as_mut()) {
            (UnionFindStrategy::QuickFind, _) => {
                quick_find::relabel(&mut self.parent, left_root, right_root);
            }
            (UnionFindStrategy::QuickUnion, _) | (_, None) => {
                tree::link(&mut self.parent, left_root, right_root);
            }
            (_, Some(sizes)) => {
                tree::link_by_size(&mut self.parent, sizes, left_root, right_root);
            }
        }
        self.components -= 1;
        Ok(())
    }

    /// Returns `true` when `left` and `right` share a representative.
    ///
    /// # Errors
    /// Returns [`UnionFindError::IndexOutOfRange`] when either index is
    /// `>= len()`.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool, UnionFindError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Returns the representative of every element, indexed by element.
    ///
    /// Entry `i` equals what [`UnionFind::find`] would return for `i`. The
    /// walk is read-only, so path compression is not applied.
    #[must_use]
    pub fn snapshot(&self) -> Vec<usize> {
        match self.strategy {
            UnionFindStrategy::QuickFind => self.parent.clone(),
            _ => (0..self.parent.len())
                .map(|index| tree::find(&self.parent, index))
                .collect(),
        }
    }

    /// Returns a copy of the stored parent mapping.
    ///
    /// For [`UnionFindStrategy::QuickFind`] this matches [`UnionFind::snapshot`].
    /// For the tree strategies each entry is the element's parent pointer.
    #[must_use]
    pub fn parents(&self) -> Vec<usize> {
        self.parent.clone()
    }

    /// Returns a copy of the size mapping for weighted strategies.
    ///
    /// Only entries for current roots are meaningful.
    #[must_use]
    pub fn sizes_snapshot(&self) -> Option<Vec<usize>> {
        self.sizes.clone()
    }

    /// Returns the size of the tree rooted at `root`.
    ///
    /// Yields `None` for unweighted strategies and for indices that are not
    /// currently roots.
    #[must_use]
    pub fn size_of_root(&self, root: usize) -> Option<usize> {
        if self.parent.get(root) != Some(&root) {
            return None;
        }
        self.sizes.as_ref()?.get(root).copied()
    }

    fn check(&self, index: usize) -> Result<(), UnionFindError> {
        if index < self.parent.len() {
            Ok(())
        } else {
            Err(UnionFindError::IndexOutOfRange {
                index,
                len: self.parent.len(),
            })
        }
    }
}

mod quick_find {
    //! Representative-array routines.

    pub(super) fn find(parent: &[usize], index: usize) -> usize {
        parent[index]
    }

    /// Points every member of `from`'s set at `to`.
    pub(super) fn relabel(parent: &mut [usize], from: usize, to: usize) {
        for entry in parent.iter_mut().filter(|entry| **entry == from) {
            *entry = to;
        }
    }
}

mod tree {
    //! Parent-pointer forest routines.

    pub(super) fn find(parent: &[usize], mut node: usize) -> usize {
        while parent[node] != node {
            node = parent[node];
        }
        node
    }

    pub(super) fn find_compressing(parent: &mut [usize], mut node: usize) -> usize {
        let root = find(parent, node);
        while parent[node] != root {
            let next = parent[node];
            parent[node] = root;
            node = next;
        }
        root
    }

    /// Hangs `child_root` directly under `parent_root`.
    pub(super) fn link(parent: &mut [usize], child_root: usize, parent_root: usize) {
        parent[child_root] = parent_root;
    }

    /// Hangs the smaller tree under the larger; on a tie `right_root` goes
    /// under `left_root`.
    pub(super) fn link_by_size(
        parent: &mut [usize],
        sizes: &mut [usize],
        left_root: usize,
        right_root: usize,
    ) {
        let (root, child) = if sizes[left_root] < sizes[right_root] {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };
        parent[child] = root;
        sizes[root] += sizes[child];
    }
}
