//! Union-find (disjoint set union) over dense node ids.
//!
//! Kruskal's algorithm uses this structure as its admission test: an edge is
//! accepted only when [`DisjointSet::union`] reports that it merged two
//! previously separate components. State lives in flat arrays indexed by
//! [`NodeId`], with path compression on `find` and union by size.

use crate::{error::DisjointSetError, id::NodeId};

/// Partition of registered nodes into disjoint components.
///
/// # Examples
/// ```
/// use railspan_core::{DisjointSet, NodeId};
///
/// let mut set = DisjointSet::with_singletons(3);
/// let (a, b, c) = (NodeId::new(0), NodeId::new(1), NodeId::new(2));
/// assert_eq!(set.union(a, b), Ok(true));
/// assert_eq!(set.union(b, a), Ok(false));
/// assert_eq!(set.same_set(a, c), Ok(false));
/// assert_eq!(set.component_count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DisjointSet {
    parent: Vec<usize>,
    // Zero marks an unregistered slot; registered nodes keep a size >= 1.
    size: Vec<usize>,
    registered: usize,
    components: usize,
}

impl DisjointSet {
    /// Creates an empty disjoint set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty disjoint set with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: Vec::with_capacity(capacity),
            size: Vec::with_capacity(capacity),
            registered: 0,
            components: 0,
        }
    }

    /// Creates a disjoint set in which ids `0..node_count` are registered
    /// singletons.
    #[must_use]
    pub fn with_singletons(node_count: usize) -> Self {
        Self {
            parent: (0..node_count).collect(),
            size: vec![1; node_count],
            registered: node_count,
            components: node_count,
        }
    }

    /// Registers `node` as its own singleton component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::AlreadyRegistered`] when `node` was
    /// registered before. Registration timing is owned by the caller, so this
    /// indicates a logic error and is reported immediately.
    pub fn make_set(&mut self, node: NodeId) -> Result<(), DisjointSetError> {
        let index = node.index();
        if index >= self.parent.len() {
            let start = self.parent.len();
            let end = index.saturating_add(1);
            self.parent.extend(start..end);
            self.size.resize(end, 0);
        }

        match self.size.get_mut(index) {
            Some(size) if *size == 0 => {
                *size = 1;
                self.registered = self.registered.saturating_add(1);
                self.components = self.components.saturating_add(1);
                Ok(())
            }
            _ => Err(DisjointSetError::AlreadyRegistered { node }),
        }
    }

    /// Returns the representative of the component containing `node`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotRegistered`] when `node` was never
    /// registered.
    pub fn find(&mut self, node: NodeId) -> Result<NodeId, DisjointSetError> {
        let index = self.registered_index(node)?;
        Ok(NodeId::new(self.find_root(index)))
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `Ok(false)` when both already share a component (an edge
    /// between them would close a cycle) and `Ok(true)` when a merge happened.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotRegistered`] when either node was never
    /// registered.
    pub fn union(&mut self, left: NodeId, right: NodeId) -> Result<bool, DisjointSetError> {
        let left_index = self.registered_index(left)?;
        let right_index = self.registered_index(right)?;
        let left_root = self.find_root(left_index);
        let right_root = self.find_root(right_index);

        if left_root == right_root {
            return Ok(false);
        }

        let (parent, child) = choose_parent_child(
            left_root,
            right_root,
            self.size[left_root],
            self.size[right_root],
        );
        self.parent[child] = parent;
        self.size[parent] = self.size[parent].saturating_add(self.size[child]);
        self.components = self.components.saturating_sub(1);
        Ok(true)
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotRegistered`] when either node was never
    /// registered.
    pub fn same_set(&mut self, left: NodeId, right: NodeId) -> Result<bool, DisjointSetError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Returns the number of nodes in the component containing `node`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::NotRegistered`] when `node` was never
    /// registered.
    pub fn component_size(&mut self, node: NodeId) -> Result<usize, DisjointSetError> {
        let root = self.find(node)?;
        Ok(self.size[root.index()])
    }

    /// Returns the number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the number of registered nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.registered }

    /// Returns `true` when no node has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registered == 0
    }

    fn registered_index(&self, node: NodeId) -> Result<usize, DisjointSetError> {
        let index = node.index();
        match self.size.get(index) {
            Some(size) if *size > 0 => Ok(index),
            _ => Err(DisjointSetError::NotRegistered { node }),
        }
    }

    fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }
}

/// Larger component becomes the parent; equal sizes fall back to the lower
/// index so merges are deterministic.
fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_size: usize,
    right_size: usize,
) -> (usize, usize) {
    if left_size > right_size {
        return (left_root, right_root);
    }
    if right_size > left_size {
        return (right_root, left_root);
    }

    if left_root <= right_root {
        (left_root, right_root)
    } else {
        (right_root, left_root)
    }
}
