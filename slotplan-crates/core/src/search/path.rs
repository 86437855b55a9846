use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// Identifies a node generated during search; it refers to the whole path leading to this node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PathId {
    id: u32,
}

impl StorageKey for PathId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        PathId { id: index as u32 }
    }
}

#[derive(Clone, Debug)]
struct PathEntry<Node> {
    node: Node,
    parent: Option<PathId>,
    cost: i64,
}

/// Every node the searcher generated, each linked to the node it was generated from.
#[derive(Clone, Debug)]
pub(crate) struct SearchTree<Node> {
    entries: KeyedVec<PathId, PathEntry<Node>>,
}

impl<Node> Default for SearchTree<Node> {
    fn default() -> Self {
        SearchTree {
            entries: KeyedVec::default(),
        }
    }
}

impl<Node: Clone> SearchTree<Node> {
    pub(crate) fn push(&mut self, node: Node, parent: Option<PathId>, cost: i64) -> PathId {
        self.entries.push(PathEntry { node, parent, cost })
    }

    pub(crate) fn node(&self, path: PathId) -> &Node {
        &self.entries[path].node
    }

    pub(crate) fn cost(&self, path: PathId) -> i64 {
        self.entries[path].cost
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Collects the nodes from the root to `path`.
    pub(crate) fn path(&self, path: PathId) -> Path<Node> {
        let mut nodes = Vec::new();
        let mut current = Some(path);

        while let Some(path_id) = current {
            let entry = &self.entries[path_id];
            nodes.push(entry.node.clone());
            current = entry.parent;
        }
        nodes.reverse();

        Path {
            nodes,
            cost: self.cost(path),
        }
    }
}

/// A path from the start node to some node, with its cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<Node> {
    nodes: Vec<Node>,
    cost: i64,
}

impl<Node> Path<Node> {
    /// The node the path leads to.
    pub fn end(&self) -> &Node {
        self.nodes
            .last()
            .expect("a path contains at least the start node")
    }

    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// The number of edges on the path.
    pub fn num_edges(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_reconstructed_from_the_root() {
        let mut tree = SearchTree::default();
        let root = tree.push('a', None, 0);
        let child = tree.push('b', Some(root), 2);
        let grandchild = tree.push('c', Some(child), 5);
        let _ = tree.push('d', Some(root), 1);

        let path = tree.path(grandchild);

        assert_eq!(path.nodes(), &['a', 'b', 'c']);
        assert_eq!(path.cost(), 5);
        assert_eq!(path.num_edges(), 2);
        assert_eq!(*path.end(), 'c');
    }
}
