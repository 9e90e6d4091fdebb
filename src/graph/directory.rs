//! Ordered node directory with lookup by element value.

/// A node record holding one caller-supplied element.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode<T> {
    /// The element stored in this node
    pub element: T,
}

impl<T> GraphNode<T> {
    /// Creates a node wrapping `element`.
    pub fn new(element: T) -> Self {
        Self { element }
    }
}

/// Ordered collection of nodes.
///
/// Positions are dense (`0..len`) and double as row/column indices into the
/// graph matrices. Removal moves the last node into the vacated position,
/// so a position is only valid until the next removal.
#[derive(Debug, Clone)]
pub struct NodeDirectory<T> {
    nodes: Vec<GraphNode<T>>,
}

impl<T: PartialEq> NodeDirectory<T> {
    /// Creates an empty directory able to hold `capacity` nodes without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Returns the position of the node holding `element`, if any.
    pub fn position(&self, element: &T) -> Option<usize> {
        self.nodes.iter().position(|node| node.element == *element)
    }

    /// Appends a node and returns its position.
    pub fn push(&mut self, element: T) -> usize {
        self.nodes.push(GraphNode::new(element));
        self.nodes.len() - 1
    }

    /// Removes the node at `index`, moving the last node into its place.
    pub fn swap_remove(&mut self, index: usize) -> GraphNode<T> {
        self.nodes.swap_remove(index)
    }

    /// Returns the element stored at `index`.
    pub fn element(&self, index: usize) -> &T {
        &self.nodes[index].element
    }

    /// Iterates over the stored elements in position order.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.nodes.iter().map(|node| &node.element)
    }

    /// Number of stored nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no node is stored.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_lookup() {
        let mut dir = NodeDirectory::with_capacity(4);
        assert!(dir.is_empty());
        assert_eq!(dir.push("a"), 0);
        assert_eq!(dir.push("b"), 1);
        assert_eq!(dir.position(&"b"), Some(1));
        assert_eq!(dir.position(&"z"), None);
        assert_eq!(dir.len(), 2);
    }

    #[test]
    fn test_swap_remove_moves_last_node() {
        let mut dir = NodeDirectory::with_capacity(3);
        dir.push('a');
        dir.push('b');
        dir.push('c');

        let removed = dir.swap_remove(0);

        assert_eq!(removed.element, 'a');
        assert_eq!(dir.element(0), &'c');
        assert_eq!(dir.elements().copied().collect::<Vec<_>>(), vec!['c', 'b']);
    }
}
