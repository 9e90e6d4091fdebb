//! Bounded-capacity weighted digraph stored as dense matrices.
//!
//! Nodes live in an ordered [`NodeDirectory`]; edges are cells of a boolean
//! adjacency matrix paired with a weight matrix. Both matrices are sized
//! to the capacity given at construction and never grow.

use std::fmt;

use tracing::debug;

use super::directory::NodeDirectory;
use super::error::{GraphError, GraphResult};
use super::matrix::SquareMatrix;

/// Largest capacity a graph accepts.
///
/// Both matrices hold `capacity²` cells, so this keeps a full graph at
/// roughly 150 MiB.
pub const MAX_CAPACITY: usize = 4096;

/// A mutable weighted directed graph over a fixed node capacity.
///
/// Elements are compared by value; every operation that takes an element
/// resolves it to its current position first. Positions returned by
/// [`Graph::get_node`] are only valid until the next [`Graph::remove_node`],
/// which moves the last node into the vacated slot.
///
/// At most one edge exists per ordered pair of nodes. Adding an edge that
/// already exists overwrites its weight.
///
/// # Example
///
/// ```rust
/// use densegraph::graph::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_node("a").unwrap();
/// graph.add_node("b").unwrap();
/// graph.add_edge(&"a", &"b", 2.5).unwrap();
///
/// assert_eq!(graph.size(), 2);
/// assert!(graph.exists_edge(&"a", &"b").unwrap());
/// assert!(!graph.exists_edge(&"b", &"a").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Graph<T> {
    capacity: usize,
    nodes: NodeDirectory<T>,
    adjacency: SquareMatrix<bool>,
    weights: SquareMatrix<f64>,
}

impl<T: PartialEq + Clone + fmt::Debug> Graph<T> {
    /// Creates an empty graph able to hold up to `capacity` nodes.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds [`MAX_CAPACITY`]. Use
    /// [`Graph::try_with_capacity`] for unchecked input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use densegraph::graph::Graph;
    ///
    /// let graph: Graph<char> = Graph::new(4);
    /// assert_eq!(graph.capacity(), 4);
    /// assert!(graph.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        assert!(
            capacity <= MAX_CAPACITY,
            "graph capacity {} exceeds the maximum of {}",
            capacity,
            MAX_CAPACITY
        );
        Self {
            capacity,
            nodes: NodeDirectory::with_capacity(capacity),
            adjacency: SquareMatrix::new(capacity, false),
            weights: SquareMatrix::new(capacity, 0.0),
        }
    }

    /// Creates a graph from a signed capacity, as read from user input.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidCapacity`] if `capacity` is negative or
    /// larger than [`MAX_CAPACITY`].
    pub fn try_with_capacity(capacity: i64) -> GraphResult<Self> {
        match usize::try_from(capacity) {
            Ok(checked) if checked <= MAX_CAPACITY => Ok(Self::new(checked)),
            _ => Err(GraphError::InvalidCapacity(capacity)),
        }
    }

    /// Returns the maximum number of nodes this graph can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current number of nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of directed edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        let n = self.size();
        (0..n)
            .map(|i| self.adjacency.row(i, n).iter().filter(|&&e| e).count())
            .sum()
    }

    /// Returns the stored elements in position order.
    pub fn elements(&self) -> Vec<T> {
        self.nodes.elements().cloned().collect()
    }

    /// Returns true if some node holds `element`.
    pub fn contains(&self, element: &T) -> bool {
        self.nodes.position(element).is_some()
    }

    /// Returns the current position of the node holding `element`.
    ///
    /// The position indexes rows and columns of the matrices returned by
    /// the analysis engines. It is invalidated by any node removal.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if no node holds `element`.
    pub fn get_node(&self, element: &T) -> GraphResult<usize> {
        self.nodes
            .position(element)
            .ok_or_else(|| GraphError::NotFound(format!("{:?}", element)))
    }

    /// Adds a node holding `element` with no incident edges.
    ///
    /// # Errors
    ///
    /// - [`GraphError::DuplicateElement`] if `element` is already present
    /// - [`GraphError::CapacityExceeded`] if the graph is full
    ///
    /// # Example
    ///
    /// ```rust
    /// use densegraph::graph::{Graph, GraphError};
    ///
    /// let mut graph = Graph::new(1);
    /// graph.add_node('a').unwrap();
    /// assert!(matches!(graph.add_node('a'), Err(GraphError::DuplicateElement(_))));
    /// assert!(matches!(graph.add_node('b'), Err(GraphError::CapacityExceeded(1))));
    /// ```
    pub fn add_node(&mut self, element: T) -> GraphResult<()> {
        if self.contains(&element) {
            return Err(GraphError::DuplicateElement(format!("{:?}", element)));
        }
        if self.size() >= self.capacity {
            return Err(GraphError::CapacityExceeded(self.capacity));
        }

        debug!(element = ?element, "adding node");
        let index = self.nodes.push(element);
        let live = self.size();
        self.adjacency.clear_slot(index, live, false);
        self.weights.clear_slot(index, live, 0.0);
        Ok(())
    }

    /// Removes the node holding `element` together with all incident edges.
    ///
    /// If the node is not the last one, the last node moves into its
    /// position and its matrix row and column move with it. Edges not
    /// touching the removed node are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if no node holds `element`.
    pub fn remove_node(&mut self, element: &T) -> GraphResult<()> {
        let index = self.get_node(element)?;
        let last = self.size() - 1;

        debug!(element = ?element, index, moved_from = last, "removing node");
        self.adjacency.swap_compact(index, last);
        self.weights.swap_compact(index, last);
        self.nodes.swap_remove(index);
        Ok(())
    }

    /// Adds a directed edge, overwriting the weight of an existing one.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NotFound`] if either endpoint is missing
    /// - [`GraphError::InvalidWeight`] if `weight` is negative or not finite
    pub fn add_edge(&mut self, origin: &T, destination: &T, weight: f64) -> GraphResult<()> {
        let (i, j) = self.endpoints(origin, destination)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }

        debug!(origin = ?origin, destination = ?destination, weight, "adding edge");
        self.adjacency.set(i, j, true);
        self.weights.set(i, j, weight);
        Ok(())
    }

    /// Removes the directed edge from `origin` to `destination`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NotFound`] if either endpoint is missing
    /// - [`GraphError::EdgeNotFound`] if no such edge exists
    pub fn remove_edge(&mut self, origin: &T, destination: &T) -> GraphResult<()> {
        let (i, j) = self.endpoints(origin, destination)?;
        if !self.adjacency.get(i, j) {
            return Err(GraphError::EdgeNotFound {
                origin: format!("{:?}", origin),
                destination: format!("{:?}", destination),
            });
        }

        debug!(origin = ?origin, destination = ?destination, "removing edge");
        self.adjacency.set(i, j, false);
        self.weights.set(i, j, 0.0);
        Ok(())
    }

    /// Returns true if a directed edge runs from `origin` to `destination`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if either endpoint is missing.
    pub fn exists_edge(&self, origin: &T, destination: &T) -> GraphResult<bool> {
        let (i, j) = self.endpoints(origin, destination)?;
        Ok(self.adjacency.get(i, j))
    }

    /// Returns the weight of the edge from `origin` to `destination`, if one exists.
    pub fn weight(&self, origin: &T, destination: &T) -> GraphResult<Option<f64>> {
        let (i, j) = self.endpoints(origin, destination)?;
        Ok(self.adjacency.get(i, j).then(|| self.weights.get(i, j)))
    }

    /// Mirrors every edge so the graph becomes undirected.
    ///
    /// For each edge `i -> j` the reverse edge `j -> i` is set with the same
    /// weight. Existing reverse edges are overwritten, and rows are visited in
    /// ascending order, so with asymmetric weights the later row wins.
    pub fn make_bidirectional(&mut self) {
        let n = self.size();
        for i in 0..n {
            for j in 0..n {
                if self.adjacency.get(i, j) {
                    self.adjacency.set(j, i, true);
                    self.weights.set(j, i, self.weights.get(i, j));
                }
            }
        }
        debug!(nodes = n, edges = self.edge_count(), "mirrored edges");
    }

    /// Returns true if `element` has no outgoing edges but at least one incoming edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if no node holds `element`.
    pub fn is_drain_node(&self, element: &T) -> GraphResult<bool> {
        let i = self.get_node(element)?;
        Ok(self.out_degree(i) == 0 && self.in_degree(i) > 0)
    }

    /// Returns true if `element` has no incoming edges but at least one outgoing edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if no node holds `element`.
    pub fn is_source_node(&self, element: &T) -> GraphResult<bool> {
        let i = self.get_node(element)?;
        Ok(self.in_degree(i) == 0 && self.out_degree(i) > 0)
    }

    /// Counts the drain nodes in the graph.
    pub fn count_drain_nodes(&self) -> usize {
        (0..self.size())
            .filter(|&i| self.out_degree(i) == 0 && self.in_degree(i) > 0)
            .count()
    }

    /// Counts the source nodes in the graph.
    pub fn count_source_nodes(&self) -> usize {
        (0..self.size())
            .filter(|&i| self.in_degree(i) == 0 && self.out_degree(i) > 0)
            .count()
    }

    /// Resolves both endpoints, origin first.
    pub(crate) fn endpoints(&self, origin: &T, destination: &T) -> GraphResult<(usize, usize)> {
        Ok((self.get_node(origin)?, self.get_node(destination)?))
    }

    pub(crate) fn has_edge_at(&self, i: usize, j: usize) -> bool {
        self.adjacency.get(i, j)
    }

    pub(crate) fn weight_at(&self, i: usize, j: usize) -> f64 {
        self.weights.get(i, j)
    }

    pub(crate) fn element_at(&self, i: usize) -> &T {
        self.nodes.element(i)
    }

    /// Out-neighbors of position `i` in ascending position order.
    pub(crate) fn out_neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .row(i, self.size())
            .iter()
            .enumerate()
            .filter_map(|(j, &edge)| edge.then_some(j))
    }

    pub(crate) fn out_degree(&self, i: usize) -> usize {
        self.out_neighbors(i).count()
    }

    pub(crate) fn in_degree(&self, i: usize) -> usize {
        (0..self.size()).filter(|&j| self.adjacency.get(j, i)).count()
    }
}

impl<T: PartialEq + Clone + fmt::Debug + fmt::Display> fmt::Display for Graph<T> {
    /// Renders the node list followed by the live block of the edge matrix,
    /// one row per line, each cell as `true(2.5)` / `false(0)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for element in self.nodes.elements() {
            writeln!(f, "GN(N:{})", element)?;
        }
        for i in 0..n {
            let row: Vec<String> = (0..n)
                .map(|j| format!("{}({})", self.adjacency.get(i, j), self.weights.get(i, j)))
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}
