//! Prim's minimum spanning tree over an undirected view of the graph.
//!
//! The graph is expected to hold each undirected edge in both directions
//! with equal weight, e.g. after [`Graph::make_bidirectional`]. Only the
//! stored directions are scanned, so on a directed graph the result is a
//! greedy out-tree from the start node.

use std::fmt;

use tracing::{debug, trace};

use crate::graph::{Graph, GraphResult};

/// An edge chosen for the spanning tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEdge<T> {
    pub from: T,
    pub to: T,
    pub weight: f64,
}

/// Result of a Prim run: nodes in the order they joined the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<T> {
    order: Vec<T>,
    edges: Vec<TreeEdge<T>>,
    total_cost: f64,
}

impl<T> SpanningTree<T> {
    /// Elements in the order they joined the tree, start first.
    pub fn order(&self) -> &[T] {
        &self.order
    }

    /// Chosen edges; `edges()[i]` brought `order()[i + 1]` into the tree.
    pub fn edges(&self) -> &[TreeEdge<T>] {
        &self.edges
    }

    /// Sum of the chosen edge weights.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// False when some nodes could not be reached from the start.
    pub fn spans(&self, node_count: usize) -> bool {
        self.order.len() == node_count
    }
}

impl<T: PartialEq + Clone + fmt::Debug> Graph<T> {
    /// Builds a minimum spanning tree starting from `start`.
    ///
    /// Each round scans every edge leaving an included node towards a node
    /// not yet in the tree and takes the cheapest. Ties keep the first
    /// edge found, scanning included nodes and then their neighbors in
    /// ascending position order. The run stops early if the remaining
    /// nodes are unreachable, returning the tree of the start's component.
    ///
    /// # Errors
    ///
    /// Returns [`crate::graph::GraphError::NotFound`] if `start` is absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use densegraph::graph::Graph;
    ///
    /// let mut graph = Graph::new(3);
    /// for c in ['a', 'b', 'c'] {
    ///     graph.add_node(c).unwrap();
    /// }
    /// graph.add_edge(&'a', &'b', 4.0).unwrap();
    /// graph.add_edge(&'a', &'c', 1.0).unwrap();
    /// graph.add_edge(&'c', &'b', 2.0).unwrap();
    /// graph.make_bidirectional();
    ///
    /// let tree = graph.prim(&'a').unwrap();
    /// assert_eq!(tree.order(), &['a', 'c', 'b']);
    /// assert_eq!(tree.total_cost(), 3.0);
    /// ```
    pub fn prim(&self, start: &T) -> GraphResult<SpanningTree<T>> {
        let start = self.get_node(start)?;
        let n = self.size();
        let mut in_tree = vec![false; n];
        in_tree[start] = true;

        let mut order = vec![self.element_at(start).clone()];
        let mut edges = Vec::with_capacity(n.saturating_sub(1));
        let mut total_cost = 0.0;

        while order.len() < n {
            let Some((from, to, weight)) = self.cheapest_crossing_edge(&in_tree) else {
                debug!(joined = order.len(), nodes = n, "prim stopped: graph not connected");
                break;
            };
            trace!(from, to, weight, "prim edge");
            in_tree[to] = true;
            total_cost += weight;
            order.push(self.element_at(to).clone());
            edges.push(TreeEdge {
                from: self.element_at(from).clone(),
                to: self.element_at(to).clone(),
                weight,
            });
        }

        debug!(start, joined = order.len(), total_cost, "prim complete");
        Ok(SpanningTree {
            order,
            edges,
            total_cost,
        })
    }

    fn cheapest_crossing_edge(&self, in_tree: &[bool]) -> Option<(usize, usize, f64)> {
        let mut best: Option<(usize, usize, f64)> = None;
        for i in (0..self.size()).filter(|&i| in_tree[i]) {
            for j in self.out_neighbors(i).filter(|&j| !in_tree[j]) {
                let weight = self.weight_at(i, j);
                if best.map_or(true, |(_, _, min)| weight < min) {
                    best = Some((i, j, weight));
                }
            }
        }
        best
    }
}
