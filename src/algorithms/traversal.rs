//! Depth-first and breadth-first traversal, plus cycle detection.
//!
//! Neighbors are always explored in ascending position order, which makes
//! every traversal deterministic for a given insertion history.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use crate::graph::{Graph, GraphResult};

impl<T: PartialEq + Clone + fmt::Debug> Graph<T> {
    /// Depth-first pre-order traversal from `start`.
    ///
    /// Visits `start`, then recursively each unvisited out-neighbor in
    /// ascending position order. Only nodes reachable from `start` appear.
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
    /// let mut graph = Graph::new(4);
    /// for c in ['a', 'b', 'c', 'd'] {
    ///     graph.add_node(c).unwrap();
    /// }
    /// graph.add_edge(&'a', &'c', 1.0).unwrap();
    /// graph.add_edge(&'a', &'b', 1.0).unwrap();
    /// graph.add_edge(&'b', &'d', 1.0).unwrap();
    ///
    /// assert_eq!(graph.traverse_depth_first(&'a').unwrap(), vec!['a', 'b', 'd', 'c']);
    /// ```
    pub fn traverse_depth_first(&self, start: &T) -> GraphResult<Vec<T>> {
        let start = self.get_node(start)?;
        let mut visited = vec![false; self.size()];
        let order = self.depth_first_from(start, &mut visited);
        debug!(start, visited = order.len(), "depth-first traversal");
        Ok(self.to_elements(&order))
    }

    /// Breadth-first traversal from `start` using a FIFO queue.
    ///
    /// # Errors
    ///
    /// Returns [`crate::graph::GraphError::NotFound`] if `start` is absent.
    pub fn traverse_breadth_first(&self, start: &T) -> GraphResult<Vec<T>> {
        let start = self.get_node(start)?;
        let mut visited = vec![false; self.size()];
        let mut queue = VecDeque::with_capacity(self.size());
        let mut order = Vec::with_capacity(self.size());

        visited[start] = true;
        order.push(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for next in self.out_neighbors(current) {
                if !visited[next] {
                    visited[next] = true;
                    order.push(next);
                    queue.push_back(next);
                }
            }
        }

        debug!(start, visited = order.len(), "breadth-first traversal");
        Ok(self.to_elements(&order))
    }

    /// Returns true if some node can reach itself through one or more edges.
    ///
    /// For every node a depth-first walk is started from its out-neighbors
    /// with the node itself left unmarked; reaching it again closes a cycle.
    /// Converging but acyclic paths (diamonds) are not reported, and an
    /// explicit self-loop counts as a cycle.
    pub fn contains_cycles(&self) -> bool {
        let n = self.size();
        for origin in 0..n {
            let mut visited = vec![false; n];
            for next in self.out_neighbors(origin) {
                if next == origin {
                    trace!(origin, "self-loop");
                    return true;
                }
                if !visited[next] {
                    self.depth_first_from(next, &mut visited);
                }
                if visited[origin] {
                    trace!(origin, "node reaches itself");
                    return true;
                }
            }
        }
        false
    }

    /// Pre-order walk from `start`, marking `visited` and returning the
    /// positions in visiting order. Uses an explicit stack of
    /// `(node, next neighbor to inspect)` frames.
    pub(crate) fn depth_first_from(&self, start: usize, visited: &mut [bool]) -> Vec<usize> {
        let n = self.size();
        let mut order = vec![start];
        let mut stack = vec![(start, 0_usize)];
        visited[start] = true;

        while let Some(&(node, cursor)) = stack.last() {
            let next = (cursor..n).find(|&j| self.has_edge_at(node, j) && !visited[j]);
            match next {
                Some(next) => {
                    let top = stack.len() - 1;
                    stack[top].1 = next + 1;
                    visited[next] = true;
                    order.push(next);
                    stack.push((next, 0));
                }
                None => {
                    stack.pop();
                }
            }
        }
        order
    }

    pub(crate) fn to_elements(&self, positions: &[usize]) -> Vec<T> {
        positions
            .iter()
            .map(|&i| self.element_at(i).clone())
            .collect()
    }
}

impl<T: PartialEq + Clone + fmt::Debug + fmt::Display> Graph<T> {
    /// Renders the depth-first order as `a-b-c`.
    pub fn print_depth_first(&self, start: &T) -> GraphResult<String> {
        Ok(join_hyphen(&self.traverse_depth_first(start)?))
    }

    /// Renders the breadth-first order as `a-b-c`.
    pub fn print_breadth_first(&self, start: &T) -> GraphResult<String> {
        Ok(join_hyphen(&self.traverse_breadth_first(start)?))
    }
}

/// Joins elements with `-`, the rendering used for traversals and paths.
pub(crate) fn join_hyphen<T: fmt::Display>(elements: &[T]) -> String {
    elements
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("-")
}
