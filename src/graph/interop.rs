//! Conversion into petgraph's adjacency-list graph.

use std::fmt;

use petgraph::graph::{DiGraph, NodeIndex};

use super::dense_graph::Graph;

impl<T: PartialEq + Clone + fmt::Debug> Graph<T> {
    /// Builds a petgraph `DiGraph` with the same nodes and weighted edges.
    ///
    /// Node `i` of the result corresponds to position `i` of this graph,
    /// so `NodeIndex::new(graph.get_node(&x)?)` addresses the same node.
    ///
    /// # Example
    ///
    /// ```rust
    /// use densegraph::graph::Graph;
    ///
    /// let mut graph = Graph::new(2);
    /// graph.add_node("a").unwrap();
    /// graph.add_node("b").unwrap();
    /// graph.add_edge(&"a", &"b", 4.0).unwrap();
    ///
    /// let pg = graph.to_petgraph();
    /// assert_eq!(pg.node_count(), 2);
    /// assert_eq!(pg.edge_count(), 1);
    /// ```
    pub fn to_petgraph(&self) -> DiGraph<T, f64> {
        let n = self.size();
        let mut pg = DiGraph::with_capacity(n, self.edge_count());
        for i in 0..n {
            pg.add_node(self.element_at(i).clone());
        }
        for i in 0..n {
            for j in self.out_neighbors(i) {
                pg.add_edge(NodeIndex::new(i), NodeIndex::new(j), self.weight_at(i, j));
            }
        }
        pg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::visit::EdgeRef;

    #[test]
    fn test_to_petgraph_preserves_order_and_weights() {
        let mut graph = Graph::new(3);
        for c in ['x', 'y', 'z'] {
            graph.add_node(c).unwrap();
        }
        graph.add_edge(&'z', &'x', 7.0).unwrap();
        graph.add_edge(&'x', &'y', 1.5).unwrap();

        let pg = graph.to_petgraph();

        assert_eq!(pg[NodeIndex::new(2)], 'z');
        let mut edges: Vec<(usize, usize, f64)> = pg
            .edge_references()
            .map(|e| (e.source().index(), e.target().index(), *e.weight()))
            .collect();
        edges.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(edges, vec![(0, 1, 1.5), (2, 0, 7.0)]);
    }
}
