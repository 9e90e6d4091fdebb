//! Strong, semi and weak connectivity classification.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::floyd::CostModel;
use crate::graph::Graph;

/// Connectivity flags for a graph, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Connectivity {
    /// Every node reaches every other node.
    pub strong: bool,
    /// Every pair is joined in at least one direction.
    pub semi: bool,
    /// Connected once edge directions are ignored.
    pub weak: bool,
}

impl<T: PartialEq + Clone + fmt::Debug> Graph<T> {
    /// True when every node reaches every other node.
    ///
    /// Decided from the Floyd–Warshall cost table: no entry may be infinite.
    /// An empty graph is trivially strongly connected.
    pub fn is_strongly_connected(&self) -> bool {
        self.floyd().all_reachable()
    }

    /// True when, for every pair of nodes, at least one reaches the other.
    ///
    /// Reachability is computed with one Dijkstra run per node.
    pub fn is_semi_connected(&self) -> bool {
        let n = self.size();
        let reach: Vec<Vec<bool>> = (0..n)
            .map(|i| {
                self.run_dijkstra(i, CostModel::Hops)
                    .d()
                    .iter()
                    .map(|c| c.is_finite())
                    .collect()
            })
            .collect();

        (0..n).all(|i| (i + 1..n).all(|j| reach[i][j] || reach[j][i]))
    }

    /// True when the graph is connected once edge directions are ignored.
    ///
    /// Every edge is mirrored on a scratch copy of the graph, which is then
    /// tested for strong connectivity. The graph itself is never modified.
    pub fn is_weakly_connected(&self) -> bool {
        let mut mirrored = self.clone();
        mirrored.make_bidirectional();
        mirrored.is_strongly_connected()
    }

    /// Computes all three connectivity flags.
    pub fn connectivity(&self) -> Connectivity {
        let connectivity = Connectivity {
            strong: self.is_strongly_connected(),
            semi: self.is_semi_connected(),
            weak: self.is_weakly_connected(),
        };
        debug!(?connectivity, nodes = self.size(), "classified connectivity");
        connectivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(nodes: &[char], edges: &[(char, char)]) -> Graph<char> {
        let mut g = Graph::new(nodes.len());
        for n in nodes {
            g.add_node(*n).unwrap();
        }
        for (o, d) in edges {
            g.add_edge(o, d, 1.0).unwrap();
        }
        g
    }

    #[test]
    fn test_ring_is_strongly_connected() {
        let g = graph(
            &['a', 'b', 'c', 'd'],
            &[('a', 'b'), ('b', 'c'), ('c', 'd'), ('d', 'a')],
        );
        assert_eq!(
            g.connectivity(),
            Connectivity {
                strong: true,
                semi: true,
                weak: true
            }
        );
    }

    #[test]
    fn test_chain_is_semi_but_not_strong() {
        let g = graph(&['a', 'b', 'c'], &[('a', 'b'), ('b', 'c')]);
        assert!(!g.is_strongly_connected());
        assert!(g.is_semi_connected());
        assert!(g.is_weakly_connected());
    }

    #[test]
    fn test_converging_edges_are_only_weak() {
        let g = graph(&['a', 'b', 'c'], &[('a', 'c'), ('b', 'c')]);
        assert!(!g.is_strongly_connected());
        assert!(!g.is_semi_connected());
        assert!(g.is_weakly_connected());
    }

    #[test]
    fn test_disconnected_graph() {
        let g = graph(&['a', 'b', 'c'], &[('a', 'b')]);
        assert_eq!(
            g.connectivity(),
            Connectivity {
                strong: false,
                semi: false,
                weak: false
            }
        );
    }

    #[test]
    fn test_weak_check_leaves_graph_untouched() {
        let g = graph(&['a', 'b'], &[('a', 'b')]);
        assert!(g.is_weakly_connected());
        assert_eq!(g.exists_edge(&'b', &'a'), Ok(false));
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_trivial_graphs() {
        let empty: Graph<char> = Graph::new(0);
        assert!(empty.is_strongly_connected());
        assert!(empty.is_semi_connected());

        let single = graph(&['a'], &[]);
        assert!(single.is_strongly_connected());
        assert!(single.is_weakly_connected());
    }
}
