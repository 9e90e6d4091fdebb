//! Analyses over a [`Graph`](crate::graph::Graph).
//!
//! Each engine adds methods to `Graph` and returns an owned, immutable
//! result value. Results are never cached on the graph, so a mutation can
//! not leave a stale table behind; re-run the analysis to see its effect.
//!
//! - [`traversal`] - depth/breadth-first order and cycle detection
//! - [`connectivity`] - strong, semi and weak connectivity
//! - [`floyd`] - all-pairs costs, path reconstruction, graph center
//! - [`dijkstra`] - single-source costs and predecessors
//! - [`prim`] - minimum spanning tree order
//!
//! # Example
//!
//! ```rust
//! use densegraph::graph::Graph;
//!
//! let mut graph = Graph::new(3);
//! for c in ['a', 'b', 'c'] {
//!     graph.add_node(c).unwrap();
//! }
//! graph.add_edge(&'a', &'b', 2.0).unwrap();
//! graph.add_edge(&'b', &'c', 2.0).unwrap();
//!
//! assert_eq!(graph.cheapest_path_cost(&'a', &'c').unwrap(), 4.0);
//! assert_eq!(graph.floyd().cost(&'a', &'c').unwrap(), 4.0);
//! assert!(!graph.contains_cycles());
//! assert!(graph.is_weakly_connected());
//! ```

pub mod connectivity;
pub mod dijkstra;
pub mod floyd;
pub mod prim;
pub mod traversal;

pub use connectivity::Connectivity;
pub use dijkstra::DijkstraResult;
pub use floyd::{CostModel, FloydResult, INFINITE};
pub use prim::{SpanningTree, TreeEdge};

#[cfg(test)]
mod tests {
    use crate::graph::Graph;
    use petgraph::algo::dijkstra;
    use petgraph::graph::NodeIndex;
    use proptest::prelude::*;

    /// Random graph over nodes `0..n` from an edge list of (from, to, weight).
    fn build(n: usize, edges: &[(usize, usize, u8)]) -> Graph<usize> {
        let mut g = Graph::new(n);
        for i in 0..n {
            g.add_node(i).unwrap();
        }
        for &(o, d, w) in edges {
            g.add_edge(&(o % n), &(d % n), f64::from(w)).unwrap();
        }
        g
    }

    fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, u8)>)> {
        (1usize..8).prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n, 0..n, 0u8..20), 0..(n * n)),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_floyd_triangle_and_diagonal((n, edges) in graph_strategy()) {
            let floyd = build(n, &edges).floyd();
            let a = floyd.a();
            for i in 0..n {
                prop_assert_eq!(a[(i, i)], 0.0);
                for j in 0..n {
                    for k in 0..n {
                        prop_assert!(a[(i, j)] <= a[(i, k)] + a[(k, j)]);
                    }
                }
            }
        }

        #[test]
        fn prop_dijkstra_agrees_with_floyd((n, edges) in graph_strategy()) {
            let g = build(n, &edges);
            let floyd = g.floyd();
            for origin in 0..n {
                let d = g.dijkstra(&origin).unwrap();
                for destination in 0..n {
                    prop_assert_eq!(d.d()[destination], floyd.a()[(origin, destination)]);
                }
            }
        }

        #[test]
        fn prop_dijkstra_matches_petgraph((n, edges) in graph_strategy()) {
            let g = build(n, &edges);
            let pg = g.to_petgraph();
            let ours = g.dijkstra(&0).unwrap();
            let oracle = dijkstra(&pg, NodeIndex::new(0), None, |e| *e.weight());
            for j in 0..n {
                let expected = oracle.get(&NodeIndex::new(j)).copied().unwrap_or(f64::INFINITY);
                prop_assert_eq!(ours.d()[j], expected);
            }
        }

        #[test]
        fn prop_removal_preserves_other_edges((n, edges) in graph_strategy(), victim in 0usize..8) {
            let mut g = build(n, &edges);
            let victim = victim % n;
            let before: Vec<(usize, usize, Option<f64>)> = (0..n)
                .flat_map(|i| (0..n).map(move |j| (i, j)))
                .filter(|&(i, j)| i != victim && j != victim)
                .map(|(i, j)| (i, j, g.weight(&i, &j).unwrap()))
                .collect();

            g.remove_node(&victim).unwrap();

            prop_assert_eq!(g.size(), n - 1);
            prop_assert!(!g.contains(&victim));
            for (i, j, weight) in before {
                prop_assert_eq!(g.weight(&i, &j).unwrap(), weight);
            }
        }
    }
}
