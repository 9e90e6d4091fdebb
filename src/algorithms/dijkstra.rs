//! Single-source minimum costs (Dijkstra, dense O(V²) form).
//!
//! Pivot selection is a linear scan over the unsettled nodes, which suits
//! the matrix representation: every relaxation step reads a full row anyway.

use std::fmt;

use tracing::{debug, trace};

use super::floyd::{CostModel, INFINITE};
use crate::graph::{Graph, GraphError, GraphResult};

/// Immutable output of a Dijkstra run from one source node.
///
/// `d[i]` is the minimum cost from the source to position `i`
/// (`INFINITE` if unreachable) and `pd[i]` the predecessor of `i` on that
/// path (`None` for the source and for unreachable nodes).
#[derive(Debug, Clone)]
pub struct DijkstraResult<T> {
    elements: Vec<T>,
    source: usize,
    d: Vec<f64>,
    pd: Vec<Option<usize>>,
    model: CostModel,
}

impl<T: PartialEq + Clone + fmt::Debug> Graph<T> {
    /// Runs Dijkstra from `start` over the stored edge weights.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if `start` is absent.
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
    /// graph.add_edge(&'a', &'b', 1.0).unwrap();
    /// graph.add_edge(&'b', &'c', 1.0).unwrap();
    /// graph.add_edge(&'a', &'c', 5.0).unwrap();
    ///
    /// let result = graph.dijkstra(&'a').unwrap();
    /// assert_eq!(result.d(), &[0.0, 1.0, 2.0]);
    /// assert_eq!(result.pd(), &[None, Some(0), Some(1)]);
    /// ```
    pub fn dijkstra(&self, start: &T) -> GraphResult<DijkstraResult<T>> {
        let start = self.get_node(start)?;
        Ok(self.run_dijkstra(start, CostModel::Weighted))
    }

    /// Runs Dijkstra with every edge costing 1, so `d` holds hop counts.
    pub fn dijkstra_hops(&self, start: &T) -> GraphResult<DijkstraResult<T>> {
        let start = self.get_node(start)?;
        Ok(self.run_dijkstra(start, CostModel::Hops))
    }

    /// Minimum cost from `origin` to `destination`; `INFINITE` when unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if either endpoint is missing.
    pub fn cheapest_path_cost(&self, origin: &T, destination: &T) -> GraphResult<f64> {
        let (i, j) = self.endpoints(origin, destination)?;
        Ok(self.run_dijkstra(i, CostModel::Weighted).d[j])
    }

    pub(crate) fn run_dijkstra(&self, source: usize, model: CostModel) -> DijkstraResult<T> {
        let n = self.size();
        let cost = |i: usize, j: usize| match model {
            CostModel::Weighted => self.weight_at(i, j),
            CostModel::Hops => 1.0,
        };

        let mut d = vec![INFINITE; n];
        let mut pd = vec![None; n];
        let mut settled = vec![false; n];
        d[source] = 0.0;
        for j in self.out_neighbors(source).filter(|&j| j != source) {
            d[j] = cost(source, j);
            pd[j] = Some(source);
        }

        let mut pivot = Some(source);
        let mut settled_count = 0;
        while let Some(current) = pivot {
            settled[current] = true;
            settled_count += 1;
            trace!(pivot = current, cost = d[current], "settled");

            if d[current] != INFINITE {
                for j in self.out_neighbors(current) {
                    let candidate = d[current] + cost(current, j);
                    if candidate < d[j] {
                        d[j] = candidate;
                        pd[j] = Some(current);
                    }
                }
            }

            pivot = if settled_count < n {
                next_pivot(&d, &settled)
            } else {
                None
            };
        }

        debug!(source, nodes = n, settled = settled_count, ?model, "dijkstra complete");
        DijkstraResult {
            elements: self.elements(),
            source,
            d,
            pd,
            model,
        }
    }
}

/// Unsettled position with the lowest finite tentative cost, first on ties.
fn next_pivot(d: &[f64], settled: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &cost) in d.iter().enumerate() {
        if settled[i] || cost == INFINITE {
            continue;
        }
        if best.map_or(true, |b| cost < d[b]) {
            best = Some(i);
        }
    }
    best
}

impl<T> DijkstraResult<T> {
    /// Minimum cost vector, indexed by node position.
    pub fn d(&self) -> &[f64] {
        &self.d
    }

    /// Predecessor vector, indexed by node position.
    pub fn pd(&self) -> &[Option<usize>] {
        &self.pd
    }

    /// The source element.
    pub fn source(&self) -> &T {
        &self.elements[self.source]
    }

    /// Node elements in the position order used by `d` and `pd`.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Whether `d` holds weighted costs or hop counts.
    pub fn cost_model(&self) -> CostModel {
        self.model
    }

    /// Positions from the source to `target`, or `None` when unreachable.
    pub fn path_positions(&self, target: usize) -> Option<Vec<usize>> {
        if self.d[target] == INFINITE {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while let Some(prev) = self.pd[current] {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// True when every node is reachable from the source.
    pub fn all_reachable(&self) -> bool {
        self.d.iter().all(|c| c.is_finite())
    }
}

impl<T: PartialEq + Clone + fmt::Debug> DijkstraResult<T> {
    fn position(&self, element: &T) -> GraphResult<usize> {
        self.elements
            .iter()
            .position(|e| e == element)
            .ok_or_else(|| GraphError::NotFound(format!("{:?}", element)))
    }

    /// Minimum cost from the source to `target`.
    pub fn cost(&self, target: &T) -> GraphResult<f64> {
        Ok(self.d[self.position(target)?])
    }

    /// Elements on the minimum path from the source to `target`.
    pub fn path(&self, target: &T) -> GraphResult<Option<Vec<T>>> {
        let target = self.position(target)?;
        Ok(self
            .path_positions(target)
            .map(|path| path.into_iter().map(|i| self.elements[i].clone()).collect()))
    }
}
