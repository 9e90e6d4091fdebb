//! Floyd–Warshall all-pairs minimum costs with path reconstruction.
//!
//! The engine fills two `V x V` tables: `A`, the minimum cost from `i` to
//! `j`, and `P`, the last intermediate node through which that cost was
//! improved (`None` when the best known route is the direct edge, or when
//! no route exists).

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use super::traversal::join_hyphen;
use crate::graph::{Graph, GraphError, GraphResult, SquareMatrix};

/// Cost marking an unreachable pair.
pub const INFINITE: f64 = f64::INFINITY;

/// How edge costs are seeded into the `A` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CostModel {
    /// Use the stored edge weights.
    Weighted,
    /// Count every edge as 1, yielding hop counts.
    Hops,
}

impl fmt::Display for CostModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostModel::Weighted => write!(f, "weighted"),
            CostModel::Hops => write!(f, "hops"),
        }
    }
}

/// Immutable output of a Floyd–Warshall run.
///
/// Carries a snapshot of the node elements in position order, so costs
/// and paths can be queried by element even after the graph changes.
#[derive(Debug, Clone)]
pub struct FloydResult<T> {
    elements: Vec<T>,
    a: SquareMatrix<f64>,
    p: SquareMatrix<Option<usize>>,
    iterations: usize,
    model: CostModel,
}

impl<T: PartialEq + Clone + fmt::Debug> Graph<T> {
    /// Runs Floyd–Warshall to completion over the stored edge weights.
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
    /// graph.add_edge(&'b', &'c', 2.0).unwrap();
    /// graph.add_edge(&'a', &'c', 5.0).unwrap();
    ///
    /// let floyd = graph.floyd();
    /// assert_eq!(floyd.a()[(0, 2)], 3.0);
    /// assert_eq!(floyd.p()[(0, 2)], Some(1));
    /// ```
    pub fn floyd(&self) -> FloydResult<T> {
        self.floyd_iterations(self.size())
    }

    /// Runs only the first `iterations` rounds of the outer `k` loop.
    ///
    /// Round `k` allows node `k` as an intermediate, so a partial run shows
    /// the tables as they stand after considering nodes `0..iterations`.
    /// Values above the node count are clamped.
    pub fn floyd_iterations(&self, iterations: usize) -> FloydResult<T> {
        self.run_floyd(iterations.min(self.size()), CostModel::Weighted)
    }

    /// Runs Floyd–Warshall with every edge costing 1, so `A` holds hop counts.
    pub fn floyd_hops(&self) -> FloydResult<T> {
        self.run_floyd(self.size(), CostModel::Hops)
    }

    /// Number of edges on the fewest-hop path, or `None` if unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if either endpoint is missing.
    pub fn shortest_path_length(&self, origin: &T, destination: &T) -> GraphResult<Option<usize>> {
        let (i, j) = self.endpoints(origin, destination)?;
        let cost = self.floyd_hops().a[(i, j)];
        Ok(cost.is_finite().then_some(cost as usize))
    }

    /// Returns the graph center: the node whose largest finite cost to any
    /// other node is smallest. Ties go to the lowest position.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyStructure`] on an empty graph.
    pub fn center(&self) -> GraphResult<T> {
        self.floyd().center().cloned()
    }

    fn run_floyd(&self, iterations: usize, model: CostModel) -> FloydResult<T> {
        let n = self.size();
        let mut a = SquareMatrix::new(n, INFINITE);
        let p = SquareMatrix::new(n, None);

        for i in 0..n {
            for j in 0..n {
                if i == j {
                    a[(i, j)] = 0.0;
                } else if self.has_edge_at(i, j) {
                    a[(i, j)] = match model {
                        CostModel::Weighted => self.weight_at(i, j),
                        CostModel::Hops => 1.0,
                    };
                }
            }
        }

        let mut result = FloydResult {
            elements: self.elements(),
            a,
            p,
            iterations,
            model,
        };
        result.relax(iterations);
        debug!(nodes = n, iterations, ?model, "floyd complete");
        result
    }
}

impl<T> FloydResult<T> {
    /// Triple-loop relaxation with `k` outermost.
    fn relax(&mut self, iterations: usize) {
        let n = self.elements.len();
        for k in 0..iterations {
            for i in 0..n {
                let through_k = self.a[(i, k)];
                if through_k == INFINITE {
                    continue;
                }
                for j in 0..n {
                    let candidate = through_k + self.a[(k, j)];
                    if candidate < self.a[(i, j)] {
                        trace!(i, j, k, candidate, "floyd relaxation");
                        self.a[(i, j)] = candidate;
                        self.p[(i, j)] = Some(k);
                    }
                }
            }
        }
    }

    /// Minimum cost table, indexed by node position.
    pub fn a(&self) -> &SquareMatrix<f64> {
        &self.a
    }

    /// Intermediate-node table, indexed by node position.
    pub fn p(&self) -> &SquareMatrix<Option<usize>> {
        &self.p
    }

    /// Node elements in the position order used by both tables.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Number of nodes covered by the tables.
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Number of `k` rounds that were applied.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether `A` holds weighted costs or hop counts.
    pub fn cost_model(&self) -> CostModel {
        self.model
    }

    /// Positions on the minimum path from `i` to `j`, both ends included.
    /// `None` when `j` is unreachable from `i`.
    pub fn path_positions(&self, i: usize, j: usize) -> Option<Vec<usize>> {
        if self.a[(i, j)] == INFINITE {
            return None;
        }
        let mut path = vec![i];
        if i != j {
            self.push_intermediates(i, j, &mut path);
            path.push(j);
        }
        Some(path)
    }

    fn push_intermediates(&self, i: usize, j: usize, path: &mut Vec<usize>) {
        if let Some(k) = self.p[(i, j)] {
            self.push_intermediates(i, k, path);
            path.push(k);
            self.push_intermediates(k, j, path);
        }
    }

    /// Largest finite cost from each node (its eccentricity).
    pub fn eccentricities(&self) -> Vec<f64> {
        let n = self.size();
        (0..n)
            .map(|i| {
                self.a
                    .row(i, n)
                    .iter()
                    .copied()
                    .filter(|c| c.is_finite())
                    .fold(f64::NEG_INFINITY, f64::max)
            })
            .collect()
    }

    /// Element with minimum eccentricity, first position on ties.
    pub fn center(&self) -> GraphResult<&T> {
        let mut best: Option<(usize, f64)> = None;
        for (i, ecc) in self.eccentricities().into_iter().enumerate() {
            if best.map_or(true, |(_, min)| ecc < min) {
                best = Some((i, ecc));
            }
        }
        best.map(|(i, _)| &self.elements[i])
            .ok_or(GraphError::EmptyStructure("center of an empty graph"))
    }

    /// True when every ordered pair is reachable.
    pub fn all_reachable(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| self.a.row(i, n).iter().all(|c| c.is_finite()))
    }
}

impl<T: PartialEq + fmt::Debug> FloydResult<T> {
    fn position(&self, element: &T) -> GraphResult<usize> {
        self.elements
            .iter()
            .position(|e| e == element)
            .ok_or_else(|| GraphError::NotFound(format!("{:?}", element)))
    }

    /// Minimum cost from `origin` to `destination`; `INFINITE` when unreachable.
    pub fn cost(&self, origin: &T, destination: &T) -> GraphResult<f64> {
        Ok(self.a[(self.position(origin)?, self.position(destination)?)])
    }
}

impl<T: PartialEq + Clone + fmt::Debug> FloydResult<T> {
    /// Elements on the minimum path, or `None` when unreachable.
    pub fn path(&self, origin: &T, destination: &T) -> GraphResult<Option<Vec<T>>> {
        let (i, j) = (self.position(origin)?, self.position(destination)?);
        Ok(self
            .path_positions(i, j)
            .map(|path| path.into_iter().map(|k| self.elements[k].clone()).collect()))
    }
}

impl<T: PartialEq + Clone + fmt::Debug + fmt::Display> FloydResult<T> {
    /// Renders the path as `origin-...-destination`.
    ///
    /// Intermediate nodes come from `P`; a pair with no intermediate is
    /// rendered as the direct hop `origin-destination`, whether or not an
    /// edge actually joins them.
    pub fn print_path(&self, origin: &T, destination: &T) -> GraphResult<String> {
        let (i, j) = (self.position(origin)?, self.position(destination)?);
        let mut positions = vec![i];
        self.push_intermediates(i, j, &mut positions);
        positions.push(j);
        let elements: Vec<&T> = positions.iter().map(|&k| &self.elements[k]).collect();
        Ok(join_hyphen(&elements))
    }
}

impl<T: PartialEq + Clone + fmt::Debug + fmt::Display> Graph<T> {
    /// Runs Floyd–Warshall and renders the minimum path between two elements.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] if either endpoint is missing.
    pub fn print_floyd_path(&self, origin: &T, destination: &T) -> GraphResult<String> {
        self.endpoints(origin, destination)?;
        self.floyd().print_path(origin, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Six-node weighted digraph with nodes "1".."6".
    fn lecture_graph() -> Graph<&'static str> {
        let mut g = Graph::new(6);
        for n in ["1", "2", "3", "4", "5", "6"] {
            g.add_node(n).unwrap();
        }
        for (o, d, w) in [
            ("1", "2", 3.0),
            ("1", "3", 4.0),
            ("1", "5", 8.0),
            ("2", "5", 5.0),
            ("3", "5", 3.0),
            ("5", "4", 7.0),
            ("5", "6", 3.0),
            ("6", "4", 2.0),
        ] {
            g.add_edge(&o, &d, w).unwrap();
        }
        g
    }

    #[test]
    fn test_lecture_scenario() {
        let floyd = lecture_graph().floyd();
        assert_eq!(floyd.a()[(0, 3)], 12.0);
        assert_eq!(floyd.a()[(2, 4)], 3.0);
        assert_eq!(floyd.a()[(4, 3)], 5.0);
        assert_eq!(floyd.p()[(0, 3)], Some(5));
        assert_eq!(floyd.p()[(0, 1)], None);
        assert_eq!(floyd.iterations(), 6);
    }

    #[test]
    fn test_lecture_full_tables() {
        let floyd = lecture_graph().floyd();
        let inf = INFINITE;
        let expected_a = [
            [0.0, 3.0, 4.0, 12.0, 7.0, 10.0],
            [inf, 0.0, inf, 10.0, 5.0, 8.0],
            [inf, inf, 0.0, 8.0, 3.0, 6.0],
            [inf, inf, inf, 0.0, inf, inf],
            [inf, inf, inf, 5.0, 0.0, 3.0],
            [inf, inf, inf, 2.0, inf, 0.0],
        ];
        let expected_p = [
            [None, None, None, Some(5), Some(2), Some(4)],
            [None, None, None, Some(5), None, Some(4)],
            [None, None, None, Some(5), None, Some(4)],
            [None, None, None, None, None, None],
            [None, None, None, Some(5), None, None],
            [None, None, None, None, None, None],
        ];
        for i in 0..6 {
            for j in 0..6 {
                assert_eq!(floyd.a()[(i, j)], expected_a[i][j], "A[{}][{}]", i, j);
                assert_eq!(floyd.p()[(i, j)], expected_p[i][j], "P[{}][{}]", i, j);
            }
        }
    }

    #[test]
    fn test_second_lecture_tables() {
        let mut g = Graph::new(5);
        for c in ['1', '2', '3', '4', '5'] {
            g.add_node(c).unwrap();
        }
        for (o, d, w) in [
            ('1', '2', 1.0),
            ('1', '4', 3.0),
            ('1', '5', 10.0),
            ('2', '3', 5.0),
            ('3', '5', 1.0),
            ('4', '3', 2.0),
            ('4', '5', 6.0),
        ] {
            g.add_edge(&o, &d, w).unwrap();
        }

        let floyd = g.floyd();
        assert_eq!(floyd.a().row(0, 5), &[0.0, 1.0, 5.0, 3.0, 6.0]);
        assert_eq!(floyd.a().row(3, 5), &[INFINITE, INFINITE, 2.0, 0.0, 3.0]);
        assert_eq!(floyd.p()[(0, 2)], Some(3));
        assert_eq!(floyd.p()[(0, 4)], Some(3));
        assert_eq!(floyd.p()[(1, 4)], Some(2));
        assert_eq!(floyd.print_path(&'1', &'5').unwrap(), "1-4-3-5");
    }

    #[test]
    fn test_lecture_paths() {
        let g = lecture_graph();
        let floyd = g.floyd();
        assert_eq!(
            floyd.path(&"1", &"4").unwrap(),
            Some(vec!["1", "3", "5", "6", "4"])
        );
        assert_eq!(floyd.print_path(&"3", &"4").unwrap(), "3-5-6-4");
        assert_eq!(floyd.path(&"4", &"1").unwrap(), None);
        assert_eq!(floyd.cost(&"4", &"1").unwrap(), INFINITE);
    }

    #[test]
    fn test_print_floyd_path() {
        let mut g = Graph::new(4);
        for n in ["A", "B", "C", "D"] {
            g.add_node(n).unwrap();
        }
        g.add_edge(&"B", &"A", 0.2).unwrap();
        g.add_edge(&"A", &"C", 0.2).unwrap();
        g.add_edge(&"B", &"C", 1.0).unwrap();
        g.add_edge(&"D", &"B", 3.0).unwrap();
        g.add_edge(&"D", &"C", 5.0).unwrap();

        assert_eq!(g.print_floyd_path(&"D", &"C").unwrap(), "D-B-A-C");
        assert_eq!(g.print_floyd_path(&"B", &"C").unwrap(), "B-A-C");
        assert!(matches!(
            g.print_floyd_path(&"D", &"Z"),
            Err(GraphError::NotFound(_))
        ));
    }

    #[test]
    fn test_partial_iterations() {
        let g = lecture_graph();
        // Only node "1" may be an intermediate: nothing improves.
        let partial = g.floyd_iterations(1);
        assert_eq!(partial.iterations(), 1);
        assert_eq!(partial.a()[(0, 3)], INFINITE);

        let clamped = g.floyd_iterations(100);
        assert_eq!(clamped.iterations(), 6);
        assert_eq!(clamped.a()[(0, 3)], 12.0);
    }

    #[test]
    fn test_hop_counts() {
        let g = lecture_graph();
        assert_eq!(g.shortest_path_length(&"1", &"4").unwrap(), Some(2));
        assert_eq!(g.shortest_path_length(&"1", &"1").unwrap(), Some(0));
        assert_eq!(g.shortest_path_length(&"4", &"1").unwrap(), None);
        assert_eq!(g.floyd_hops().cost_model(), CostModel::Hops);
    }

    #[test]
    fn test_center() {
        let mut g = Graph::new(3);
        for c in ['a', 'b', 'c'] {
            g.add_node(c).unwrap();
        }
        g.add_edge(&'a', &'b', 1.0).unwrap();
        g.add_edge(&'b', &'a', 1.0).unwrap();
        g.add_edge(&'b', &'c', 1.0).unwrap();
        g.add_edge(&'c', &'b', 1.0).unwrap();
        assert_eq!(g.center().unwrap(), 'b');

        let empty: Graph<char> = Graph::new(1);
        assert!(matches!(empty.center(), Err(GraphError::EmptyStructure(_))));
    }

    #[test]
    fn test_single_node_and_edgeless() {
        let mut single = Graph::new(1);
        single.add_node(0).unwrap();
        let floyd = single.floyd();
        assert_eq!(floyd.a()[(0, 0)], 0.0);
        assert!(floyd.all_reachable());

        let mut edgeless = Graph::new(3);
        for n in 0..3 {
            edgeless.add_node(n).unwrap();
        }
        let floyd = edgeless.floyd();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 0.0 } else { INFINITE };
                assert_eq!(floyd.a()[(i, j)], expected);
                assert_eq!(floyd.p()[(i, j)], None);
            }
        }
        assert!(!floyd.all_reachable());
    }

    #[test]
    fn test_result_survives_mutation() {
        let mut g = lecture_graph();
        let floyd = g.floyd();
        g.remove_node(&"1").unwrap();
        assert_eq!(floyd.cost(&"1", &"4").unwrap(), 12.0);
        assert_eq!(floyd.size(), 6);
    }
}
