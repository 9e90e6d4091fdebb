//! Export functionality for graph analysis results.
//!
//! This module renders an [`AnalysisReport`] in one of several formats:
//! plain text, JSON, CSV and Markdown. A report describes the results of
//! analyses run on a graph; it is not a storage format for the graph itself.

pub mod csv;
pub mod json;
pub mod markdown;
pub mod text;

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::algorithms::{Connectivity, CostModel, DijkstraResult, FloydResult, SpanningTree};
use crate::graph::Graph;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Plain text - terminal output
    #[default]
    Text,
    /// JSON format - machine-readable, full data
    Json,
    /// CSV format - cost matrices for spreadsheets
    Csv,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: text, json, csv, markdown",
                s
            )),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Structural summary of the analysed graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSummary {
    pub capacity: usize,
    pub nodes: Vec<String>,
    pub edge_count: usize,
    pub drain_nodes: usize,
    pub source_nodes: usize,
    pub has_cycles: bool,
    pub connectivity: Connectivity,
}

/// All-pairs tables with node labels; `None` costs are unreachable pairs.
#[derive(Debug, Clone, Serialize)]
pub struct CostTable {
    pub labels: Vec<String>,
    pub model: CostModel,
    pub iterations: usize,
    pub costs: Vec<Vec<Option<f64>>>,
    pub intermediates: Vec<Vec<Option<String>>>,
}

/// Single-source costs, one row per node.
#[derive(Debug, Clone, Serialize)]
pub struct SourceCosts {
    pub source: String,
    pub model: CostModel,
    pub rows: Vec<SourceRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceRow {
    pub node: String,
    pub cost: Option<f64>,
    pub predecessor: Option<String>,
}

/// Spanning tree in join order.
#[derive(Debug, Clone, Serialize)]
pub struct TreeSummary {
    pub order: Vec<String>,
    pub total_cost: f64,
    pub spanning: bool,
}

/// A named traversal order (`depth-first` or `breadth-first`).
#[derive(Debug, Clone, Serialize)]
pub struct TraversalSummary {
    pub kind: String,
    pub order: Vec<String>,
}

/// Data container for export operations.
///
/// Always holds the graph summary; the optional sections are filled by the
/// analyses that were actually run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub summary: GraphSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traversal: Option<TraversalSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floyd: Option<CostTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dijkstra: Option<SourceCosts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spanning_tree: Option<TreeSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<String>,
}

fn finite(cost: f64) -> Option<f64> {
    cost.is_finite().then_some(cost)
}

fn labels<T: fmt::Display>(elements: &[T]) -> Vec<String> {
    elements.iter().map(|e| e.to_string()).collect()
}

impl AnalysisReport {
    /// Create a report summarising the structure of `graph`.
    pub fn new<T>(graph: &Graph<T>) -> Self
    where
        T: PartialEq + Clone + fmt::Debug + fmt::Display,
    {
        Self {
            summary: GraphSummary {
                capacity: graph.capacity(),
                nodes: labels(&graph.elements()),
                edge_count: graph.edge_count(),
                drain_nodes: graph.count_drain_nodes(),
                source_nodes: graph.count_source_nodes(),
                has_cycles: graph.contains_cycles(),
                connectivity: graph.connectivity(),
            },
            traversal: None,
            floyd: None,
            dijkstra: None,
            spanning_tree: None,
            path: None,
            center: None,
        }
    }

    /// Attach a traversal order.
    pub fn with_traversal<T: fmt::Display>(mut self, kind: &str, order: &[T]) -> Self {
        self.traversal = Some(TraversalSummary {
            kind: kind.to_string(),
            order: labels(order),
        });
        self
    }

    /// Attach Floyd–Warshall tables.
    pub fn with_floyd<T: fmt::Display>(mut self, result: &FloydResult<T>) -> Self {
        let n = result.size();
        let names = labels(result.elements());
        self.floyd = Some(CostTable {
            model: result.cost_model(),
            iterations: result.iterations(),
            costs: (0..n)
                .map(|i| result.a().row(i, n).iter().map(|&c| finite(c)).collect())
                .collect(),
            intermediates: (0..n)
                .map(|i| {
                    result
                        .p()
                        .row(i, n)
                        .iter()
                        .map(|k| k.map(|k| names[k].clone()))
                        .collect()
                })
                .collect(),
            labels: names,
        });
        self
    }

    /// Attach Dijkstra costs.
    pub fn with_dijkstra<T: fmt::Display>(mut self, result: &DijkstraResult<T>) -> Self {
        let names = labels(result.elements());
        self.dijkstra = Some(SourceCosts {
            source: result.source().to_string(),
            model: result.cost_model(),
            rows: names
                .iter()
                .enumerate()
                .map(|(i, name)| SourceRow {
                    node: name.clone(),
                    cost: finite(result.d()[i]),
                    predecessor: result.pd()[i].map(|p| names[p].clone()),
                })
                .collect(),
        });
        self
    }

    /// Attach a spanning tree.
    pub fn with_spanning_tree<T: fmt::Display>(mut self, tree: &SpanningTree<T>) -> Self {
        self.spanning_tree = Some(TreeSummary {
            order: labels(tree.order()),
            total_cost: tree.total_cost(),
            spanning: tree.spans(self.summary.nodes.len()),
        });
        self
    }

    /// Attach the graph center.
    pub fn with_center<T: fmt::Display>(mut self, center: &T) -> Self {
        self.center = Some(center.to_string());
        self
    }

    /// Attach a reconstructed path.
    pub fn with_path<T: fmt::Display>(mut self, path: &[T]) -> Self {
        self.path = Some(labels(path));
        self
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the report to the given writer.
    fn export<W: Write>(&self, report: &AnalysisReport, writer: &mut W) -> io::Result<()>;
}

/// Export a report in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    report: &AnalysisReport,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Text => text::TextExporter.export(report, writer),
        ExportFormat::Json => json::JsonExporter.export(report, writer),
        ExportFormat::Csv => csv::CsvExporter.export(report, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(report, writer),
    }
}

/// Export a report to a string.
pub fn export_to_string(format: ExportFormat, report: &AnalysisReport) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, report, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Render a cost cell, using `inf` for unreachable pairs.
pub(crate) fn format_cost(cost: Option<f64>) -> String {
    match cost {
        Some(c) => c.to_string(),
        None => "inf".to_string(),
    }
}

#[cfg(test)]
pub(crate) fn sample_report() -> AnalysisReport {
    let mut graph = Graph::new(3);
    for c in ['a', 'b', 'c'] {
        graph.add_node(c).unwrap();
    }
    graph.add_edge(&'a', &'b', 1.0).unwrap();
    graph.add_edge(&'b', &'c', 2.0).unwrap();
    graph.add_edge(&'a', &'c', 5.0).unwrap();

    let floyd = graph.floyd();
    let dijkstra = graph.dijkstra(&'a').unwrap();
    AnalysisReport::new(&graph)
        .with_floyd(&floyd)
        .with_dijkstra(&dijkstra)
}
