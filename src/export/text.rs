//! Plain text export for terminal output.

use super::{format_cost, AnalysisReport, Exporter};
use std::io::{self, Write};

/// Plain text exporter implementation.
pub struct TextExporter;

impl Exporter for TextExporter {
    fn export<W: Write>(&self, report: &AnalysisReport, writer: &mut W) -> io::Result<()> {
        let summary = &report.summary;
        let connectivity = &summary.connectivity;

        writeln!(
            writer,
            "nodes: {} ({}/{})",
            summary.nodes.join(", "),
            summary.nodes.len(),
            summary.capacity
        )?;
        writeln!(writer, "edges: {}", summary.edge_count)?;
        writeln!(
            writer,
            "drain: {}  source: {}  cycles: {}",
            summary.drain_nodes, summary.source_nodes, summary.has_cycles
        )?;
        writeln!(
            writer,
            "connected: strong={} semi={} weak={}",
            connectivity.strong, connectivity.semi, connectivity.weak
        )?;

        if let Some(traversal) = &report.traversal {
            writeln!(writer, "{}: {}", traversal.kind, traversal.order.join("-"))?;
        }

        if let Some(path) = &report.path {
            writeln!(writer, "path: {}", path.join("-"))?;
        }

        if let Some(center) = &report.center {
            writeln!(writer, "center: {}", center)?;
        }

        if let Some(table) = &report.floyd {
            writeln!(
                writer,
                "A ({}, {} iterations):",
                table.model, table.iterations
            )?;
            for (label, row) in table.labels.iter().zip(&table.costs) {
                let cells: Vec<String> = row
                    .iter()
                    .map(|&c| format!("{:>6}", format_cost(c)))
                    .collect();
                writeln!(writer, "  {:>6} {}", label, cells.join(" "))?;
            }
        }

        if let Some(costs) = &report.dijkstra {
            writeln!(writer, "D from {} ({}):", costs.source, costs.model)?;
            for row in &costs.rows {
                writeln!(
                    writer,
                    "  {} = {} (via {})",
                    row.node,
                    format_cost(row.cost),
                    row.predecessor.as_deref().unwrap_or("-")
                )?;
            }
        }

        if let Some(tree) = &report.spanning_tree {
            writeln!(
                writer,
                "mst: [{}] cost {}",
                tree.order.join(", "),
                tree.total_cost
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::sample_report;

    #[test]
    fn test_text_export() {
        let mut output = Vec::new();
        TextExporter.export(&sample_report(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.starts_with("nodes: a, b, c (3/3)\n"));
        assert!(text.contains("connected: strong=false semi=true weak=true"));
        assert!(text.contains("A (weighted, 3 iterations):"));
        assert!(text.contains("D from a (weighted):"));
        assert!(text.contains("  c = 3 (via b)"));
    }
}
