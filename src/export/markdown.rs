//! Markdown export implementation.
//!
//! Exports graph analysis results in Markdown format for documentation and reporting.

use super::{format_cost, AnalysisReport, Exporter};
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, report: &AnalysisReport, writer: &mut W) -> io::Result<()> {
        let summary = &report.summary;

        writeln!(writer, "# Graph Analysis Report")?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Value |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(
            writer,
            "| Nodes | {} / {} |",
            summary.nodes.len(),
            summary.capacity
        )?;
        writeln!(writer, "| Edges | {} |", summary.edge_count)?;
        if let Some(center) = &report.center {
            writeln!(writer, "| Center | {} |", center)?;
        }
        writeln!(writer, "| Drain Nodes | {} |", summary.drain_nodes)?;
        writeln!(writer, "| Source Nodes | {} |", summary.source_nodes)?;
        writeln!(writer, "| Contains Cycles | {} |", yes_no(summary.has_cycles))?;
        writeln!(
            writer,
            "| Strongly Connected | {} |",
            yes_no(summary.connectivity.strong)
        )?;
        writeln!(
            writer,
            "| Semi Connected | {} |",
            yes_no(summary.connectivity.semi)
        )?;
        writeln!(
            writer,
            "| Weakly Connected | {} |",
            yes_no(summary.connectivity.weak)
        )?;
        writeln!(writer)?;

        if let Some(traversal) = &report.traversal {
            writeln!(writer, "## Traversal ({})", traversal.kind)?;
            writeln!(writer)?;
            writeln!(writer, "`{}`", traversal.order.join(" -> "))?;
            writeln!(writer)?;
        }

        if let Some(path) = &report.path {
            writeln!(writer, "## Path")?;
            writeln!(writer)?;
            writeln!(writer, "`{}`", path.join(" -> "))?;
            writeln!(writer)?;
        }

        if let Some(table) = &report.floyd {
            writeln!(
                writer,
                "## All-Pairs Costs ({}, {} iterations)",
                table.model, table.iterations
            )?;
            writeln!(writer)?;
            writeln!(writer, "| from \\ to | {} |", table.labels.join(" | "))?;
            writeln!(writer, "|---|{}", "---|".repeat(table.labels.len()))?;
            for (label, row) in table.labels.iter().zip(&table.costs) {
                let cells: Vec<String> = row.iter().map(|&c| format_cost(c)).collect();
                writeln!(writer, "| **{}** | {} |", label, cells.join(" | "))?;
            }
            writeln!(writer)?;
        }

        if let Some(costs) = &report.dijkstra {
            writeln!(writer, "## Costs from `{}` ({})", costs.source, costs.model)?;
            writeln!(writer)?;
            writeln!(writer, "| Node | Cost | Predecessor |")?;
            writeln!(writer, "|------|------|-------------|")?;
            for row in &costs.rows {
                writeln!(
                    writer,
                    "| {} | {} | {} |",
                    row.node,
                    format_cost(row.cost),
                    row.predecessor.as_deref().unwrap_or("-")
                )?;
            }
            writeln!(writer)?;
        }

        if let Some(tree) = &report.spanning_tree {
            writeln!(writer, "## Minimum Spanning Tree")?;
            writeln!(writer)?;
            writeln!(writer, "- **Order:** {}", tree.order.join(", "))?;
            writeln!(writer, "- **Total cost:** {}", tree.total_cost)?;
            if !tree.spanning {
                writeln!(writer, "- ⚠️ Not every node is reachable from the start")?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::sample_report;

    fn render(report: &AnalysisReport) -> String {
        let mut output = Vec::new();
        MarkdownExporter.export(report, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_markdown_summary() {
        let md = render(&sample_report());

        assert!(md.contains("# Graph Analysis Report"));
        assert!(md.contains("| Nodes | 3 / 3 |"));
        assert!(md.contains("| Strongly Connected | no |"));
        assert!(md.contains("| Weakly Connected | yes |"));
    }

    #[test]
    fn test_markdown_tables() {
        let md = render(&sample_report());

        assert!(md.contains("| from \\ to | a | b | c |"));
        assert!(md.contains("| **c** | inf | inf | 0 |"));
        assert!(md.contains("## All-Pairs Costs (weighted, 3 iterations)"));
        assert!(md.contains("## Costs from `a` (weighted)"));
        assert!(md.contains("| c | 3 | b |"));
        assert!(!md.contains("Minimum Spanning Tree"));
    }
}
