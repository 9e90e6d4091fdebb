//! CSV export implementation.
//!
//! Writes the Floyd cost matrix (one row per origin) if present, followed
//! by the Dijkstra rows. Unreachable costs are written as `inf`.

use super::{format_cost, AnalysisReport, Exporter};
use std::io::{self, Write};

/// CSV exporter implementation.
pub struct CsvExporter;

impl CsvExporter {
    /// Escape a field value for CSV format.
    ///
    /// Wraps the value in quotes if it contains commas, quotes, or newlines.
    fn escape_field(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

impl Exporter for CsvExporter {
    fn export<W: Write>(&self, report: &AnalysisReport, writer: &mut W) -> io::Result<()> {
        if let Some(table) = &report.floyd {
            let header: Vec<String> = table.labels.iter().map(|l| Self::escape_field(l)).collect();
            writeln!(writer, "from,{}", header.join(","))?;

            for (label, row) in table.labels.iter().zip(&table.costs) {
                let cells: Vec<String> = row.iter().map(|&c| format_cost(c)).collect();
                writeln!(writer, "{},{}", Self::escape_field(label), cells.join(","))?;
            }
        }

        if let Some(costs) = &report.dijkstra {
            if report.floyd.is_some() {
                writeln!(writer)?;
            }
            writeln!(writer, "source,node,cost,predecessor")?;
            for row in &costs.rows {
                writeln!(
                    writer,
                    "{},{},{},{}",
                    Self::escape_field(&costs.source),
                    Self::escape_field(&row.node),
                    format_cost(row.cost),
                    row.predecessor
                        .as_deref()
                        .map(Self::escape_field)
                        .unwrap_or_default()
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::sample_report;

    #[test]
    fn test_csv_export() {
        let mut output = Vec::new();
        CsvExporter.export(&sample_report(), &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "from,a,b,c");
        assert_eq!(lines[1], "a,0,1,3");
        assert_eq!(lines[3], "c,inf,inf,0");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "source,node,cost,predecessor");
        assert_eq!(lines[6], "a,a,0,");
        assert_eq!(lines[8], "a,c,3,b");
    }

    #[test]
    fn test_csv_escape_field() {
        assert_eq!(CsvExporter::escape_field("simple"), "simple");
        assert_eq!(CsvExporter::escape_field("a,b"), "\"a,b\"");
        assert_eq!(CsvExporter::escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
