//! JSON export implementation.
//!
//! Serializes the whole report. Unreachable costs become `null`.

use super::{AnalysisReport, Exporter};
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, report: &AnalysisReport, writer: &mut W) -> io::Result<()> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
