//! JSON output formatter

use super::{OutputFormatter, SentenceReport};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs one entry per sentence as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    reports: Vec<SentenceReport>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            reports: Vec::new(),
            pretty,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, report: &SentenceReport) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.reports)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
